//! Selection of the number of retained singular values.
//!
//! A rank $k$ is admissible for an $m\times n$ image if $1\leq k\leq\min(m, n)$.
//! The compression routines reject anything else; interactive callers clamp
//! with [`clamp_rank`] before calling them.

use std::ops::RangeInclusive;

/// Rank used when the caller does not pick one.
pub const DEFAULT_RANK: usize = 5;

/// Largest admissible rank for an image of the given `(rows, cols)` dimension.
pub fn max_rank(dimension: (usize, usize)) -> usize {
    std::cmp::min(dimension.0, dimension.1)
}

/// Range of admissible ranks. Empty for an empty image.
pub fn rank_bounds(dimension: (usize, usize)) -> RangeInclusive<usize> {
    1..=max_rank(dimension)
}

/// Clamp `rank` into the admissible range.
///
/// For an empty image there is no admissible rank and `0` is returned.
pub fn clamp_rank(rank: usize, dimension: (usize, usize)) -> usize {
    let max = max_rank(dimension);
    if max == 0 {
        return 0;
    }
    rank.clamp(1, max)
}

/// The [`DEFAULT_RANK`] clamped into the admissible range.
pub fn default_rank(dimension: (usize, usize)) -> usize {
    clamp_rank(DEFAULT_RANK, dimension)
}
