//! Define an SVD container and conversion tools.
//!
//! The container stores the factors of $A = U\Sigma V^T$. Directly after
//! [`ComputeSVD::compute_svd`](crate::compute_svd::ComputeSVD) the factors are
//! the full ones, $U\in\mathbb{R}^{m\times m}$ and $V^T\in\mathbb{R}^{n\times n}$.
//! Truncation to rank $k$ keeps the first $k$ columns of $U$, the first $k$
//! singular values and the first $k$ rows of $V^T$.

use crate::types::{ImageCompressionError, Result, Scalar};
use crate::CompressionType;
use ndarray::{s, Array1, Array2};

pub struct SVDContainer<A: Scalar> {
    /// The U matrix
    pub u: Array2<A>,
    /// The array of singular values
    pub s: Array1<A::Real>,
    /// The vt matrix
    pub vt: Array2<A>,
}

impl<A: Scalar> SVDContainer<A> {
    /// Number of rows of the decomposed matrix
    pub fn nrows(&self) -> usize {
        self.u.nrows()
    }

    /// Number of columns of the decomposed matrix
    pub fn ncols(&self) -> usize {
        self.vt.ncols()
    }

    /// Number of stored singular values
    pub fn rank(&self) -> usize {
        self.s.len()
    }

    /// Return the matrix $\Sigma$ of shape `(u.ncols(), vt.nrows())` with the
    /// singular values on its main diagonal.
    pub fn sigma(&self) -> Array2<A> {
        let mut sigma = Array2::<A>::zeros((self.u.ncols(), self.vt.nrows()));
        sigma
            .diag_mut()
            .iter_mut()
            .zip(self.s.iter())
            .for_each(|(item, &s_elem)| *item = A::from_real(s_elem));
        sigma
    }

    /// Convert the decomposition back into a matrix.
    ///
    /// The product is formed left to right as $(U\Sigma)V^T$.
    pub fn to_mat(&self) -> Array2<A> {
        self.u.dot(&self.sigma()).dot(&self.vt)
    }

    /// Reconstruct the rank `rank` approximation without consuming the factors.
    ///
    /// Forms $U_k\Sigma_kV_k^T$ from the first `rank` columns of $U$, the
    /// leading `rank`$\times$`rank` block of $\Sigma$ and the first `rank` rows
    /// of $V^T$.
    pub fn reconstruct(&self, rank: usize) -> Result<Array2<A>> {
        self.check_rank(rank)?;

        let sigma = self.sigma();
        let u = self.u.slice(s![.., 0..rank]);
        let sigma = sigma.slice(s![0..rank, 0..rank]);
        let vt = self.vt.slice(s![0..rank, ..]);

        Ok(u.dot(&sigma).dot(&vt))
    }

    /// Keep the `rank` leading singular triplets.
    ///
    /// Requires `1 <= rank <= self.rank()`.
    pub fn truncate(self, rank: usize) -> Result<SVDContainer<A>> {
        self.check_rank(rank)?;

        let (u, s, vt) = (self.u, self.s, self.vt);

        let u = u.slice_move(s![.., 0..rank]);
        let s = s.slice_move(s![0..rank]);
        let vt = vt.slice_move(s![0..rank, ..]);

        Ok(SVDContainer { u, s, vt })
    }

    /// Compress by rank or by relative tolerance.
    pub fn compress(self, compression_type: CompressionType) -> Result<SVDContainer<A>> {
        let rank = self.resolve_rank(compression_type)?;
        self.truncate(rank)
    }

    /// Translate a compression type into a rank admissible for these factors.
    pub fn resolve_rank(&self, compression_type: CompressionType) -> Result<usize> {
        let rank = match compression_type {
            CompressionType::RANK(rank) => rank,
            CompressionType::ADAPTIVE(tol) => self.rank_from_tolerance(tol)?,
        };
        self.check_rank(rank)?;

        log::debug!(
            "Rank {} of {} selected for {}x{} factors",
            rank,
            self.rank(),
            self.nrows(),
            self.ncols()
        );

        Ok(rank)
    }

    fn check_rank(&self, rank: usize) -> Result<()> {
        if rank == 0 || rank > self.rank() {
            log::error!("Rank {} outside of 1..={}", rank, self.rank());
            return Err(ImageCompressionError::OutOfRangeRank {
                rank,
                max_rank: self.rank(),
            });
        }
        Ok(())
    }

    /// Number of leading singular values with $\sigma_i / \sigma_0 \geq$ `tol`.
    ///
    /// If no singular value falls below the tolerance all of them are kept.
    /// A zero matrix keeps a single singular value.
    pub fn rank_from_tolerance(&self, tol: f64) -> Result<usize> {
        if !(0.0..1.0).contains(&tol) {
            return Err(ImageCompressionError::InvalidTolerance(tol));
        }

        let tol = num::traits::cast::cast::<f64, A::Real>(tol)
            .ok_or(ImageCompressionError::InvalidTolerance(tol))?;

        if self.s.is_empty() {
            return Ok(0);
        }

        let sigma_max = self.s[0];
        if sigma_max == num::Zero::zero() {
            return Ok(1);
        }

        let pos = self.s.iter().position(|&item| item / sigma_max < tol);

        Ok(pos.unwrap_or_else(|| self.rank()))
    }
}
