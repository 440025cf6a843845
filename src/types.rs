//! This module collects the error type and the scalar traits of the crate.

use crate::compute_svd::ComputeSVD;
use ndarray_linalg::error::LinalgError;
use ndarray_linalg::Lapack;
use num::Float;
use thiserror::Error;

pub use ndarray_linalg::Scalar;

#[derive(Error, Debug)]
pub enum ImageCompressionError {
    #[error("Lapack Error: {0}")]
    LinalgError(#[from] LinalgError),
    #[error("SVD computation did not return the singular vectors")]
    SVDError,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Rank {rank} is outside of the admissible range 1..={max_rank}")]
    OutOfRangeRank { rank: usize, max_rank: usize },
    #[error("Tolerance {0} is outside of the admissible range [0, 1)")]
    InvalidTolerance(f64),
    #[error("Reconstructed image has no dynamic range")]
    DegenerateReconstruction,
    #[error("Image Error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ImageCompressionError>;

/// Real scalar types that can hold pixel intensities.
///
/// Compression relies on ordering (for the min-max rescale) and on LAPACK
/// (for the SVD), so only `f32` and `f64` qualify.
pub trait ImageScalar: Scalar + Lapack + Float + ComputeSVD<A = Self> {}

impl ImageScalar for f32 {}
impl ImageScalar for f64 {}
