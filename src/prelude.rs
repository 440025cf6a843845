//! Collect all traits and other exports here.

pub use crate::compute_svd::ComputeSVD;
pub use crate::helpers::RelDiff;
pub use crate::image_io::{
    decode_grayscale, encode_png, grayscale_matrix, load_grayscale, save_grayscale,
    to_gray_image,
};
pub use crate::random_matrix::RandomMatrix;
pub use crate::rank::{clamp_rank, default_rank, max_rank, rank_bounds, DEFAULT_RANK};
pub use crate::svd_compression::{
    compress, normalize_intensity, rescale_min_max, ImageCompressor, SVDCompressor,
    MAX_INTENSITY,
};
pub use crate::svd_container::SVDContainer;
pub use crate::types::{ImageCompressionError, ImageScalar, Result};
pub use crate::CompressionType;
