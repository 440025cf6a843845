//! Truncated SVD compression of grayscale images.
//!
//! An $m\times n$ grayscale image $A$ with intensities in $[0, 255]$ is scaled
//! into $[0, 1]$, decomposed as $A/255 = U\Sigma V^T$ and approximated by the
//! rank $k$ reconstruction $U_k\Sigma_kV_k^T$ that keeps the $k$ largest
//! singular values. The reconstruction is stretched onto $[0, 1]$ for display.
//!
//! ```no_run
//! use svd_image_compression::prelude::*;
//!
//! let image = load_grayscale("photo.png").unwrap();
//! let rank = default_rank(image.dim());
//! let compressed = compress(&image, rank).unwrap();
//! save_grayscale(compressed.view(), "photo_compressed.png").unwrap();
//! ```

pub mod compute_svd;
pub mod helpers;
pub mod image_io;
pub mod prelude;
pub mod random_matrix;
pub mod rank;
pub mod svd_compression;
pub mod svd_container;
pub mod types;

pub use types::{ImageCompressionError, Result};

/// How many singular values to keep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompressionType {
    /// Adaptive compression with a specified tolerance
    ADAPTIVE(f64),
    /// Rank based compression with specified rank
    RANK(usize),
}
