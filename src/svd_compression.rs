//! Truncated SVD compression of grayscale images
//!
//! An image with intensities in $[0, 255]$ is first scaled into $[0, 1]$ by
//! dividing by 255. Its full SVD $U\Sigma V^T$ is truncated to the $k$ leading
//! singular triplets and the rank $k$ reconstruction $U_k\Sigma_kV_k^T$ is
//! stretched onto $[0, 1]$ by a min-max rescale for display.
//!
//! [`compress`] and the [`SVDCompressor`] trait decompose the image on every
//! call. [`ImageCompressor`] decomposes once and serves arbitrary ranks from
//! the stored factors.

use crate::helpers::RelDiff;
use crate::svd_container::SVDContainer;
use crate::types::{ImageCompressionError, ImageScalar, Result, Scalar};
use crate::CompressionType;
use itertools::{Itertools, MinMaxResult};
use ndarray::{Array2, ArrayBase, ArrayView1, ArrayView2, Data, Ix2};
use num::Float;

/// Intensity of a white pixel in an 8-bit grayscale image.
pub const MAX_INTENSITY: f64 = 255.0;

/// Compress `image` to rank `rank` and rescale the result into [0, 1].
///
/// Requires `1 <= rank <= min(nrows, ncols)` and a non-empty image with finite
/// entries.
pub fn compress<A, S>(image: &ArrayBase<S, Ix2>, rank: usize) -> Result<Array2<A>>
where
    A: ImageScalar,
    S: Data<Elem = A>,
{
    image.compress_svd(CompressionType::RANK(rank))
}

pub trait SVDCompressor {
    type A: ImageScalar;

    /// Return the truncated reconstruction rescaled into [0, 1].
    fn compress_svd(&self, compression_type: CompressionType) -> Result<Array2<Self::A>>;

    /// Return the truncated reconstruction of the normalized image before the
    /// min-max rescale.
    fn low_rank_approximation(&self, compression_type: CompressionType)
        -> Result<Array2<Self::A>>;

    /// Frobenius norm distance between the normalized image and its rank
    /// `rank` approximation.
    fn approximation_error(&self, rank: usize) -> Result<<Self::A as Scalar>::Real>;
}

impl<A, S> SVDCompressor for ArrayBase<S, Ix2>
where
    A: ImageScalar,
    S: Data<Elem = A>,
{
    type A = A;

    fn compress_svd(&self, compression_type: CompressionType) -> Result<Array2<A>> {
        let approximation = self.low_rank_approximation(compression_type)?;
        rescale_min_max(approximation.view())
    }

    fn low_rank_approximation(&self, compression_type: CompressionType) -> Result<Array2<A>> {
        let normalized = normalize_intensity(self)?;

        let svd = A::compute_svd(normalized.view())?;
        Ok(svd.compress(compression_type)?.to_mat())
    }

    fn approximation_error(&self, rank: usize) -> Result<A::Real> {
        ImageCompressor::new(self)?.approximation_error(rank)
    }
}

/// Full SVD of a normalized image, kept around to reconstruct at any rank.
pub struct ImageCompressor<A: ImageScalar> {
    normalized: Array2<A>,
    svd: SVDContainer<A>,
}

impl<A: ImageScalar> ImageCompressor<A> {
    /// Normalize `image` and compute its full SVD.
    pub fn new<S: Data<Elem = A>>(image: &ArrayBase<S, Ix2>) -> Result<Self> {
        let normalized = normalize_intensity(image)?;
        let svd = A::compute_svd(normalized.view())?;

        log::debug!(
            "Decomposed {}x{} image, leading singular value {}",
            svd.nrows(),
            svd.ncols(),
            svd.s[0]
        );

        Ok(ImageCompressor { normalized, svd })
    }

    /// Dimension `(rows, cols)` of the image.
    pub fn dim(&self) -> (usize, usize) {
        self.normalized.dim()
    }

    /// Number of singular values, the largest admissible rank.
    pub fn max_rank(&self) -> usize {
        self.svd.rank()
    }

    /// Singular values in descending order.
    pub fn singular_values(&self) -> ArrayView1<A::Real> {
        self.svd.s.view()
    }

    /// The image scaled into [0, 1].
    pub fn normalized(&self) -> ArrayView2<A> {
        self.normalized.view()
    }

    /// Truncated reconstruction of the normalized image before rescaling.
    pub fn reconstruct(&self, compression_type: CompressionType) -> Result<Array2<A>> {
        let rank = self.svd.resolve_rank(compression_type)?;
        self.svd.reconstruct(rank)
    }

    /// Truncated reconstruction rescaled into [0, 1].
    pub fn compress(&self, compression_type: CompressionType) -> Result<Array2<A>> {
        rescale_min_max(self.reconstruct(compression_type)?.view())
    }

    /// Frobenius norm distance between the normalized image and its rank
    /// `rank` approximation.
    pub fn approximation_error(&self, rank: usize) -> Result<A::Real> {
        self.reconstruct(CompressionType::RANK(rank))?
            .diff_fro(&self.normalized)
    }

    /// Fraction $\sum_{i<k}\sigma_i^2 / \sum_i\sigma_i^2$ of the squared
    /// Frobenius norm captured by the leading `rank` singular values.
    ///
    /// A zero image has nothing to lose and reports 1.
    pub fn energy_retained(&self, rank: usize) -> Result<A::Real> {
        self.svd.resolve_rank(CompressionType::RANK(rank))?;

        let total: A::Real = self.svd.s.iter().map(|&s_elem| s_elem * s_elem).sum();
        if total == num::Zero::zero() {
            return Ok(num::One::one());
        }

        let kept: A::Real = self
            .svd
            .s
            .iter()
            .take(rank)
            .map(|&s_elem| s_elem * s_elem)
            .sum();

        Ok(kept / total)
    }
}

/// Divide all intensities by [`MAX_INTENSITY`].
///
/// Fails for an empty image or one with non-finite entries.
pub fn normalize_intensity<A, S>(image: &ArrayBase<S, Ix2>) -> Result<Array2<A>>
where
    A: ImageScalar,
    S: Data<Elem = A>,
{
    if image.is_empty() {
        log::error!("Empty image of shape {:?}", image.dim());
        return Err(ImageCompressionError::InvalidInput(format!(
            "Image of shape {}x{} is empty",
            image.nrows(),
            image.ncols()
        )));
    }

    if let Some(((row, col), _)) = image
        .indexed_iter()
        .find(|(_, item)| !Float::is_finite(**item))
    {
        log::error!("Non-finite intensity at ({}, {})", row, col);
        return Err(ImageCompressionError::InvalidInput(format!(
            "Non-finite intensity at ({}, {})",
            row, col
        )));
    }

    let full_scale = A::from_real(A::real(MAX_INTENSITY));
    Ok(image.mapv(|item| item / full_scale))
}

/// Stretch `mat` onto [0, 1]: subtract the minimum, then divide by the
/// resulting maximum.
///
/// A matrix whose range `max - min` does not exceed
/// `32 * eps * sqrt(max(nrows, ncols)) * rms` is constant up to round-off and
/// yields [`ImageCompressionError::DegenerateReconstruction`]. Here `rms` is
/// the root mean square of the entries, $\|M\|_F / \sqrt{mn}$, which bounds
/// $\sigma_0 / \sqrt{mn}$ and so the scale of the SVD round-off per entry.
pub fn rescale_min_max<A: ImageScalar>(mat: ArrayView2<A>) -> Result<Array2<A>> {
    let (min, max) = match mat.iter().minmax() {
        MinMaxResult::NoElements => {
            return Err(ImageCompressionError::InvalidInput(
                "Cannot rescale an empty matrix".to_string(),
            ))
        }
        MinMaxResult::OneElement(&item) => (item, item),
        MinMaxResult::MinMax(&min, &max) => (min, max),
    };

    let range = max - min;
    let mean_square =
        mat.iter().map(|&item| item * item).sum::<A>() / A::from_real(A::real(mat.len()));
    let max_dim = std::cmp::max(mat.nrows(), mat.ncols()) as f64;
    let threshold = <A as Float>::epsilon()
        * Float::sqrt(mean_square)
        * A::from_real(A::real(32.0 * max_dim.sqrt()));

    if !(range > threshold) {
        log::warn!(
            "Reconstruction range {} within round-off threshold {}",
            range,
            threshold
        );
        return Err(ImageCompressionError::DegenerateReconstruction);
    }

    Ok(mat.mapv(|item| (item - min) / range))
}
