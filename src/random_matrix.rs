//! Generation of random matrices and synthetic grayscale images

use crate::svd_compression::rescale_min_max;
use crate::types::{ImageCompressionError, ImageScalar, Result};
use ndarray::Array2;
use ndarray_linalg::{JobSvd, SVDDCInto};
use num::traits::cast::cast;
use num::Float;
use rand::Rng;
use rand_distr::{Distribution, Normal};

pub trait RandomMatrix
where
    Self: ImageScalar,
{
    /// Generate a random Gaussian matrix.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `rng`: The random number generator to use.
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Self>;

    /// Generate a random matrix with orthogonal rows or columns.
    ///
    /// This function creates a normally distributed (m, n) random matrix,
    /// orthogonalizes it and returns the resulting orthogonal matrix.
    ///
    /// If m > n then the returned matrix has orthogonal columns. If n > m
    /// the returned matrix has orthogonalized rows.
    fn random_orthogonal_matrix<R: Rng>(
        dimension: (usize, usize),
        rng: &mut R,
    ) -> Result<Array2<Self>> {
        let mut m = dimension.0;
        let mut n = dimension.1;

        // Always orthogonalize a long and skinny matrix
        if dimension.1 > dimension.0 {
            std::mem::swap(&mut m, &mut n);
        }

        let mat = Self::random_gaussian((m, n), rng);

        let (u, _, _) = mat.svddc_into(JobSvd::Some)?;
        let u = u.ok_or(ImageCompressionError::SVDError)?;

        // If we originally had more columns than rows, transpose again.
        if dimension.1 > dimension.0 {
            Ok(u.t().to_owned())
        } else {
            Ok(u)
        }
    }

    /// Generate a random approximate low-rank matrix.
    ///
    /// This function generates a random approximate low-rank matrix
    /// with singular values logarithmically distributed between
    /// `sigma_max` and `sigma_min`.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `sigma_max`: Maximum singular value.
    /// * `sigma_min`: Minimum singular value.
    /// * `rng`: The random number generator to use.
    fn random_approximate_low_rank_matrix<R: Rng>(
        dimension: (usize, usize),
        sigma_max: f64,
        sigma_min: f64,
        rng: &mut R,
    ) -> Result<Array2<Self>> {
        use ndarray::Array;

        if !(sigma_min > 0.0 && sigma_min < sigma_max) {
            return Err(ImageCompressionError::InvalidInput(format!(
                "Require 0 < sigma_min < sigma_max, got sigma_min = {}, sigma_max = {}",
                sigma_min, sigma_max
            )));
        }

        let min_dim = std::cmp::min(dimension.0, dimension.1);

        let u = Self::random_orthogonal_matrix((dimension.0, min_dim), rng)?;
        let vt = Self::random_orthogonal_matrix((min_dim, dimension.1), rng)?;
        let singvals = Array::geomspace(sigma_max, sigma_min, min_dim)
            .ok_or_else(|| {
                ImageCompressionError::InvalidInput("Could not space singular values".to_string())
            })?
            .map(|&item| cast::<f64, Self>(item).unwrap_or_else(Self::zero));
        let sigma = Array2::from_diag(&singvals);
        Ok(u.dot(&sigma.dot(&vt)))
    }

    /// Generate a synthetic grayscale image with intensities in [0, 255].
    ///
    /// The image is a random approximate low-rank matrix with singular values
    /// between 1 and `sigma_min`, stretched onto the full intensity range.
    fn random_intensity_image<R: Rng>(
        dimension: (usize, usize),
        sigma_min: f64,
        rng: &mut R,
    ) -> Result<Array2<Self>> {
        let mat = Self::random_approximate_low_rank_matrix(dimension, 1.0, sigma_min, rng)?;
        let full_scale = Self::from_real(Self::real(255));
        Ok(rescale_min_max(mat.view())?.mapv(|item| item * full_scale))
    }
}

impl RandomMatrix for f64 {
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<f64> {
        random_gaussian_real::<f64, R>(dimension, rng)
    }
}

impl RandomMatrix for f32 {
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<f32> {
        random_gaussian_real::<f32, R>(dimension, rng)
    }
}

fn random_gaussian_real<T: Float, R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<T> {
    let mut mat = Array2::<T>::zeros(dimension);
    let normal = Normal::new(0.0, 1.0).unwrap();
    mat.map_inplace(|item| *item = cast::<f64, T>(normal.sample(rng)).unwrap_or_else(T::zero));
    mat
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Axis;

    #[test]
    fn test_orthogonal_rows_and_columns() {
        let mut rng = rand::thread_rng();

        let tall = f64::random_orthogonal_matrix((20, 5), &mut rng).unwrap();
        assert_eq!(tall.dim(), (20, 5));
        let gram = tall.t().dot(&tall);
        for (index, &value) in gram.diag().iter().enumerate() {
            assert!((value - 1.0).abs() < 1E-12, "column {} not normalized", index);
        }

        let wide = f64::random_orthogonal_matrix((5, 20), &mut rng).unwrap();
        assert_eq!(wide.dim(), (5, 20));
        let gram = wide.dot(&wide.t());
        for row in gram.axis_iter(Axis(0)) {
            assert!((row.sum() - 1.0).abs() < 1E-10);
        }
    }

    #[test]
    fn test_random_intensity_image_range() {
        let mut rng = rand::thread_rng();
        let image = f32::random_intensity_image((16, 24), 1E-3, &mut rng).unwrap();

        assert_eq!(image.dim(), (16, 24));
        assert!(image.iter().all(|&item| (0.0..=255.0).contains(&item)));
        assert!(image.iter().any(|&item| item == 0.0));
        assert!(image.iter().any(|&item| (item - 255.0).abs() < 1E-3));
    }

    #[test]
    fn test_invalid_singular_value_range() {
        let mut rng = rand::thread_rng();
        assert!(matches!(
            f64::random_approximate_low_rank_matrix((4, 4), 1.0, 2.0, &mut rng),
            Err(ImageCompressionError::InvalidInput(_))
        ));
    }
}
