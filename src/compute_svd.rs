//! A simple trait to wrap SVD Computation.

use crate::svd_container::SVDContainer;
use crate::types::{ImageCompressionError, Result, Scalar};
use ndarray::ArrayView2;
use ndarray_linalg::{JobSvd, SVDDCInto};

pub trait ComputeSVD {
    type A: Scalar;

    /// Compute the full SVD of `arr`.
    ///
    /// For an $m\times n$ matrix the container holds $U\in\mathbb{R}^{m\times m}$,
    /// the $\min(m, n)$ singular values in descending order and
    /// $V^T\in\mathbb{R}^{n\times n}$.
    fn compute_svd(arr: ArrayView2<Self::A>) -> Result<SVDContainer<Self::A>>;
}

macro_rules! compute_svd_impl {
    ($scalar:ty) => {
        impl ComputeSVD for $scalar {
            type A = $scalar;
            fn compute_svd(arr: ArrayView2<Self::A>) -> Result<SVDContainer<Self::A>> {
                let (u, s, vt) = arr.to_owned().svddc_into(JobSvd::All)?;

                match (u, vt) {
                    (Some(u), Some(vt)) => Ok(SVDContainer { u, s, vt }),
                    _ => Err(ImageCompressionError::SVDError),
                }
            }
        }
    };
}

compute_svd_impl!(f32);
compute_svd_impl!(f64);
