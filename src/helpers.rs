//! Norm based comparison of matrices.

use crate::types::{ImageScalar, Result, Scalar};
use ndarray::{ArrayBase, Data, Ix2};
use ndarray_linalg::OperationNorm;

pub trait RelDiff {
    type A: ImageScalar;

    /// Return the Frobenius norm of `self - other`.
    fn diff_fro<S2: Data<Elem = Self::A>>(
        &self,
        other: &ArrayBase<S2, Ix2>,
    ) -> Result<<Self::A as Scalar>::Real>;

    /// Return the relative Frobenius norm difference of `self` and `other`,
    /// measured against `other`.
    fn rel_diff<S2: Data<Elem = Self::A>>(
        &self,
        other: &ArrayBase<S2, Ix2>,
    ) -> Result<<Self::A as Scalar>::Real>;
}

impl<A, S> RelDiff for ArrayBase<S, Ix2>
where
    A: ImageScalar,
    S: Data<Elem = A>,
{
    type A = A;

    fn diff_fro<S2: Data<Elem = A>>(&self, other: &ArrayBase<S2, Ix2>) -> Result<A::Real> {
        let diff = self - other;
        Ok(diff.opnorm_fro()?)
    }

    fn rel_diff<S2: Data<Elem = A>>(&self, other: &ArrayBase<S2, Ix2>) -> Result<A::Real> {
        Ok(self.diff_fro(other)? / other.opnorm_fro()?)
    }
}
