use ndarray::IxDyn;

use crate::shape::broadcast_shape;
use crate::{Tensor, TensorError};

impl Tensor {
    /// Element-wise addition with broadcasting.
    pub fn add(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        let (lhs, rhs) = self.broadcast_pair("add", other)?;
        Ok(Tensor::from_array(&lhs + &rhs))
    }

    /// Element-wise multiplication with broadcasting.
    pub fn mul(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        let (lhs, rhs) = self.broadcast_pair("mul", other)?;
        Ok(Tensor::from_array(&lhs * &rhs))
    }

    pub fn add_scalar(&self, value: f32) -> Tensor {
        Tensor::from_array(self.data() + value)
    }

    fn broadcast_pair<'a>(
        &'a self,
        op: &'static str,
        other: &'a Tensor,
    ) -> Result<(ndarray::ArrayViewD<'a, f32>, ndarray::ArrayViewD<'a, f32>), TensorError> {
        let mismatch = || TensorError::BroadcastMismatch {
            op,
            lhs: self.shape().to_vec(),
            rhs: other.shape().to_vec(),
        };
        let shape = broadcast_shape(self.shape(), other.shape()).map_err(|_| mismatch())?;
        let lhs = self.data().broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
        let rhs = other.data().broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
        Ok((lhs, rhs))
    }
}
