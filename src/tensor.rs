use ndarray::{Array2, ArrayD, IxDyn};

use crate::TensorError;

/// An owned n-dimensional `f32` tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: ArrayD<f32>, // Multi-dimensional array
}

impl Tensor {
    /// Same as [`Tensor::zeros`].
    pub fn new(shape: &[usize]) -> Self {
        Self::zeros(shape)
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Tensor {
            data: ArrayD::<f32>::zeros(IxDyn(shape)),
        }
    }

    pub fn ones(shape: &[usize]) -> Self {
        Tensor {
            data: ArrayD::<f32>::ones(IxDyn(shape)),
        }
    }

    pub fn full(shape: &[usize], value: f32) -> Self {
        Tensor {
            data: ArrayD::from_elem(IxDyn(shape), value),
        }
    }

    /// An `n × m` matrix with ones on the main diagonal.
    ///
    /// Non-square shapes keep `min(n, m)` ones; the remaining rows or
    /// columns are all zero.
    pub fn eye(n: usize, m: usize) -> Self {
        let eye = Array2::from_shape_fn((n, m), |(i, j)| if i == j { 1.0 } else { 0.0 });
        Tensor {
            data: eye.into_dyn(),
        }
    }

    /// Builds a tensor from row-major `values`.
    pub fn from_vec(shape: &[usize], values: Vec<f32>) -> Result<Self, TensorError> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(TensorError::BufferSizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Tensor {
            data: ArrayD::from_shape_vec(IxDyn(shape), values)?,
        })
    }

    pub fn from_array(data: ArrayD<f32>) -> Self {
        Tensor { data }
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &ArrayD<f32> {
        &self.data
    }

    pub fn into_array(self) -> ArrayD<f32> {
        self.data
    }

    /// Values in row-major order, regardless of the underlying memory layout.
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }
}
