use std::ops::Add;

use crate::Tensor;

/// Panics if the shapes do not broadcast, like the `ndarray` operators it
/// wraps. Use [`Tensor::add`] for a checked version.
impl Add for &Tensor {
    type Output = Tensor;

    fn add(self, rhs: &Tensor) -> Tensor {
        Tensor::from_array(self.data() + rhs.data())
    }
}

impl Add<f32> for &Tensor {
    type Output = Tensor;

    fn add(self, rhs: f32) -> Tensor {
        self.add_scalar(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_operator() {
        let c = &Tensor::ones(&[2, 2]) + &Tensor::full(&[2, 2], 2.0);
        assert_eq!(c.to_vec(), vec![3.0; 4]);
    }

    #[test]
    fn test_add_scalar_operator() {
        let c = &Tensor::zeros(&[3, 5]) + 1.5_f32;
        assert_eq!(c.shape(), &[3, 5]);
        assert!(c.to_vec().iter().all(|&v| v == 1.5));
    }

    #[test]
    #[should_panic]
    fn test_add_operator_panics_on_mismatch() {
        let _ = &Tensor::ones(&[3, 4]) + &Tensor::ones(&[2, 4]);
    }
}
