//! Shape rules shared by the elementwise operations and `linear`.

use std::fmt;

use crate::TensorError;

/// Combines two shapes under numpy/torch broadcasting rules.
///
/// Dimensions are aligned from the right; each pair must be equal or one of
/// them must be 1. Missing leading dimensions count as 1.
pub fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>, TensorError> {
    let rank = lhs.len().max(rhs.len());
    let mut out = vec![0usize; rank];
    for i in 0..rank {
        let a = dim_from_right(lhs, i);
        let b = dim_from_right(rhs, i);
        out[rank - 1 - i] = match (a, b) {
            _ if a == b => a,
            (1, _) => b,
            (_, 1) => a,
            _ => {
                return Err(TensorError::BroadcastMismatch {
                    op: "broadcast",
                    lhs: lhs.to_vec(),
                    rhs: rhs.to_vec(),
                })
            }
        };
    }
    Ok(out)
}

fn dim_from_right(dims: &[usize], i: usize) -> usize {
    if i < dims.len() {
        dims[dims.len() - 1 - i]
    } else {
        1
    }
}

/// Output shape of `linear(input, weight)`: `input[..-1] ++ [weight[0]]`.
///
/// # Errors
/// - [`TensorError::RankMismatch`] if `weight` is not a matrix or `input` is a scalar.
/// - [`TensorError::ShapeMismatch`] if `input`'s last dimension differs from
///   `weight`'s second one.
pub fn linear_output_shape(input: &[usize], weight: &[usize]) -> Result<Vec<usize>, TensorError> {
    if weight.len() != 2 {
        return Err(TensorError::RankMismatch {
            op: "linear",
            operand: "weight",
            expected: "rank 2",
            actual: weight.len(),
        });
    }
    let Some((&in_features, leading)) = input.split_last() else {
        return Err(TensorError::RankMismatch {
            op: "linear",
            operand: "input",
            expected: "at least rank 1",
            actual: 0,
        });
    };
    if in_features != weight[1] {
        return Err(TensorError::ShapeMismatch {
            op: "linear",
            lhs: input.to_vec(),
            rhs: weight.to_vec(),
        });
    }

    let mut out = leading.to_vec();
    out.push(weight[0]);
    Ok(out)
}

/// Renders a shape the way torch prints `size`: `(3, 5)`, `(5,)`, `()`.
pub struct ShapeDisplay<'a>(pub &'a [usize]);

impl fmt::Display for ShapeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            [only] => write!(f, "({only},)"),
            dims => {
                write!(f, "(")?;
                for (i, d) in dims.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{d}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_equal_shapes() {
        assert_eq!(broadcast_shape(&[3, 5], &[3, 5]).unwrap(), vec![3, 5]);
    }

    #[test]
    fn test_broadcast_missing_leading_dims() {
        assert_eq!(broadcast_shape(&[1, 3, 5], &[3, 5]).unwrap(), vec![1, 3, 5]);
        assert_eq!(broadcast_shape(&[5], &[2, 3, 5]).unwrap(), vec![2, 3, 5]);
    }

    #[test]
    fn test_broadcast_ones_stretch() {
        assert_eq!(broadcast_shape(&[4, 1], &[1, 3]).unwrap(), vec![4, 3]);
    }

    #[test]
    fn test_broadcast_incompatible() {
        let err = broadcast_shape(&[4, 2], &[1, 3]).unwrap_err();
        assert!(matches!(err, TensorError::BroadcastMismatch { .. }));
    }

    #[test]
    fn test_linear_output_shape() {
        assert_eq!(linear_output_shape(&[3, 4], &[5, 4]).unwrap(), vec![3, 5]);
        assert_eq!(linear_output_shape(&[1, 3, 4], &[5, 4]).unwrap(), vec![1, 3, 5]);
        assert_eq!(linear_output_shape(&[4], &[5, 4]).unwrap(), vec![5]);
    }

    #[test]
    fn test_linear_output_shape_inner_mismatch() {
        let err = linear_output_shape(&[3, 4], &[5, 3]).unwrap_err();
        assert!(matches!(err, TensorError::ShapeMismatch { op: "linear", .. }));
    }

    #[test]
    fn test_linear_output_shape_bad_ranks() {
        assert!(matches!(
            linear_output_shape(&[3, 4], &[5, 4, 1]),
            Err(TensorError::RankMismatch { operand: "weight", actual: 3, .. })
        ));
        assert!(matches!(
            linear_output_shape(&[], &[5, 4]),
            Err(TensorError::RankMismatch { operand: "input", actual: 0, .. })
        ));
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(ShapeDisplay(&[3, 5]).to_string(), "(3, 5)");
        assert_eq!(ShapeDisplay(&[5]).to_string(), "(5,)");
        assert_eq!(ShapeDisplay(&[]).to_string(), "()");
    }
}
