//! Affine transform: `output = input × weightᵗ + bias`.

use ndarray::{Ix2, IxDyn};

use crate::shape::{linear_output_shape, ShapeDisplay};
use crate::{Tensor, TensorError};

/// Applies `input × weightᵗ + bias`.
///
/// `input` is `[*, in_features]` and `weight` is `[out_features, in_features]`;
/// the result is `[*, out_features]`. `bias`, when present, must broadcast
/// onto the output shape without growing it, so a `[3, 5]` bias is fine for
/// a `[1, 3, 5]` output but a `[2, 3, 5]` one is not.
///
/// # Errors
/// Returns [`TensorError::ShapeMismatch`] or [`TensorError::RankMismatch`] if
/// `input` and `weight` do not line up, and [`TensorError::BroadcastMismatch`]
/// if `bias` does not fit the output.
pub fn linear(input: &Tensor, weight: &Tensor, bias: Option<&Tensor>) -> Result<Tensor, TensorError> {
    let out_shape = linear_output_shape(input.shape(), weight.shape())?;
    log::debug!(
        "linear: input {} weight {} bias {} -> {}",
        ShapeDisplay(input.shape()),
        ShapeDisplay(weight.shape()),
        bias.map_or_else(|| "none".to_string(), |b| ShapeDisplay(b.shape()).to_string()),
        ShapeDisplay(&out_shape),
    );

    let in_features = weight.shape()[1];
    let rows: usize = input.shape()[..input.rank() - 1].iter().product();

    // Collapse the leading dimensions so the product is a single 2-D dot.
    let standard = input.data().as_standard_layout();
    let x = standard.view().into_shape((rows, in_features))?;
    let w = weight.data().view().into_dimensionality::<Ix2>()?;
    let product = x.dot(&w.t());
    log::trace!("linear: {rows}x{in_features} · {in_features}x{}", w.nrows());

    let mut out = product.into_shape(IxDyn(&out_shape))?;
    if let Some(bias) = bias {
        let stretched = bias
            .data()
            .broadcast(IxDyn(&out_shape))
            .ok_or_else(|| TensorError::BroadcastMismatch {
                op: "linear bias",
                lhs: bias.shape().to_vec(),
                rhs: out_shape.clone(),
            })?;
        out += &stretched;
    }

    Ok(Tensor::from_array(out))
}
