//! Error types for tensor operations.

/// Errors that can occur while building tensors or running operations on them.
#[derive(Debug, thiserror::Error)]
pub enum TensorError {
    /// The number of values does not match the element count of the requested shape.
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Two operands have incompatible shapes for the requested operation.
    #[error("incompatible shapes for {op}: {lhs:?} vs {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    /// An operand has the wrong number of dimensions.
    #[error("{op}: {operand} must be {expected}, got rank {actual}")]
    RankMismatch {
        op: &'static str,
        operand: &'static str,
        expected: &'static str,
        actual: usize,
    },

    /// `lhs` cannot be broadcast against (or onto) `rhs`.
    #[error("{op}: shape {lhs:?} does not broadcast with {rhs:?}")]
    BroadcastMismatch {
        op: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    #[error("array layout error: {0}")]
    Layout(#[from] ndarray::ShapeError),
}
