//! # aten-linear
//!
//! A small `ndarray`-backed tensor type with the pieces needed to run
//! torch's `linear`:
//! - [`Tensor`] constructors (`zeros`, `ones`, `full`, `eye`, `from_vec`).
//! - Broadcasting element-wise arithmetic ([`Tensor::add`], [`Tensor::mul`]).
//! - [`linear`]: `input × weightᵗ + bias` over inputs of any rank ≥ 1.
//! - A torch-style `Display` implementation for printing results.
//!
//! Shape problems come back as [`TensorError`] rather than panics.

mod add;
mod error;
mod format;
mod linear;
mod operation;
pub mod shape;
mod tensor;

pub use error::TensorError;
pub use linear::linear;
pub use tensor::Tensor;
