//! torch-style `Display` for [`Tensor`].

use std::fmt;

use crate::Tensor;

const PREFIX: &str = "tensor(";

/// How every element of one tensor is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueStyle {
    /// All finite values are whole numbers: `2.`
    Integral,
    /// Fixed four decimals: `2.5000`
    Fixed,
}

impl ValueStyle {
    fn for_values<'a>(mut values: impl Iterator<Item = &'a f32>) -> Self {
        if values.all(|v| !v.is_finite() || v.fract() == 0.0) {
            ValueStyle::Integral
        } else {
            ValueStyle::Fixed
        }
    }

    fn render(self, value: f32) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }
        match self {
            ValueStyle::Integral => format!("{value:.0}."),
            ValueStyle::Fixed => format!("{value:.4}"),
        }
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.numel() == 0 {
            return write!(f, "{PREFIX}[])");
        }

        let style = ValueStyle::for_values(self.data().iter());
        let cells: Vec<String> = self.data().iter().map(|&v| style.render(v)).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        f.write_str(PREFIX)?;
        if self.rank() == 0 {
            f.write_str(&cells[0])?;
        } else {
            write_block(f, &cells, self.shape(), 0, width)?;
        }
        f.write_str(")")
    }
}

/// Writes one bracketed block of `cells` laid out as `shape`.
///
/// Rows of the innermost matrix are separated by one newline, and each outer
/// dimension adds another. Continuation lines align under the opening
/// bracket of their depth.
fn write_block(
    f: &mut fmt::Formatter<'_>,
    cells: &[String],
    shape: &[usize],
    depth: usize,
    width: usize,
) -> fmt::Result {
    f.write_str("[")?;
    if shape.len() == 1 {
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{cell:>width$}")?;
        }
    } else {
        let stride = cells.len() / shape[0];
        let breaks = "\n".repeat(shape.len() - 1);
        let indent = PREFIX.len() + depth + 1;
        for (i, chunk) in cells.chunks(stride).enumerate() {
            if i > 0 {
                write!(f, ",{breaks}{:indent$}", "")?;
            }
            write_block(f, chunk, &shape[1..], depth + 1, width)?;
        }
    }
    f.write_str("]")
}
