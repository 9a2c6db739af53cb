//! # aten-linear
//!
//! Runs `linear` on two fixed sets of tensors and prints the results.
//!
//! ```bash
//! aten-linear        # results only
//! aten-linear -vv    # plus debug logs on stderr
//! ```

use anyhow::Context;
use aten_linear::{linear, shape::ShapeDisplay, Tensor};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aten-linear",
    about = "Apply linear() to fixed tensors and print the results",
    version
)]
struct Cli {
    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr; `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let a = Tensor::ones(&[3, 4]);
    let w = Tensor::eye(5, 4);
    let b = &Tensor::zeros(&[3, 5]) + 1.5_f32;

    let out = linear(&a, &w, Some(&b)).context("linear on a 2-D input")?;
    log::info!("first result has shape {}", ShapeDisplay(out.shape()));
    println!("{out}");

    let a = Tensor::ones(&[1, 3, 4]);
    let w = Tensor::eye(5, 4);
    let b = Tensor::ones(&[3, 5]);

    let out = linear(&a, &w, Some(&b)).context("linear on a 3-D input")?;
    log::info!("second result has shape {}", ShapeDisplay(out.shape()));
    println!("{out}");

    Ok(())
}
