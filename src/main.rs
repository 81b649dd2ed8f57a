mod cli;
mod compare;
mod models;
mod parser;

use std::process::ExitCode;

use anyhow::Result;
use colored::*;
use tracing_subscriber::{registry::Registry, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

use crate::cli::Cli;

fn main() -> ExitCode {
    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(HierarchicalLayer::new(2));
    tracing::subscriber::set_global_default(subscriber).unwrap();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::from(1)
        }
    }
}

/// The exit code is the whole result channel: nothing is written to
/// stdout, and stderr only carries usage and error text.
fn run() -> Result<bool> {
    let cli = Cli::init()?;
    let comparison = cli.get_comparison()?;

    Ok(comparison.evaluate())
}
