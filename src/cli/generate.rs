//! Generate CLI command

use crate::services::{manifest_service, DEFAULT_OUTPUT};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Maximum number of clusters (K)
    #[arg(short = 'K', value_name = "K", allow_negative_numbers = true)]
    pub max_k: i64,

    /// Number of trials (R)
    #[arg(short = 'R', value_name = "R", allow_negative_numbers = true)]
    pub trials: i64,

    /// Output filename
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let summary = manifest_service::generate(args.max_k, args.trials, &args.output)?;

    println!(
        "{}",
        format!("File '{}' has been created.", summary.path.display()).green()
    );
    Ok(())
}
