// pong-map - ADMIXTURE run manifest generator
// Enumerates every (K, trial) pair and writes the tab-separated map consumed by pong

pub mod cli;
pub mod models;
pub mod services;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{ManifestLine, RunGrid, RunSpec};
pub use services::{generate, write_manifest, ManifestError, ManifestSummary, DEFAULT_OUTPUT};
