//! Service layer for pong-map
//!
//! Holds the manifest-writing logic so the CLI and library callers share
//! one implementation.

pub mod manifest_service;

// Re-export commonly used types
pub use manifest_service::{
    generate, write_manifest, ManifestError, ManifestResult, ManifestSummary, DEFAULT_OUTPUT,
};
