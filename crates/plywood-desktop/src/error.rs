//! Error types
//!
//! Layout and input inconsistencies are not errors: the stage and cursor log
//! them and carry on. Only configuration loading and render target
//! acquisition can fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure loading or validating [`Settings`](crate::Settings)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("failed to read settings from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Settings file is not valid JSON for the schema
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is outside its allowed range
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Failure to draw a frame on an output
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output's render surface could not be (re)acquired
    #[error("no render target for output {output}: {reason}")]
    NoRenderTarget { output: String, reason: String },
}
