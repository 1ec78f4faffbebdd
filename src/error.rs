//! Error types with fix suggestions
//!
//! The flattening and scale functions themselves never fail; errors
//! arise at the I/O and decode seam around them.

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum AllocflowError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown scale mode '{mode}'")]
    UnknownScaleMode { mode: String },

    #[error("Series has no non-zero magnitude")]
    EmptySeries,
}

impl FixSuggestion for AllocflowError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            AllocflowError::JsonParse(_) => {
                Some("Check the input is a JSON tree with name/value/leafs fields")
            }
            AllocflowError::Io(_) => Some("Check file path and permissions"),
            AllocflowError::UnknownScaleMode { .. } => Some("Use 'linear' or 'log'"),
            AllocflowError::EmptySeries => {
                Some("Provide at least one non-zero value, or use 'linear'")
            }
        }
    }
}
