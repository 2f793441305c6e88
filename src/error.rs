use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or configuring an energy cascade.
#[derive(Debug, Error)]
pub enum CascadeError {
    #[error("invalid parameter {name}: {value} ({reason})")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: &'static str,
    },
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CascadeError {
    pub fn invalid(name: impl Into<String>, value: f64, reason: &'static str) -> Self {
        CascadeError::InvalidParameter {
            name: name.into(),
            value,
            reason,
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, CascadeError::InvalidParameter { .. })
    }
}
