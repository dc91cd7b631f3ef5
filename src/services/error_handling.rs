use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors raised at the dashboard's input and output boundaries. The
/// filter-and-derive pipeline itself is total and never fails.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Failed to read catalog at {path}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog at {path}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate project id in catalog: {id}")]
    DuplicateProjectId { id: String },

    #[error("Failed to read configuration at {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Unknown quick filter: {name} (expected active, critical, at-risk or completed)")]
    UnknownQuickFilter { name: String },

    #[error("Failed to read action log at {path}")]
    ActionLogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse action log at {path}")]
    ActionLogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Export failed: {message}")]
    Export { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        DashboardError::Export {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Export {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Structured logging helpers
pub struct LogHelper;

impl LogHelper {
    pub fn log_rejected_input(field: &str, value: &str, reason: &str) {
        warn!(
            field = %field,
            value = %value,
            reason = %reason,
            "Input rejected"
        );
    }
}
