//! Error types for dbgui
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in dbgui
///
/// Every variant is a terminal, user-facing failure: the pipeline aborts
/// immediately and the error surfaces verbatim to the caller.
#[derive(Debug, Error)]
pub enum DbguiError {
    /// No tool configured and none supplied on the command line
    #[error("No DB GUI tool has been specified")]
    NoToolSpecified,

    /// The catalog filter produced an empty set
    #[error("No supported database services found running")]
    NoServicesFound,

    /// Requested service name has no match among the running services
    #[error("'{0}' is not a supported database service")]
    UnsupportedService(String),

    /// Requested tool identifier has no builder
    #[error("DB GUI tool '{0}' is not supported")]
    UnsupportedTool(String),

    /// The process-execution collaborator failed to launch the tool
    #[error("Opening GUI tool failed: {0}")]
    ProcessLaunchFailed(String),

    /// The environment-inspection collaborator reported failure
    #[error("Failed to inspect app environment: {0}")]
    EnvironmentInspect(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error (service catalog)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dbgui operations
pub type Result<T> = std::result::Result<T, DbguiError>;
