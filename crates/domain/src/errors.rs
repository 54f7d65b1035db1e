//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Slotwatch
///
/// Every failure is terminal at the point of detection: callers surface the
/// error to the user or log it, and nothing here aborts the process.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SlotwatchError {
    /// Session start was attempted without any office selected.
    #[error("no offices selected")]
    NoOfficesSelected,

    /// Session start was attempted with an empty email or password.
    #[error("missing credentials")]
    MissingCredentials,

    /// Session start was attempted while a session is already running.
    #[error("monitoring session already running")]
    AlreadyRunning,

    /// Session stop was attempted while no session is running.
    #[error("no monitoring session running")]
    NotRunning,

    /// A caller-supplied value was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The credential vault could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// Anything that should not happen during normal operation.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for Slotwatch operations
pub type Result<T> = std::result::Result<T, SlotwatchError>;
