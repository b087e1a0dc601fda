//! Host binding error types.

use thiserror::Error;

/// Errors a host binding can report back to the assistant.
///
/// The assistant never surfaces these to the user; they are logged and the
/// reply is rendered as usual.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Convenience alias for host binding results.
pub type HostResult<T> = Result<T, HostError>;
