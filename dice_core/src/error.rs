//! Errors raised by dice construction and dice operations

use thiserror::Error;

/// Dice validation error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DiceError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!("InvalidArgument: {}", message);
        DiceError::InvalidArgument(message)
    }
}

/// Result alias for dice operations
pub type Result<T> = std::result::Result<T, DiceError>;
