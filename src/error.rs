//! Error types and handling for the packing list engine

use thiserror::Error;

/// Main error type for the packing list engine
#[derive(Error, Debug)]
pub enum PacklistError {
    /// Input the engine cannot work with (bad date range, non-numeric temperature, ...)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PacklistError {
    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PacklistError::InvalidInput { message } => {
                format!("Invalid input: {message}")
            }
            PacklistError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            PacklistError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }

    /// Whether the caller handed the engine something it should have validated first
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PacklistError::InvalidInput { .. })
    }
}
