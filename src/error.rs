use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Commands listed when the user types something unrecognised
pub const AVAILABLE_COMMANDS: &str = "todo, deadline, event, list, mark, unmark, delete, bye";

#[derive(Error, Debug)]
pub enum EncikError {
    #[error("OOPS!!! {message}\nUsage: {usage}")]
    Validation {
        message: String,
        usage: &'static str,
    },

    #[error("OOPS!!! {0}")]
    InvalidTask(String),

    #[error(
        "OOPS!!! I'm sorry, but I don't know what that means :-(\nAvailable commands: {}",
        AVAILABLE_COMMANDS
    )]
    UnknownCommand(String),

    #[error("OOPS!!! Task list is full (max {0} tasks).")]
    ListFull(usize),

    #[error("Unable to load tasks from {}: {source}", .path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to save tasks to {}: {source}", .path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupted line '{line}': {reason}")]
    CorruptLine { line: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl EncikError {
    pub fn validation(message: impl Into<String>, usage: &'static str) -> Self {
        EncikError::Validation {
            message: message.into(),
            usage,
        }
    }

    pub fn corrupt_line(line: &str, reason: impl Into<String>) -> Self {
        EncikError::CorruptLine {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach a command usage string to a rejected task construction.
    ///
    /// Errors other than `InvalidTask` are returned unchanged.
    pub fn with_usage(self, usage: &'static str) -> Self {
        match self {
            EncikError::InvalidTask(message) => EncikError::Validation { message, usage },
            other => other,
        }
    }

    /// Errors caused by what the user typed. The session prints these and keeps going.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            EncikError::Validation { .. }
                | EncikError::InvalidTask(_)
                | EncikError::UnknownCommand(_)
                | EncikError::ListFull(_)
        )
    }

    pub fn to_error_code(&self) -> &'static str {
        match self {
            EncikError::Validation { .. } => "VALIDATION_ERROR",
            EncikError::InvalidTask(_) => "INVALID_TASK",
            EncikError::UnknownCommand(_) => "UNKNOWN_COMMAND",
            EncikError::ListFull(_) => "LIST_FULL",
            EncikError::StorageRead { .. } => "STORAGE_READ_ERROR",
            EncikError::StorageWrite { .. } => "STORAGE_WRITE_ERROR",
            EncikError::CorruptLine { .. } => "CORRUPT_LINE",
            EncikError::IoError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.to_error_code().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EncikError>;
