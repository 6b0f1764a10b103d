use thiserror::Error;

use crate::constants::FALLBACK_ERROR_MESSAGE;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Credentials not found. Please run 'admin auth' to configure.")]
    CredentialsNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request failed with status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Missing key: {0}")]
    MissingKey(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("{0}")]
    OperationFailed(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type AdminResult<T> = Result<T, AdminError>;

impl AdminError {
    /// Text shown to the operator in notifications. Falls back to a generic
    /// message when the failure carries nothing readable.
    pub fn user_message(&self) -> String {
        let message = match self {
            AdminError::HttpStatus { message, .. } => message.trim().to_string(),
            AdminError::RequestError(e) => e.to_string(),
            AdminError::JsonError(e) => format!("Malformed response: {}", e),
            AdminError::MissingKey(msg)
            | AdminError::InvalidInput(msg)
            | AdminError::ConfigError(msg)
            | AdminError::TerminalError(msg)
            | AdminError::OperationFailed(msg)
            | AdminError::Unknown(msg) => msg.trim().to_string(),
            other => other.to_string(),
        };

        if message.is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Transport failures, non-success statuses and undecodable payloads all
    /// originate at the remote service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            AdminError::HttpStatus { .. } | AdminError::RequestError(_) | AdminError::JsonError(_)
        )
    }
}

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AdminResult<T>;
    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> AdminResult<T> {
        self.map_err(|e| AdminError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AdminError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> AdminResult<T> {
        self.ok_or_else(|| AdminError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| AdminError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! admin_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::AdminError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::AdminError::$error_type(format!($fmt, $($arg)*))
    };
}
