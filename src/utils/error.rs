use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Session storage error: {message}")]
    StorageError { message: String },

    #[error("Invalid header value for '{name}': {message}")]
    HeaderError { name: String, message: String },

    #[error("API returned an error: {message}")]
    ApiError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    /// 錯誤嚴重程度，CLI 依此決定退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClientError::HttpError(_) => ErrorSeverity::Medium,
            ClientError::ApiError { .. } | ClientError::SerializationError(_) => {
                ErrorSeverity::High
            }
            ClientError::HeaderError { .. } => ErrorSeverity::High,
            ClientError::ConfigError { .. }
            | ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingConfigError { .. } => ErrorSeverity::High,
            ClientError::IoError(_) | ClientError::StorageError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::HttpError(e) if e.is_timeout() => {
                "The server took too long to respond".to_string()
            }
            ClientError::HttpError(e) if e.is_connect() => {
                "Could not connect to the job portal server".to_string()
            }
            ClientError::HttpError(_) => "The request to the job portal failed".to_string(),
            ClientError::SerializationError(_) => {
                "The server response was not valid JSON".to_string()
            }
            ClientError::ApiError { message } => message.clone(),
            ClientError::IoError(_) | ClientError::StorageError { .. } => {
                "Could not read or write the saved session".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClientError::HttpError(_) => "Check that the API server is running and --base-url is correct",
            ClientError::SerializationError(_) => "Check the endpoint path; it may not return JSON",
            ClientError::ApiError { .. } => "Check your credentials or request data and try again",
            ClientError::HeaderError { .. } => "Log in again to replace the stored token",
            ClientError::IoError(_) | ClientError::StorageError { .. } => {
                "Check permissions on the session file or pass --storage-path"
            }
            _ => "Check the configuration file and command-line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
