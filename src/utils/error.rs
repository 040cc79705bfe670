use thiserror::Error;

#[derive(Error, Debug)]
pub enum MuralError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Form error: {message}")]
    FormError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Io,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MuralError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MuralError::ApiError(_) => ErrorCategory::Network,
            MuralError::IoError(_) => ErrorCategory::Io,
            MuralError::ConfigValidationError { .. }
            | MuralError::InvalidConfigValueError { .. }
            | MuralError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MuralError::FormError { .. } => ErrorCategory::Form,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Form => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息 (不含內部細節)
    pub fn user_friendly_message(&self) -> String {
        match self {
            MuralError::ApiError(e) if e.is_timeout() => {
                "The backend did not answer in time".to_string()
            }
            MuralError::ApiError(_) => "Could not reach the project backend".to_string(),
            MuralError::IoError(e) => format!("Could not read a local file: {}", e),
            MuralError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            MuralError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            MuralError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            MuralError::FormError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the backend endpoint is running and reachable, then submit again",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags and retry",
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Form => "Correct the form input and submit again",
        }
    }
}

pub type Result<T> = std::result::Result<T, MuralError>;
