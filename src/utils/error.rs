use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Comic lookup request failed: {0}")]
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

    #[error("Comic {id} not found")]
    ComicNotFound { id: u64 },

    #[error("Comic lookup for {id} failed: {message}")]
    ComicLookup { id: u64, message: String },

    #[error("A buy-now activation for comic {id} is already in flight")]
    ActivationInFlight { id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    Navigation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StorefrontError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) | Self::ComicLookup { .. } => ErrorCategory::Network,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::ComicNotFound { .. } => ErrorCategory::Data,
            Self::ActivationInFlight { .. } => ErrorCategory::Navigation,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActivationInFlight { .. } => ErrorSeverity::Low,
            Self::ApiError(_) | Self::ComicLookup { .. } | Self::ComicNotFound { .. } => {
                ErrorSeverity::Medium
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the comics API is reachable and try again".to_string()
            }
            ErrorCategory::Configuration => {
                "Review the configuration file and command line flags".to_string()
            }
            ErrorCategory::Data => "Verify the comic id and the API response format".to_string(),
            ErrorCategory::Navigation => "Wait for the pending request to finish".to_string(),
            ErrorCategory::System => "Check file permissions and available ports".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ComicNotFound { id } => format!("We could not find comic #{}", id),
            Self::ActivationInFlight { .. } => "Your request is already being processed".to_string(),
            Self::ApiError(_) | Self::ComicLookup { .. } => {
                "The comics catalog is not available right now".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
