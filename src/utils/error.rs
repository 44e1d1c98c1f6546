use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("API key is missing or still set to the placeholder value")]
    MissingApiKey,

    #[error("Unexpected API response: {reason}")]
    MalformedResponse { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Response,
    Storage,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HealthError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HealthError::ApiError(_) | HealthError::HttpStatusError { .. } => ErrorCategory::Network,
            HealthError::MissingApiKey
            | HealthError::ConfigError { .. }
            | HealthError::ConfigValidationError { .. }
            | HealthError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            HealthError::MalformedResponse { .. } | HealthError::SerializationError(_) => {
                ErrorCategory::Response
            }
            HealthError::IoError(_) => ErrorCategory::Storage,
            HealthError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    /// 診斷報告仍可產出的錯誤 (飲食計畫失敗) 視為 Low
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HealthError::MissingApiKey | HealthError::MalformedResponse { .. } => ErrorSeverity::Low,
            HealthError::ApiError(_) | HealthError::HttpStatusError { .. } => ErrorSeverity::Medium,
            HealthError::SerializationError(_)
            | HealthError::ValidationError { .. }
            | HealthError::ConfigError { .. }
            | HealthError::ConfigValidationError { .. }
            | HealthError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            HealthError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the diet plan service: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Response => format!("The diet plan service sent an unexpected reply: {}", self),
            ErrorCategory::Storage => format!("Could not write the report files: {}", self),
            ErrorCategory::Input => format!("Please check your inputs: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HealthError::MissingApiKey => "Set the API_KEY environment variable or pass --api-key",
            HealthError::ApiError(_) => "Check your network connection and the API endpoint, then try again",
            HealthError::HttpStatusError { status, .. } if *status == 400 || *status == 403 => {
                "Check that your API key is valid for the configured endpoint"
            }
            HealthError::HttpStatusError { .. } => "The service may be busy, try again in a moment",
            HealthError::MalformedResponse { .. } | HealthError::SerializationError(_) => {
                "Try generating the report again"
            }
            HealthError::IoError(_) => "Make sure the output directory exists and is writable",
            HealthError::ValidationError { .. } => {
                "Cycle length must be 21-35 days, height 50-250 cm and weight 20-200 kg"
            }
            HealthError::ConfigError { .. }
            | HealthError::ConfigValidationError { .. }
            | HealthError::InvalidConfigValueError { .. } => {
                "Review the configuration file or command-line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HealthError>;
