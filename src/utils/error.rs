use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Document store returned HTTP {status}: {body}")]
    FetchStatus { status: u16, body: String },

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Deal '{deal_id}' is missing field '{field}'")]
    MalformedDeal { deal_id: String, field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoardError::ApiError(_) | BoardError::FetchStatus { .. } => ErrorCategory::Network,
            BoardError::ConfigError { .. }
            | BoardError::ConfigValidationError { .. }
            | BoardError::InvalidConfigValueError { .. }
            | BoardError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BoardError::SerializationError(_) | BoardError::MalformedDeal { .. } => {
                ErrorCategory::Data
            }
            BoardError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 5xx and transport errors are worth retrying, 4xx are not
            BoardError::ApiError(_) => ErrorSeverity::Medium,
            BoardError::FetchStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            BoardError::FetchStatus { .. } => ErrorSeverity::High,
            BoardError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BoardError::ApiError(_) => "Check network connectivity and the store endpoint",
            BoardError::FetchStatus { status: 401, .. }
            | BoardError::FetchStatus { status: 403, .. } => {
                "Check store.project_id and store.api_key"
            }
            BoardError::FetchStatus { status: 404, .. } => {
                "Check store.database_id and store.collection_id"
            }
            BoardError::FetchStatus { .. } => "Retry later; the document store reported an error",
            BoardError::IoError(_) => "Check that the file exists and is readable",
            BoardError::SerializationError(_) => {
                "Make sure the response or input file is a valid document list"
            }
            BoardError::ConfigError { .. }
            | BoardError::ConfigValidationError { .. }
            | BoardError::InvalidConfigValueError { .. }
            | BoardError::MissingConfigError { .. } => "Fix the configuration file and run again",
            BoardError::MalformedDeal { .. } => {
                "Deals placed on the board need an id, name, price and customer name"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not load deals: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Data => format!("Deal data is malformed: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_status_severity() {
        let server_error = BoardError::FetchStatus {
            status: 503,
            body: String::new(),
        };
        let auth_error = BoardError::FetchStatus {
            status: 401,
            body: String::new(),
        };

        assert_eq!(server_error.severity(), ErrorSeverity::Medium);
        assert_eq!(auth_error.severity(), ErrorSeverity::High);
        assert_eq!(auth_error.category(), ErrorCategory::Network);
        assert!(auth_error.recovery_suggestion().contains("api_key"));
    }

    #[test]
    fn test_malformed_deal_message() {
        let err = BoardError::MalformedDeal {
            deal_id: "d1".to_string(),
            field: "customers".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.user_friendly_message().contains("'d1'"));
    }
}
