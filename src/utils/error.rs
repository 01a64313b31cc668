use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Connection to {url} failed: {message}")]
    ConnectionError { url: String, message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Unexpected API response from {source_name}: {message}")]
    ResponseFormatError { source_name: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Protocol,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StatsError {
    /// Maps a transport failure onto the error taxonomy. Connect failures and
    /// timeouts are transient; everything else is a protocol fault.
    pub fn from_transport(url: &str, err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            StatsError::ConnectionError {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else {
            StatsError::ApiError(err)
        }
    }

    /// A transient fault lets the aggregator skip one page instead of
    /// failing the keyword.
    pub fn is_transient(&self) -> bool {
        matches!(self, StatsError::ConnectionError { .. })
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StatsError::ConnectionError { .. } => ErrorCategory::Network,
            StatsError::ApiError(_)
            | StatsError::HttpStatusError { .. }
            | StatsError::ResponseFormatError { .. } => ErrorCategory::Protocol,
            StatsError::ConfigError { .. }
            | StatsError::MissingConfigError { .. }
            | StatsError::InvalidConfigValueError { .. }
            | StatsError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            StatsError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Protocol => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StatsError::ConnectionError { url, .. } => {
                format!("Could not reach {}", url)
            }
            StatsError::ApiError(e) => format!("Job search request failed: {}", e),
            StatsError::HttpStatusError { status, url } => {
                format!("Job search API at {} answered with HTTP {}", url, status)
            }
            StatsError::ResponseFormatError { source_name, .. } => {
                format!("{} returned data in an unexpected format", source_name)
            }
            StatsError::MissingConfigError { field } => {
                format!("Required setting '{}' is not set", field)
            }
            StatsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and try again",
            ErrorCategory::Protocol => {
                "The API may have changed or rejected the request; run with --verbose for details"
            }
            ErrorCategory::Configuration => match self {
                StatsError::MissingConfigError { .. } => {
                    "Provide the value via command line, environment or config file"
                }
                _ => "Review the configuration file and command line arguments",
            },
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
