use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuakeError {
    #[error("Feed request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Feed {url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("GeoJSON error: {0}")]
    GeoJsonError(#[from] geojson::Error),

    #[error("Expected a GeoJSON {expected}")]
    UnexpectedGeoJson { expected: String },

    #[error("Invalid feature {id}: {reason}")]
    InvalidFeature { id: String, reason: String },

    #[error("Non-finite {field}: {value}")]
    NonFiniteInput { field: String, value: f64 },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status the CLI uses for a failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl QuakeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuakeError::ApiError(_) | QuakeError::HttpStatus { .. } => ErrorCategory::Network,
            QuakeError::GeoJsonError(_)
            | QuakeError::UnexpectedGeoJson { .. }
            | QuakeError::InvalidFeature { .. }
            | QuakeError::NonFiniteInput { .. }
            | QuakeError::SerializationError(_)
            | QuakeError::CsvError(_) => ErrorCategory::Data,
            QuakeError::ConfigError { .. }
            | QuakeError::InvalidConfigValueError { .. }
            | QuakeError::MissingConfigError { .. } => ErrorCategory::Configuration,
            QuakeError::ZipError(_) | QuakeError::IoError(_) => ErrorCategory::Storage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            QuakeError::InvalidFeature { .. } | QuakeError::NonFiniteInput { .. } => {
                ErrorSeverity::Low
            }
            QuakeError::ApiError(_) | QuakeError::HttpStatus { .. } => ErrorSeverity::Medium,
            QuakeError::IoError(_) | QuakeError::ZipError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Whether running again later may succeed without changing anything.
    pub fn is_transient(&self) -> bool {
        matches!(self.category(), ErrorCategory::Network)
    }

    pub fn exit_code(&self) -> i32 {
        self.severity().exit_code()
    }

    /// Lines the CLI prints to stderr when a run fails.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("❌ {}", self.user_friendly_message()),
            format!("💡 {}", self.recovery_suggestion()),
        ];
        if self.is_transient() {
            lines.push(
                "🔁 The feed may be briefly unavailable; running again later can succeed"
                    .to_string(),
            );
        }
        lines
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuakeError::ApiError(e) if e.is_timeout() => {
                "The feed did not answer before the timeout".to_string()
            }
            QuakeError::ApiError(_) => "Could not reach the feed server".to_string(),
            QuakeError::HttpStatus { url, status } => {
                format!("The feed at {} is unavailable (HTTP {})", url, status)
            }
            QuakeError::GeoJsonError(_) | QuakeError::UnexpectedGeoJson { .. } => {
                "The feed did not return usable GeoJSON".to_string()
            }
            QuakeError::InvalidFeature { id, .. } => format!("Feature {} could not be styled", id),
            QuakeError::NonFiniteInput { field, .. } => {
                format!("A feature carries a non-numeric {}", field)
            }
            QuakeError::ConfigError { message } => format!("Configuration problem: {}", message),
            QuakeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            QuakeError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
            QuakeError::ZipError(_) | QuakeError::IoError(_) => {
                "Could not write the map layers".to_string()
            }
            QuakeError::CsvError(_) | QuakeError::SerializationError(_) => {
                "Could not encode the map layers".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the network connection and the feed URLs, then retry",
            ErrorCategory::Data => "Check that the feed URLs point at GeoJSON FeatureCollections",
            ErrorCategory::Configuration => "Review the command-line flags or the TOML file",
            ErrorCategory::Storage => "Check that the output path exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, QuakeError>;
