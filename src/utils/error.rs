use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error("Failed to read {}: {source}", .path.display())]
    InputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    EncodingError {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("Malformed completion response: {message}")]
    MalformedResponseError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Network,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl TranslatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::InputError { .. } | Self::OutputError { .. } | Self::IoError(_) => {
                ErrorCategory::FileSystem
            }
            Self::HttpError(_) | Self::ApiStatusError { .. } => ErrorCategory::Network,
            Self::EncodingError { .. } | Self::MalformedResponseError { .. } => {
                ErrorCategory::Data
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::FileSystem | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// Whether another completion attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_) | Self::ApiStatusError { .. } | Self::MalformedResponseError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingConfigError { field } => {
                format!("Missing required setting '{}'", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::InputError { path, .. } => {
                format!("Could not read the resource file {}", path.display())
            }
            Self::OutputError { path, .. } => {
                format!(
                    "Could not write {}; translated entries were not saved",
                    path.display()
                )
            }
            Self::EncodingError { path, .. } => {
                format!("The resource file {} is not UTF-8 encoded", path.display())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingConfigError { .. } => {
                "Set the OPENAI_API_KEY environment variable or pass --api-key"
            }
            Self::InvalidConfigValueError { .. } => "Check the command line arguments",
            Self::InputError { .. } => "Check that the input file exists and is readable",
            Self::OutputError { .. } | Self::IoError(_) => {
                "Check permissions and free space in the output directory"
            }
            Self::EncodingError { .. } => "Convert the resource file to UTF-8 and try again",
            Self::HttpError(_) | Self::ApiStatusError { .. } => {
                "Check network connectivity and the API key"
            }
            Self::MalformedResponseError { .. } => {
                "Check that --api-base points to a chat completions compatible API"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TranslatorError>;
