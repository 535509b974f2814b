use aws_sdk_s3::error::{BuildError, DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::presigning::PresigningConfigError;
use aws_sdk_s3::primitives::ByteStreamError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("{service} call failed: {message}")]
    ServiceError {
        service: String,
        code: Option<String>,
        message: String,
    },

    #[error("Request build failed: {0}")]
    BuildError(#[from] BuildError),

    #[error("Presigning failed: {0}")]
    PresigningError(#[from] PresigningConfigError),

    #[error("Response body error: {0}")]
    ByteStreamError(#[from] ByteStreamError),

    #[error("DynamoDB item conversion failed: {0}")]
    ItemConversionError(#[from] serde_dynamo::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unrecognized event: {message}")]
    InvalidEvent { message: String },

    #[error("Job {job_id} ended with status {status}")]
    JobFailed { job_id: String, status: String },

    #[error("Gave up waiting for {job_id} after {attempts} attempts")]
    Timeout { job_id: String, attempts: u32 },
}

/// Broad grouping used to pick an exit code and a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The AWS service rejected or failed the call.
    Service,
    /// Bad arguments, settings or event payload.
    Input,
    /// Local IO or encoding failure.
    Local,
}

impl SnippetError {
    /// Wraps an SDK failure, keeping the vendor's error code and message.
    pub fn service<E, R>(service: &str, err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
        R: std::fmt::Debug + Send + Sync + 'static,
    {
        let code = err.code().map(str::to_owned);
        let message = err
            .message()
            .map(str::to_owned)
            .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
        SnippetError::ServiceError {
            service: service.to_string(),
            code,
            message,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        SnippetError::ConfigError {
            message: message.into(),
        }
    }

    pub fn invalid_event(message: impl Into<String>) -> Self {
        SnippetError::InvalidEvent {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SnippetError::ServiceError { .. }
            | SnippetError::PresigningError(_)
            | SnippetError::ByteStreamError(_)
            | SnippetError::JobFailed { .. }
            | SnippetError::Timeout { .. } => ErrorCategory::Service,
            SnippetError::BuildError(_)
            | SnippetError::ConfigError { .. }
            | SnippetError::MissingConfigError { .. }
            | SnippetError::ConfigValidationError { .. }
            | SnippetError::InvalidConfigValueError { .. }
            | SnippetError::InvalidEvent { .. } => ErrorCategory::Input,
            SnippetError::ItemConversionError(_)
            | SnippetError::ZipError(_)
            | SnippetError::CsvError(_)
            | SnippetError::IoError(_)
            | SnippetError::SerializationError(_)
            | SnippetError::ProcessingError { .. } => ErrorCategory::Local,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Service => 1,
            ErrorCategory::Input => 2,
            ErrorCategory::Local => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SnippetError::ServiceError {
                code: Some(code), ..
            } if code.contains("AccessDenied") || code.contains("Unauthorized") => {
                "Check the credentials and IAM permissions of the active profile"
            }
            SnippetError::ServiceError { .. } => {
                "Check the resource names and the region the call was sent to"
            }
            SnippetError::Timeout { .. } => "Raise polling.max_attempts or check the job in the console",
            SnippetError::JobFailed { .. } => "Inspect the job details for the failure reason",
            _ => match self.category() {
                ErrorCategory::Input => "Check the command arguments and the settings file",
                ErrorCategory::Local => "Check the local file paths and their contents",
                ErrorCategory::Service => "Retry the call",
            },
        }
    }
}

impl<E, R> From<SdkError<E, R>> for SnippetError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn from(err: SdkError<E, R>) -> Self {
        SnippetError::service("aws", err)
    }
}

pub type Result<T> = std::result::Result<T, SnippetError>;
