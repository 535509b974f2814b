use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// DynamoDB's per-request limit for `BatchWriteItem`.
pub const DYNAMODB_BATCH_LIMIT: usize = 25;

/// A DynamoDB item, keyed by attribute name.
pub type WriteItem = HashMap<String, AttributeValue>;

/// Status of an asynchronous job, as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Submitted,
    InProgress,
    Completed,
    CompletedWithError,
    Failed,
    StopRequested,
    Stopped,
    Unknown(String),
}

impl JobStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "SUBMITTED" => JobStatus::Submitted,
            "IN_PROGRESS" => JobStatus::InProgress,
            "COMPLETED" => JobStatus::Completed,
            "COMPLETED_WITH_ERROR" => JobStatus::CompletedWithError,
            "FAILED" => JobStatus::Failed,
            "STOP_REQUESTED" => JobStatus::StopRequested,
            "STOPPED" => JobStatus::Stopped,
            other => JobStatus::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Submitted => "SUBMITTED",
            JobStatus::InProgress => "IN_PROGRESS",
            JobStatus::Completed => "COMPLETED",
            JobStatus::CompletedWithError => "COMPLETED_WITH_ERROR",
            JobStatus::Failed => "FAILED",
            JobStatus::StopRequested => "STOP_REQUESTED",
            JobStatus::Stopped => "STOPPED",
            JobStatus::Unknown(other) => other,
        }
    }

    /// Any status whose name contains `COMPLETED`, including completion with errors.
    pub fn is_complete(&self) -> bool {
        self.as_str().contains("COMPLETED")
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, JobStatus::Failed | JobStatus::Stopped)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How often and how long to ask for a job status.
#[derive(Debug, Clone, PartialEq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// `None` polls until the job finishes.
    pub max_attempts: Option<u32>,
    /// Multiplier applied to the interval after each attempt; `1.0` keeps it fixed.
    pub backoff: f64,
    pub max_interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            max_attempts: Some(60),
            backoff: 1.0,
            max_interval: Duration::from_secs(60),
        }
    }
}

impl PollPolicy {
    /// The interval after `current`, never shorter than `current`.
    pub fn next_interval(&self, current: Duration) -> Duration {
        if self.backoff <= 1.0 {
            return current;
        }
        let ceiling = self.max_interval.max(current);
        Duration::try_from_secs_f64(current.as_secs_f64() * self.backoff)
            .map_or(ceiling, |next| next.min(ceiling))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchPolicy {
    pub chunk_size: usize,
    pub pause: Duration,
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self {
            chunk_size: DYNAMODB_BATCH_LIMIT,
            pause: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub chunks: usize,
    pub written: usize,
    pub unprocessed: Vec<WriteItem>,
}

/// An object in a bucket, as named by an S3 event notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3ObjectRef {
    pub bucket: String,
    pub key: String,
}

/// A SageMaker pipeline callback step message delivered through SQS.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PipelineMessage {
    #[serde(skip)]
    pub message_id: String,
    pub token: String,
    pub arguments: PipelineArguments,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PipelineArguments {
    pub role: String,
    #[serde(default)]
    pub vej_name: Option<String>,
    #[serde(default)]
    pub vej_arn: Option<String>,
    #[serde(default)]
    pub vej_config: Option<EnrichmentJobConfig>,
    #[serde(default)]
    pub vej_export_config: Option<ExportJobConfig>,
}

/// Reverse-geocoding vector enrichment job over a CSV file in S3.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnrichmentJobConfig {
    pub input_s3_uri: String,
    #[serde(default = "default_x_attribute")]
    pub x_attribute_name: String,
    #[serde(default = "default_y_attribute")]
    pub y_attribute_name: String,
}

fn default_x_attribute() -> String {
    "Longitude".to_string()
}

fn default_y_attribute() -> String {
    "Latitude".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportJobConfig {
    pub s3_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeospatialJobState {
    pub job_arn: String,
    pub status: String,
    pub export_status: Option<String>,
}

/// What an incoming Lambda event asks the handler to do.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    ObjectsCreated(Vec<S3ObjectRef>),
    PipelineMessages(Vec<PipelineMessage>),
    PrepareDownload { labels: Vec<String> },
    RequestUpload { file_name: String },
    ListLabels,
    JobStatus { job_arn: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
    #[serde(default)]
    pub images: Vec<String>,
}

/// An API Gateway proxy response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    pub fn json(status_code: u16, body: &serde_json::Value) -> Self {
        let headers = HashMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ]);
        Self {
            status_code,
            headers,
            body: body.to_string(),
        }
    }

    pub fn ok(body: &serde_json::Value) -> Self {
        Self::json(200, body)
    }

    pub fn error(status_code: u16, message: &str) -> Self {
        Self::json(status_code, &serde_json::json!({ "error": message }))
    }
}
