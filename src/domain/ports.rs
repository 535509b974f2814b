use crate::domain::model::{
    EnrichmentJobConfig, ExportJobConfig, GeospatialJobState, JobStatus, LabelCount, S3ObjectRef,
    WriteItem,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait JobStatusSource: Send + Sync {
    async fn job_status(&self, job_id: &str) -> Result<JobStatus>;
}

#[async_trait]
pub trait BatchWriter: Send + Sync {
    /// Writes one batch and returns the items the service left unprocessed.
    async fn write_batch(&self, table: &str, items: Vec<WriteItem>) -> Result<Vec<WriteItem>>;
}

#[async_trait]
pub trait LabelDetector: Send + Sync {
    async fn detect_labels(&self, image: &S3ObjectRef, max_labels: i32) -> Result<Vec<String>>;
}

#[async_trait]
pub trait LabelStore: Send + Sync {
    /// Increments the label's count and records the image under it.
    async fn add_image_label(&self, label: &str, image_key: &str) -> Result<()>;
    async fn list_labels(&self) -> Result<Vec<LabelCount>>;
    async fn images_for_labels(&self, labels: &[String]) -> Result<Vec<String>>;
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;
    async fn presign_get(&self, bucket: &str, key: &str, expires_in: Duration) -> Result<String>;
    async fn presign_put(&self, bucket: &str, key: &str, expires_in: Duration) -> Result<String>;
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, subject: &str, message: &str) -> Result<()>;
}

#[async_trait]
pub trait PipelineCallback: Send + Sync {
    async fn step_succeeded(&self, token: &str, outputs: &[(String, String)]) -> Result<()>;
    async fn step_failed(&self, token: &str, reason: &str) -> Result<()>;
}

#[async_trait]
pub trait GeospatialJobs: Send + Sync {
    /// Starts a vector enrichment job and returns its ARN.
    async fn start_enrichment_job(
        &self,
        name: &str,
        role_arn: &str,
        config: &EnrichmentJobConfig,
    ) -> Result<String>;
    /// Exports a finished job's results and returns the job ARN.
    async fn export_enrichment_job(
        &self,
        job_arn: &str,
        role_arn: &str,
        config: &ExportJobConfig,
    ) -> Result<String>;
    async fn job_state(&self, job_arn: &str) -> Result<GeospatialJobState>;
}
