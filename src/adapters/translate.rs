use crate::core::{JobStatus, JobStatusSource};
use crate::utils::error::{Result, SnippetError};
use async_trait::async_trait;
use aws_sdk_translate::Client;

/// Reads batch translation job status through `DescribeTextTranslationJob`.
#[derive(Debug, Clone)]
pub struct TranslateJobStatus {
    client: Client,
}

impl TranslateJobStatus {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobStatusSource for TranslateJobStatus {
    async fn job_status(&self, job_id: &str) -> Result<JobStatus> {
        let output = self
            .client
            .describe_text_translation_job()
            .job_id(job_id)
            .send()
            .await
            .map_err(|e| SnippetError::service("translate", e))?;

        let status = output
            .text_translation_job_properties()
            .and_then(|properties| properties.job_status())
            .map(|status| status.as_str())
            .unwrap_or("UNKNOWN");
        Ok(JobStatus::parse(status))
    }
}
