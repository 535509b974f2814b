//! Real-time and batch translation with Amazon Translate.

use crate::adapters::TranslateJobStatus;
use crate::core::{poll, JobStatus, PollPolicy};
use crate::utils::error::{Result, SnippetError};
use aws_sdk_translate::types::{InputDataConfig, OutputDataConfig};
use aws_sdk_translate::Client;

pub async fn translate_text(
    client: &Client,
    text: &str,
    source_language_code: &str,
    target_language_code: &str,
) -> Result<()> {
    let output = client
        .translate_text()
        .text(text)
        .source_language_code(source_language_code)
        .target_language_code(target_language_code)
        .send()
        .await
        .map_err(|e| SnippetError::service("translate", e))?;

    println!("{}", output.translated_text());
    Ok(())
}

/// Documents in S3 to translate in one batch job.
#[derive(Debug, Clone)]
pub struct TranslationJobRequest {
    pub job_name: String,
    pub input_s3_uri: String,
    pub output_s3_uri: String,
    pub content_type: String,
    pub data_access_role_arn: String,
    pub source_language_code: String,
    pub target_language_codes: Vec<String>,
}

/// Starts a batch translation job and returns its id.
pub async fn start_translation_job(client: &Client, request: &TranslationJobRequest) -> Result<String> {
    let input = InputDataConfig::builder()
        .s3_uri(&request.input_s3_uri)
        .content_type(&request.content_type)
        .build()?;
    let output_config = OutputDataConfig::builder()
        .s3_uri(&request.output_s3_uri)
        .build()?;

    let output = client
        .start_text_translation_job()
        .job_name(&request.job_name)
        .input_data_config(input)
        .output_data_config(output_config)
        .data_access_role_arn(&request.data_access_role_arn)
        .source_language_code(&request.source_language_code)
        .set_target_language_codes(Some(request.target_language_codes.clone()))
        .send()
        .await
        .map_err(|e| SnippetError::service("translate", e))?;

    let job_id = output
        .job_id()
        .ok_or_else(|| SnippetError::ProcessingError {
            message: "StartTextTranslationJob returned no job id".to_string(),
        })?
        .to_string();
    println!(
        "Started job {} ({})",
        job_id,
        output.job_status().map(|s| s.as_str()).unwrap_or("UNKNOWN")
    );
    Ok(job_id)
}

pub async fn describe_translation_job(client: &Client, job_id: &str) -> Result<()> {
    let output = client
        .describe_text_translation_job()
        .job_id(job_id)
        .send()
        .await
        .map_err(|e| SnippetError::service("translate", e))?;

    match output.text_translation_job_properties() {
        Some(properties) => {
            println!("Job name:   {}", properties.job_name().unwrap_or_default());
            println!(
                "Status:     {}",
                properties.job_status().map(|s| s.as_str()).unwrap_or("UNKNOWN")
            );
            if let Some(message) = properties.message() {
                println!("Message:    {}", message);
            }
        }
        None => println!("No properties returned for job {}", job_id),
    }
    Ok(())
}

/// Polls the job until it reports completion.
pub async fn wait_for_translation_job(
    client: &Client,
    job_id: &str,
    policy: &PollPolicy,
) -> Result<JobStatus> {
    let source = TranslateJobStatus::new(client.clone());
    let status = poll::wait_for_job(&source, job_id, policy).await?;
    println!("Job {} finished with status {}", job_id, status);
    Ok(status)
}
