use crate::core::{GeospatialJobs, InboundEvent, PipelineCallback, PipelineMessage};
use crate::utils::error::{Result, SnippetError};
use serde_json::json;

/// Output parameter name the pipeline reads the job ARN from.
pub const JOB_ARN_OUTPUT: &str = "vej_arn";

/// Callback-step handler for a SageMaker pipeline driving vector enrichment jobs.
pub struct PipelineCallbacks<C, G> {
    callback: C,
    jobs: G,
}

impl<C, G> PipelineCallbacks<C, G>
where
    C: PipelineCallback,
    G: GeospatialJobs,
{
    pub fn new(callback: C, jobs: G) -> Self {
        Self { callback, jobs }
    }

    pub async fn handle(&self, event: InboundEvent) -> Result<serde_json::Value> {
        match event {
            InboundEvent::PipelineMessages(messages) => {
                let mut results = Vec::with_capacity(messages.len());
                let mut failures = Vec::new();
                for message in &messages {
                    match self.process_message(message).await {
                        Ok(result) => results.push(result),
                        Err(err) => {
                            // Only this message goes back to the queue.
                            tracing::error!(
                                message_id = %message.message_id,
                                error = %err,
                                "could not report step outcome"
                            );
                            failures.push(json!({ "itemIdentifier": message.message_id }));
                        }
                    }
                }
                Ok(json!({ "processed": results, "batchItemFailures": failures }))
            }
            InboundEvent::JobStatus { job_arn } => {
                let state = self.jobs.job_state(&job_arn).await?;
                Ok(serde_json::to_value(state)?)
            }
            other => Err(SnippetError::invalid_event(format!(
                "not a pipeline event: {:?}",
                other
            ))),
        }
    }

    /// Runs the job action one message asks for and reports the outcome back to the pipeline.
    ///
    /// A failed action is reported as a failed step rather than as an error; only a failure
    /// to reach the pipeline itself is returned, and `handle` lists that message in
    /// `batchItemFailures` so SQS redelivers it alone.
    pub async fn process_message(&self, message: &PipelineMessage) -> Result<serde_json::Value> {
        tracing::info!(message_id = %message.message_id, "processing pipeline callback");
        match self.run_action(message).await {
            Ok(job_arn) => {
                let outputs = [(JOB_ARN_OUTPUT.to_string(), job_arn.clone())];
                self.callback.step_succeeded(&message.token, &outputs).await?;
                Ok(json!({ "message_id": message.message_id, "job_arn": job_arn }))
            }
            Err(err) => {
                tracing::error!(message_id = %message.message_id, error = %err, "pipeline step failed");
                self.callback
                    .step_failed(&message.token, &err.to_string())
                    .await?;
                Ok(json!({ "message_id": message.message_id, "error": err.to_string() }))
            }
        }
    }

    async fn run_action(&self, message: &PipelineMessage) -> Result<String> {
        let arguments = &message.arguments;

        if let Some(export) = &arguments.vej_export_config {
            let job_arn = arguments.vej_arn.as_deref().ok_or_else(|| {
                SnippetError::invalid_event("vej_export_config requires vej_arn")
            })?;
            return self
                .jobs
                .export_enrichment_job(job_arn, &arguments.role, export)
                .await;
        }

        if let Some(config) = &arguments.vej_config {
            let name = arguments
                .vej_name
                .clone()
                .unwrap_or_else(|| format!("vej-{}", chrono::Utc::now().format("%Y%m%d%H%M%S")));
            return self
                .jobs
                .start_enrichment_job(&name, &arguments.role, config)
                .await;
        }

        Err(SnippetError::invalid_event(
            "arguments carry neither vej_config nor vej_export_config",
        ))
    }
}
