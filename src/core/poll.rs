use crate::core::{JobStatus, JobStatusSource, PollPolicy};
use crate::utils::error::{Result, SnippetError};

/// Asks `source` for the job's status until it reports completion.
///
/// Sleeps between attempts following `policy`. A failed or stopped job, or running out of
/// attempts, ends the wait with an error.
pub async fn wait_for_job<S>(source: &S, job_id: &str, policy: &PollPolicy) -> Result<JobStatus>
where
    S: JobStatusSource + ?Sized,
{
    let mut interval = policy.interval;
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;
        let status = source.job_status(job_id).await?;
        tracing::debug!(job_id, attempt, %status, "polled job status");

        if status.is_complete() {
            tracing::info!(job_id, attempts = attempt, %status, "job finished");
            return Ok(status);
        }
        if status.is_failed() {
            return Err(SnippetError::JobFailed {
                job_id: job_id.to_string(),
                status: status.to_string(),
            });
        }
        if policy.max_attempts.is_some_and(|max| attempt >= max) {
            return Err(SnippetError::Timeout {
                job_id: job_id.to_string(),
                attempts: attempt,
            });
        }

        tokio::time::sleep(interval).await;
        interval = policy.next_interval(interval);
    }
}
