use crate::core::Notifier;
use crate::utils::error::{Result, SnippetError};
use async_trait::async_trait;
use aws_sdk_sns::Client;

/// Publishes to one topic.
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: Client,
    topic_arn: String,
}

impl SnsNotifier {
    pub fn new(client: Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<()> {
        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| SnippetError::service("sns", e))?;
        tracing::debug!(message_id = ?output.message_id(), "published notification");
        Ok(())
    }
}
