use crate::core::{LabelDetector, S3ObjectRef};
use crate::utils::error::{Result, SnippetError};
use async_trait::async_trait;
use aws_sdk_rekognition::types::{Image, S3Object};
use aws_sdk_rekognition::Client;

#[derive(Debug, Clone)]
pub struct RekognitionLabels {
    client: Client,
}

impl RekognitionLabels {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LabelDetector for RekognitionLabels {
    async fn detect_labels(&self, image: &S3ObjectRef, max_labels: i32) -> Result<Vec<String>> {
        let s3_object = S3Object::builder()
            .bucket(&image.bucket)
            .name(&image.key)
            .build();
        let output = self
            .client
            .detect_labels()
            .image(Image::builder().s3_object(s3_object).build())
            .max_labels(max_labels)
            .send()
            .await
            .map_err(|e| SnippetError::service("rekognition", e))?;

        Ok(output
            .labels()
            .iter()
            .filter_map(|label| label.name())
            .map(str::to_string)
            .collect())
    }
}
