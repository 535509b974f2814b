use crate::core::{
    ApiResponse, InboundEvent, LabelDetector, LabelStore, Notifier, ObjectStore, S3ObjectRef,
};
use crate::utils::error::{ErrorCategory, Result, SnippetError};
use serde_json::json;
use std::io::{Cursor, Write};
use std::time::Duration;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const MAX_LABELS_PER_IMAGE: i32 = 10;
const UPLOAD_URL_TTL: Duration = Duration::from_secs(300);
const DOWNLOAD_URL_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Handlers behind the photo asset manager: label detection on upload, label listing,
/// upload URLs and zipped downloads by label.
pub struct PhotoAssets<D, L, O, N> {
    detector: D,
    labels: L,
    objects: O,
    notifier: N,
    storage_bucket: String,
    working_bucket: String,
}

impl<D, L, O, N> PhotoAssets<D, L, O, N>
where
    D: LabelDetector,
    L: LabelStore,
    O: ObjectStore,
    N: Notifier,
{
    pub fn new(
        detector: D,
        labels: L,
        objects: O,
        notifier: N,
        storage_bucket: String,
        working_bucket: String,
    ) -> Self {
        Self {
            detector,
            labels,
            objects,
            notifier,
            storage_bucket,
            working_bucket,
        }
    }

    /// Detects labels for each new image and records them. Returns how many labels were stored.
    pub async fn detect_labels(&self, images: &[S3ObjectRef]) -> Result<usize> {
        let mut stored = 0;
        for image in images {
            let labels = self
                .detector
                .detect_labels(image, MAX_LABELS_PER_IMAGE)
                .await?;
            tracing::info!(key = %image.key, count = labels.len(), "detected labels");
            for label in &labels {
                self.labels.add_image_label(label, &image.key).await?;
                stored += 1;
            }
        }
        Ok(stored)
    }

    pub async fn list_labels(&self) -> Result<ApiResponse> {
        let labels = self.labels.list_labels().await?;
        let body: serde_json::Map<String, serde_json::Value> = labels
            .into_iter()
            .map(|label| (label.label, json!({ "count": label.count })))
            .collect();
        Ok(ApiResponse::ok(&json!({ "labels": body })))
    }

    pub async fn request_upload(&self, file_name: &str) -> Result<ApiResponse> {
        let file_name = file_name.rsplit('/').next().unwrap_or(file_name).trim();
        if file_name.is_empty() {
            return Err(SnippetError::invalid_event("file_name is empty"));
        }
        let key = format!("{}-{}", uuid::Uuid::new_v4(), file_name);
        let url = self
            .objects
            .presign_put(&self.storage_bucket, &key, UPLOAD_URL_TTL)
            .await?;
        Ok(ApiResponse::ok(&json!({ "url": url })))
    }

    /// Zips every image carrying one of `labels`, stores the archive in the working bucket
    /// and publishes a download link.
    pub async fn prepare_download(&self, labels: &[String]) -> Result<ApiResponse> {
        let mut keys = self.labels.images_for_labels(labels).await?;
        keys.sort();
        keys.dedup();
        if keys.is_empty() {
            return Ok(ApiResponse::error(404, "no images match the requested labels"));
        }

        // Build the archive in memory
        let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
        for key in &keys {
            let data = self.objects.get_object(&self.storage_bucket, key).await?;
            archive.start_file(key.as_str(), SimpleFileOptions::default())?;
            archive.write_all(&data)?;
        }
        let archive = archive.finish()?.into_inner();

        let archive_key = format!(
            "download-{}.zip",
            chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ")
        );
        // Store it and hand out a link
        self.objects
            .put_object(&self.working_bucket, &archive_key, archive, "application/zip")
            .await?;
        let url = self
            .objects
            .presign_get(&self.working_bucket, &archive_key, DOWNLOAD_URL_TTL)
            .await?;
        self.notifier
            .publish(
                "Your images are ready",
                &format!("Download your images here: {}", url),
            )
            .await?;

        tracing::info!(archive = %archive_key, images = keys.len(), "prepared download");
        Ok(ApiResponse::ok(&json!({ "url": url, "images": keys.len() })))
    }

    /// Runs the action for a photo asset event. API actions always answer with a response,
    /// failures included; label detection errors fail the invocation so S3 retries it.
    pub async fn handle(&self, event: InboundEvent) -> Result<serde_json::Value> {
        let response = match event {
            InboundEvent::ObjectsCreated(images) => {
                let stored = self.detect_labels(&images).await?;
                return Ok(json!({ "images": images.len(), "labels": stored }));
            }
            InboundEvent::ListLabels => self.list_labels().await,
            InboundEvent::RequestUpload { file_name } => self.request_upload(&file_name).await,
            InboundEvent::PrepareDownload { labels } => self.prepare_download(&labels).await,
            other => {
                return Err(SnippetError::invalid_event(format!(
                    "not a photo asset event: {:?}",
                    other
                )))
            }
        };

        let response = response.unwrap_or_else(|err| {
            tracing::error!(error = %err, "photo asset action failed");
            Self::error_response(&err)
        });
        Ok(serde_json::to_value(response)?)
    }

    /// Maps an action failure to an error response instead of failing the invocation.
    pub fn error_response(err: &SnippetError) -> ApiResponse {
        let status = match err.category() {
            ErrorCategory::Input => 400,
            _ => 500,
        };
        ApiResponse::error(status, &err.to_string())
    }
}
