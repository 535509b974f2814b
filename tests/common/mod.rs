#![allow(dead_code)]

use async_trait::async_trait;
use aws_howto::core::{
    EnrichmentJobConfig, ExportJobConfig, GeospatialJobState, GeospatialJobs, LabelCount,
    LabelDetector, LabelStore, Notifier, ObjectStore, PipelineCallback, S3ObjectRef,
};
use aws_howto::{Result, SnippetError};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Labels per image key.
#[derive(Clone, Default)]
pub struct FakeDetector {
    pub labels: HashMap<String, Vec<String>>,
}

#[async_trait]
impl LabelDetector for FakeDetector {
    async fn detect_labels(&self, image: &S3ObjectRef, max_labels: i32) -> Result<Vec<String>> {
        let mut labels = self.labels.get(&image.key).cloned().unwrap_or_default();
        labels.truncate(max_labels as usize);
        Ok(labels)
    }
}

#[derive(Clone, Default)]
pub struct FakeLabelStore {
    pub labels: Arc<Mutex<BTreeMap<String, LabelCount>>>,
}

impl FakeLabelStore {
    pub fn get(&self, label: &str) -> Option<LabelCount> {
        self.labels.lock().unwrap().get(label).cloned()
    }
}

#[async_trait]
impl LabelStore for FakeLabelStore {
    async fn add_image_label(&self, label: &str, image_key: &str) -> Result<()> {
        let mut labels = self.labels.lock().unwrap();
        let entry = labels.entry(label.to_string()).or_insert_with(|| LabelCount {
            label: label.to_string(),
            count: 0,
            images: Vec::new(),
        });
        entry.count += 1;
        if !entry.images.iter().any(|key| key == image_key) {
            entry.images.push(image_key.to_string());
        }
        Ok(())
    }

    async fn list_labels(&self) -> Result<Vec<LabelCount>> {
        Ok(self.labels.lock().unwrap().values().cloned().collect())
    }

    async fn images_for_labels(&self, labels: &[String]) -> Result<Vec<String>> {
        let stored = self.labels.lock().unwrap();
        Ok(labels
            .iter()
            .filter_map(|label| stored.get(label))
            .flat_map(|label| label.images.clone())
            .collect())
    }
}

/// Objects keyed by `bucket/key`; presigned URLs are fake but deterministic.
#[derive(Clone, Default)]
pub struct FakeObjectStore {
    pub objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    pub presigned: Arc<Mutex<Vec<(String, String, Duration)>>>,
}

impl FakeObjectStore {
    pub fn insert(&self, bucket: &str, key: &str, data: &[u8]) {
        self.objects
            .lock()
            .unwrap()
            .insert(format!("{}/{}", bucket, key), data.to_vec());
    }

    pub fn keys_in(&self, bucket: &str) -> Vec<String> {
        let prefix = format!("{}/", bucket);
        let mut keys: Vec<String> = self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix).map(str::to_string))
            .collect();
        keys.sort();
        keys
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(&format!("{}/{}", bucket, key))
            .cloned()
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self.object(bucket, key).ok_or_else(|| SnippetError::ServiceError {
            service: "s3".to_string(),
            code: Some("NoSuchKey".to_string()),
            message: format!("{} not found", key),
        })
    }

    async fn put_object(&self, bucket: &str, key: &str, data: Vec<u8>, _content_type: &str) -> Result<()> {
        self.insert(bucket, key, &data);
        Ok(())
    }

    async fn presign_get(&self, bucket: &str, key: &str, expires_in: Duration) -> Result<String> {
        self.presigned
            .lock()
            .unwrap()
            .push(("GET".to_string(), format!("{}/{}", bucket, key), expires_in));
        Ok(format!("https://{}.s3.amazonaws.com/{}?X-Amz-Signature=get", bucket, key))
    }

    async fn presign_put(&self, bucket: &str, key: &str, expires_in: Duration) -> Result<String> {
        self.presigned
            .lock()
            .unwrap()
            .push(("PUT".to_string(), format!("{}/{}", bucket, key), expires_in));
        Ok(format!("https://{}.s3.amazonaws.com/{}?X-Amz-Signature=put", bucket, key))
    }
}

#[derive(Clone, Default)]
pub struct FakeNotifier {
    pub published: Arc<Mutex<Vec<(String, String)>>>,
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<()> {
        self.published
            .lock()
            .unwrap()
            .push((subject.to_string(), message.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Succeeded(String, Vec<(String, String)>),
    Failed(String, String),
}

/// Records outcomes; tokens in `unreachable` fail as if the pipeline rejected the call.
#[derive(Clone, Default)]
pub struct FakeCallback {
    pub outcomes: Arc<Mutex<Vec<StepOutcome>>>,
    pub unreachable: Vec<String>,
}

impl FakeCallback {
    fn check_reachable(&self, token: &str) -> Result<()> {
        if self.unreachable.iter().any(|t| t == token) {
            return Err(SnippetError::ServiceError {
                service: "sagemaker".to_string(),
                code: Some("ResourceNotFound".to_string()),
                message: format!("callback token {} expired", token),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PipelineCallback for FakeCallback {
    async fn step_succeeded(&self, token: &str, outputs: &[(String, String)]) -> Result<()> {
        self.check_reachable(token)?;
        self.outcomes
            .lock()
            .unwrap()
            .push(StepOutcome::Succeeded(token.to_string(), outputs.to_vec()));
        Ok(())
    }

    async fn step_failed(&self, token: &str, reason: &str) -> Result<()> {
        self.check_reachable(token)?;
        self.outcomes
            .lock()
            .unwrap()
            .push(StepOutcome::Failed(token.to_string(), reason.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobCall {
    Start { name: String, role: String, input: String },
    Export { arn: String, role: String, destination: String },
}

#[derive(Clone, Default)]
pub struct FakeJobs {
    pub calls: Arc<Mutex<Vec<JobCall>>>,
    pub fail_start: bool,
}

#[async_trait]
impl GeospatialJobs for FakeJobs {
    async fn start_enrichment_job(
        &self,
        name: &str,
        role_arn: &str,
        config: &EnrichmentJobConfig,
    ) -> Result<String> {
        if self.fail_start {
            return Err(SnippetError::ServiceError {
                service: "sagemaker-geospatial".to_string(),
                code: Some("ValidationException".to_string()),
                message: "input file is not a CSV".to_string(),
            });
        }
        self.calls.lock().unwrap().push(JobCall::Start {
            name: name.to_string(),
            role: role_arn.to_string(),
            input: config.input_s3_uri.clone(),
        });
        Ok(format!("arn:aws:sagemaker-geospatial:us-west-2:123456789012:vector-enrichment-job/{}", name))
    }

    async fn export_enrichment_job(
        &self,
        job_arn: &str,
        role_arn: &str,
        config: &ExportJobConfig,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(JobCall::Export {
            arn: job_arn.to_string(),
            role: role_arn.to_string(),
            destination: config.s3_uri.clone(),
        });
        Ok(job_arn.to_string())
    }

    async fn job_state(&self, job_arn: &str) -> Result<GeospatialJobState> {
        Ok(GeospatialJobState {
            job_arn: job_arn.to_string(),
            status: "COMPLETED".to_string(),
            export_status: Some("IN_PROGRESS".to_string()),
        })
    }
}
