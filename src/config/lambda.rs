use crate::utils::error::{Result, SnippetError};
use crate::utils::validation::{self, Validate};
use std::env;

/// Resources the photo asset actions work against, read from the function's environment.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoAssetConfig {
    pub storage_bucket: String,
    pub working_bucket: String,
    pub labels_table: String,
    pub notification_topic: String,
}

impl PhotoAssetConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| SnippetError::ConfigError {
                    message: format!("{} environment variable is required", name),
                })
        };

        Ok(Self {
            storage_bucket: required("STORAGE_BUCKET_NAME")?,
            working_bucket: required("WORKING_BUCKET_NAME")?,
            labels_table: required("LABELS_TABLE_NAME")?,
            notification_topic: required("NOTIFICATION_TOPIC")?,
        })
    }
}

impl Validate for PhotoAssetConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_s3_bucket_name("STORAGE_BUCKET_NAME", &self.storage_bucket)?;
        validation::validate_s3_bucket_name("WORKING_BUCKET_NAME", &self.working_bucket)?;
        validation::validate_non_empty_string("LABELS_TABLE_NAME", &self.labels_table)?;
        if !self.notification_topic.starts_with("arn:") {
            return Err(SnippetError::InvalidConfigValueError {
                field: "NOTIFICATION_TOPIC".to_string(),
                value: self.notification_topic.clone(),
                reason: "expected an SNS topic ARN".to_string(),
            });
        }
        Ok(())
    }
}
