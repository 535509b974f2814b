use crate::core::{BatchPolicy, PollPolicy, DYNAMODB_BATCH_LIMIT};
use crate::utils::error::{Result, SnippetError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const MAX_POLL_INTERVAL_SECONDS: u64 = 3600;

/// Optional settings file shared by every snippet run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub aws: AwsSettings,
    pub polling: PollingSettings,
    pub batch: BatchSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub profile: Option<String>,
    /// Sends every request to this endpoint instead, e.g. LocalStack.
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingSettings {
    pub interval_seconds: u64,
    pub max_attempts: Option<u32>,
    pub backoff: f64,
    pub max_interval_seconds: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        let policy = PollPolicy::default();
        Self {
            interval_seconds: policy.interval.as_secs(),
            max_attempts: policy.max_attempts,
            backoff: policy.backoff,
            max_interval_seconds: policy.max_interval.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchSettings {
    pub chunk_size: usize,
    pub pause_millis: u64,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            chunk_size: DYNAMODB_BATCH_LIMIT,
            pause_millis: 1000,
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SnippetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads the file when one is given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading settings");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SnippetError::config(e.to_string()))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Command-line values win over the file.
    pub fn with_overrides(
        mut self,
        region: Option<String>,
        profile: Option<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        if region.is_some() {
            self.aws.region = region;
        }
        if profile.is_some() {
            self.aws.profile = profile;
        }
        if endpoint_url.is_some() {
            self.aws.endpoint_url = endpoint_url;
        }
        self
    }

    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_secs(self.polling.interval_seconds),
            // 0 polls until the job finishes
            max_attempts: self.polling.max_attempts.filter(|&max| max > 0),
            backoff: self.polling.backoff,
            max_interval: Duration::from_secs(self.polling.max_interval_seconds),
        }
    }

    pub fn batch_policy(&self) -> BatchPolicy {
        BatchPolicy {
            chunk_size: self.batch.chunk_size,
            pause: Duration::from_millis(self.batch.pause_millis),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(region) = &self.aws.region {
            validation::validate_aws_region("aws.region", region)?;
        }
        if let Some(profile) = &self.aws.profile {
            validation::validate_non_empty_string("aws.profile", profile)?;
        }
        if let Some(endpoint_url) = &self.aws.endpoint_url {
            validation::validate_url("aws.endpoint_url", endpoint_url)?;
        }

        validation::validate_range(
            "polling.interval_seconds",
            self.polling.interval_seconds,
            1,
            MAX_POLL_INTERVAL_SECONDS,
        )?;
        // ceiling >= starting interval, so backoff never sleeps zero
        validation::validate_range(
            "polling.max_interval_seconds",
            self.polling.max_interval_seconds,
            self.polling.interval_seconds,
            MAX_POLL_INTERVAL_SECONDS,
        )?;
        validation::validate_range("polling.backoff", self.polling.backoff, 1.0, 10.0)?;

        validation::validate_range(
            "batch.chunk_size",
            self.batch.chunk_size,
            1,
            DYNAMODB_BATCH_LIMIT,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_settings() {
        let toml_content = r#"
[aws]
region = "us-west-2"
profile = "demo"

[polling]
interval_seconds = 2
max_attempts = 10
backoff = 1.5

[batch]
chunk_size = 10
pause_millis = 250
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(settings.aws.region.as_deref(), Some("us-west-2"));
        assert_eq!(settings.poll_policy().interval, Duration::from_secs(2));
        assert_eq!(settings.poll_policy().max_attempts, Some(10));
        assert_eq!(settings.batch_policy().chunk_size, 10);
        assert_eq!(settings.batch_policy().pause, Duration::from_millis(250));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.batch.chunk_size, 25);
        assert_eq!(settings.poll_policy(), PollPolicy::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("AWS_HOWTO_TEST_ENDPOINT", "http://localhost:4566");

        let toml_content = r#"
[aws]
endpoint_url = "${AWS_HOWTO_TEST_ENDPOINT}"
"#;

        let settings = Settings::from_toml_str(toml_content).unwrap();
        assert_eq!(
            settings.aws.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );

        std::env::remove_var("AWS_HOWTO_TEST_ENDPOINT");
    }

    #[test]
    fn test_validation_rejects_oversized_batches() {
        let settings = Settings::from_toml_str("[batch]\nchunk_size = 30\n").unwrap();
        assert!(settings.validate().is_err());

        let settings = Settings::from_toml_str("[aws]\nendpoint_url = \"not a url\"\n").unwrap();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_checks_poll_interval_ceiling() {
        let settings =
            Settings::from_toml_str("[polling]\nbackoff = 2.0\nmax_interval_seconds = 0\n").unwrap();
        assert!(matches!(
            settings.validate(),
            Err(SnippetError::InvalidConfigValueError { ref field, .. })
                if field == "polling.max_interval_seconds"
        ));

        let settings =
            Settings::from_toml_str("[polling]\nmax_interval_seconds = 99999999999\n").unwrap();
        assert!(settings.validate().is_err());

        let settings = Settings::from_toml_str(
            "[polling]\ninterval_seconds = 10\nbackoff = 2.0\nmax_interval_seconds = 120\n",
        )
        .unwrap();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_max_attempts_polls_without_limit() {
        let settings = Settings::from_toml_str("[polling]\nmax_attempts = 0\n").unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.poll_policy().max_attempts, None);

        let defaults = Settings::default();
        assert_eq!(defaults.poll_policy().max_attempts, Some(60));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let settings = Settings::from_toml_str("[aws]\nregion = \"eu-west-1\"\nprofile = \"a\"\n")
            .unwrap()
            .with_overrides(Some("us-east-1".to_string()), None, None);
        assert_eq!(settings.aws.region.as_deref(), Some("us-east-1"));
        assert_eq!(settings.aws.profile.as_deref(), Some("a"));
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[polling]\nmax_attempts = 3\n")
            .unwrap();

        let settings = Settings::load(Some(temp_file.path())).unwrap();
        assert_eq!(settings.polling.max_attempts, Some(3));
    }
}
