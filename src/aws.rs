use crate::config::settings::AwsSettings;
use aws_config::{BehaviorVersion, ConfigLoader, Region, SdkConfig};

/// Builds a config loader from the default chain, narrowed by any profile, region or
/// endpoint override.
pub fn config_loader(settings: &AwsSettings) -> ConfigLoader {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(profile) = &settings.profile {
        tracing::debug!(profile = %profile, "using AWS profile");
        loader = loader.profile_name(profile);
    }
    if let Some(region) = &settings.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint_url) = &settings.endpoint_url {
        tracing::debug!(endpoint_url = %endpoint_url, "overriding AWS endpoint");
        loader = loader.endpoint_url(endpoint_url);
    }
    loader
}

pub async fn load_sdk_config(settings: &AwsSettings) -> SdkConfig {
    config_loader(settings).load().await
}

/// S3 needs path-style addressing when pointed at a local endpoint.
pub fn s3_client(sdk_config: &SdkConfig) -> aws_sdk_s3::Client {
    let config = aws_sdk_s3::config::Builder::from(sdk_config)
        .force_path_style(sdk_config.endpoint_url().is_some())
        .build();
    aws_sdk_s3::Client::from_conf(config)
}
