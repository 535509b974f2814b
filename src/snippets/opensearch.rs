use crate::utils::error::{Result, SnippetError};
use aws_sdk_opensearch::types::{ClusterConfig, EbsOptions, OpenSearchPartitionInstanceType};
use aws_sdk_opensearch::Client;

/// Creates a single-node development domain.
pub async fn create_domain(client: &Client, domain_name: &str, engine_version: &str) -> Result<()> {
    let cluster = ClusterConfig::builder()
        .instance_type(OpenSearchPartitionInstanceType::T3SmallSearch)
        .instance_count(1)
        .build();
    let ebs = EbsOptions::builder().ebs_enabled(true).volume_size(10).build();

    let output = client
        .create_domain()
        .domain_name(domain_name)
        .engine_version(engine_version)
        .cluster_config(cluster)
        .ebs_options(ebs)
        .send()
        .await
        .map_err(|e| SnippetError::service("opensearch", e))?;

    match output.domain_status() {
        Some(status) => println!("Domain ARN: {}", status.arn()),
        None => println!("Domain {} requested", domain_name),
    }
    Ok(())
}

pub async fn list_domain_names(client: &Client) -> Result<()> {
    let output = client
        .list_domain_names()
        .send()
        .await
        .map_err(|e| SnippetError::service("opensearch", e))?;

    for domain in output.domain_names() {
        println!(
            "{} ({})",
            domain.domain_name().unwrap_or_default(),
            domain.engine_type().map(|e| e.as_str()).unwrap_or("unknown")
        );
    }
    Ok(())
}

pub async fn delete_domain(client: &Client, domain_name: &str) -> Result<()> {
    client
        .delete_domain()
        .domain_name(domain_name)
        .send()
        .await
        .map_err(|e| SnippetError::service("opensearch", e))?;
    println!("Domain {} is being deleted", domain_name);
    Ok(())
}
