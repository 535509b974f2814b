use crate::utils::error::{Result, SnippetError};
use aws_sdk_location::types::MapConfiguration;
use aws_sdk_location::Client;

pub async fn create_map(client: &Client, map_name: &str, style: &str) -> Result<()> {
    let configuration = MapConfiguration::builder().style(style).build()?;
    let output = client
        .create_map()
        .map_name(map_name)
        .configuration(configuration)
        .send()
        .await
        .map_err(|e| SnippetError::service("location", e))?;

    println!("Created map {}", output.map_arn());
    Ok(())
}

pub async fn list_maps(client: &Client) -> Result<()> {
    let output = client
        .list_maps()
        .send()
        .await
        .map_err(|e| SnippetError::service("location", e))?;

    for entry in output.entries() {
        println!("  {}", entry.map_name());
    }
    Ok(())
}
