use crate::utils::error::{Result, SnippetError};
use aws_sdk_rds::Client;

pub async fn describe_db_instances(client: &Client, instance_id: Option<&str>) -> Result<()> {
    let output = client
        .describe_db_instances()
        .set_db_instance_identifier(instance_id.map(str::to_string))
        .send()
        .await
        .map_err(|e| SnippetError::service("rds", e))?;

    for instance in output.db_instances() {
        println!(
            "{:<32} {:<12} {:<16} {}",
            instance.db_instance_identifier().unwrap_or_default(),
            instance.engine().unwrap_or_default(),
            instance.db_instance_class().unwrap_or_default(),
            instance.db_instance_status().unwrap_or_default()
        );
    }
    Ok(())
}

pub async fn create_db_snapshot(client: &Client, instance_id: &str, snapshot_id: &str) -> Result<()> {
    let output = client
        .create_db_snapshot()
        .db_instance_identifier(instance_id)
        .db_snapshot_identifier(snapshot_id)
        .send()
        .await
        .map_err(|e| SnippetError::service("rds", e))?;

    if let Some(snapshot) = output.db_snapshot() {
        println!(
            "Snapshot {} is {}",
            snapshot.db_snapshot_arn().unwrap_or(snapshot_id),
            snapshot.status().unwrap_or("pending")
        );
    }
    Ok(())
}
