use crate::adapters::DynamoBatchWriter;
use crate::core::{batch, items, BatchPolicy, BatchReport, WriteItem};
use crate::utils::error::{Result, SnippetError};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::path::Path;

pub async fn list_tables(client: &Client) -> Result<()> {
    let mut start_table = None;
    let mut count = 0;

    loop {
        let output = client
            .list_tables()
            .set_exclusive_start_table_name(start_table)
            .send()
            .await
            .map_err(|e| SnippetError::service("dynamodb", e))?;

        for name in output.table_names() {
            println!("  {}", name);
            count += 1;
        }
        match output.last_evaluated_table_name {
            Some(name) => start_table = Some(name),
            None => break,
        }
    }
    println!("Found {} table(s)", count);
    Ok(())
}

/// Puts one item given as a JSON object.
pub async fn put_item(client: &Client, table: &str, item_json: &str) -> Result<()> {
    let value: serde_json::Value = serde_json::from_str(item_json)?;
    if !value.is_object() {
        return Err(SnippetError::InvalidConfigValueError {
            field: "item".to_string(),
            value: item_json.to_string(),
            reason: "expected a JSON object".to_string(),
        });
    }
    let item: WriteItem = serde_dynamo::to_item(value)?;

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item))
        .send()
        .await
        .map_err(|e| SnippetError::service("dynamodb", e))?;
    println!("Added item to {}", table);
    Ok(())
}

pub async fn get_item(client: &Client, table: &str, key_name: &str, key_value: &str) -> Result<()> {
    let output = client
        .get_item()
        .table_name(table)
        .key(key_name, AttributeValue::S(key_value.to_string()))
        .send()
        .await
        .map_err(|e| SnippetError::service("dynamodb", e))?;

    match output.item {
        Some(item) => {
            let value: serde_json::Value = serde_dynamo::from_item(item)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        None => println!("No item with {} = {}", key_name, key_value),
    }
    Ok(())
}

pub async fn delete_item(client: &Client, table: &str, key_name: &str, key_value: &str) -> Result<()> {
    client
        .delete_item()
        .table_name(table)
        .key(key_name, AttributeValue::S(key_value.to_string()))
        .send()
        .await
        .map_err(|e| SnippetError::service("dynamodb", e))?;
    println!("Deleted item {} = {} from {}", key_name, key_value, table);
    Ok(())
}

/// Loads a JSON or CSV file into the table, 25 items per request.
pub async fn load_items(
    client: &Client,
    table: &str,
    path: &Path,
    policy: &BatchPolicy,
) -> Result<BatchReport> {
    let items = items::load_items(path)?;
    println!("Loading {} item(s) into {}", items.len(), table);

    let writer = DynamoBatchWriter::new(client.clone());
    let report = batch::write_in_batches(&writer, table, items, policy).await?;

    println!(
        "Wrote {} item(s) in {} request(s)",
        report.written, report.chunks
    );
    if !report.unprocessed.is_empty() {
        println!("{} item(s) were left unprocessed", report.unprocessed.len());
    }
    Ok(report)
}
