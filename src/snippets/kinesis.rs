use crate::utils::error::{Result, SnippetError};
use aws_sdk_kinesis::primitives::Blob;
use aws_sdk_kinesis::Client;

pub async fn list_streams(client: &Client) -> Result<()> {
    let output = client
        .list_streams()
        .send()
        .await
        .map_err(|e| SnippetError::service("kinesis", e))?;

    println!("Streams:");
    for name in output.stream_names() {
        println!("  {}", name);
    }
    println!("Found {} stream(s)", output.stream_names().len());
    Ok(())
}

pub async fn put_record(
    client: &Client,
    stream_name: &str,
    partition_key: &str,
    data: &str,
) -> Result<()> {
    let output = client
        .put_record()
        .stream_name(stream_name)
        .partition_key(partition_key)
        .data(Blob::new(data.as_bytes()))
        .send()
        .await
        .map_err(|e| SnippetError::service("kinesis", e))?;

    println!(
        "Put record into shard {} with sequence number {}",
        output.shard_id(),
        output.sequence_number()
    );
    Ok(())
}
