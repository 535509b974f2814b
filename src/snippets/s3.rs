use crate::utils::error::{Result, SnippetError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use std::path::Path;

pub async fn list_buckets(client: &Client) -> Result<()> {
    let output = client
        .list_buckets()
        .send()
        .await
        .map_err(|e| SnippetError::service("s3", e))?;

    for bucket in output.buckets() {
        println!("  {}", bucket.name().unwrap_or_default());
    }
    println!("Found {} bucket(s)", output.buckets().len());
    Ok(())
}

pub async fn list_objects(client: &Client, bucket: &str, prefix: Option<&str>) -> Result<()> {
    let mut continuation_token = None;
    let mut count = 0;

    loop {
        let output = client
            .list_objects_v2()
            .bucket(bucket)
            .set_prefix(prefix.map(str::to_string))
            .set_continuation_token(continuation_token)
            .send()
            .await
            .map_err(|e| SnippetError::service("s3", e))?;

        for object in output.contents() {
            println!(
                "{:>12}  {}",
                object.size().unwrap_or_default(),
                object.key().unwrap_or_default()
            );
            count += 1;
        }

        if output.is_truncated().unwrap_or(false) {
            continuation_token = output.next_continuation_token;
        } else {
            break;
        }
        if continuation_token.is_none() {
            break;
        }
    }
    println!("Found {} object(s) in {}", count, bucket);
    Ok(())
}

pub async fn upload_object(client: &Client, bucket: &str, key: &str, path: &Path) -> Result<()> {
    let body = ByteStream::from_path(path).await?;
    let output = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(body)
        .send()
        .await
        .map_err(|e| SnippetError::service("s3", e))?;

    println!(
        "Uploaded {} to s3://{}/{} (etag {})",
        path.display(),
        bucket,
        key,
        output.e_tag().unwrap_or("-")
    );
    Ok(())
}

pub async fn download_object(client: &Client, bucket: &str, key: &str, path: &Path) -> Result<()> {
    let output = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| SnippetError::service("s3", e))?;

    let data = output.body.collect().await?.into_bytes();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &data)?;
    println!("Downloaded {} byte(s) to {}", data.len(), path.display());
    Ok(())
}
