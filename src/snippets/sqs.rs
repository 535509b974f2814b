use crate::utils::error::{Result, SnippetError};
use aws_sdk_sqs::Client;

pub async fn list_queues(client: &Client, prefix: Option<&str>) -> Result<()> {
    let output = client
        .list_queues()
        .set_queue_name_prefix(prefix.map(str::to_string))
        .send()
        .await
        .map_err(|e| SnippetError::service("sqs", e))?;

    for url in output.queue_urls() {
        println!("  {}", url);
    }
    Ok(())
}

pub async fn send_message(client: &Client, queue_url: &str, body: &str) -> Result<()> {
    let output = client
        .send_message()
        .queue_url(queue_url)
        .message_body(body)
        .send()
        .await
        .map_err(|e| SnippetError::service("sqs", e))?;

    println!("Sent message {}", output.message_id().unwrap_or("-"));
    Ok(())
}

pub async fn receive_messages(client: &Client, queue_url: &str, max_messages: i32) -> Result<()> {
    let output = client
        .receive_message()
        .queue_url(queue_url)
        .max_number_of_messages(max_messages.clamp(1, 10))
        .wait_time_seconds(5)
        .send()
        .await
        .map_err(|e| SnippetError::service("sqs", e))?;

    if output.messages().is_empty() {
        println!("No messages available.");
    }
    for message in output.messages() {
        println!(
            "{}: {}",
            message.message_id().unwrap_or("-"),
            message.body().unwrap_or_default()
        );
    }
    Ok(())
}
