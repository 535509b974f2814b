use crate::utils::error::{Result, SnippetError};
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client;

/// Sends a plain-text email through SES v2. Both addresses must be verified in sandbox accounts.
pub async fn send_email(
    client: &Client,
    from: &str,
    to: &str,
    subject: &str,
    text: &str,
) -> Result<()> {
    let subject = Content::builder().data(subject).charset("UTF-8").build()?;
    let body = Content::builder().data(text).charset("UTF-8").build()?;
    let message = Message::builder()
        .subject(subject)
        .body(Body::builder().text(body).build())
        .build();

    let output = client
        .send_email()
        .from_email_address(from)
        .destination(Destination::builder().to_addresses(to).build())
        .content(EmailContent::builder().simple(message).build())
        .send()
        .await
        .map_err(|e| SnippetError::service("ses", e))?;

    println!("Sent message {}", output.message_id().unwrap_or("-"));
    Ok(())
}
