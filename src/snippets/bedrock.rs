use crate::utils::error::{Result, SnippetError};
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, InferenceConfiguration, Message};
use aws_sdk_bedrockruntime::Client;

/// Sends one user turn to a model through the Converse API and prints the reply.
pub async fn converse(
    client: &Client,
    model_id: &str,
    prompt: &str,
    max_tokens: Option<i32>,
) -> Result<String> {
    let message = Message::builder()
        .role(ConversationRole::User)
        .content(ContentBlock::Text(prompt.to_owned()))
        .build()?;

    let response = client
        .converse()
        .model_id(model_id)
        .inference_config(InferenceConfiguration::builder().set_max_tokens(max_tokens).build())
        .messages(message)
        .send()
        .await
        .map_err(|e| SnippetError::service("bedrock", e))?;

    let text = response
        .output()
        .and_then(|output| output.as_message().ok())
        .and_then(|message| message.content().first())
        .and_then(|content| content.as_text().ok())
        .ok_or_else(|| SnippetError::ProcessingError {
            message: "model returned no text content".to_string(),
        })?
        .clone();

    println!("{}", text);
    Ok(text)
}
