use crate::utils::error::{Result, SnippetError};
use aws_sdk_lambda::primitives::Blob;
use aws_sdk_lambda::Client;

pub async fn list_functions(client: &Client) -> Result<()> {
    let output = client
        .list_functions()
        .send()
        .await
        .map_err(|e| SnippetError::service("lambda", e))?;

    for function in output.functions() {
        println!(
            "{:<40} {}",
            function.function_name().unwrap_or_default(),
            function.runtime().map(|r| r.as_str()).unwrap_or("-")
        );
    }
    Ok(())
}

/// Invokes a function synchronously with a JSON payload and prints what it returned.
pub async fn invoke_function(client: &Client, function_name: &str, payload: &str) -> Result<()> {
    serde_json::from_str::<serde_json::Value>(payload)?;

    let output = client
        .invoke()
        .function_name(function_name)
        .payload(Blob::new(payload.as_bytes()))
        .send()
        .await
        .map_err(|e| SnippetError::service("lambda", e))?;

    println!("Status code: {}", output.status_code());
    if let Some(error) = output.function_error() {
        println!("Function error: {}", error);
    }
    if let Some(response) = output.payload() {
        println!("{}", String::from_utf8_lossy(response.as_ref()));
    }
    Ok(())
}
