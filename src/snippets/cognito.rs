use crate::utils::error::{Result, SnippetError};
use aws_sdk_cognitoidentityprovider::Client;

pub async fn list_user_pools(client: &Client, max_results: i32) -> Result<()> {
    let output = client
        .list_user_pools()
        .max_results(max_results.clamp(1, 60))
        .send()
        .await
        .map_err(|e| SnippetError::service("cognito", e))?;

    for pool in output.user_pools() {
        println!(
            "{:<28} {}",
            pool.id().unwrap_or_default(),
            pool.name().unwrap_or_default()
        );
    }
    Ok(())
}

pub async fn list_users(client: &Client, user_pool_id: &str) -> Result<()> {
    let output = client
        .list_users()
        .user_pool_id(user_pool_id)
        .send()
        .await
        .map_err(|e| SnippetError::service("cognito", e))?;

    for user in output.users() {
        println!(
            "{:<36} {}",
            user.username().unwrap_or_default(),
            user.user_status().map(|s| s.as_str()).unwrap_or("-")
        );
    }
    Ok(())
}
