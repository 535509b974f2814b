use crate::utils::error::{Result, SnippetError};
use aws_sdk_iam::Client;

pub async fn list_users(client: &Client) -> Result<()> {
    let output = client
        .list_users()
        .send()
        .await
        .map_err(|e| SnippetError::service("iam", e))?;

    for user in output.users() {
        println!("{:<32} {}", user.user_name(), user.arn());
    }
    Ok(())
}

pub async fn create_user(client: &Client, user_name: &str) -> Result<()> {
    let output = client
        .create_user()
        .user_name(user_name)
        .send()
        .await
        .map_err(|e| SnippetError::service("iam", e))?;

    match output.user() {
        Some(user) => println!("Created user {}", user.arn()),
        None => println!("Created user {}", user_name),
    }
    Ok(())
}

pub async fn delete_user(client: &Client, user_name: &str) -> Result<()> {
    client
        .delete_user()
        .user_name(user_name)
        .send()
        .await
        .map_err(|e| SnippetError::service("iam", e))?;
    println!("Deleted user {}", user_name);
    Ok(())
}
