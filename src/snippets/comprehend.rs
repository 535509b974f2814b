//! Entity, language and sentiment detection with Amazon Comprehend.

use crate::utils::error::{Result, SnippetError};
use aws_sdk_comprehend::types::LanguageCode;
use aws_sdk_comprehend::Client;

pub async fn detect_entities(client: &Client, text: &str, language_code: &str) -> Result<()> {
    let output = client
        .detect_entities()
        .text(text)
        .language_code(LanguageCode::from(language_code))
        .send()
        .await
        .map_err(|e| SnippetError::service("comprehend", e))?;

    if output.entities().is_empty() {
        println!("No entities found.");
    }
    for entity in output.entities() {
        println!(
            "{:<24} {:<16} {:.3}",
            entity.text().unwrap_or_default(),
            entity.r#type().map(|kind| kind.as_str()).unwrap_or("-"),
            entity.score().unwrap_or_default()
        );
    }
    Ok(())
}

pub async fn detect_dominant_language(client: &Client, text: &str) -> Result<()> {
    let output = client
        .detect_dominant_language()
        .text(text)
        .send()
        .await
        .map_err(|e| SnippetError::service("comprehend", e))?;

    for language in output.languages() {
        println!(
            "{} ({:.3})",
            language.language_code().unwrap_or("unknown"),
            language.score().unwrap_or_default()
        );
    }
    Ok(())
}

pub async fn detect_sentiment(client: &Client, text: &str, language_code: &str) -> Result<()> {
    let output = client
        .detect_sentiment()
        .text(text)
        .language_code(LanguageCode::from(language_code))
        .send()
        .await
        .map_err(|e| SnippetError::service("comprehend", e))?;

    println!(
        "Sentiment: {}",
        output.sentiment().map(|s| s.as_str()).unwrap_or("UNKNOWN")
    );
    if let Some(score) = output.sentiment_score() {
        println!(
            "positive {:.3}  negative {:.3}  neutral {:.3}  mixed {:.3}",
            score.positive().unwrap_or_default(),
            score.negative().unwrap_or_default(),
            score.neutral().unwrap_or_default(),
            score.mixed().unwrap_or_default()
        );
    }
    Ok(())
}
