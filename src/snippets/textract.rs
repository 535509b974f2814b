use crate::utils::error::{Result, SnippetError};
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types::{BlockType, Document, S3Object};
use aws_sdk_textract::Client;
use std::path::Path;

/// Where the document to read lives.
#[derive(Debug, Clone)]
pub enum DocumentSource<'a> {
    File(&'a Path),
    S3 { bucket: &'a str, key: &'a str },
}

/// Prints each line of text Textract finds in the document.
pub async fn detect_document_text(client: &Client, source: DocumentSource<'_>) -> Result<()> {
    let document = match source {
        DocumentSource::File(path) => Document::builder()
            .bytes(Blob::new(std::fs::read(path)?))
            .build(),
        DocumentSource::S3 { bucket, key } => Document::builder()
            .s3_object(S3Object::builder().bucket(bucket).name(key).build())
            .build(),
    };

    let output = client
        .detect_document_text()
        .document(document)
        .send()
        .await
        .map_err(|e| SnippetError::service("textract", e))?;

    let lines = output
        .blocks()
        .iter()
        .filter(|block| block.block_type() == Some(&BlockType::Line));
    for line in lines {
        println!(
            "{:>6.2}%  {}",
            line.confidence().unwrap_or_default(),
            line.text().unwrap_or_default()
        );
    }
    Ok(())
}
