use crate::core::{ApiResponse, InboundEvent, PipelineMessage, S3ObjectRef};
use crate::utils::error::{Result, SnippetError};
use serde_json::Value;

/// Works out which action an incoming Lambda event asks for from the fields it carries.
pub fn classify(event: &Value) -> Result<InboundEvent> {
    if let Some(records) = event.get("Records").and_then(Value::as_array) {
        return classify_records(records);
    }

    if let Some(job_arn) = event.get("job_arn").and_then(Value::as_str) {
        return Ok(InboundEvent::JobStatus {
            job_arn: job_arn.to_string(),
        });
    }

    if let Some(body) = request_body(event)? {
        if let Some(labels) = body.get("labels").and_then(Value::as_array) {
            let labels = labels
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect::<Vec<_>>();
            if labels.is_empty() {
                return Err(SnippetError::invalid_event("download request names no labels"));
            }
            return Ok(InboundEvent::PrepareDownload { labels });
        }
        if let Some(file_name) = body.get("file_name").and_then(Value::as_str) {
            return Ok(InboundEvent::RequestUpload {
                file_name: file_name.to_string(),
            });
        }
    }

    let method = event.get("httpMethod").and_then(Value::as_str);
    let path = event.get("path").and_then(Value::as_str).unwrap_or_default();
    if method == Some("GET") && path.trim_end_matches('/').ends_with("/labels") {
        return Ok(InboundEvent::ListLabels);
    }

    Err(SnippetError::invalid_event(
        "expected Records, job_arn, a labels/file_name body or GET /labels",
    ))
}

fn classify_records(records: &[Value]) -> Result<InboundEvent> {
    let source = records
        .first()
        .and_then(|record| record.get("eventSource"))
        .and_then(Value::as_str)
        .ok_or_else(|| SnippetError::invalid_event("record without eventSource"))?;

    if records
        .iter()
        .any(|record| record.get("eventSource").and_then(Value::as_str) != Some(source))
    {
        return Err(SnippetError::invalid_event("records from mixed event sources"));
    }

    match source {
        "aws:s3" => records
            .iter()
            .map(s3_object)
            .collect::<Result<Vec<_>>>()
            .map(InboundEvent::ObjectsCreated),
        "aws:sqs" => records
            .iter()
            .map(pipeline_message)
            .collect::<Result<Vec<_>>>()
            .map(InboundEvent::PipelineMessages),
        other => Err(SnippetError::invalid_event(format!(
            "unsupported event source {}",
            other
        ))),
    }
}

fn s3_object(record: &Value) -> Result<S3ObjectRef> {
    let bucket = record
        .pointer("/s3/bucket/name")
        .and_then(Value::as_str)
        .ok_or_else(|| SnippetError::invalid_event("S3 record without bucket name"))?;
    let key = record
        .pointer("/s3/object/key")
        .and_then(Value::as_str)
        .ok_or_else(|| SnippetError::invalid_event("S3 record without object key"))?;

    Ok(S3ObjectRef {
        bucket: bucket.to_string(),
        key: decode_object_key(key),
    })
}

/// S3 notifications form-encode object keys (`+` for spaces, `%XX` escapes).
fn decode_object_key(key: &str) -> String {
    url::form_urlencoded::parse(key.as_bytes())
        .next()
        .map(|(name, _)| name.into_owned())
        .unwrap_or_default()
}

fn pipeline_message(record: &Value) -> Result<PipelineMessage> {
    let body = record
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| SnippetError::invalid_event("SQS record without body"))?;
    let mut message: PipelineMessage = serde_json::from_str(body)?;
    message.message_id = record
        .get("messageId")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Ok(message)
}

/// The 400 response for an API Gateway request that `classify` could not make sense of.
///
/// Returns `None` for every other event shape, whose errors should fail the invocation.
pub fn api_rejection(event: &Value, err: &SnippetError) -> Option<ApiResponse> {
    let is_api_request = event.get("httpMethod").is_some() || event.get("requestContext").is_some();
    is_api_request.then(|| ApiResponse::error(400, &err.to_string()))
}

/// The JSON body of an API Gateway proxy event, if it has one.
fn request_body(event: &Value) -> Result<Option<Value>> {
    match event.get("body") {
        Some(Value::String(raw)) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(raw)?)),
        Some(body @ Value::Object(_)) => Ok(Some(body.clone())),
        _ => Ok(None),
    }
}
