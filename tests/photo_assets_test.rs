mod common;

use anyhow::Result;
use aws_howto::core::{events, S3ObjectRef};
use aws_howto::PhotoAssets;
use common::{FakeDetector, FakeLabelStore, FakeNotifier, FakeObjectStore};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::time::Duration;

type Assets = PhotoAssets<FakeDetector, FakeLabelStore, FakeObjectStore, FakeNotifier>;

struct Harness {
    assets: Assets,
    labels: FakeLabelStore,
    objects: FakeObjectStore,
    notifier: FakeNotifier,
}

fn harness(detected: &[(&str, &[&str])]) -> Harness {
    let detector = FakeDetector {
        labels: detected
            .iter()
            .map(|(key, labels)| {
                (
                    key.to_string(),
                    labels.iter().map(|label| label.to_string()).collect(),
                )
            })
            .collect::<HashMap<_, _>>(),
    };
    let labels = FakeLabelStore::default();
    let objects = FakeObjectStore::default();
    let notifier = FakeNotifier::default();
    let assets = PhotoAssets::new(
        detector,
        labels.clone(),
        objects.clone(),
        notifier.clone(),
        "pam-storage".to_string(),
        "pam-working".to_string(),
    );
    Harness {
        assets,
        labels,
        objects,
        notifier,
    }
}

fn image(key: &str) -> S3ObjectRef {
    S3ObjectRef {
        bucket: "pam-storage".to_string(),
        key: key.to_string(),
    }
}

fn body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap_or_default()).unwrap_or(Value::Null)
}

#[tokio::test]
async fn test_detected_labels_are_counted_per_image() -> Result<()> {
    let h = harness(&[
        ("dog.jpg", &["Dog", "Animal"]),
        ("cat.jpg", &["Cat", "Animal"]),
    ]);

    let stored = h
        .assets
        .detect_labels(&[image("dog.jpg"), image("cat.jpg")])
        .await?;

    assert_eq!(stored, 4);
    let animal = h.labels.get("Animal").expect("Animal label stored");
    assert_eq!(animal.count, 2);
    assert_eq!(animal.images, vec!["dog.jpg", "cat.jpg"]);
    assert_eq!(h.labels.get("Dog").map(|l| l.count), Some(1));
    Ok(())
}

#[tokio::test]
async fn test_list_labels_returns_counts() -> Result<()> {
    let h = harness(&[("dog.jpg", &["Dog", "Animal"]), ("cat.jpg", &["Animal"])]);
    h.assets
        .detect_labels(&[image("dog.jpg"), image("cat.jpg")])
        .await?;

    let response = h.assets.list_labels().await?;

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.headers.get("Access-Control-Allow-Origin").map(String::as_str),
        Some("*")
    );
    let body: Value = serde_json::from_str(&response.body)?;
    assert_eq!(
        body,
        json!({ "labels": { "Animal": { "count": 2 }, "Dog": { "count": 1 } } })
    );
    Ok(())
}

#[tokio::test]
async fn test_request_upload_presigns_a_unique_key() -> Result<()> {
    let h = harness(&[]);

    let response = h.assets.request_upload("holiday/beach.jpg").await?;

    assert_eq!(response.status_code, 200);
    let presigned = h.objects.presigned.lock().unwrap().clone();
    assert_eq!(presigned.len(), 1);
    let (method, location, ttl) = &presigned[0];
    assert_eq!(method, "PUT");
    assert!(location.starts_with("pam-storage/"));
    assert!(location.ends_with("-beach.jpg"));
    assert_eq!(*ttl, Duration::from_secs(300));
    Ok(())
}

#[tokio::test]
async fn test_prepare_download_zips_matching_images() -> Result<()> {
    let h = harness(&[
        ("dog.jpg", &["Dog", "Animal"]),
        ("cat.jpg", &["Cat", "Animal"]),
        ("car.jpg", &["Car"]),
    ]);
    h.objects.insert("pam-storage", "dog.jpg", b"woof");
    h.objects.insert("pam-storage", "cat.jpg", b"meow");
    h.objects.insert("pam-storage", "car.jpg", b"vroom");
    h.assets
        .detect_labels(&[image("dog.jpg"), image("cat.jpg"), image("car.jpg")])
        .await?;

    let response = h
        .assets
        .prepare_download(&["Dog".to_string(), "Animal".to_string()])
        .await?;

    assert_eq!(response.status_code, 200);
    let archives = h.objects.keys_in("pam-working");
    assert_eq!(archives.len(), 1);
    assert!(archives[0].starts_with("download-") && archives[0].ends_with(".zip"));

    let data = h
        .objects
        .object("pam-working", &archives[0])
        .expect("archive stored");
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(names, vec!["cat.jpg", "dog.jpg"]);

    let mut contents = String::new();
    archive.by_name("dog.jpg")?.read_to_string(&mut contents)?;
    assert_eq!(contents, "woof");

    let published = h.notifier.published.lock().unwrap().clone();
    assert_eq!(published.len(), 1);
    assert!(published[0].1.contains("X-Amz-Signature=get"));
    Ok(())
}

#[tokio::test]
async fn test_missing_image_becomes_a_server_error_response() -> Result<()> {
    let h = harness(&[("gone.jpg", &["Dog"])]);
    h.assets.detect_labels(&[image("gone.jpg")]).await?;

    let event = events::classify(&json!({
        "httpMethod": "PUT",
        "path": "/download",
        "body": r#"{"labels":["Dog"]}"#
    }))?;
    let response = h.assets.handle(event).await?;

    assert_eq!(response["statusCode"], 500);
    assert!(body(&response)["error"]
        .as_str()
        .unwrap_or_default()
        .contains("gone.jpg"));
    assert!(h.notifier.published.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_s3_notification_routes_to_label_detection() -> Result<()> {
    let h = harness(&[("my photo.jpg", &["Beach"])]);
    let event = events::classify(&json!({
        "Records": [{
            "eventSource": "aws:s3",
            "s3": {
                "bucket": { "name": "pam-storage" },
                "object": { "key": "my+photo.jpg" }
            }
        }]
    }))?;

    let result = tokio_test::assert_ok!(h.assets.handle(event).await);

    assert_eq!(result, json!({ "images": 1, "labels": 1 }));
    assert_eq!(
        h.labels.get("Beach").map(|label| label.images),
        Some(vec!["my photo.jpg".to_string()])
    );
    Ok(())
}

#[tokio::test]
async fn test_get_labels_request_is_answered() -> Result<()> {
    let h = harness(&[]);
    let event = events::classify(&json!({ "httpMethod": "GET", "path": "/labels" }))?;

    let response = h.assets.handle(event).await?;

    assert_eq!(response["statusCode"], 200);
    assert_eq!(body(&response), json!({ "labels": {} }));
    Ok(())
}
