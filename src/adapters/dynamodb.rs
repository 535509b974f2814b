use crate::core::{BatchWriter, LabelCount, LabelStore, WriteItem};
use crate::utils::error::{Result, SnippetError};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;

/// Sends one `BatchWriteItem` request per call.
#[derive(Debug, Clone)]
pub struct DynamoBatchWriter {
    client: Client,
}

impl DynamoBatchWriter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BatchWriter for DynamoBatchWriter {
    async fn write_batch(&self, table: &str, items: Vec<WriteItem>) -> Result<Vec<WriteItem>> {
        let mut requests = Vec::with_capacity(items.len());
        for item in items {
            let put = PutRequest::builder().set_item(Some(item)).build()?;
            requests.push(WriteRequest::builder().put_request(put).build());
        }

        let output = self
            .client
            .batch_write_item()
            .request_items(table, requests)
            .send()
            .await
            .map_err(|e| SnippetError::service("dynamodb", e))?;

        let unprocessed = output
            .unprocessed_items
            .and_then(|mut tables| tables.remove(table))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|request| request.put_request)
            .map(|put| put.item)
            .collect();
        Ok(unprocessed)
    }
}

const LABEL_KEY: &str = "Label";
const COUNT_ATTRIBUTE: &str = "count";
const IMAGES_ATTRIBUTE: &str = "images";

/// Labels table keyed by label name, holding an image count and the set of image keys.
#[derive(Debug, Clone)]
pub struct DynamoLabelStore {
    client: Client,
    table: String,
}

impl DynamoLabelStore {
    pub fn new(client: Client, table: String) -> Self {
        Self { client, table }
    }

    fn label_from_item(item: &HashMap<String, AttributeValue>) -> Option<LabelCount> {
        let label = item.get(LABEL_KEY)?.as_s().ok()?.clone();
        let count = item
            .get(COUNT_ATTRIBUTE)
            .and_then(|value| value.as_n().ok())
            .and_then(|count| count.parse().ok())
            .unwrap_or(0);
        let images = item
            .get(IMAGES_ATTRIBUTE)
            .and_then(|value| value.as_ss().ok())
            .cloned()
            .unwrap_or_default();
        Some(LabelCount {
            label,
            count,
            images,
        })
    }
}

#[async_trait]
impl LabelStore for DynamoLabelStore {
    async fn add_image_label(&self, label: &str, image_key: &str) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table)
            .key(LABEL_KEY, AttributeValue::S(label.to_string()))
            .update_expression("ADD #count :one, #images :image")
            .expression_attribute_names("#count", COUNT_ATTRIBUTE)
            .expression_attribute_names("#images", IMAGES_ATTRIBUTE)
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .expression_attribute_values(":image", AttributeValue::Ss(vec![image_key.to_string()]))
            .send()
            .await
            .map_err(|e| SnippetError::service("dynamodb", e))?;
        Ok(())
    }

    async fn list_labels(&self) -> Result<Vec<LabelCount>> {
        let mut labels = Vec::new();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| SnippetError::service("dynamodb", e))?;

            labels.extend(output.items().iter().filter_map(Self::label_from_item));
            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }
        Ok(labels)
    }

    async fn images_for_labels(&self, labels: &[String]) -> Result<Vec<String>> {
        let mut images = Vec::new();
        for label in labels {
            let output = self
                .client
                .get_item()
                .table_name(&self.table)
                .key(LABEL_KEY, AttributeValue::S(label.clone()))
                .send()
                .await
                .map_err(|e| SnippetError::service("dynamodb", e))?;
            if let Some(found) = output.item().and_then(Self::label_from_item) {
                images.extend(found.images);
            }
        }
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_item() {
        let item = HashMap::from([
            (LABEL_KEY.to_string(), AttributeValue::S("Dog".to_string())),
            (COUNT_ATTRIBUTE.to_string(), AttributeValue::N("2".to_string())),
            (
                IMAGES_ATTRIBUTE.to_string(),
                AttributeValue::Ss(vec!["a.jpg".to_string(), "b.jpg".to_string()]),
            ),
        ]);
        let label = DynamoLabelStore::label_from_item(&item).unwrap();
        assert_eq!(label.label, "Dog");
        assert_eq!(label.count, 2);
        assert_eq!(label.images.len(), 2);

        let no_key = HashMap::from([(COUNT_ATTRIBUTE.to_string(), AttributeValue::N("1".to_string()))]);
        assert!(DynamoLabelStore::label_from_item(&no_key).is_none());
    }
}
