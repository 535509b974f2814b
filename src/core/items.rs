use crate::core::WriteItem;
use crate::utils::error::{Result, SnippetError};
use crate::utils::validation;
use aws_sdk_dynamodb::types::AttributeValue;
use std::io::Read;
use std::path::Path;

/// Loads items from a `.json` or `.csv` file, picked by extension.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<WriteItem>> {
    let path = path.as_ref();
    validation::validate_file_extensions(
        "items_file",
        &[path.display().to_string()],
        &["json", "csv"],
    )?;
    let file = std::fs::File::open(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        load_items_from_json(file)
    } else {
        load_items_from_csv(file)
    }
}

/// Reads a JSON array of objects.
pub fn load_items_from_json<R: Read>(reader: R) -> Result<Vec<WriteItem>> {
    let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    values
        .into_iter()
        .map(|value| {
            if !value.is_object() {
                return Err(SnippetError::ProcessingError {
                    message: format!("expected an object, found {}", value),
                });
            }
            let item: WriteItem = serde_dynamo::to_item(value)?;
            Ok(item)
        })
        .collect()
}

/// Reads a CSV file with a header row. Every non-empty cell becomes a string attribute.
pub fn load_items_from_csv<R: Read>(reader: R) -> Result<Vec<WriteItem>> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;
        let item: WriteItem = headers
            .iter()
            .zip(record.iter())
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(name, cell)| (name.to_string(), AttributeValue::S(cell.to_string())))
            .collect();
        if !item.is_empty() {
            items.push(item);
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_json_items_keep_types() {
        let json = r#"[{"year": 2013, "title": "Rush", "info": {"rating": 8.1}}]"#;
        let items = load_items_from_json(json.as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["year"], AttributeValue::N("2013".to_string()));
        assert_eq!(items[0]["title"], AttributeValue::S("Rush".to_string()));
        assert!(matches!(items[0]["info"], AttributeValue::M(_)));
    }

    #[test]
    fn test_json_rejects_non_objects() {
        assert!(load_items_from_json("[1, 2]".as_bytes()).is_err());
    }

    #[test]
    fn test_csv_cells_become_strings() {
        let csv = "id,name,color\n1,apple,red\n2,banana,\n";
        let items = load_items_from_csv(csv.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], AttributeValue::S("apple".to_string()));
        assert!(!items[1].contains_key("color"));
    }

    #[test]
    fn test_load_items_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "id,name").unwrap();
        writeln!(file, "7,plum").unwrap();
        let items = load_items(file.path()).unwrap();
        assert_eq!(items[0]["id"], AttributeValue::S("7".to_string()));

        let other = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        assert!(matches!(
            load_items(other.path()),
            Err(SnippetError::InvalidConfigValueError { ref field, .. }) if field == "items_file"
        ));

        let upper = tempfile::Builder::new().suffix(".JSON").tempfile().unwrap();
        std::fs::write(upper.path(), r#"[{"id": 1}]"#).unwrap();
        assert_eq!(load_items(upper.path()).unwrap().len(), 1);
    }
}
