use crate::split::error::ShapeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A flat value carried by one record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    fn from_json(value: Value) -> Option<Scalar> {
        match value {
            Value::Null => Some(Scalar::Null),
            Value::Bool(b) => Some(Scalar::Bool(b)),
            Value::Number(n) => Some(Scalar::Number(n)),
            Value::String(s) => Some(Scalar::Text(s)),
            // Nested containers have no flat representation
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    /// Plain text rendering: text as-is, numbers as their JSON text,
    /// booleans as `true`/`false`, null as the empty string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// One row of a category - an ordered list of (field name, value) pairs
#[derive(Debug, Clone)]
pub struct Record {
    pub fields: Vec<(String, Scalar)>,
}

impl Record {
    /// Look up a field by name, in the record's own order
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    fn from_json(value: Value, category: &str, index: usize) -> Result<Record, ShapeError> {
        let Value::Object(map) = value else {
            return Err(ShapeError::RecordNotObject {
                category: category.to_string(),
                index,
            });
        };

        let mut fields = Vec::with_capacity(map.len());
        for (field, value) in map {
            let Some(scalar) = Scalar::from_json(value) else {
                return Err(ShapeError::NestedValue {
                    category: category.to_string(),
                    index,
                    field,
                });
            };
            fields.push((field, scalar));
        }

        Ok(Record { fields })
    }
}

/// A top-level key of the document and its records; becomes one output file
#[derive(Debug, Clone)]
pub struct Category {
    /// The category name (top-level key)
    pub name: String,

    /// Ordered field names of the first record; defines the output columns
    pub header: Vec<String>,

    /// The category's records, in array order
    pub records: Vec<Record>,
}

impl Category {
    fn from_json(name: String, value: Value) -> Result<Category, ShapeError> {
        let Value::Array(items) = value else {
            return Err(ShapeError::CategoryNotArray { category: name });
        };

        if items.is_empty() {
            return Err(ShapeError::EmptyCategory { category: name });
        }

        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            records.push(Record::from_json(item, &name, index)?);
        }

        // The first record's keys define the header
        let header: Vec<String> = records[0]
            .fields
            .iter()
            .map(|(field, _)| field.clone())
            .collect();

        // Later records may omit header fields but not introduce new ones
        for (index, record) in records.iter().enumerate().skip(1) {
            for (field, _) in &record.fields {
                if !header.iter().any(|h| h == field) {
                    return Err(ShapeError::UnknownField {
                        category: name,
                        index,
                        field: field.clone(),
                    });
                }
            }
        }

        Ok(Category {
            name,
            header,
            records,
        })
    }
}

/// A parsed, shape-checked document: categories in their source key order
#[derive(Debug, Clone)]
pub struct Document {
    pub categories: Vec<Category>,
}

impl Document {
    /// Build a document from a parsed JSON value, validating the expected
    /// "object of arrays of flat objects" shape.
    ///
    /// All checks run here, before any output is written: the top-level
    /// value must be an object, every category a non-empty array of flat
    /// objects, and every record restricted to its category's header fields.
    pub fn from_json(value: Value) -> Result<Document, ShapeError> {
        let Value::Object(map) = value else {
            return Err(ShapeError::TopLevelNotObject);
        };

        let mut categories = Vec::with_capacity(map.len());
        for (name, value) in map {
            categories.push(Category::from_json(name, value)?);
        }

        Ok(Document { categories })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_from_first_record() {
        let document = Document::from_json(json!({
            "Default": [
                {"a": 1, "b": "x"},
                {"a": 2, "b": "y"}
            ]
        }))
        .unwrap();

        assert_eq!(document.categories.len(), 1);
        let category = &document.categories[0];
        assert_eq!(category.name, "Default");
        assert_eq!(category.header, vec!["a", "b"]);
        assert_eq!(category.records.len(), 2);
    }

    #[test]
    fn test_key_order_is_preserved() {
        let document = Document::from_json(json!({
            "Users": [{"id": 1}],
            "Orders": [{"total": 9}]
        }))
        .unwrap();

        let names: Vec<&str> = document
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Users", "Orders"]);

        // Column order follows the first record's key order, not sorting
        let document = Document::from_json(json!({
            "Default": [{"zeta": 1, "alpha": 2}]
        }))
        .unwrap();
        assert_eq!(document.categories[0].header, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_missing_header_field_is_allowed() {
        let document = Document::from_json(json!({
            "Default": [
                {"a": 1, "b": 2},
                {"a": 3}
            ]
        }))
        .unwrap();

        assert!(document.categories[0].records[1].get("b").is_none());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Document::from_json(json!({
            "Default": [
                {"a": 1},
                {"a": 2, "extra": 3}
            ]
        }))
        .unwrap_err();

        match err {
            ShapeError::UnknownField {
                category,
                index,
                field,
            } => {
                assert_eq!(category, "Default");
                assert_eq!(index, 1);
                assert_eq!(field, "extra");
            }
            other => panic!("expected UnknownField, got {:?}", other),
        }
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = Document::from_json(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ShapeError::TopLevelNotObject));
    }

    #[test]
    fn test_category_must_be_array() {
        let err = Document::from_json(json!({"Default": {"a": 1}})).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::CategoryNotArray { category } if category == "Default"
        ));
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let err = Document::from_json(json!({"Default": []})).unwrap_err();
        assert!(matches!(err, ShapeError::EmptyCategory { .. }));
    }

    #[test]
    fn test_record_must_be_object() {
        let err = Document::from_json(json!({"Default": [1]})).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::RecordNotObject { index: 0, .. }
        ));
    }

    #[test]
    fn test_nested_value_is_rejected() {
        let err = Document::from_json(json!({
            "Default": [{"a": {"nested": true}}]
        }))
        .unwrap_err();

        assert!(matches!(
            err,
            ShapeError::NestedValue { field, .. } if field == "a"
        ));
    }

    #[test]
    fn test_scalar_rendering() {
        let document = Document::from_json(json!({
            "Default": [{"n": 2.5, "b": true, "z": null, "s": "plain"}]
        }))
        .unwrap();

        let record = &document.categories[0].records[0];
        assert_eq!(record.get("n").unwrap().to_string(), "2.5");
        assert_eq!(record.get("b").unwrap().to_string(), "true");
        assert_eq!(record.get("z").unwrap().to_string(), "");
        assert_eq!(record.get("s").unwrap().to_string(), "plain");
    }
}
