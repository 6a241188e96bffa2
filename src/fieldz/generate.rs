//! JSON template generation.
//!
//! Produces a name → type-tag document for preview purposes. Key order is
//! forest traversal order (`serde_json` is built with `preserve_order`).
//! The `"String"` / `"number"` tag casing is part of the external document
//! shape and is reproduced verbatim.

use crate::model::{Field, FieldType};
use serde_json::{Map, Value};

/// Builds the template document for the forest. Fields with empty trimmed
/// names are skipped; a later sibling with the same name overwrites an
/// earlier entry.
pub fn run(forest: &[Field]) -> Value {
    let mut doc = Map::new();
    for field in forest {
        if field.name.trim().is_empty() {
            continue;
        }
        let value = match field.field_type {
            FieldType::String => Value::String("String".into()),
            FieldType::Number => Value::String("number".into()),
            FieldType::Nested => run(&field.children),
        };
        doc.insert(field.name.clone(), value);
    }
    Value::Object(doc)
}
