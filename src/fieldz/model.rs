use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a field, unique across the whole forest.
///
/// Backed by UUIDv7: the timestamp component makes ids observably
/// monotonic within a session, the random component rules out accidental
/// collision. Never reused, even after the field is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[default]
    String,
    Number,
    Nested,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldType::String => write!(f, "String"),
            FieldType::Number => write!(f, "Number"),
            FieldType::Nested => write!(f, "Nested"),
        }
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" | "str" => Ok(FieldType::String),
            "number" | "num" => Ok(FieldType::Number),
            "nested" => Ok(FieldType::Nested),
            other => Err(format!("Unknown field type: {}", other)),
        }
    }
}

/// One node of the schema tree.
///
/// `children` only carries meaning while `field_type` is `Nested`. A retype
/// away from `Nested` keeps the vector as-is so nothing is lost if the user
/// switches back; validation and generation ignore it in the meantime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub children: Vec<Field>,
}

impl Field {
    pub fn new() -> Self {
        Self {
            id: FieldId::new(),
            name: String::new(),
            field_type: FieldType::String,
            children: Vec::new(),
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

/// The ordered sequence of root fields — the entire schema state.
pub type Forest = Vec<Field>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_over_many_allocations() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(FieldId::new()));
        }
    }

    #[test]
    fn new_field_has_defaults() {
        let field = Field::new();
        assert_eq!(field.name, "");
        assert_eq!(field.field_type, FieldType::String);
        assert!(field.children.is_empty());
    }

    #[test]
    fn field_type_parses_case_insensitively() {
        assert_eq!("STRING".parse::<FieldType>().unwrap(), FieldType::String);
        assert_eq!("num".parse::<FieldType>().unwrap(), FieldType::Number);
        assert_eq!("Nested".parse::<FieldType>().unwrap(), FieldType::Nested);
        assert!("blob".parse::<FieldType>().is_err());
    }
}
