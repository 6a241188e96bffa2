//! Structural validation of a forest.
//!
//! Walks every sibling level depth-first and reports empty names,
//! childless `Nested` fields, and duplicate names among direct siblings.
//! Duplicate detection is strictly per level; the same name at different
//! depths is fine. The walk never fails — issues are advisory, and the
//! caller decides what to do with them.

use crate::model::{Field, FieldType};

/// Where a field sits, for issue messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPosition {
    /// 1-based index among the root fields.
    Root(usize),
    /// Child of the named parent.
    Under(String),
}

impl std::fmt::Display for FieldPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldPosition::Root(n) => write!(f, "Field {}", n),
            FieldPosition::Under(parent) => write!(f, "Nested field under \"{}\"", parent),
        }
    }
}

/// A sibling group, for per-level issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelScope {
    Top,
    Under(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptySchema,
    EmptyName {
        position: FieldPosition,
    },
    ChildlessNested {
        position: FieldPosition,
        name: String,
    },
    DuplicateNames {
        scope: LevelScope,
        names: Vec<String>,
    },
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::EmptySchema => {
                write!(f, "Schema is empty. Add at least one field.")
            }
            ValidationIssue::EmptyName { position } => {
                write!(f, "{}: Field name cannot be empty", position)
            }
            ValidationIssue::ChildlessNested { position, name } => {
                write!(f, "{} \"{}\": Nested field has no children", position, name)
            }
            ValidationIssue::DuplicateNames { scope, names } => match scope {
                LevelScope::Top => write!(
                    f,
                    "Duplicate field names at top level: {}",
                    names.join(", ")
                ),
                LevelScope::Under(parent) => write!(
                    f,
                    "Duplicate field names under \"{}\": {}",
                    parent,
                    names.join(", ")
                ),
            },
        }
    }
}

/// Validates the forest and returns all structural issues, in walk order.
pub fn run(forest: &[Field]) -> Vec<ValidationIssue> {
    if forest.is_empty() {
        return vec![ValidationIssue::EmptySchema];
    }
    let mut issues = Vec::new();
    check_level(forest, &LevelScope::Top, &mut issues);
    issues
}

fn check_level(fields: &[Field], scope: &LevelScope, issues: &mut Vec<ValidationIssue>) {
    for (i, field) in fields.iter().enumerate() {
        let position = match scope {
            LevelScope::Top => FieldPosition::Root(i + 1),
            LevelScope::Under(parent) => FieldPosition::Under(parent.clone()),
        };

        if field.name.trim().is_empty() {
            issues.push(ValidationIssue::EmptyName {
                position: position.clone(),
            });
        }

        if field.field_type == FieldType::Nested {
            if field.children.is_empty() {
                issues.push(ValidationIssue::ChildlessNested {
                    position,
                    name: field.name.clone(),
                });
            } else {
                check_level(
                    &field.children,
                    &LevelScope::Under(field.name.clone()),
                    issues,
                );
            }
        }
    }

    // Names (trimmed, non-empty) occurring more than once among these
    // siblings, each listed once, in first-occurrence order.
    let mut seen: Vec<&str> = Vec::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for field in fields {
        let name = field.name.trim();
        if name.is_empty() {
            continue;
        }
        if seen.contains(&name) {
            if !duplicates.contains(&name) {
                duplicates.push(name);
            }
        } else {
            seen.push(name);
        }
    }
    if !duplicates.is_empty() {
        issues.push(ValidationIssue::DuplicateNames {
            scope: scope.clone(),
            names: duplicates.iter().map(|n| n.to_string()).collect(),
        });
    }
}
