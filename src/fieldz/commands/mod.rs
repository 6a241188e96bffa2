use crate::model::{Field, FieldType};

pub mod add;
pub mod delete;
pub mod update;

/// Partial attribute set for [`update::run`]. Unset members leave the
/// current value in place.
#[derive(Debug, Clone, Default)]
pub struct FieldPatch {
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub children: Option<Vec<Field>>,
}

impl FieldPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn retype(field_type: FieldType) -> Self {
        Self {
            field_type: Some(field_type),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<Field>) -> Self {
        self.children = Some(children);
        self
    }
}
