use crate::model::{Field, FieldId};

/// Appends a new default field to the end of the root sequence.
pub fn root(forest: &[Field]) -> Vec<Field> {
    let mut next = forest.to_vec();
    next.push(Field::new());
    next
}

/// Appends a new default field to the children of `parent_id`, wherever
/// that field sits in the forest. Unknown ids leave the forest unchanged.
pub fn child(forest: &[Field], parent_id: FieldId) -> Vec<Field> {
    forest.iter().map(|f| attach(f, parent_id)).collect()
}

fn attach(field: &Field, parent_id: FieldId) -> Field {
    let mut next = field.clone();
    if field.id == parent_id {
        next.children.push(Field::new());
    } else {
        next.children = child(&field.children, parent_id);
    }
    next
}
