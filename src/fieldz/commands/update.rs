use crate::commands::FieldPatch;
use crate::model::{Field, FieldId};

/// Replaces the field with `field_id` by the merge of its current
/// attributes and the set members of `patch`. Unknown ids leave the
/// forest unchanged.
pub fn run(forest: &[Field], field_id: FieldId, patch: &FieldPatch) -> Vec<Field> {
    forest.iter().map(|f| apply(f, field_id, patch)).collect()
}

fn apply(field: &Field, field_id: FieldId, patch: &FieldPatch) -> Field {
    let mut next = field.clone();
    if field.id == field_id {
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if let Some(field_type) = patch.field_type {
            next.field_type = field_type;
        }
        if let Some(children) = &patch.children {
            next.children = children.clone();
        }
    } else {
        next.children = run(&field.children, field_id, patch);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::FieldType;

    #[test]
    fn renames_without_touching_other_attributes() {
        let forest = add::root(&[]);
        let id = forest[0].id;

        let next = run(&forest, id, &FieldPatch::rename("age"));
        assert_eq!(next[0].name, "age");
        assert_eq!(next[0].field_type, FieldType::String);
        assert_eq!(next[0].id, id);
    }

    #[test]
    fn updates_nested_field_in_place() {
        let forest = add::root(&[]);
        let parent_id = forest[0].id;
        let forest = run(&forest, parent_id, &FieldPatch::retype(FieldType::Nested));
        let forest = add::child(&forest, parent_id);
        let child_id = forest[0].children[0].id;

        let next = run(&forest, child_id, &FieldPatch::rename("city"));
        assert_eq!(next[0].children[0].name, "city");
    }

    #[test]
    fn retype_away_from_nested_keeps_children() {
        let forest = add::root(&[]);
        let id = forest[0].id;
        let forest = run(&forest, id, &FieldPatch::retype(FieldType::Nested));
        let forest = add::child(&forest, id);

        let next = run(&forest, id, &FieldPatch::retype(FieldType::String));
        assert_eq!(next[0].field_type, FieldType::String);
        assert_eq!(next[0].children.len(), 1);
    }

    #[test]
    fn children_patch_replaces_the_subtree() {
        let forest = add::root(&[]);
        let id = forest[0].id;
        let forest = run(&forest, id, &FieldPatch::retype(FieldType::Nested));
        let forest = add::child(&forest, id);

        let mut replacement = Field::new();
        replacement.name = "only".into();
        let patch = FieldPatch::default().with_children(vec![replacement]);

        let next = run(&forest, id, &patch);
        assert_eq!(next[0].children.len(), 1);
        assert_eq!(next[0].children[0].name, "only");
    }

    #[test]
    fn unknown_id_returns_deep_equal_forest() {
        let forest = add::root(&add::root(&[]));
        let next = run(&forest, FieldId::new(), &FieldPatch::rename("x"));
        assert_eq!(next, forest);
    }
}
