use crate::model::{Field, FieldId};

/// Removes the field with `field_id` and its entire subtree, preserving
/// the relative order of the remaining siblings. Unknown ids leave the
/// forest unchanged.
pub fn run(forest: &[Field], field_id: FieldId) -> Vec<Field> {
    forest
        .iter()
        .filter(|f| f.id != field_id)
        .map(|f| {
            let mut next = f.clone();
            next.children = run(&f.children, field_id);
            next
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, update, FieldPatch};
    use crate::model::FieldType;

    #[test]
    fn removes_field_and_preserves_sibling_order() {
        let forest = add::root(&add::root(&add::root(&[])));
        let forest = update::run(&forest, forest[0].id, &FieldPatch::rename("a"));
        let forest = update::run(&forest, forest[1].id, &FieldPatch::rename("b"));
        let forest = update::run(&forest, forest[2].id, &FieldPatch::rename("c"));

        let next = run(&forest, forest[1].id);
        let names: Vec<_> = next.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn removes_entire_subtree() {
        let forest = add::root(&[]);
        let parent_id = forest[0].id;
        let forest = update::run(&forest, parent_id, &FieldPatch::retype(FieldType::Nested));
        let forest = add::child(&forest, parent_id);
        let forest = add::child(&forest, parent_id);

        let next = run(&forest, parent_id);
        assert!(next.is_empty());
    }

    #[test]
    fn removes_nested_field_from_its_parent() {
        let forest = add::root(&[]);
        let parent_id = forest[0].id;
        let forest = update::run(&forest, parent_id, &FieldPatch::retype(FieldType::Nested));
        let forest = add::child(&forest, parent_id);
        let child_id = forest[0].children[0].id;

        let next = run(&forest, child_id);
        assert!(next[0].children.is_empty());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn unknown_id_returns_deep_equal_forest() {
        let forest = add::root(&add::root(&[]));
        let next = run(&forest, FieldId::new());
        assert_eq!(next, forest);
    }
}
