//! Display ordinals for UI clients.
//!
//! Core operations address fields by [`FieldId`]; people address them by
//! position. This module flattens the forest depth-first, assigning 1-based
//! ordinals in render order, and resolves an ordinal back to the stable id.
//! Children are descended into only for `Nested` fields — the same subset a
//! renderer shows — so orphaned children never receive ordinals.

use crate::model::{Field, FieldId, FieldType};

/// A field paired with its user-facing ordinal and nesting depth.
#[derive(Debug, Clone)]
pub struct DisplayField {
    pub field: Field,
    pub ordinal: usize,
    pub depth: usize,
}

/// Flattens the forest into render order.
pub fn index_fields(forest: &[Field]) -> Vec<DisplayField> {
    let mut results = Vec::new();
    walk(forest, 0, &mut results);
    results
}

fn walk(fields: &[Field], depth: usize, out: &mut Vec<DisplayField>) {
    for field in fields {
        out.push(DisplayField {
            field: field.clone(),
            ordinal: out.len() + 1,
            depth,
        });
        if field.field_type == FieldType::Nested {
            walk(&field.children, depth + 1, out);
        }
    }
}

/// Maps a 1-based ordinal back to the field's id.
pub fn resolve(forest: &[Field], ordinal: usize) -> Option<FieldId> {
    index_fields(forest)
        .into_iter()
        .find(|df| df.ordinal == ordinal)
        .map(|df| df.field.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, update, FieldPatch};

    #[test]
    fn ordinals_are_assigned_in_pre_order() {
        let forest = add::root(&add::root(&[]));
        let id = forest[0].id;
        let forest = update::run(&forest, id, &FieldPatch::retype(FieldType::Nested));
        let forest = add::child(&forest, id);

        let rows = index_fields(&forest);
        assert_eq!(rows.len(), 3);
        // root 1, its child, then root 2
        assert_eq!(rows[0].depth, 0);
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows[2].depth, 0);
        assert_eq!(
            rows.iter().map(|r| r.ordinal).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn resolve_round_trips_through_ordinals() {
        let forest = add::root(&add::root(&[]));
        assert_eq!(resolve(&forest, 2), Some(forest[1].id));
        assert_eq!(resolve(&forest, 3), None);
        assert_eq!(resolve(&forest, 0), None);
    }

    #[test]
    fn orphaned_children_receive_no_ordinals() {
        let forest = add::root(&[]);
        let id = forest[0].id;
        let forest = update::run(&forest, id, &FieldPatch::retype(FieldType::Nested));
        let forest = add::child(&forest, id);
        let forest = update::run(&forest, id, &FieldPatch::retype(FieldType::String));

        assert_eq!(index_fields(&forest).len(), 1);
    }
}
