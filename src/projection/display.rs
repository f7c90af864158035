//! Picker shapes: `{id, label, children}` for tree-select widgets and
//! `{value, label, children}` for cascading selects.

use super::Projection;
use crate::record::TreeRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdLabelNode<I> {
    pub id: I,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IdLabelNode<I>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueLabelNode<I> {
    pub value: I,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ValueLabelNode<I>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IdLabelProjection;

impl<R: TreeRecord> Projection<R> for IdLabelProjection {
    type Output = IdLabelNode<R::Id>;

    fn project(&self, record: &R, children: Vec<Self::Output>) -> Self::Output {
        IdLabelNode {
            id: record.id().clone(),
            label: record.name().to_string(),
            children,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValueLabelProjection;

impl<R: TreeRecord> Projection<R> for ValueLabelProjection {
    type Output = ValueLabelNode<R::Id>;

    fn project(&self, record: &R, children: Vec<Self::Output>) -> Self::Output {
        ValueLabelNode {
            value: record.id().clone(),
            label: record.name().to_string(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{forest::build_forest, menu::MenuRecord};
    use serde_json::json;
    use test_log::test;

    fn menus() -> Vec<MenuRecord> {
        vec![
            MenuRecord::new(1, 0, "System"),
            MenuRecord::new(2, 1, "Users"),
            MenuRecord::new(3, 1, "Roles"),
        ]
    }

    #[test]
    fn test_id_label_omits_empty_children() {
        let records = menus();
        let forest = build_forest(&records, Some(&0)).unwrap();
        let nodes = forest.project(&IdLabelProjection);

        assert_eq!(
            serde_json::to_value(&nodes).unwrap(),
            json!([{
                "id": 1,
                "label": "System",
                "children": [
                    {"id": 2, "label": "Users"},
                    {"id": 3, "label": "Roles"}
                ]
            }])
        );
    }

    #[test]
    fn test_value_label_uses_value_field() {
        let records = menus();
        let forest = build_forest(&records, Some(&0)).unwrap();
        let nodes = forest.project(&ValueLabelProjection);

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].value, 1);
        let labels: Vec<&str> = nodes[0].children.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["Users", "Roles"]);
        assert!(nodes[0].children.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_id_label_reads_back_without_children_field() {
        let node: IdLabelNode<i64> =
            serde_json::from_value(json!({"id": 5, "label": "Orphan"})).unwrap();
        assert!(node.children.is_empty());
    }
}
