//! Admin grid shape: every record field plus an inline `children` array on parents.

use super::Projection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableNode<R> {
    #[serde(flatten)]
    pub record: R,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TableNode<R>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TableProjection;

impl<R: Clone> Projection<R> for TableProjection {
    type Output = TableNode<R>;

    fn project(&self, record: &R, children: Vec<Self::Output>) -> Self::Output {
        TableNode {
            record: record.clone(),
            children,
        }
    }
}
