//! Department records, their listings, and the checks run before a department write.

use crate::{
    config::{TreeConfig, DEFAULT_STATUS_ENABLED},
    error::AdminError,
    event::RecordEvent,
    forest::{with_descendants, ForestBuilder},
    projection::{IdLabelNode, IdLabelProjection, TableNode, TableProjection},
    record::{parse_ids, sort_records, RecordFilter, TreeRecord},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeptRecord {
    pub id: i64,
    pub parent_id: i64,
    pub name: String,
    #[serde(default)]
    pub sort: i32,
    #[serde(default = "default_status")]
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

fn default_status() -> i32 {
    DEFAULT_STATUS_ENABLED
}

impl DeptRecord {
    pub fn new(id: i64, parent_id: i64, name: impl Into<String>) -> Self {
        DeptRecord {
            id,
            parent_id,
            name: name.into(),
            sort: 0,
            status: DEFAULT_STATUS_ENABLED,
            leader: None,
            mobile: None,
            email: None,
        }
    }
}

impl TreeRecord for DeptRecord {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn parent_id(&self) -> &i64 {
        &self.parent_id
    }

    fn sort_key(&self) -> i32 {
        self.sort
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> Option<i32> {
        Some(self.status)
    }
}

/// Admin grid listing filtered on status and name; departments whose parent was filtered
/// out are listed as roots.
pub fn list_table(
    records: &[DeptRecord],
    filter: &RecordFilter,
    config: &TreeConfig,
) -> Result<Vec<TableNode<DeptRecord>>, AdminError> {
    let mut rows = filter.apply(records);
    sort_records(&mut rows);
    tracing::debug!(
        "Department table listing over {} of {} records",
        rows.len(),
        records.len()
    );
    let forest = ForestBuilder::from_config(config).build(&rows, None)?;
    Ok(forest.project(&TableProjection))
}

pub fn list_tree_select(
    records: &[DeptRecord],
    config: &TreeConfig,
) -> Result<Vec<IdLabelNode<i64>>, AdminError> {
    let mut rows = records.to_vec();
    sort_records(&mut rows);
    let forest = ForestBuilder::from_config(config).build(&rows, Some(&config.root_id))?;
    Ok(forest.project(&IdLabelProjection))
}

/// Validate a new or edited department against the stored ones. A department may not be
/// moved under itself or any of its own descendants.
pub fn prepare_save(dept: &DeptRecord, stored: &[DeptRecord]) -> Result<RecordEvent, AdminError> {
    if dept.name.trim().is_empty() {
        return Err(AdminError::InvalidRecord(format!(
            "department {} needs a name",
            dept.id
        )));
    }
    if with_descendants(stored, &[dept.id]).contains(&dept.parent_id) {
        return Err(AdminError::InvalidRecord(format!(
            "department {} cannot be placed under its own subtree ({})",
            dept.id, dept.parent_id
        )));
    }
    Ok(RecordEvent::DeptSaved(dept.id))
}

/// Expand a comma-separated id list to the departments to delete: the named ones and
/// everything below them.
pub fn prepare_remove(stored: &[DeptRecord], ids: &str) -> Result<RecordEvent, AdminError> {
    let requested = parse_ids(ids)?;
    let removed = with_descendants(stored, &requested);
    tracing::debug!(
        "Removing {} departments for {} requested",
        removed.len(),
        requested.len()
    );
    Ok(RecordEvent::DeptsRemoved(removed))
}
