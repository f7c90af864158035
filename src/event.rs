use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A write the caller has applied to storage. Published after the storage batch commits so
/// that derived state (the route cache, permission rules) can follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordEvent {
    MenuCreated(i64),
    MenuUpdated(i64),
    MenusRemoved(Vec<i64>),
    DeptSaved(i64),
    DeptsRemoved(Vec<i64>),
    /// Role id, permission ids inserted, permission ids deleted
    RolePermissionsChanged {
        role_id: i64,
        inserted: Vec<i64>,
        deleted: Vec<i64>,
    },
}

impl RecordEvent {
    /// Whether cached route projections are stale after this event.
    pub fn invalidates_routes(&self) -> bool {
        matches!(
            self,
            RecordEvent::MenuCreated(_) | RecordEvent::MenuUpdated(_) | RecordEvent::MenusRemoved(_)
        )
    }
}

impl Display for RecordEvent {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            RecordEvent::MenuCreated(id) => write!(f, "MenuCreated({id})"),
            RecordEvent::MenuUpdated(id) => write!(f, "MenuUpdated({id})"),
            RecordEvent::MenusRemoved(ids) => write!(f, "MenusRemoved({})", ids.len()),
            RecordEvent::DeptSaved(id) => write!(f, "DeptSaved({id})"),
            RecordEvent::DeptsRemoved(ids) => write!(f, "DeptsRemoved({})", ids.len()),
            RecordEvent::RolePermissionsChanged {
                role_id,
                inserted,
                deleted,
            } => write!(
                f,
                "RolePermissionsChanged(role {role_id}, +{}, -{})",
                inserted.len(),
                deleted.len()
            ),
        }
    }
}
