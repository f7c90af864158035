//! Minimal updates for many-to-many association tables.
//!
//! [diff] compares the target ids currently stored for one owner with the ids the caller
//! wants and returns what to delete and what to insert. An update that would do neither is
//! rejected with [AdminError::NoChange] instead of succeeding silently.
//!
//! [AssociationDiff::into_plan] turns a diff into the rows the storage collaborator applies
//! as one batch; [RolePermissionUpdate] does the whole round for a role's permissions within
//! a menu.

use crate::{error::AdminError, event::RecordEvent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationRow<O, T> {
    pub owner_id: O,
    pub target_id: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationDiff<T: Ord> {
    pub to_insert: BTreeSet<T>,
    pub to_delete: BTreeSet<T>,
}

pub fn diff<T, E, D>(existing: E, desired: D) -> Result<AssociationDiff<T>, AdminError>
where
    T: Ord + Clone,
    E: IntoIterator<Item = T>,
    D: IntoIterator<Item = T>,
{
    let existing: BTreeSet<T> = existing.into_iter().collect();
    let desired: BTreeSet<T> = desired.into_iter().collect();

    let to_delete: BTreeSet<T> = existing.difference(&desired).cloned().collect();
    let to_insert: BTreeSet<T> = desired.difference(&existing).cloned().collect();

    if to_delete.is_empty() && to_insert.is_empty() {
        return Err(AdminError::NoChange);
    }
    Ok(AssociationDiff {
        to_insert,
        to_delete,
    })
}

impl<T: Ord> AssociationDiff<T> {
    pub fn is_empty(&self) -> bool {
        self.to_insert.is_empty() && self.to_delete.is_empty()
    }

    pub fn into_plan<O: Clone>(self, owner_id: O) -> AssociationPlan<O, T> {
        let inserts = self
            .to_insert
            .into_iter()
            .map(|target_id| AssociationRow {
                owner_id: owner_id.clone(),
                target_id,
            })
            .collect();
        AssociationPlan {
            owner_id,
            inserts,
            deletes: self.to_delete,
        }
    }
}

/// Rows to insert and target ids to delete for one owner. Deletes are keyed by
/// `(owner_id, target_id)`; both halves belong in the same storage transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationPlan<O, T: Ord> {
    pub owner_id: O,
    pub inserts: Vec<AssociationRow<O, T>>,
    pub deletes: BTreeSet<T>,
}

impl<O, T: Ord> AssociationPlan<O, T> {
    pub fn inserted_targets(&self) -> impl Iterator<Item = &T> {
        self.inserts.iter().map(|row| &row.target_id)
    }
}

/// Replace the permissions a role holds under one menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissionUpdate {
    pub role_id: i64,
    pub menu_id: i64,
    #[serde(default)]
    pub perm_ids: Vec<i64>,
}

impl RolePermissionUpdate {
    /// `stored` are the permission ids the role currently holds under `menu_id`.
    pub fn plan<S>(&self, stored: S) -> Result<AssociationPlan<i64, i64>, AdminError>
    where
        S: IntoIterator<Item = i64>,
    {
        let changes = diff(stored, self.perm_ids.iter().copied()).inspect_err(|_| {
            tracing::debug!(
                "Permissions of role {} under menu {} unchanged",
                self.role_id,
                self.menu_id
            );
        })?;
        tracing::debug!(
            "Role {} under menu {}: {} permission(s) to insert, {} to delete",
            self.role_id,
            self.menu_id,
            changes.to_insert.len(),
            changes.to_delete.len()
        );
        Ok(changes.into_plan(self.role_id))
    }
}

impl AssociationPlan<i64, i64> {
    /// Event to publish once this plan has been applied for a role.
    pub fn role_permissions_event(&self) -> RecordEvent {
        RecordEvent::RolePermissionsChanged {
            role_id: self.owner_id,
            inserted: self.inserted_targets().copied().collect(),
            deleted: self.deletes.iter().copied().collect(),
        }
    }
}
