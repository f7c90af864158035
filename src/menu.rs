//! Menu records and the listings served from them.
//!
//! Every listing takes the records as loaded from storage, applies the filter and sort the
//! corresponding query would apply, builds a forest and projects it:
//!
//! | listing              | roots                 | shape               |
//! |----------------------|-----------------------|---------------------|
//! | [list_table]         | detached (auto)       | [TableNode]         |
//! | [list_select]        | `config.root_id`      | [ValueLabelNode]    |
//! | [list_tree_select]   | `config.root_id`      | [IdLabelNode]       |
//! | [list_routes]        | `config.root_id`      | [RouteNode]         |
//! | [list_next_routes]   | `config.root_id`      | [NextRouteNode]     |
//!
//! [prepare_create] and [prepare_update] derive a menu's route path from its component before
//! the caller persists it; [prepare_remove] expands a deletion to child menus. Each returns the
//! [RecordEvent] the caller should publish afterwards.

use crate::{
    config::{TreeConfig, DEFAULT_STATUS_ENABLED},
    error::AdminError,
    event::RecordEvent,
    forest::{with_descendants, ForestBuilder},
    projection::{
        IdLabelNode, IdLabelProjection, NextRouteNode, NextRouteProjection, Projection,
        RouteNode, RouteProjection, RouteSource, TableNode, TableProjection, ValueLabelNode,
        ValueLabelProjection,
    },
    record::{parse_ids, sort_records, RecordFilter, TreeRecord},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    pub id: i64,
    pub parent_id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default)]
    pub sort: i32,
    #[serde(default = "default_visible")]
    pub visible: i32,
    /// Role codes joined in by the route query; empty for plain listings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

fn default_visible() -> i32 {
    DEFAULT_STATUS_ENABLED
}

impl MenuRecord {
    pub fn new(id: i64, parent_id: i64, name: impl Into<String>) -> Self {
        MenuRecord {
            id,
            parent_id,
            name: name.into(),
            icon: None,
            path: None,
            component: None,
            redirect: None,
            sort: 0,
            visible: DEFAULT_STATUS_ENABLED,
            roles: Vec::new(),
        }
    }
}

impl TreeRecord for MenuRecord {
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
}

impl RouteSource for MenuRecord {
    fn route_path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }

    fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    fn role_tags(&self) -> &[String] {
        &self.roles
    }

    fn visible(&self) -> i32 {
        self.visible
    }
}

fn sorted(records: &[MenuRecord], filter: &RecordFilter) -> Vec<MenuRecord> {
    let mut rows = filter.apply(records);
    sort_records(&mut rows);
    rows
}

fn render<P: Projection<MenuRecord>>(
    rows: &[MenuRecord],
    root: Option<&i64>,
    config: &TreeConfig,
    projection: &P,
) -> Result<Vec<P::Output>, AdminError> {
    let forest = ForestBuilder::from_config(config).build(rows, root)?;
    Ok(forest.project(projection))
}

/// Admin grid listing. Filtering may strip a parent; its children then surface as roots.
pub fn list_table(
    records: &[MenuRecord],
    name: Option<&str>,
    config: &TreeConfig,
) -> Result<Vec<TableNode<MenuRecord>>, AdminError> {
    let filter = RecordFilter {
        name: name.map(str::to_string),
        status: None,
    };
    let rows = sorted(records, &filter);
    tracing::debug!("Menu table listing over {} of {} records", rows.len(), records.len());
    render(&rows, None, config, &TableProjection)
}

pub fn list_select(
    records: &[MenuRecord],
    config: &TreeConfig,
) -> Result<Vec<ValueLabelNode<i64>>, AdminError> {
    let rows = sorted(records, &RecordFilter::default());
    render(&rows, Some(&config.root_id), config, &ValueLabelProjection)
}

pub fn list_tree_select(
    records: &[MenuRecord],
    config: &TreeConfig,
) -> Result<Vec<IdLabelNode<i64>>, AdminError> {
    let rows = sorted(records, &RecordFilter::default());
    render(&rows, Some(&config.root_id), config, &IdLabelProjection)
}

pub fn list_routes(
    records: &[MenuRecord],
    config: &TreeConfig,
) -> Result<Vec<RouteNode>, AdminError> {
    let rows = sorted(records, &RecordFilter::default());
    render(
        &rows,
        Some(&config.root_id),
        config,
        &RouteProjection::from_config(config),
    )
}

pub fn list_next_routes(
    records: &[MenuRecord],
    config: &TreeConfig,
) -> Result<Vec<NextRouteNode>, AdminError> {
    let rows = sorted(records, &RecordFilter::default());
    render(
        &rows,
        Some(&config.root_id),
        config,
        &NextRouteProjection::from_config(config),
    )
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn path_for_component(component: &str, config: &TreeConfig) -> String {
    if component == config.layout_component {
        format!("/{}", Uuid::new_v4().simple())
    } else {
        component.replace('/', "_")
    }
}

/// Fill in the route path of a new menu. External links carry their own path and are left
/// alone; otherwise a layout container gets a unique absolute path and a page gets its
/// component path with `/` replaced by `_`.
pub fn prepare_create(
    menu: &mut MenuRecord,
    config: &TreeConfig,
) -> Result<RecordEvent, AdminError> {
    if is_blank(menu.path.as_deref()) {
        let component = menu
            .component
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| {
                AdminError::InvalidRecord(format!(
                    "menu '{}' needs either a path or a component",
                    menu.name
                ))
            })?;
        let path = path_for_component(component, config);
        tracing::debug!("Derived path {path} for new menu '{}'", menu.name);
        menu.path = Some(path);
    }
    Ok(RecordEvent::MenuCreated(menu.id))
}

/// Re-derive the route path when the component of a stored menu changes.
pub fn prepare_update(
    menu: &mut MenuRecord,
    stored: &MenuRecord,
    config: &TreeConfig,
) -> Result<RecordEvent, AdminError> {
    if menu.id != stored.id {
        return Err(AdminError::InvalidRecord(format!(
            "menu {} cannot be updated from stored menu {}",
            menu.id, stored.id
        )));
    }
    if let Some(component) = menu.component.as_deref() {
        if !component.trim().is_empty() && menu.component != stored.component {
            let path = path_for_component(component, config);
            tracing::debug!("Component of menu {} changed, new path {path}", menu.id);
            menu.path = Some(path);
        }
    }
    Ok(RecordEvent::MenuUpdated(menu.id))
}

/// Expand a comma-separated id list to the menus to delete, child menus and buttons included.
pub fn prepare_remove(stored: &[MenuRecord], ids: &str) -> Result<RecordEvent, AdminError> {
    let requested = parse_ids(ids)?;
    let removed = with_descendants(stored, &requested);
    tracing::debug!(
        "Removing {} menus for {} requested",
        removed.len(),
        requested.len()
    );
    Ok(RecordEvent::MenusRemoved(removed))
}
