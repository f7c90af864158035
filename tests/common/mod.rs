//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use admin_tree::menu::MenuRecord;
use serde_json::json;

/// Menu rows as the route query returns them: sorted, with role codes joined in.
pub fn route_rows() -> Vec<MenuRecord> {
    serde_json::from_value(json!([
        {
            "id": 1, "parentId": 0, "name": "System", "sort": 1,
            "component": "Layout", "path": "/system", "redirect": "/system/user",
            "icon": "system", "visible": 1, "roles": ["ROOT", "ADMIN"]
        },
        {
            "id": 2, "parentId": 1, "name": "Users", "sort": 1,
            "component": "system/user/index", "path": "user", "icon": "user",
            "visible": 1, "roles": ["ROOT", "ADMIN"]
        },
        {
            "id": 3, "parentId": 1, "name": "Roles", "sort": 2,
            "component": "system/role/index", "path": "role", "icon": "peoples",
            "visible": 0, "roles": ["ROOT"]
        },
        {
            "id": 4, "parentId": 0, "name": "Docs", "sort": 2,
            "path": "https://example.com/docs", "visible": 1
        }
    ]))
    .unwrap()
}
