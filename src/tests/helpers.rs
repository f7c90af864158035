//! Shared fixtures for forest and projection tests

use crate::{dept::DeptRecord, forest::Node, menu::MenuRecord, record::TreeRecord};
use proptest::prelude::*;

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

pub fn create_test_menu(id: i64, parent_id: i64, name: &str, sort: i32) -> MenuRecord {
    let mut menu = MenuRecord::new(id, parent_id, name);
    menu.sort = sort;
    menu
}

/// A small admin menu tree, already in `sort` order:
///
/// ```text
/// System (1)
///   Users (2)
///     Add user (5)
///   Roles (3)
/// Monitor (4)   hidden
/// ```
pub fn create_test_menus() -> Vec<MenuRecord> {
    init_logging();

    let mut system = create_test_menu(1, 0, "System", 1);
    system.component = Some("Layout".to_string());
    system.path = Some("/system".to_string());
    system.icon = Some("system".to_string());
    system.roles = vec!["ROOT".to_string(), "ADMIN".to_string()];

    let mut users = create_test_menu(2, 1, "Users", 1);
    users.component = Some("system/user/index".to_string());
    users.path = Some("user".to_string());

    let mut add_user = create_test_menu(5, 2, "Add user", 1);
    add_user.component = Some("system/user/add".to_string());
    add_user.path = Some("add".to_string());

    let mut roles = create_test_menu(3, 1, "Roles", 2);
    roles.component = Some("system/role/index".to_string());
    roles.path = Some("role".to_string());

    let mut monitor = create_test_menu(4, 0, "Monitor", 2);
    monitor.component = Some("Layout".to_string());
    monitor.path = Some("/monitor".to_string());
    monitor.visible = 0;

    vec![system, users, add_user, roles, monitor]
}

pub fn create_test_depts() -> Vec<DeptRecord> {
    init_logging();

    let mut rd = DeptRecord::new(2, 1, "R&D");
    rd.sort = 1;
    let mut qa = DeptRecord::new(3, 1, "QA");
    qa.sort = 2;
    qa.status = 0;
    vec![DeptRecord::new(1, 0, "Head Office"), rd, qa]
}

/// Acyclic menu sets of up to `max_len` records. Record `n` (ids start at 1) hangs under an
/// earlier record or under one of three ids that are never present, so every set has roots.
pub fn arb_acyclic_menus(max_len: usize) -> impl Strategy<Value = Vec<MenuRecord>> {
    prop::collection::vec((any::<bool>(), any::<prop::sample::Index>()), 1..=max_len).prop_map(
        |picks| {
            picks
                .into_iter()
                .enumerate()
                .map(|(idx, (detached, pick))| {
                    let id = idx as i64 + 1;
                    let parent_id = if idx == 0 || detached {
                        10_000 + pick.index(3) as i64
                    } else {
                        pick.index(idx) as i64 + 1
                    };
                    create_test_menu(id, parent_id, &format!("menu-{id}"), 0)
                })
                .collect()
        },
    )
}

/// [arb_acyclic_menus] in arbitrary order, so children may precede their parents.
pub fn arb_shuffled_menus(max_len: usize) -> impl Strategy<Value = Vec<MenuRecord>> {
    arb_acyclic_menus(max_len).prop_flat_map(|records| Just(records).prop_shuffle())
}

/// Pre-order (record id, depth) listing, handy for comparing whole shapes.
pub fn preorder<R: TreeRecord>(nodes: &[Node<'_, R>]) -> Vec<(R::Id, usize)> {
    let mut out = Vec::new();
    let mut pending: Vec<(&Node<'_, R>, usize)> = nodes.iter().rev().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = pending.pop() {
        out.push((node.record.id().clone(), depth));
        pending.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }
    out
}
