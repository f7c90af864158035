//! # admin-tree
//!
//! Hierarchy building, tree projections and association diffing for RBAC back-office data.
//!
//! ## Overview
//!
//! A back-office stores departments and menus as flat rows pointing at their parent, and
//! role-to-permission grants as a many-to-many table. admin-tree is the logic between those
//! rows and the API responses:
//!
//! - **[`forest`]**: turns a slice of parent-pointer records into a [`forest::Forest`], with
//!   detached-root detection, a flat fallback for inputs without any root, and cycle/depth
//!   guards.
//! - **[`projection`]**: renders a forest as picker nodes, admin table rows, or frontend route
//!   configuration (legacy and next-generation schema).
//! - **[`association`]**: computes minimal insert/delete sets for association updates and
//!   rejects updates that change nothing.
//! - **[`menu`]** / **[`dept`]**: concrete records plus the listings built from them, and menu
//!   route path derivation.
//! - **[`cache`]** / **[`event`]**: a route cache capability and the write events that
//!   invalidate it.
//! - **[`config`]**: [`config::TreeConfig`] and its TOML provider.
//!
//! Nothing here performs I/O against storage: callers load the rows, call in, and persist the
//! returned plans.
//!
//! ## Quick Start
//!
//! ```rust
//! use admin_tree::{
//!     forest::build_forest,
//!     menu::MenuRecord,
//!     projection::IdLabelProjection,
//! };
//!
//! let records = vec![
//!     MenuRecord::new(1, 0, "System"),
//!     MenuRecord::new(2, 1, "Users"),
//!     MenuRecord::new(3, 1, "Roles"),
//! ];
//! let forest = build_forest(&records, Some(&0))?;
//! let picker = forest.project(&IdLabelProjection);
//!
//! assert_eq!(picker.len(), 1);
//! assert_eq!(picker[0].label, "System");
//! assert_eq!(picker[0].children.len(), 2);
//! # Ok::<(), admin_tree::AdminError>(())
//! ```
//!
//! ### Association updates
//!
//! ```rust
//! use admin_tree::{association::diff, AdminError};
//!
//! let changes = diff([1, 2, 3], [2, 3, 4])?;
//! assert!(changes.to_delete.contains(&1));
//! assert!(changes.to_insert.contains(&4));
//!
//! assert_eq!(diff([1, 2], [2, 1]).unwrap_err(), AdminError::NoChange);
//! # Ok::<(), AdminError>(())
//! ```
//!
//! ## Features
//!
//! - **default**: the library
//! - **bin**: the `admin-tree` CLI

pub mod association;
pub mod cache;
pub mod config;
pub mod dept;
pub mod error;
pub mod event;
pub mod forest;
pub mod menu;
pub mod projection;
pub mod record;
#[cfg(test)]
mod tests;

pub use error::*;
