//! Output shapes over a [crate::forest::Forest].
//!
//! Every shape is a [Projection]: a per-node mapping from a record and its already projected
//! children to an output node. The forest walk itself lives in
//! [crate::forest::Forest::project], so the shapes only decide which fields they copy and
//! whether empty children are serialized.
//!
//! - [display]: `{id, label}` and `{value, label}` pickers, children omitted on leaves.
//! - [table]: the whole record flattened plus children, omitted on leaves.
//! - [router]: legacy and next-generation frontend route configuration, children always
//!   present.

pub mod display;
pub mod router;
pub mod table;

pub use display::{IdLabelNode, IdLabelProjection, ValueLabelNode, ValueLabelProjection};
pub use router::{
    NextRouteMeta, NextRouteNode, NextRouteProjection, RouteMeta, RouteNode, RouteProjection,
    RouteSource,
};
pub use table::{TableNode, TableProjection};

pub trait Projection<R> {
    type Output;

    fn project(&self, record: &R, children: Vec<Self::Output>) -> Self::Output;
}
