//! Frontend router configuration.
//!
//! Two schema generations are produced from the same forest:
//! - [RouteNode]: `hidden` and `alwaysShow` sit on the route itself.
//! - [NextRouteNode]: both flags move into `meta`.
//!
//! In both, `name` is the stringified record id and `children` is always serialized, empty
//! or not, so navigation components can iterate it at every depth.

use super::Projection;
use crate::{
    config::{TreeConfig, DEFAULT_STATUS_ENABLED},
    record::TreeRecord,
};
use serde::{Deserialize, Serialize};

/// Navigation fields a record must expose to be rendered as a route.
pub trait RouteSource: TreeRecord {
    fn route_path(&self) -> Option<&str>;
    fn redirect(&self) -> Option<&str>;
    fn component(&self) -> Option<&str>;
    fn icon(&self) -> Option<&str>;
    /// Role codes allowed to see this route.
    fn role_tags(&self) -> &[String];
    fn visible(&self) -> i32;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub meta: RouteMeta,
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub always_show: bool,
    #[serde(default)]
    pub children: Vec<RouteNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRouteMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub always_show: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRouteNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub meta: NextRouteMeta,
    #[serde(default)]
    pub children: Vec<NextRouteNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteProjection {
    status_enabled: i32,
}

impl RouteProjection {
    pub fn new(status_enabled: i32) -> Self {
        RouteProjection { status_enabled }
    }

    pub fn from_config(config: &TreeConfig) -> Self {
        RouteProjection::new(config.status_enabled)
    }
}

impl Default for RouteProjection {
    fn default() -> Self {
        RouteProjection::new(DEFAULT_STATUS_ENABLED)
    }
}

impl<R: RouteSource> Projection<R> for RouteProjection {
    type Output = RouteNode;

    fn project(&self, record: &R, children: Vec<RouteNode>) -> RouteNode {
        RouteNode {
            name: record.id().to_string(),
            path: record.route_path().map(str::to_string),
            redirect: record.redirect().map(str::to_string),
            component: record.component().map(str::to_string),
            meta: RouteMeta {
                title: record.name().to_string(),
                icon: record.icon().map(str::to_string),
                roles: record.role_tags().to_vec(),
            },
            hidden: record.visible() != self.status_enabled,
            always_show: !children.is_empty(),
            children,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextRouteProjection {
    status_enabled: i32,
}

impl NextRouteProjection {
    pub fn new(status_enabled: i32) -> Self {
        NextRouteProjection { status_enabled }
    }

    pub fn from_config(config: &TreeConfig) -> Self {
        NextRouteProjection::new(config.status_enabled)
    }
}

impl Default for NextRouteProjection {
    fn default() -> Self {
        NextRouteProjection::new(DEFAULT_STATUS_ENABLED)
    }
}

impl<R: RouteSource> Projection<R> for NextRouteProjection {
    type Output = NextRouteNode;

    fn project(&self, record: &R, children: Vec<NextRouteNode>) -> NextRouteNode {
        NextRouteNode {
            name: record.id().to_string(),
            path: record.route_path().map(str::to_string),
            redirect: record.redirect().map(str::to_string),
            component: record.component().map(str::to_string),
            meta: NextRouteMeta {
                title: record.name().to_string(),
                icon: record.icon().map(str::to_string),
                roles: record.role_tags().to_vec(),
                hidden: record.visible() != self.status_enabled,
                always_show: !children.is_empty(),
            },
            children,
        }
    }
}
