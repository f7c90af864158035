//! Tree and listing configuration.
//!
//! [TreeConfig] carries the constants the listings depend on (root parent id, the status
//! value meaning "enabled/visible", the layout component name used for path derivation,
//! the route cache key and the descent depth cap). A [ConfigProvider] loads and stores it;
//! [TomlConfigProvider] keeps it in the `[tree]` table of a TOML file.

use crate::error::AdminError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{
    fs::{read_to_string, write},
    path::PathBuf,
};

pub const DEFAULT_ROOT_ID: i64 = 0;
pub const DEFAULT_STATUS_ENABLED: i32 = 1;
pub const DEFAULT_LAYOUT_COMPONENT: &str = "Layout";
pub const DEFAULT_ROUTE_CACHE_KEY: &str = "routes";
pub const DEFAULT_MAX_DEPTH: usize = 256;

const CONFIG_TABLE: &str = "tree";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Parent id shared by all top-level menus and departments.
    pub root_id: i64,
    /// Status/visibility value meaning "enabled". Anything else hides a route.
    pub status_enabled: i32,
    /// Component name marking a menu as a layout container.
    pub layout_component: String,
    pub route_cache_key: String,
    pub max_depth: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            root_id: DEFAULT_ROOT_ID,
            status_enabled: DEFAULT_STATUS_ENABLED,
            layout_component: DEFAULT_LAYOUT_COMPONENT.to_string(),
            route_cache_key: DEFAULT_ROUTE_CACHE_KEY.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn load(&self) -> Result<TreeConfig, AdminError>;
    fn store(&self, config: &TreeConfig) -> Result<(), AdminError>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TomlConfigProvider {
    path: PathBuf,
}

impl TomlConfigProvider {
    pub fn new(path: PathBuf) -> Self {
        TomlConfigProvider { path }
    }
}

impl ConfigProvider for TomlConfigProvider {
    fn load(&self) -> Result<TreeConfig, AdminError> {
        tracing::debug!("Attempting to read tree config from: {:?}", &self.path);
        if !self.path.exists() {
            tracing::debug!("Config file not found, using default tree config.");
            return Ok(TreeConfig::default());
        }
        let content = read_to_string(&self.path)?;
        let mut config: BTreeMap<String, TreeConfig> = toml::from_str(&content)?;
        config.remove(CONFIG_TABLE).ok_or_else(|| {
            AdminError::NotFound(format!("[{CONFIG_TABLE}] table not found in config"))
        })
    }

    fn store(&self, config: &TreeConfig) -> Result<(), AdminError> {
        tracing::debug!("Attempting to write tree config to: {:?}", &self.path);
        let mut tables = BTreeMap::new();
        tables.insert(CONFIG_TABLE.to_string(), config);
        let toml_string = toml::to_string(&tables)?;
        write(&self.path, toml_string)?;
        Ok(())
    }
}
