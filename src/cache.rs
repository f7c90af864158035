//! Memoized route projections.
//!
//! Route listings are read on every page load and change only when a menu is written, so the
//! presentation layer may keep them in a [RouteCache]. The cache is a capability the caller
//! owns and passes in; nothing here is process-global. Entries hold serialized JSON and are
//! dropped by [invalidate_for] when a [RecordEvent] touches menus.

use crate::{config::TreeConfig, error::AdminError, event::RecordEvent};
use parking_lot::RwLock;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;

pub trait RouteCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: String);
    fn evict(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemoryRouteCache {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryRouteCache {
    pub fn new() -> Self {
        MemoryRouteCache::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl RouteCache for MemoryRouteCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: String) {
        self.entries.write().insert(key.to_string(), value);
    }

    fn evict(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// Cache keys of the legacy and next-generation route listings.
pub fn route_cache_keys(config: &TreeConfig) -> [String; 2] {
    [
        config.route_cache_key.clone(),
        format!("{}:next", config.route_cache_key),
    ]
}

/// Read-through lookup: return the cached value under `key`, or run `load`, cache its result
/// and return it. Entries that no longer decode are reloaded.
pub fn cached<T, F>(cache: &dyn RouteCache, key: &str, load: F) -> Result<T, AdminError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Result<T, AdminError>,
{
    if let Some(raw) = cache.get(key) {
        match serde_json::from_str(&raw) {
            Ok(value) => {
                tracing::debug!("Route cache hit for {key}");
                return Ok(value);
            }
            Err(e) => tracing::warn!("Discarding undecodable route cache entry {key}: {e}"),
        }
    }
    let value = load()?;
    cache.put(key, serde_json::to_string(&value)?);
    Ok(value)
}

/// Evict the route listings if `event` makes them stale. Returns whether anything was evicted.
pub fn invalidate_for(cache: &dyn RouteCache, event: &RecordEvent, config: &TreeConfig) -> bool {
    if !event.invalidates_routes() {
        return false;
    }
    tracing::debug!("{event} invalidates cached routes");
    for key in route_cache_keys(config) {
        cache.evict(&key);
    }
    true
}
