//! Router configuration table.
//!
//! Maps route keys to route metadata (title, path). The navigation
//! catalog reads this table to label menu entries; it never mutates it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::NavResult;

/// Route key of the application landing page.
pub const HOME: &str = "home";

/// Metadata for a registered route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    /// Human-readable page title, reused as the menu label.
    pub title: String,
    /// URL path the route resolves to.
    #[serde(default)]
    pub path: String,
}

/// Router configuration: the route-options table plus the home route key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Route key of the landing page.
    #[serde(default = "default_home")]
    pub home: String,
    /// Route metadata indexed by route key.
    #[serde(default)]
    pub routes: HashMap<String, RouteOptions>,
}

fn default_home() -> String {
    HOME.to_string()
}

impl RouterConfig {
    /// Parse a router configuration from its JSON representation.
    pub fn from_json(json: &str) -> NavResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            home = %config.home,
            routes = config.routes.len(),
            "loaded router configuration"
        );
        Ok(config)
    }

    /// Look up the metadata for a route key.
    pub fn options(&self, key: &str) -> Option<&RouteOptions> {
        self.routes.get(key)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        let mut routes = HashMap::new();
        routes.insert(
            HOME.to_string(),
            RouteOptions {
                title: "Traces".to_string(),
                path: "/".to_string(),
            },
        );
        Self {
            home: default_home(),
            routes,
        }
    }
}
