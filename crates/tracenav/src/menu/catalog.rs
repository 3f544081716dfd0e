//! Navigation catalog for the trace explorer.

use crate::error::{NavError, NavResult};
use crate::menu::item::NavigationItem;
use crate::router::RouterConfig;

/// Build the raw top-level navigation menu.
///
/// Yields a single entry for the home route, labeled with that route's
/// configured title. Items are rebuilt on every call; nothing is cached.
pub fn traces_navigation(config: &RouterConfig) -> NavResult<Vec<NavigationItem>> {
    let options = config.options(&config.home).ok_or_else(|| NavError::UnknownRoute {
        key: config.home.clone(),
    })?;

    Ok(vec![NavigationItem {
        label: Some(options.title.clone()),
        value: Some(config.home.clone()),
        ..Default::default()
    }])
}
