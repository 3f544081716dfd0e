//! Navigation menu construction and normalization.

mod catalog;
mod item;
mod process;

pub use catalog::traces_navigation;
pub use item::{NavigationItem, NavigationItemType};
pub use process::process_navigation_items;

use crate::error::NavResult;
use crate::router::RouterConfig;

/// Build the navigation menu ready for rendering.
///
/// Composes the catalog with the standard normalization step.
pub fn navigation_menu(config: &RouterConfig) -> NavResult<Vec<NavigationItem>> {
    navigation_menu_with(config, process_navigation_items)
}

/// Build the navigation menu, normalizing with a caller-supplied step.
pub fn navigation_menu_with<F>(config: &RouterConfig, process: F) -> NavResult<Vec<NavigationItem>>
where
    F: FnOnce(Vec<NavigationItem>) -> Vec<NavigationItem>,
{
    let menu = traces_navigation(config)?;
    Ok(process(menu))
}
