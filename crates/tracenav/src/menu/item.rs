//! Navigation item model.

use serde::{Deserialize, Serialize};

/// Navigation semantics of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationItemType {
    InternalLink,
    ExternalLink,
}

/// One entry in the navigation menu.
///
/// Every field is optional: an entry may carry only a label (a group
/// header), only a submenu, or a label/value pair for a plain link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Display text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Route key used for selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Whether the entry is suppressed from rendering. Absent means false.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide: bool,

    /// Nested entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Vec<NavigationItem>>,

    /// Internal vs external link.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<NavigationItemType>,
}
