//! Normalization of raw navigation items for rendering.

use crate::menu::item::NavigationItem;

/// Normalize a raw item sequence into the list the renderer consumes.
///
/// Drops entries flagged as hidden, recursively processes submenus,
/// removes submenus that end up empty, and drops entries left with
/// nothing to render. Relative order of surviving entries is preserved.
pub fn process_navigation_items(items: Vec<NavigationItem>) -> Vec<NavigationItem> {
    items
        .into_iter()
        .filter(|item| !item.hide)
        .filter_map(|mut item| {
            if let Some(submenu) = item.submenu.take() {
                let submenu = process_navigation_items(submenu);
                if !submenu.is_empty() {
                    item.submenu = Some(submenu);
                }
            }

            let renderable =
                item.label.is_some() || item.value.is_some() || item.submenu.is_some();
            renderable.then_some(item)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn link(label: &str, value: &str) -> NavigationItem {
        NavigationItem {
            label: Some(label.to_string()),
            value: Some(value.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn passes_visible_items_unchanged() {
        let items = vec![link("Traces", "home")];
        assert_eq!(process_navigation_items(items.clone()), items);
    }

    #[test]
    fn drops_hidden_items() {
        let hidden = NavigationItem {
            hide: true,
            ..link("Secret", "secret")
        };
        let items = vec![link("Traces", "home"), hidden, link("Docs", "docs")];

        let processed = process_navigation_items(items);
        assert_eq!(processed, vec![link("Traces", "home"), link("Docs", "docs")]);
    }

    #[test]
    fn filters_submenus_recursively() {
        let parent = NavigationItem {
            label: Some("More".to_string()),
            submenu: Some(vec![
                link("Docs", "docs"),
                NavigationItem {
                    hide: true,
                    ..link("Hidden", "hidden")
                },
            ]),
            ..Default::default()
        };

        let processed = process_navigation_items(vec![parent]);
        assert_eq!(processed.len(), 1);
        assert_eq!(processed[0].submenu.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn prunes_emptied_submenus() {
        // Parent keeps its label, so it survives without the submenu.
        let labeled = NavigationItem {
            label: Some("More".to_string()),
            submenu: Some(vec![NavigationItem {
                hide: true,
                ..link("Hidden", "hidden")
            }]),
            ..Default::default()
        };
        let processed = process_navigation_items(vec![labeled]);
        assert_eq!(processed.len(), 1);
        assert!(processed[0].submenu.is_none());

        // A bare submenu holder with nothing left is dropped entirely.
        let bare = NavigationItem {
            submenu: Some(vec![NavigationItem {
                hide: true,
                ..link("Hidden", "hidden")
            }]),
            ..Default::default()
        };
        assert!(process_navigation_items(vec![bare]).is_empty());
    }

    #[test]
    fn drops_unrenderable_items() {
        let items = vec![NavigationItem::default(), link("Traces", "home")];
        assert_eq!(process_navigation_items(items), vec![link("Traces", "home")]);
    }
}
