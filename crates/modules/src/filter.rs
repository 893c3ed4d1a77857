//! Capability-based pruning of the route/navigation surface.
//!
//! The registry never filters; views call into here with the capability set
//! derived for the current render.

use atelier_auth::{CapabilitySet, Permission};

use crate::module::{NavGroup, NavItem, RouteDef};

fn permitted(caps: &CapabilitySet, permissions: Option<&[Permission]>) -> bool {
    if !caps.is_authenticated() {
        return false;
    }
    match permissions {
        None => true,
        Some(required) => required.iter().any(|p| caps.grants(p)),
    }
}

/// Whether a single entry (ignoring its children) is visible.
pub fn nav_item_visible(item: &NavItem, caps: &CapabilitySet) -> bool {
    permitted(caps, item.permissions.as_deref())
}

fn filter_item(item: &NavItem, caps: &CapabilitySet) -> Option<NavItem> {
    if !nav_item_visible(item, caps) {
        return None;
    }
    if item.children.is_empty() {
        return Some(item.clone());
    }

    let children: Vec<NavItem> = item
        .children
        .iter()
        .filter_map(|child| filter_item(child, caps))
        .collect();
    // a parent whose whole subtree is hidden has nothing left to open
    if children.is_empty() {
        return None;
    }

    Some(NavItem {
        children,
        ..item.clone()
    })
}

/// Prune groups to what `caps` may see; groups left empty are dropped.
pub fn filter_nav_groups(groups: &[NavGroup], caps: &CapabilitySet) -> Vec<NavGroup> {
    groups
        .iter()
        .filter_map(|group| {
            let items: Vec<NavItem> = group
                .items
                .iter()
                .filter_map(|item| filter_item(item, caps))
                .collect();
            (!items.is_empty()).then(|| NavGroup {
                title: group.title.clone(),
                items,
            })
        })
        .collect()
}

pub fn filter_routes(routes: &[RouteDef], caps: &CapabilitySet) -> Vec<RouteDef> {
    routes
        .iter()
        .filter(|route| permitted(caps, route.permissions.as_deref()))
        .cloned()
        .collect()
}
