//! Everything the shell needs to render one frame.

use serde::Serialize;

use atelier_auth::CapabilitySet;
use atelier_modules::{
    ModuleRegistry, NavGroup, NavItem, RouteDef, filter_nav_groups, filter_routes,
};
use atelier_tenancy::{TenantInfo, TenantPaths};

use crate::composer::{Composition, RegionVariant, SidebarState, compose};
use crate::selection::SellerSelection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleLayout {
    pub tenant: TenantInfo,
    pub header: RegionVariant,
    pub sidebar: SidebarState,
    pub dashboard: RegionVariant,
    /// Visible navigation, with paths already tenant-prefixed.
    pub navigation: Vec<NavGroup>,
    /// Routes the current user may open (logical paths).
    pub routes: Vec<RouteDef>,
}

impl ConsoleLayout {
    pub fn build(
        tenant: TenantInfo,
        caps: &CapabilitySet,
        selection: &SellerSelection,
        registry: &ModuleRegistry,
    ) -> Self {
        let Composition {
            header,
            sidebar,
            dashboard,
        } = compose(caps, selection);

        let paths = TenantPaths::new(tenant.scoped_tenant().cloned());
        let mut navigation = filter_nav_groups(&registry.nav_items(), caps);
        for group in &mut navigation {
            for item in &mut group.items {
                prefix_paths(item, &paths);
            }
        }

        Self {
            header,
            sidebar,
            dashboard,
            navigation,
            routes: filter_routes(&registry.routes(), caps),
            tenant,
        }
    }

    pub fn composition(&self) -> Composition {
        Composition {
            header: self.header,
            sidebar: self.sidebar.clone(),
            dashboard: self.dashboard,
        }
    }
}

fn prefix_paths(item: &mut NavItem, paths: &TenantPaths) {
    item.path = paths.path(&item.path);
    for child in &mut item.children {
        prefix_paths(child, paths);
    }
}
