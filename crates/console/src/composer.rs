//! Role-based view composition.
//!
//! Picks exactly one variant per UI region from the capability set and, for
//! the sidebar only, the impersonated seller selection. Everything here is a
//! pure function so the state machine can be tested without rendering.

use serde::Serialize;
use tracing::warn;

use atelier_auth::CapabilitySet;
use atelier_core::SellerId;

use crate::selection::SellerSelection;

/// UI regions that receive a role-specific variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Header,
    Sidebar,
    Dashboard,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Header, Region::Sidebar, Region::Dashboard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Sidebar => "sidebar",
            Region::Dashboard => "dashboard",
        }
    }
}

impl core::fmt::Display for Region {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete view variant mounted in a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionVariant {
    /// Platform-wide administration.
    Platform,
    /// Scoped to one seller's shop.
    Shop,
    /// Scoped to an artisan's production work.
    Production,
    /// Nothing is rendered.
    Empty,
}

impl RegionVariant {
    pub fn is_empty(&self) -> bool {
        *self == RegionVariant::Empty
    }
}

/// Sidebar state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SidebarState {
    PlatformAdmin,
    Impersonating { seller_id: SellerId },
    NativeSeller { seller_id: SellerId },
    Artisan,
    Empty,
}

impl SidebarState {
    /// Variant to mount. Impersonating renders exactly what a native seller sees.
    pub fn variant(&self) -> RegionVariant {
        match self {
            SidebarState::PlatformAdmin => RegionVariant::Platform,
            SidebarState::Impersonating { .. } | SidebarState::NativeSeller { .. } => {
                RegionVariant::Shop
            }
            SidebarState::Artisan => RegionVariant::Production,
            SidebarState::Empty => RegionVariant::Empty,
        }
    }

    /// Seller the shop-scoped variant is parameterized by.
    pub fn scoped_seller(&self) -> Option<&SellerId> {
        match self {
            SidebarState::Impersonating { seller_id } | SidebarState::NativeSeller { seller_id } => {
                Some(seller_id)
            }
            _ => None,
        }
    }
}

/// Sidebar selection. `selection` is only consulted for super admins.
pub fn sidebar_state(caps: &CapabilitySet, selection: Option<&SellerId>) -> SidebarState {
    if caps.is_super_admin {
        return match selection {
            Some(seller_id) => SidebarState::Impersonating {
                seller_id: seller_id.clone(),
            },
            None => SidebarState::PlatformAdmin,
        };
    }

    if caps.is_seller {
        return match &caps.seller_id {
            Some(seller_id) => SidebarState::NativeSeller {
                seller_id: seller_id.clone(),
            },
            None => {
                warn!("seller without a seller id, sidebar left empty");
                SidebarState::Empty
            }
        };
    }

    if caps.is_artisan {
        return SidebarState::Artisan;
    }

    SidebarState::Empty
}

/// First match wins: super admin, seller, artisan; otherwise empty.
fn role_variant(caps: &CapabilitySet) -> RegionVariant {
    if caps.is_super_admin {
        RegionVariant::Platform
    } else if caps.is_seller {
        RegionVariant::Shop
    } else if caps.is_artisan {
        RegionVariant::Production
    } else {
        RegionVariant::Empty
    }
}

pub fn header_variant(caps: &CapabilitySet) -> RegionVariant {
    role_variant(caps)
}

pub fn dashboard_variant(caps: &CapabilitySet) -> RegionVariant {
    role_variant(caps)
}

/// One variant per region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composition {
    pub header: RegionVariant,
    pub sidebar: SidebarState,
    pub dashboard: RegionVariant,
}

impl Composition {
    pub fn variant(&self, region: Region) -> RegionVariant {
        match region {
            Region::Header => self.header,
            Region::Sidebar => self.sidebar.variant(),
            Region::Dashboard => self.dashboard,
        }
    }
}

/// Compose every region. Recompute on every capability or selection change.
pub fn compose(caps: &CapabilitySet, selection: &SellerSelection) -> Composition {
    Composition {
        header: header_variant(caps),
        sidebar: sidebar_state(caps, selection.current()),
        dashboard: dashboard_variant(caps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_auth::{Role, User, derive};

    fn seller(id: &str) -> SellerId {
        SellerId::parse(id).unwrap()
    }

    fn caps(role: Role) -> CapabilitySet {
        derive(Some(&User::new(role).with_seller(seller("own"))))
    }

    #[test]
    fn super_admin_without_selection_is_platform_admin() {
        let state = sidebar_state(&caps(Role::SuperAdmin), None);
        assert_eq!(state, SidebarState::PlatformAdmin);
        assert_eq!(state.variant(), RegionVariant::Platform);
        assert!(state.scoped_seller().is_none());
    }

    #[test]
    fn super_admin_with_selection_impersonates() {
        let s1 = seller("s1");
        let state = sidebar_state(&caps(Role::SuperAdmin), Some(&s1));
        assert_eq!(state, SidebarState::Impersonating { seller_id: s1.clone() });
        assert_eq!(state.variant(), RegionVariant::Shop);
        assert_eq!(state.scoped_seller(), Some(&s1));
    }

    #[test]
    fn native_seller_ignores_selection() {
        let other = seller("other");
        for selection in [None, Some(&other)] {
            let state = sidebar_state(&caps(Role::Seller), selection);
            assert_eq!(state, SidebarState::NativeSeller { seller_id: seller("own") });
        }
    }

    #[test]
    fn impersonation_renders_the_native_seller_variant() {
        let own = seller("own");
        let impersonating = sidebar_state(&caps(Role::SuperAdmin), Some(&own));
        let native = sidebar_state(&caps(Role::Seller), None);
        assert_eq!(impersonating.variant(), native.variant());
        assert_eq!(impersonating.scoped_seller(), native.scoped_seller());
    }

    #[test]
    fn artisan_gets_production_sidebar() {
        let state = sidebar_state(&caps(Role::Artisan), Some(&seller("s1")));
        assert_eq!(state, SidebarState::Artisan);
        assert_eq!(state.variant(), RegionVariant::Production);
    }

    #[test]
    fn unauthenticated_and_reserved_roles_render_nothing() {
        let anonymous = derive(None);
        let composition = compose(&anonymous, &SellerSelection::default());
        for region in Region::ALL {
            assert!(composition.variant(region).is_empty());
        }

        let viewer = caps(Role::Viewer);
        assert_eq!(sidebar_state(&viewer, None), SidebarState::Empty);
        assert_eq!(header_variant(&viewer), RegionVariant::Empty);
    }

    #[test]
    fn seller_without_seller_id_fails_closed() {
        let unprovisioned = derive(Some(&User::new(Role::Seller)));
        assert_eq!(sidebar_state(&unprovisioned, None), SidebarState::Empty);
        assert_eq!(header_variant(&unprovisioned), RegionVariant::Shop);
    }

    #[test]
    fn header_and_dashboard_ignore_selection() {
        let admin = caps(Role::SuperAdmin);
        let mut selection = SellerSelection::for_capabilities(&admin);
        selection.set_seller_id("s1");

        let composition = compose(&admin, &selection);
        assert_eq!(composition.header, RegionVariant::Platform);
        assert_eq!(composition.dashboard, RegionVariant::Platform);
        assert_eq!(composition.variant(Region::Sidebar), RegionVariant::Shop);
    }

    #[test]
    fn transitions_follow_the_setter() {
        let admin = caps(Role::SuperAdmin);
        let mut selection = SellerSelection::for_capabilities(&admin);
        assert_eq!(compose(&admin, &selection).sidebar, SidebarState::PlatformAdmin);

        selection.set_seller_id("s1");
        assert_eq!(
            compose(&admin, &selection).sidebar,
            SidebarState::Impersonating { seller_id: seller("s1") }
        );

        selection.set_seller_id("");
        assert_eq!(compose(&admin, &selection).sidebar, SidebarState::PlatformAdmin);
    }

    #[test]
    fn sidebar_state_serializes_with_tag() {
        let json = serde_json::to_value(SidebarState::Impersonating { seller_id: seller("s1") })
            .unwrap();
        assert_eq!(json, serde_json::json!({"state": "impersonating", "seller_id": "s1"}));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn seller_sidebar_never_reads_selection(selected in proptest::option::of("[a-z0-9]{1,8}")) {
                let selected = selected.map(|s| seller(&s));
                let state = sidebar_state(&caps(Role::Seller), selected.as_ref());
                prop_assert_eq!(state, SidebarState::NativeSeller { seller_id: seller("own") });
            }

            #[test]
            fn super_admin_sidebar_tracks_selection(selected in proptest::option::of("[a-z0-9]{1,8}")) {
                let selected = selected.map(|s| seller(&s));
                let state = sidebar_state(&caps(Role::SuperAdmin), selected.as_ref());
                prop_assert_eq!(state.scoped_seller(), selected.as_ref());
            }
        }
    }
}
