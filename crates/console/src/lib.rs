//! `atelier-console` — role-based view composition for the admin console.
//!
//! Ties together tenant resolution, capability derivation and the module
//! registry into an [`AdminSession`] that decides what each region renders.

pub mod composer;
pub mod config;
pub mod layout;
pub mod mount;
pub mod selection;
pub mod session;

pub use composer::{
    Composition, Region, RegionVariant, SidebarState, compose, dashboard_variant, header_variant,
    sidebar_state,
};
pub use config::{ConfigError, ConsoleConfig};
pub use layout::ConsoleLayout;
pub use mount::{MountState, RegionMount};
pub use selection::SellerSelection;
pub use session::AdminSession;
