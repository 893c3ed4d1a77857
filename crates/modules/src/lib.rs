//! `atelier-modules` — feature modules and the registry that composes them.
//!
//! Modules contribute routes and navigation entries at startup. The registry
//! merges them; permission filtering happens afterwards in [`filter`].

pub mod catalog;
pub mod filter;
pub mod module;
pub mod registry;

pub use catalog::builtin_modules;
pub use filter::{filter_nav_groups, filter_routes, nav_item_visible};
pub use module::{Module, NavGroup, NavItem, RouteDef};
pub use registry::{ModuleRegistry, RouteCollision};
