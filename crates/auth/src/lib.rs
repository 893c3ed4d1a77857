//! `atelier-auth` — role and capability derivation (pure, no IO).
//!
//! The authentication collaborator hands over a [`User`] (or nothing); this
//! crate turns it into a [`CapabilitySet`] that every other layer consults.

pub mod capabilities;
pub mod permissions;
pub mod roles;
pub mod user;

pub use capabilities::{CapabilitySet, derive, has_any_role};
pub use permissions::Permission;
pub use roles::{Role, RoleSet};
pub use user::User;
