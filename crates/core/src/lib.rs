//! `atelier-core` — shared primitives for the admin console core.
//!
//! This crate contains identifiers and the error model only (no I/O).

pub mod error;
pub mod id;

pub use error::{ConsoleError, ConsoleResult};
pub use id::{ArtisanId, SellerId, TenantId};
