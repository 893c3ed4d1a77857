//! Console error model.

use thiserror::Error;

/// Result type used at the parse boundaries of the console core.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Boundary error.
///
/// The composition operations themselves are total; these errors only surface
/// when raw strings are turned into typed values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// An identifier was malformed (empty, contains a path separator, ...).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The identifier is reserved and cannot name a real tenant.
    #[error("reserved tenant identifier '{0}'")]
    ReservedTenant(String),

    /// A role claim outside the closed role set.
    #[error("unknown role '{0}'")]
    UnknownRole(String),
}

impl ConsoleError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn reserved_tenant(value: impl Into<String>) -> Self {
        Self::ReservedTenant(value.into())
    }

    pub fn unknown_role(value: impl Into<String>) -> Self {
        Self::UnknownRole(value.into())
    }
}
