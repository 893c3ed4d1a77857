//! Strongly-typed identifiers used across the console.
//!
//! Identifiers are opaque, non-empty strings that never contain `/`, so they
//! can be embedded in URL path segments verbatim.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ConsoleError;

/// Identifier of a tenant (multi-tenant boundary).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TenantId(String);

/// Identifier of a seller (shop owner).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SellerId(String);

/// Identifier of an artisan (production side).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ArtisanId(String);

fn validate(name: &str, value: String) -> Result<String, ConsoleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConsoleError::invalid_id(format!("{name}: empty")));
    }
    if trimmed.contains('/') {
        return Err(ConsoleError::invalid_id(format!(
            "{name}: '{trimmed}' contains '/'"
        )));
    }
    Ok(trimmed.to_string())
}

macro_rules! impl_string_newtype {
    ($t:ident) => {
        impl $t {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = ConsoleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $t {
            type Error = ConsoleError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_newtype!(TenantId);
impl_string_newtype!(SellerId);
impl_string_newtype!(ArtisanId);

impl TenantId {
    /// The fallback tenant used when nothing else resolves.
    pub const DEFAULT: &'static str = "default";

    /// Parse a real tenant identifier. The reserved `default` value is rejected.
    pub fn parse(value: impl Into<String>) -> Result<Self, ConsoleError> {
        let value = validate("TenantId", value.into())?;
        if value == Self::DEFAULT {
            return Err(ConsoleError::reserved_tenant(value));
        }
        Ok(Self(value))
    }

    /// The reserved fallback tenant.
    pub fn default_tenant() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl SellerId {
    pub fn parse(value: impl Into<String>) -> Result<Self, ConsoleError> {
        validate("SellerId", value.into()).map(Self)
    }
}

impl ArtisanId {
    pub fn parse(value: impl Into<String>) -> Result<Self, ConsoleError> {
        validate("ArtisanId", value.into()).map(Self)
    }
}
