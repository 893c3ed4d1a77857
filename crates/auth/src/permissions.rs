use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::Role;

/// Permission tag attached to navigation entries and routes.
///
/// Permissions are opaque dotted strings (e.g. `"products.create"`). The
/// capability layer knows how to grant the well-known ones below plus the
/// `role.<name>` family; anything else is never granted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    pub const MANAGE_ALL_SELLERS: Permission = Permission(Cow::Borrowed("sellers.manage"));
    pub const SWITCH_SELLER: Permission = Permission(Cow::Borrowed("sellers.switch"));
    pub const CREATE_PRODUCTS: Permission = Permission(Cow::Borrowed("products.create"));
    pub const DELETE_PRODUCTS: Permission = Permission(Cow::Borrowed("products.delete"));
    pub const VIEW_PRODUCTS: Permission = Permission(Cow::Borrowed("products.view"));
    pub const UPDATE_PRODUCT_STATUS: Permission =
        Permission(Cow::Borrowed("products.update_status"));

    const ROLE_PREFIX: &'static str = "role.";

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Permission held by every user with the given role.
    pub fn role(role: Role) -> Self {
        Self(Cow::Owned(format!("{}{}", Self::ROLE_PREFIX, role.as_str())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The role this permission names, if it is a `role.<name>` tag.
    pub fn as_role(&self) -> Option<Role> {
        self.as_str()
            .strip_prefix(Self::ROLE_PREFIX)
            .and_then(|name| name.parse().ok())
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
