use core::str::FromStr;

use serde::{Deserialize, Serialize};

use atelier_core::ConsoleError;

/// Role claim carried by an authenticated user.
///
/// The set is closed. `Editor` and `Viewer` are reserved: they parse and
/// round-trip, but grant no role flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Seller,
    Artisan,
    Editor,
    Viewer,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Seller,
        Role::Artisan,
        Role::Editor,
        Role::Viewer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Seller => "seller",
            Role::Artisan => "artisan",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s.trim())
            .ok_or_else(|| ConsoleError::unknown_role(s))
    }
}

/// Something that can answer "is this role one of mine?".
///
/// Implemented for a single [`Role`] and for slices/arrays/vectors of roles so
/// callers can pass either shape to [`crate::has_any_role`].
pub trait RoleSet {
    fn contains_role(&self, role: Role) -> bool;
}

impl RoleSet for Role {
    fn contains_role(&self, role: Role) -> bool {
        *self == role
    }
}

impl RoleSet for [Role] {
    fn contains_role(&self, role: Role) -> bool {
        self.contains(&role)
    }
}

impl<const N: usize> RoleSet for [Role; N] {
    fn contains_role(&self, role: Role) -> bool {
        self.contains(&role)
    }
}

impl RoleSet for Vec<Role> {
    fn contains_role(&self, role: Role) -> bool {
        self.contains(&role)
    }
}
