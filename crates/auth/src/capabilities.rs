//! Role → capability derivation.
//!
//! Every flag here is a function of the user's role alone. The set is cheap to
//! build and is meant to be re-derived whenever the user changes rather than
//! cached.

use serde::Serialize;

use atelier_core::{ArtisanId, SellerId, TenantId};

use crate::{Permission, Role, RoleSet, User};

/// Derived role flags and capabilities for the current user.
///
/// `CapabilitySet::default()` is the unauthenticated set: every flag false and
/// every accessor empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySet {
    pub role: Option<Role>,

    pub is_super_admin: bool,
    pub is_seller: bool,
    pub is_artisan: bool,

    pub can_manage_all_sellers: bool,
    pub can_switch_seller: bool,
    pub can_create_products: bool,
    pub can_delete_products: bool,
    pub can_view_products: bool,
    pub can_update_product_status: bool,

    pub tenant_id: Option<TenantId>,
    pub seller_id: Option<SellerId>,
    pub artisan_id: Option<ArtisanId>,
}

/// Derive the capability set for `user`.
///
/// Total: no user yields the empty set, never an error.
pub fn derive(user: Option<&User>) -> CapabilitySet {
    let Some(user) = user else {
        return CapabilitySet::default();
    };

    let role = user.role;
    let is_super_admin = role == Role::SuperAdmin;
    let is_seller = role == Role::Seller;
    let is_artisan = role == Role::Artisan;

    CapabilitySet {
        role: Some(role),
        is_super_admin,
        is_seller,
        is_artisan,
        can_manage_all_sellers: is_super_admin,
        can_switch_seller: is_super_admin,
        can_create_products: is_super_admin || is_seller,
        can_delete_products: is_super_admin || is_seller,
        can_view_products: true,
        can_update_product_status: true,
        tenant_id: user.tenant_id.clone(),
        seller_id: user.seller_id.clone(),
        artisan_id: user.artisan_id.clone(),
    }
}

/// Whether `user` holds any of `roles`. Accepts a single role or a list.
pub fn has_any_role<R>(user: Option<&User>, roles: &R) -> bool
where
    R: RoleSet + ?Sized,
{
    user.is_some_and(|u| roles.contains_role(u.role))
}

impl CapabilitySet {
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    /// Whether a permission tag is granted by this set.
    ///
    /// Unknown permission names are never granted.
    pub fn grants(&self, permission: &Permission) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        if let Some(role) = permission.as_role() {
            return self.role == Some(role);
        }
        match permission.as_str() {
            "sellers.manage" => self.can_manage_all_sellers,
            "sellers.switch" => self.can_switch_seller,
            "products.create" => self.can_create_products,
            "products.delete" => self.can_delete_products,
            "products.view" => self.can_view_products,
            "products.update_status" => self.can_update_product_status,
            _ => false,
        }
    }

    /// Every well-known permission granted by this set (for display/debugging).
    pub fn granted_permissions(&self) -> Vec<Permission> {
        let mut granted: Vec<Permission> = [
            Permission::MANAGE_ALL_SELLERS,
            Permission::SWITCH_SELLER,
            Permission::CREATE_PRODUCTS,
            Permission::DELETE_PRODUCTS,
            Permission::VIEW_PRODUCTS,
            Permission::UPDATE_PRODUCT_STATUS,
        ]
        .into_iter()
        .filter(|p| self.grants(p))
        .collect();

        if let Some(role) = self.role {
            granted.push(Permission::role(role));
        }
        granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User::new(role)
    }

    #[test]
    fn super_admin_row() {
        let caps = derive(Some(&user(Role::SuperAdmin)));
        assert!(caps.is_super_admin && !caps.is_seller && !caps.is_artisan);
        assert!(caps.can_manage_all_sellers);
        assert!(caps.can_switch_seller);
        assert!(caps.can_create_products);
        assert!(caps.can_delete_products);
    }

    #[test]
    fn seller_row() {
        let caps = derive(Some(&user(Role::Seller)));
        assert!(!caps.is_super_admin && caps.is_seller && !caps.is_artisan);
        assert!(!caps.can_manage_all_sellers);
        assert!(!caps.can_switch_seller);
        assert!(caps.can_create_products);
        assert!(caps.can_delete_products);
    }

    #[test]
    fn artisan_row() {
        let caps = derive(Some(&user(Role::Artisan)));
        assert!(!caps.is_super_admin && !caps.is_seller && caps.is_artisan);
        assert!(!caps.can_manage_all_sellers);
        assert!(!caps.can_switch_seller);
        assert!(!caps.can_create_products);
        assert!(!caps.can_delete_products);
    }

    #[test]
    fn no_user_yields_empty_set() {
        let caps = derive(None);
        assert_eq!(caps, CapabilitySet::default());
        assert!(!caps.is_authenticated());
        assert!(!caps.can_view_products);
        assert!(!caps.can_update_product_status);
        assert!(caps.granted_permissions().is_empty());
    }

    #[test]
    fn reserved_roles_only_get_unconditional_capabilities() {
        for role in [Role::Editor, Role::Viewer] {
            let caps = derive(Some(&user(role)));
            assert!(!caps.is_super_admin && !caps.is_seller && !caps.is_artisan);
            assert!(!caps.can_create_products);
            assert!(caps.can_view_products);
            assert!(caps.can_update_product_status);
        }
    }

    #[test]
    fn hierarchy_accessors_come_from_user() {
        let u = User::new(Role::Seller)
            .with_tenant(TenantId::parse("acme").unwrap())
            .with_seller(SellerId::parse("s1").unwrap());
        let caps = derive(Some(&u));
        assert_eq!(caps.tenant_id.as_ref().map(TenantId::as_str), Some("acme"));
        assert_eq!(caps.seller_id.as_ref().map(SellerId::as_str), Some("s1"));
        assert!(caps.artisan_id.is_none());
    }

    #[test]
    fn has_any_role_accepts_single_role_or_list() {
        let seller = user(Role::Seller);
        assert!(has_any_role(Some(&seller), &Role::Seller));
        assert!(!has_any_role(Some(&seller), &Role::Artisan));
        assert!(has_any_role(Some(&seller), &[Role::SuperAdmin, Role::Seller]));
        assert!(has_any_role(Some(&seller), &vec![Role::Seller]));
        assert!(!has_any_role(Some(&seller), &[] as &[Role]));
        assert!(!has_any_role(None, &Role::ALL));
    }

    #[test]
    fn grants_maps_permission_tags() {
        let caps = derive(Some(&user(Role::Artisan)));
        assert!(caps.grants(&Permission::VIEW_PRODUCTS));
        assert!(caps.grants(&Permission::UPDATE_PRODUCT_STATUS));
        assert!(!caps.grants(&Permission::CREATE_PRODUCTS));
        assert!(caps.grants(&Permission::role(Role::Artisan)));
        assert!(!caps.grants(&Permission::role(Role::Seller)));
        assert!(!caps.grants(&Permission::new("reports.export")));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_role() -> impl Strategy<Value = Role> {
            prop::sample::select(Role::ALL.to_vec())
        }

        proptest! {
            #[test]
            fn at_most_one_role_flag_is_set(role in any_role()) {
                let caps = derive(Some(&User::new(role)));
                let flags = [caps.is_super_admin, caps.is_seller, caps.is_artisan]
                    .into_iter()
                    .filter(|f| *f)
                    .count();
                let expected = usize::from(matches!(role, Role::SuperAdmin | Role::Seller | Role::Artisan));
                prop_assert_eq!(flags, expected);
            }

            #[test]
            fn view_and_status_update_always_granted(role in any_role()) {
                let caps = derive(Some(&User::new(role)));
                prop_assert!(caps.can_view_products);
                prop_assert!(caps.can_update_product_status);
            }

            #[test]
            fn derivation_is_deterministic(role in any_role()) {
                let u = User::new(role);
                prop_assert_eq!(derive(Some(&u)), derive(Some(&u)));
            }
        }
    }
}
