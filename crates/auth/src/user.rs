//! Authenticated user record as handed over by the authentication layer.

use serde::{Deserialize, Serialize};

use atelier_core::{ArtisanId, SellerId, TenantId};

use crate::Role;

/// Identity with exactly one role plus optional hierarchy links.
///
/// The console never mutates a user; it only reads it to derive capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<SellerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artisan_id: Option<ArtisanId>,
}

impl User {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            tenant_id: None,
            seller_id: None,
            artisan_id: None,
        }
    }

    pub fn with_tenant(mut self, tenant_id: TenantId) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    pub fn with_seller(mut self, seller_id: SellerId) -> Self {
        self.seller_id = Some(seller_id);
        self
    }

    pub fn with_artisan(mut self, artisan_id: ArtisanId) -> Self {
        self.artisan_id = Some(artisan_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_auth_payload() {
        let user: User = serde_json::from_str(
            r#"{"role":"seller","tenantId":"acme","sellerId":"s1"}"#,
        )
        .unwrap();

        assert_eq!(user.role, Role::Seller);
        assert_eq!(user.tenant_id.unwrap().as_str(), "acme");
        assert_eq!(user.seller_id.unwrap().as_str(), "s1");
        assert!(user.artisan_id.is_none());
    }

    #[test]
    fn rejects_unknown_role_claim() {
        let result = serde_json::from_str::<User>(r#"{"role":"owner"}"#);
        assert!(result.is_err());
    }
}
