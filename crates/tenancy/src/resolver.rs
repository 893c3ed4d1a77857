//! Active tenant resolution.
//!
//! Priority chain, first match wins:
//! 1. a tenant id stored at login (session slot, then durable slot)
//! 2. the first path segment of a `/{tenant}/admin/...` URL
//! 3. the reserved `default` tenant

use serde::Serialize;
use tracing::debug;

use atelier_core::TenantId;

use crate::paths::tenant_from_path;
use crate::storage::TenantStorage;

/// Where the active tenant id came from.
///
/// `Subdomain` marks the authoritative value recorded at login time. The name
/// is historical: the value is read from storage, not parsed from a host name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantSource {
    Subdomain,
    Path,
    Default,
}

/// Resolved tenant context. `tenant_id` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInfo {
    pub tenant_id: TenantId,
    pub source: TenantSource,
}

impl TenantInfo {
    pub fn fallback() -> Self {
        Self {
            tenant_id: TenantId::default_tenant(),
            source: TenantSource::Default,
        }
    }

    /// Determined at login rather than re-derived from the URL.
    pub fn is_authoritative(&self) -> bool {
        self.source == TenantSource::Subdomain
    }

    pub fn is_default(&self) -> bool {
        self.tenant_id.is_default()
    }

    /// The tenant as used for URL construction (`None` for the fallback).
    pub fn scoped_tenant(&self) -> Option<&TenantId> {
        (!self.is_default()).then_some(&self.tenant_id)
    }
}

#[derive(Debug, Clone)]
pub struct TenantResolver {
    storage: TenantStorage,
}

impl TenantResolver {
    pub fn new(storage: TenantStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &TenantStorage {
        &self.storage
    }

    /// Resolve the active tenant for `current_path`. Read-only.
    pub fn resolve(&self, current_path: &str) -> TenantInfo {
        let stored = [self.storage.session(), self.storage.durable()]
            .into_iter()
            .flatten()
            .find_map(|raw| match TenantId::parse(raw.as_str()) {
                Ok(id) => Some(id),
                Err(err) => {
                    debug!(value = %raw, error = %err, "ignoring unusable stored tenant");
                    None
                }
            });

        if let Some(tenant_id) = stored {
            debug!(tenant = %tenant_id, "tenant resolved from storage");
            return TenantInfo {
                tenant_id,
                source: TenantSource::Subdomain,
            };
        }

        if let Some(tenant_id) = tenant_from_path(current_path) {
            debug!(tenant = %tenant_id, path = current_path, "tenant resolved from path");
            return TenantInfo {
                tenant_id,
                source: TenantSource::Path,
            };
        }

        TenantInfo::fallback()
    }

    /// Record the tenant chosen at login, replacing any earlier choice.
    /// Always written to the session slot; the durable slot keeps it only
    /// when `remember_me` is set and is cleared otherwise.
    pub fn store(&self, tenant_id: &TenantId, remember_me: bool) {
        self.storage.write(tenant_id.as_str(), remember_me);
    }

    /// Forget the stored tenant (both slots).
    pub fn clear(&self) {
        self.storage.remove();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::{InMemoryStore, KeyValueStore};

    fn tenant(raw: &str) -> TenantId {
        TenantId::parse(raw).unwrap()
    }

    fn resolver() -> TenantResolver {
        TenantResolver::new(TenantStorage::in_memory())
    }

    #[test]
    fn stored_tenant_wins_over_path() {
        let r = resolver();
        r.store(&tenant("acme"), false);

        let info = r.resolve("/other/admin/x");
        assert_eq!(info.tenant_id.as_str(), "acme");
        assert_eq!(info.source, TenantSource::Subdomain);
        assert!(info.is_authoritative());
    }

    #[test]
    fn path_segment_used_without_stored_tenant() {
        let info = resolver().resolve("/other/admin/x");
        assert_eq!(info.tenant_id.as_str(), "other");
        assert_eq!(info.source, TenantSource::Path);
        assert!(!info.is_authoritative());
    }

    #[test]
    fn falls_back_to_default() {
        let info = resolver().resolve("/random/not-admin");
        assert_eq!(info, TenantInfo::fallback());
        assert_eq!(info.tenant_id.as_str(), "default");
        assert!(info.scoped_tenant().is_none());
    }

    #[test]
    fn session_slot_is_read_before_durable_slot() {
        let durable = Arc::new(InMemoryStore::new());
        let session = Arc::new(InMemoryStore::new());
        durable.set("tenantId", "remembered");
        session.set("tenantId", "current");

        let r = TenantResolver::new(TenantStorage::new(durable, session));
        assert_eq!(r.resolve("/").tenant_id.as_str(), "current");
    }

    #[test]
    fn durable_slot_survives_a_fresh_session() {
        let durable = Arc::new(InMemoryStore::new());
        durable.set("tenantId", "remembered");

        let r = TenantResolver::new(TenantStorage::new(durable, Arc::new(InMemoryStore::new())));
        assert_eq!(r.resolve("/").tenant_id.as_str(), "remembered");
    }

    #[test]
    fn later_login_without_remember_me_replaces_remembered_tenant() {
        let r = resolver();
        r.store(&tenant("acme"), true);
        r.store(&tenant("globex"), false);

        assert_eq!(r.resolve("/").tenant_id.as_str(), "globex");
        assert_eq!(r.storage().durable(), None);
    }

    #[test]
    fn session_slot_alone_is_authoritative() {
        let durable = Arc::new(InMemoryStore::new());
        let session = Arc::new(InMemoryStore::new());
        session.set("tenantId", "acme");

        let r = TenantResolver::new(TenantStorage::new(durable, session));
        let info = r.resolve("/");
        assert_eq!(info.tenant_id.as_str(), "acme");
        assert_eq!(info.source, TenantSource::Subdomain);
    }

    #[test]
    fn reserved_or_blank_stored_values_are_skipped() {
        let durable = Arc::new(InMemoryStore::new());
        let session = Arc::new(InMemoryStore::new());
        durable.set("tenantId", "default");
        session.set("tenantId", "  ");

        let r = TenantResolver::new(TenantStorage::new(durable, session));
        let info = r.resolve("/other/admin/x");
        assert_eq!(info.tenant_id.as_str(), "other");
        assert_eq!(info.source, TenantSource::Path);
    }

    #[test]
    fn store_without_remember_me_skips_durable_slot() {
        let r = resolver();
        r.store(&tenant("acme"), false);
        assert_eq!(r.storage().session().as_deref(), Some("acme"));
        assert_eq!(r.storage().durable(), None);

        r.store(&tenant("globex"), true);
        assert_eq!(r.storage().session().as_deref(), Some("globex"));
        assert_eq!(r.storage().durable().as_deref(), Some("globex"));
    }

    #[test]
    fn clear_is_idempotent() {
        let r = resolver();
        r.store(&tenant("acme"), true);

        r.clear();
        let once = r.resolve("/dashboard");
        r.clear();
        let twice = r.resolve("/dashboard");

        assert_eq!(once, TenantInfo::fallback());
        assert_eq!(once, twice);
    }

    #[test]
    fn tenant_info_serializes_source_label() {
        let json = serde_json::to_value(resolver().resolve("/acme/admin")).unwrap();
        assert_eq!(json["tenantId"], "acme");
        assert_eq!(json["source"], "path");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn store_then_resolve_is_authoritative(
                raw in "[a-z][a-z0-9-]{0,15}",
                remember in any::<bool>(),
                path in "(/[a-z]{1,8}){0,4}",
            ) {
                prop_assume!(raw != TenantId::DEFAULT);
                let r = resolver();
                r.store(&tenant(&raw), remember);
                let info = r.resolve(&path);
                prop_assert_eq!(info.tenant_id.as_str(), raw.as_str());
                prop_assert_eq!(info.source, TenantSource::Subdomain);
            }

            #[test]
            fn clear_any_number_of_times_resolves_default(times in 1usize..5) {
                let r = resolver();
                r.store(&tenant("acme"), true);
                for _ in 0..times {
                    r.clear();
                }
                prop_assert_eq!(r.resolve("/dashboard"), TenantInfo::fallback());
            }
        }
    }
}
