//! Admin session: the single owner of console state.
//!
//! Holds the authenticated user, the seller selection and handles to the
//! shared registry and tenant storage. Capabilities and tenant info are never
//! stored; every accessor re-derives them from the current state.

use std::sync::Arc;

use tracing::info;

use atelier_auth::{CapabilitySet, User, derive};
use atelier_core::TenantId;
use atelier_modules::ModuleRegistry;
use atelier_tenancy::{
    KeyValueStore, TenantInfo, TenantPaths, TenantResolver, TenantStorage, TenantTheme, ThemeSink,
    apply_theme,
};

use crate::composer::{Composition, compose};
use crate::config::ConsoleConfig;
use crate::layout::ConsoleLayout;
use crate::selection::SellerSelection;

#[derive(Debug)]
pub struct AdminSession {
    registry: Arc<ModuleRegistry>,
    resolver: TenantResolver,
    user: Option<User>,
    selection: SellerSelection,
    landing: String,
}

impl AdminSession {
    pub fn new(registry: Arc<ModuleRegistry>, resolver: TenantResolver) -> Self {
        Self {
            registry,
            resolver,
            user: None,
            selection: SellerSelection::default(),
            landing: ConsoleConfig::default().default_landing,
        }
    }

    /// Session wired to the host's durable and session stores.
    pub fn from_config(
        config: &ConsoleConfig,
        registry: Arc<ModuleRegistry>,
        durable: Arc<dyn KeyValueStore>,
        session: Arc<dyn KeyValueStore>,
    ) -> Self {
        let storage = TenantStorage::with_key(durable, session, config.storage_key.clone());
        let mut this = Self::new(registry, TenantResolver::new(storage));
        this.landing = config.default_landing.clone();
        this
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Start a session for `user`.
    ///
    /// `tenant` is the tenant picked on the login form; the user's own tenant
    /// is used when none was picked. Returns the landing URL.
    pub fn login(&mut self, user: User, tenant: Option<TenantId>, remember_me: bool) -> String {
        let tenant = tenant.or_else(|| user.tenant_id.clone());
        match &tenant {
            Some(tenant_id) => self.resolver.store(tenant_id, remember_me),
            None => self.resolver.clear(),
        }

        self.selection = SellerSelection::for_capabilities(&derive(Some(&user)));
        info!(
            role = %user.role,
            tenant = tenant.as_ref().map(TenantId::as_str).unwrap_or(TenantId::DEFAULT),
            remember_me,
            "admin session started"
        );
        self.user = Some(user);

        TenantPaths::new(tenant).path(&self.landing)
    }

    /// End the session: forget the user, the selection and the stored tenant.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(role = %user.role, "admin session ended");
        }
        self.selection = SellerSelection::default();
        self.resolver.clear();
    }

    pub fn capabilities(&self) -> CapabilitySet {
        derive(self.user.as_ref())
    }

    pub fn tenant(&self, current_path: &str) -> TenantInfo {
        self.resolver.resolve(current_path)
    }

    /// URL builder for the tenant active at `current_path`.
    pub fn paths(&self, current_path: &str) -> TenantPaths {
        TenantPaths::new(self.tenant(current_path).scoped_tenant().cloned())
    }

    pub fn seller_selection(&self) -> &SellerSelection {
        &self.selection
    }

    /// Switch the impersonated seller (`""` returns to the platform view).
    pub fn set_seller_id(&mut self, seller_id: &str) -> bool {
        self.selection.set_seller_id(seller_id)
    }

    pub fn composition(&self) -> Composition {
        compose(&self.capabilities(), &self.selection)
    }

    pub fn layout(&self, current_path: &str) -> ConsoleLayout {
        ConsoleLayout::build(
            self.tenant(current_path),
            &self.capabilities(),
            &self.selection,
            &self.registry,
        )
    }

    /// Apply the active tenant's theme; returns the number of properties set.
    pub fn apply_theme<S>(&self, current_path: &str, theme: &TenantTheme, sink: &mut S) -> usize
    where
        S: ThemeSink + ?Sized,
    {
        apply_theme(&self.tenant(current_path), theme, sink)
    }
}
