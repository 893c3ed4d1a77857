//! Tenant-aware URL construction and detection.
//!
//! Canonical forms:
//! - tenant-scoped: `/{tenant}/admin/{rest}`
//! - untenanted: `/{rest}`

use atelier_core::TenantId;

const ADMIN_SEGMENT: &str = "admin";

/// Detect the tenant of a `/{tenant}/admin/...` path.
///
/// Only the first segment before `admin` is recognized. A reserved or
/// malformed segment yields `None`.
pub fn tenant_from_path(path: &str) -> Option<TenantId> {
    let rest = path.strip_prefix('/')?;
    let mut segments = rest.splitn(3, '/');
    let tenant = segments.next()?;
    if segments.next()? != ADMIN_SEGMENT {
        return None;
    }
    TenantId::parse(tenant).ok()
}

/// Split a tenant-scoped path into its tenant and logical path.
///
/// Untenanted paths come back unchanged with no tenant.
pub fn strip_tenant_prefix(path: &str) -> (Option<TenantId>, String) {
    let Some(tenant) = tenant_from_path(path) else {
        return (None, path.to_string());
    };
    let logical = match path.splitn(4, '/').nth(3) {
        Some(rest) if !rest.is_empty() => format!("/{rest}"),
        _ => "/".to_string(),
    };
    (Some(tenant), logical)
}

/// Receives navigation requests (router push, history API, ...).
pub trait Navigate {
    fn push(&mut self, url: &str);
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    history: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Navigate for RecordingNavigator {
    fn push(&mut self, url: &str) {
        self.history.push(url.to_string());
    }
}

/// URL builder bound to one tenant.
///
/// `path` and `navigate` share the same rewrite so a link and the navigation
/// it triggers always point at the same URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantPaths {
    tenant: Option<TenantId>,
}

impl TenantPaths {
    /// `None` or the `default` tenant produce untenanted paths.
    pub fn new(tenant: Option<TenantId>) -> Self {
        Self {
            tenant: tenant.filter(|t| !t.is_default()),
        }
    }

    pub fn tenant(&self) -> Option<&TenantId> {
        self.tenant.as_ref()
    }

    /// Link-only getter.
    pub fn path(&self, logical: &str) -> String {
        let rest = logical.trim_start_matches('/');
        match &self.tenant {
            Some(tenant) => format!("/{tenant}/{ADMIN_SEGMENT}/{rest}"),
            None => format!("/{rest}"),
        }
    }

    /// Navigation action; pushes exactly what [`TenantPaths::path`] returns.
    pub fn navigate<N>(&self, navigator: &mut N, logical: &str)
    where
        N: Navigate + ?Sized,
    {
        let url = self.path(logical);
        navigator.push(&url);
    }
}
