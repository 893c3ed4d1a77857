//! Tenant theme values.
//!
//! Theme entries are opaque key/value pairs (typically CSS custom properties);
//! this layer only decides *whether* they are applied, never what they mean.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resolver::TenantInfo;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantTheme(BTreeMap<String, String>);

impl TenantTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for TenantTheme
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Target that theme values are written into (document root style, ...).
pub trait ThemeSink {
    fn set_property(&mut self, key: &str, value: &str);
}

impl ThemeSink for BTreeMap<String, String> {
    fn set_property(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// Apply `theme` for `tenant`. The `default` tenant never gets a theme.
///
/// Returns the number of properties written.
pub fn apply_theme<S>(tenant: &TenantInfo, theme: &TenantTheme, sink: &mut S) -> usize
where
    S: ThemeSink + ?Sized,
{
    if tenant.is_default() {
        debug!("default tenant, skipping theme");
        return 0;
    }

    for (key, value) in theme.iter() {
        sink.set_property(key, value);
    }
    debug!(tenant = %tenant.tenant_id, properties = theme.len(), "tenant theme applied");
    theme.len()
}
