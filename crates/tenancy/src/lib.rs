//! `atelier-tenancy` — tenant resolution, tenant-aware URLs and tenant theme.
//!
//! Storage and navigation are injected through small traits so resolution can
//! run without a browser environment.

pub mod paths;
pub mod resolver;
pub mod storage;
pub mod theme;

pub use paths::{Navigate, RecordingNavigator, TenantPaths, strip_tenant_prefix, tenant_from_path};
pub use resolver::{TenantInfo, TenantResolver, TenantSource};
pub use storage::{InMemoryStore, KeyValueStore, TenantStorage};
pub use theme::{TenantTheme, ThemeSink, apply_theme};
