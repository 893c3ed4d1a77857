//! Layout preview: composes the console for one user and prints it as JSON.
//!
//! Inputs (environment):
//! - `ATELIER_ROLE` - role claim (default: super_admin)
//! - `ATELIER_TENANT` - tenant picked at login (optional)
//! - `ATELIER_SELLER_ID` - the user's own seller id (optional)
//! - `ATELIER_ARTISAN_ID` - the user's own artisan id (optional)
//! - `ATELIER_SELECT_SELLER` - seller to impersonate after login (optional)
//! - `ATELIER_PATH` - current URL path (default: the landing URL)

use std::sync::Arc;

use anyhow::Context;
use serde_json::json;

use atelier_auth::{Role, User};
use atelier_console::{AdminSession, ConsoleConfig, Region, RegionMount};
use atelier_core::{ArtisanId, SellerId, TenantId};
use atelier_modules::ModuleRegistry;
use atelier_tenancy::InMemoryStore;

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env()?;
    atelier_observability::init(config.log_format);

    let role: Role = env("ATELIER_ROLE")
        .as_deref()
        .unwrap_or("super_admin")
        .parse()
        .context("ATELIER_ROLE")?;

    let mut user = User::new(role);
    if let Some(raw) = env("ATELIER_SELLER_ID") {
        user = user.with_seller(SellerId::parse(raw).context("ATELIER_SELLER_ID")?);
    }
    if let Some(raw) = env("ATELIER_ARTISAN_ID") {
        user = user.with_artisan(ArtisanId::parse(raw).context("ATELIER_ARTISAN_ID")?);
    }
    let tenant = env("ATELIER_TENANT")
        .map(TenantId::parse)
        .transpose()
        .context("ATELIER_TENANT")?;

    let registry = Arc::new(ModuleRegistry::with_builtin());
    for collision in registry.route_collisions() {
        tracing::warn!(path = %collision.path, modules = ?collision.module_ids, "route collision");
    }

    let mut session = AdminSession::from_config(
        &config,
        registry,
        Arc::new(InMemoryStore::new()),
        Arc::new(InMemoryStore::new()),
    );
    let landing = session.login(user, tenant, false);

    if let Some(seller) = env("ATELIER_SELECT_SELLER") {
        if !session.set_seller_id(&seller) {
            tracing::warn!(seller = %seller, "seller selection refused");
        }
    }

    let current_path = env("ATELIER_PATH").unwrap_or_else(|| landing.clone());
    let layout = session.layout(&current_path);

    let composition = layout.composition();
    let mut mounts: Vec<RegionMount<String>> = Region::ALL
        .into_iter()
        .map(|region| {
            let variant = composition.variant(region);
            RegionMount::spawn(region, variant, async move {
                format!("{region}/{variant:?}")
            })
        })
        .collect();

    let mut mounted = serde_json::Map::new();
    for mount in &mut mounts {
        let view = mount.ready().await;
        mounted.insert(mount.region().to_string(), json!(view));
    }

    let output = json!({
        "landing": landing,
        "currentPath": current_path,
        "layout": layout,
        "mounted": mounted,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
