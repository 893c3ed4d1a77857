//! Module registry.
//!
//! Constructed once at startup and shared (typically behind an `Arc`) with
//! everything that needs the route/navigation surface. Registration is
//! insert-once: a second module with an existing id is rejected and the first
//! registration stays. There is no deregistration.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::builtin_modules;
use crate::module::{Module, NavGroup, RouteDef};

/// The same route path contributed by more than one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCollision {
    pub path: String,
    /// Contributing module ids, in registration order.
    pub module_ids: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: RwLock<Vec<Module>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the console's built-in modules.
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        for module in builtin_modules() {
            registry.register(module);
        }
        info!(modules = registry.len(), "module registry bootstrapped");
        registry
    }

    /// Register `module` unless its id is taken.
    ///
    /// Returns `false` (and logs a warning) for a duplicate id.
    pub fn register(&self, module: Module) -> bool {
        let Ok(mut modules) = self.modules.write() else {
            warn!(module = %module.id, "module registry lock poisoned, registration dropped");
            return false;
        };

        if modules.iter().any(|m| m.id == module.id) {
            warn!(module = %module.id, "module already registered, ignoring duplicate");
            return false;
        }

        for route in &module.routes {
            if let Some(owner) = modules
                .iter()
                .find(|m| m.routes.iter().any(|r| r.path == route.path))
            {
                warn!(
                    path = %route.path,
                    module = %module.id,
                    existing = %owner.id,
                    "route path already contributed by another module"
                );
            }
        }

        modules.push(module);
        true
    }

    /// Every registered route, concatenated in registration order.
    pub fn routes(&self) -> Vec<RouteDef> {
        let Ok(modules) = self.modules.read() else {
            return vec![];
        };
        modules.iter().flat_map(|m| m.routes.iter().cloned()).collect()
    }

    /// One group per module with at least one nav item, titled with the
    /// upper-cased module name, in registration order.
    pub fn nav_items(&self) -> Vec<NavGroup> {
        let Ok(modules) = self.modules.read() else {
            return vec![];
        };
        modules
            .iter()
            .filter(|m| !m.nav_items.is_empty())
            .map(|m| NavGroup {
                title: m.name.to_uppercase(),
                items: m.nav_items.clone(),
            })
            .collect()
    }

    /// Snapshot of all modules in registration order.
    pub fn all_modules(&self) -> Vec<Module> {
        self.modules.read().map(|m| m.clone()).unwrap_or_default()
    }

    pub fn get(&self, id: &str) -> Option<Module> {
        let modules = self.modules.read().ok()?;
        modules.iter().find(|m| m.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.modules.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Route paths contributed by more than one module, in first-seen order.
    /// A module repeating its own path is not a collision.
    pub fn route_collisions(&self) -> Vec<RouteCollision> {
        let Ok(modules) = self.modules.read() else {
            return vec![];
        };

        let mut order: Vec<&str> = Vec::new();
        let mut owners: HashMap<&str, Vec<String>> = HashMap::new();
        for module in modules.iter() {
            for route in &module.routes {
                let entry = owners.entry(route.path.as_str()).or_insert_with(|| {
                    order.push(route.path.as_str());
                    Vec::new()
                });
                if !entry.contains(&module.id) {
                    entry.push(module.id.clone());
                }
            }
        }

        order
            .into_iter()
            .filter_map(|path| {
                let module_ids = owners.remove(path)?;
                (module_ids.len() > 1).then(|| RouteCollision {
                    path: path.to_string(),
                    module_ids,
                })
            })
            .collect()
    }
}
