//! Module contract: what a feature unit contributes to the console.

use serde::{Deserialize, Serialize};

use atelier_auth::Permission;

/// A routable screen. `view` names the view unit the host mounts for `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDef {
    pub path: String,
    pub view: String,
    /// Absent means any authenticated role may open the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
}

impl RouteDef {
    pub fn new(path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            view: view.into(),
            permissions: None,
        }
    }

    pub fn requires(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions = Some(permissions.into_iter().collect());
        self
    }
}

/// Navigation entry; entries nest into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
    /// Absent means visible to all authenticated roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            icon: None,
            children: Vec::new(),
            permissions: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn child(mut self, child: NavItem) -> Self {
        self.children.push(child);
        self
    }

    pub fn requires(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions = Some(permissions.into_iter().collect());
        self
    }
}

/// A self-contained feature unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub name: String,
    pub routes: Vec<RouteDef>,
    pub nav_items: Vec<NavItem>,
}

impl Module {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            routes: Vec::new(),
            nav_items: Vec::new(),
        }
    }

    pub fn route(mut self, route: RouteDef) -> Self {
        self.routes.push(route);
        self
    }

    pub fn nav(mut self, item: NavItem) -> Self {
        self.nav_items.push(item);
        self
    }
}

/// Navigation entries of one module, as shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub title: String,
    pub items: Vec<NavItem>,
}
