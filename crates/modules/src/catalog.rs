//! Modules that ship with the console.

use atelier_auth::{Permission, Role};

use crate::module::{Module, NavItem, RouteDef};

pub fn builtin_modules() -> Vec<Module> {
    vec![dashboard(), products(), orders(), sellers(), production()]
}

fn dashboard() -> Module {
    Module::new("dashboard", "Overview")
        .route(RouteDef::new("/dashboard", "Dashboard"))
        .nav(NavItem::new("Dashboard", "/dashboard").icon("layout-dashboard"))
}

fn products() -> Module {
    Module::new("products", "Products")
        .route(RouteDef::new("/products", "ProductList").requires([Permission::VIEW_PRODUCTS]))
        .route(
            RouteDef::new("/products/new", "ProductCreate")
                .requires([Permission::CREATE_PRODUCTS]),
        )
        .route(RouteDef::new("/products/:id", "ProductDetail").requires([Permission::VIEW_PRODUCTS]))
        .nav(
            NavItem::new("Products", "/products")
                .icon("package")
                .requires([Permission::VIEW_PRODUCTS])
                .child(NavItem::new("All products", "/products"))
                .child(
                    NavItem::new("Add product", "/products/new")
                        .requires([Permission::CREATE_PRODUCTS]),
                ),
        )
}

fn orders() -> Module {
    Module::new("orders", "Orders")
        .route(
            RouteDef::new("/orders", "OrderList")
                .requires([Permission::role(Role::SuperAdmin), Permission::role(Role::Seller)]),
        )
        .route(
            RouteDef::new("/orders/:id", "OrderDetail")
                .requires([Permission::role(Role::SuperAdmin), Permission::role(Role::Seller)]),
        )
        .nav(
            NavItem::new("Orders", "/orders")
                .icon("shopping-cart")
                .requires([Permission::role(Role::SuperAdmin), Permission::role(Role::Seller)]),
        )
}

fn sellers() -> Module {
    Module::new("sellers", "Sellers")
        .route(RouteDef::new("/sellers", "SellerList").requires([Permission::MANAGE_ALL_SELLERS]))
        .route(
            RouteDef::new("/sellers/:id", "SellerDetail")
                .requires([Permission::MANAGE_ALL_SELLERS]),
        )
        .nav(
            NavItem::new("Sellers", "/sellers")
                .icon("store")
                .requires([Permission::MANAGE_ALL_SELLERS]),
        )
}

fn production() -> Module {
    Module::new("production", "Production")
        .route(
            RouteDef::new("/production", "ProductionQueue")
                .requires([Permission::role(Role::Artisan), Permission::role(Role::SuperAdmin)]),
        )
        .nav(
            NavItem::new("Production queue", "/production")
                .icon("hammer")
                .requires([Permission::role(Role::Artisan), Permission::role(Role::SuperAdmin)]),
        )
}
