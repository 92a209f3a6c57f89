mod admin;
pub use admin::{
    AdminLayout, DashHomePage, MealsPage, OrdersPage, SalesPage, TablesPage, UsersPage,
};

use dioxus::prelude::*;

/// Fallback for paths outside the route table.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        ui::views::NotFound { path: segments.join("/") }
    }
}
