//! This crate contains all shared UI for the storefront and the dashboard.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod routes;
pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod auth;
pub use auth::{
    make_services, restore_session, use_services, use_session, SessionProvider, SessionServices,
    SignOutButton, StorefrontClient,
};

mod cart;
pub use cart::{use_cart, CartProvider};

mod navbar;
pub use navbar::Navbar;
