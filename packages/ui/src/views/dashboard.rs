//! Restaurant dashboard pages.
//!
//! Every page receives the signed-in user's data as props from the router layer and
//! never reads or derives session state itself.

use dioxus::prelude::*;
use store::UserDetails;

use crate::auth::SignOutButton;
use crate::routes;

/// Sidebar shared by the dashboard pages.
#[component]
fn DashNav() -> Element {
    rsx! {
        nav {
            class: "dash-nav",
            Link { to: routes::ADMIN, "Overview" }
            Link { to: routes::ORDERS, "Orders" }
            Link { to: routes::MEALS, "Meals" }
            Link { to: routes::SALES, "Sales" }
            Link { to: routes::TABLE, "Tables" }
            Link { to: routes::USERS, "Users" }
            SignOutButton { class: "dash-sign-out" }
        }
    }
}

/// Business name and logo.
#[component]
fn DashHeader(user_details: UserDetails, profile_image: Option<String>) -> Element {
    rsx! {
        header {
            class: "dash-header",
            if let Some(src) = profile_image {
                img { class: "dash-logo", src: "{src}", alt: "Logo" }
            }
            div {
                h2 { "{user_details.display_name()}" }
                span { class: "dash-email", "{user_details.email}" }
            }
        }
    }
}

#[component]
fn DashShell(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "dash",
            DashNav {}
            main {
                class: "dash-main",
                h1 { "{title}" }
                {children}
            }
        }
    }
}

#[component]
pub fn DashHome(user_details: UserDetails, profile_image: Option<String>) -> Element {
    rsx! {
        DashShell {
            title: "Overview",
            DashHeader { user_details: user_details.clone(), profile_image }
            p { "Account #{user_details.id}" }
        }
    }
}

#[component]
pub fn Orders(user_details: UserDetails, profile_image: Option<String>) -> Element {
    rsx! {
        DashShell {
            title: "Orders",
            DashHeader { user_details: user_details.clone(), profile_image }
            p { "Incoming orders for {user_details.display_name()} appear here." }
        }
    }
}

#[component]
pub fn Meals(user_id: i64) -> Element {
    rsx! {
        DashShell {
            title: "Meals",
            p { "Menu items of account #{user_id}." }
        }
    }
}

#[component]
pub fn Sales(user_id: i64) -> Element {
    rsx! {
        DashShell {
            title: "Sales",
            p { "Sales figures of account #{user_id}." }
        }
    }
}

#[component]
pub fn Tables(user_id: i64) -> Element {
    rsx! {
        DashShell {
            title: "Tables",
            p { "Seating of account #{user_id}." }
        }
    }
}

#[component]
pub fn Users(user_id: i64) -> Element {
    rsx! {
        DashShell {
            title: "Users",
            p { "Staff accounts of account #{user_id}." }
        }
    }
}
