//! Guarded dashboard routes.
//!
//! [`AdminLayout`] wraps every dashboard route. While the session is still
//! bootstrapping it renders nothing; once resolved, a visitor who is not signed in
//! is sent to the sign-in page. The page components below pass the signed-in
//! user's data down to the shared dashboard views.

use dioxus::prelude::*;
use ui::use_session;
use ui::views::{DashHome, Meals, Orders, Sales, Tables, Users};

use crate::Route;

#[component]
pub fn AdminLayout() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let state = session();

    if !state.is_resolved() {
        return rsx! {};
    }

    if !ui::routes::is_reachable(&route.to_string(), state.logged_in()) {
        tracing::debug!("Redirecting {} to sign in", route);
        nav.replace(Route::SignIn {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
pub fn DashHomePage() -> Element {
    let session = use_session();
    let state = session.read();
    let Some(user) = state.user() else {
        return rsx! {};
    };

    rsx! {
        DashHome {
            user_details: user.clone(),
            profile_image: state.profile_image().map(str::to_string),
        }
    }
}

#[component]
pub fn OrdersPage() -> Element {
    let session = use_session();
    let state = session.read();
    let Some(user) = state.user() else {
        return rsx! {};
    };

    rsx! {
        Orders {
            user_details: user.clone(),
            profile_image: state.profile_image().map(str::to_string),
        }
    }
}

#[component]
pub fn MealsPage() -> Element {
    let Some(user_id) = use_session().read().user_id() else {
        return rsx! {};
    };
    rsx! {
        Meals { user_id }
    }
}

#[component]
pub fn SalesPage() -> Element {
    let Some(user_id) = use_session().read().user_id() else {
        return rsx! {};
    };
    rsx! {
        Sales { user_id }
    }
}

#[component]
pub fn TablesPage() -> Element {
    let Some(user_id) = use_session().read().user_id() else {
        return rsx! {};
    };
    rsx! {
        Tables { user_id }
    }
}

#[component]
pub fn UsersPage() -> Element {
    let Some(user_id) = use_session().read().user_id() else {
        return rsx! {};
    };
    rsx! {
        Users { user_id }
    }
}
