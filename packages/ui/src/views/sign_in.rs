//! Sign-in page for restaurant owners.

use dioxus::prelude::*;

use crate::auth::{use_services, use_session};
use crate::routes;
use crate::Navbar;

#[component]
pub fn SignIn() -> Element {
    let mut session = use_session();
    let services = use_services();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: go straight to the dashboard.
    if session().logged_in() {
        nav.replace(routes::ADMIN);
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        async move {
            let Some(client) = services.client.as_ref() else {
                error.set(Some("Sign-in is unavailable right now.".to_string()));
                return;
            };
            loading.set(true);
            error.set(None);
            let result = api::sign_in(
                client,
                &services.cache,
                &services.config,
                email().trim(),
                &password(),
            )
            .await;
            loading.set(false);
            match result {
                Ok(state) => {
                    session.set(state);
                    nav.push(routes::ADMIN);
                }
                Err(e) => {
                    tracing::warn!("Sign-in failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
        }
    };

    rsx! {
        Navbar {}
        main {
            class: "page auth",
            h1 { "Restaurant login" }
            form {
                onsubmit: onsubmit,
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
            p {
                Link { to: routes::PASSWORD_RESET, "Forgot your password?" }
            }
            p {
                "No account yet? "
                Link { to: routes::SIGN_UP, "Sign up" }
            }
        }
    }
}
