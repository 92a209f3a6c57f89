//! Account registration and password reset pages.

use api::Backend;
use dioxus::prelude::*;

use crate::auth::use_services;
use crate::routes;
use crate::Navbar;

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[component]
pub fn SignUp() -> Element {
    let services = use_services();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut status = use_signal(|| Status::Idle);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        async move {
            let Some(client) = services.client else {
                status.set(Status::Failed("Sign-up is unavailable right now.".to_string()));
                return;
            };
            if password().len() < 6 {
                status.set(Status::Failed("Password must be at least 6 characters".to_string()));
                return;
            }
            status.set(Status::Sending);
            match client.sign_up(email().trim(), &password()).await {
                Ok(()) => status.set(Status::Sent),
                Err(e) => {
                    tracing::warn!("Sign-up failed: {}", e);
                    status.set(Status::Failed(e.to_string()));
                }
            }
        }
    };

    rsx! {
        Navbar {}
        main {
            class: "page auth",
            h1 { "Create a restaurant account" }
            if status() == Status::Sent {
                p { "Check your inbox to confirm your email, then sign in." }
                Link { to: routes::SIGN_IN, "Go to sign in" }
            } else {
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
                    if let Status::Failed(message) = status() {
                        p { class: "form-error", "{message}" }
                    }
                    button {
                        r#type: "submit",
                        disabled: status() == Status::Sending,
                        "Sign up"
                    }
                }
            }
        }
    }
}

#[component]
pub fn PasswordReset() -> Element {
    let services = use_services();
    let mut email = use_signal(String::new);
    let mut status = use_signal(|| Status::Idle);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let services = services.clone();
        async move {
            let Some(client) = services.client else {
                status.set(Status::Failed("Password reset is unavailable right now.".to_string()));
                return;
            };
            status.set(Status::Sending);
            match client.reset_password_for_email(email().trim()).await {
                Ok(()) => status.set(Status::Sent),
                Err(e) => {
                    tracing::warn!("Password reset failed: {}", e);
                    status.set(Status::Failed(e.to_string()));
                }
            }
        }
    };

    rsx! {
        Navbar {}
        main {
            class: "page auth",
            h1 { "Reset your password" }
            if status() == Status::Sent {
                p { "If an account exists for that address, a reset link is on its way." }
            } else {
                form {
                    onsubmit: onsubmit,
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    if let Status::Failed(message) = status() {
                        p { class: "form-error", "{message}" }
                    }
                    button {
                        r#type: "submit",
                        disabled: status() == Status::Sending,
                        "Send reset link"
                    }
                }
            }
            Link { to: routes::SIGN_IN, "Back to sign in" }
        }
    }
}
