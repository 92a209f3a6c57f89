//! Customer-facing pages.

use dioxus::prelude::*;
use store::models::format_price;
use store::CartItem;

use crate::cart::use_cart;
use crate::routes;
use crate::Navbar;

/// Meals offered on the menu page: (id, category, name, price in cents).
const MENU: &[(i64, &str, &str, u64)] = &[
    (1, "Breakfast", "Pancakes", 650),
    (2, "Breakfast", "Omelette", 720),
    (3, "Lunch", "Chicken wrap", 950),
    (4, "Lunch", "Falafel bowl", 890),
    (5, "Drinks", "Iced coffee", 380),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page home",
            h1 { "Good food, delivered to your table" }
            p { "Browse the menu, fill your cart and order in a few taps." }
            Link { class: "button", to: routes::CATEGORIES, "See the menu" }
        }
    }
}

#[component]
pub fn Categories() -> Element {
    let mut cart = use_cart();
    let mut categories: Vec<&str> = MENU.iter().map(|(_, c, _, _)| *c).collect();
    categories.dedup();

    rsx! {
        Navbar {}
        main {
            class: "page categories",
            h1 { "Menu" }
            for category in categories {
                section {
                    key: "{category}",
                    h2 { "{category}" }
                    ul {
                        for &(id, _, name, price) in MENU.iter().filter(|m| m.1 == category) {
                            li {
                                key: "{id}",
                                span { "{name}" }
                                span { class: "price", "{format_price(price)}" }
                                button {
                                    onclick: move |_| cart.write().add(CartItem {
                                        id,
                                        name: name.to_string(),
                                        price_cents: price,
                                        quantity: 1,
                                    }),
                                    "Add"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Cart() -> Element {
    let mut cart = use_cart();
    let nav = use_navigator();
    let items = cart.read().items.clone();
    let total = format_price(cart.read().total_cents());

    rsx! {
        Navbar {}
        main {
            class: "page cart",
            h1 { "Your cart" }
            if items.is_empty() {
                p { "Your cart is empty." }
                Link { to: routes::CATEGORIES, "Browse the menu" }
            } else {
                ul {
                    for item in items {
                        li {
                            key: "{item.id}",
                            span { "{item.quantity} × {item.name}" }
                            span { class: "price", "{format_price(item.line_total_cents())}" }
                            button {
                                onclick: move |_| {
                                    cart.write().remove(item.id);
                                },
                                "Remove"
                            }
                        }
                    }
                }
                p { class: "cart-total", "Total: {total}" }
                button {
                    class: "button",
                    onclick: move |_| {
                        cart.write().clear();
                        nav.push(routes::ORDER_SUCCESS);
                    },
                    "Place order"
                }
            }
        }
    }
}

#[component]
pub fn OrderSuccess() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page order-success",
            h1 { "Thank you!" }
            p { "Your order has been sent to the kitchen." }
            Link { to: routes::HOME, "Back to home" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page contact",
            h1 { "Contact" }
            p { "Questions about an order or about listing your restaurant? Write to us." }
            a { href: "mailto:hello@food.example", "hello@food.example" }
        }
    }
}

/// Rendered for any path outside the route table.
#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        Navbar {}
        main {
            class: "page not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: routes::HOME, "Back to home" }
        }
    }
}
