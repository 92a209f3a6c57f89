use dioxus::prelude::*;

use crate::cart::use_cart;
use crate::routes;
use crate::Icon;
use crate::icons::FaCartShopping;

/// Top navigation of the storefront pages.
#[component]
pub fn Navbar() -> Element {
    let cart = use_cart();
    let count = cart.read().item_count();

    rsx! {
        nav {
            class: "navbar",
            Link { class: "navbar-brand", to: routes::HOME, "Food" }
            div {
                class: "navbar-links",
                Link { to: routes::CATEGORIES, "Menu" }
                Link { to: routes::CONTACT, "Contact" }
                Link { to: routes::SIGN_IN, "Restaurant login" }
                Link {
                    class: "navbar-cart",
                    to: routes::CART,
                    Icon { icon: FaCartShopping, width: 16, height: 16 }
                    if count > 0 {
                        span { class: "navbar-cart-count", "{count}" }
                    }
                }
            }
        }
    }
}
