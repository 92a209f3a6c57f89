//! Shared cart store for the storefront views.

use dioxus::prelude::*;
use store::Cart;

/// Get the shared cart.
pub fn use_cart() -> Signal<Cart> {
    use_context::<Signal<Cart>>()
}

/// Provider component that owns the cart for everything below it.
#[component]
pub fn CartProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Cart::new()));

    rsx! {
        {children}
    }
}
