//! # Domain models for the storefront
//!
//! Defines the data shapes the session layer and the views exchange. Every type
//! is `Serialize + Deserialize` so it can be cached in browser storage or decoded
//! straight from a backend response.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserDetails`] | The admin profile row (`id`, `email`, `business`, `image`) looked up by the signed-in email. Cached by value under the `userDetails` storage key. |
//! | [`CartItem`] | One line of the shopping cart: a meal id, display name, unit price in cents and quantity. |
//! | [`Cart`] | The in-memory cart shared by the storefront views. |
//!
//! The cart is intentionally small: it exists so storefront views have a shared
//! store to read from, and is never persisted.

use serde::{Deserialize, Serialize};

/// Profile row of a dashboard user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub business: Option<String>,
    /// File name of the logo inside the logo bucket.
    #[serde(default)]
    pub image: Option<String>,
}

impl UserDetails {
    /// Business name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.business
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or(&self.email)
    }
}

/// A single cart line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    pub price_cents: u64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total_cents(&self) -> u64 {
        self.price_cents * u64::from(self.quantity)
    }
}

/// In-memory shopping cart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, merging quantities with an existing line for the same id.
    pub fn add(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    /// Remove the line with the given id. Returns whether a line was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn total_cents(&self) -> u64 {
        self.items.iter().map(CartItem::line_total_cents).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Format an amount in cents as `"12.34"`.
pub fn format_price(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, price_cents: u64, quantity: u32) -> CartItem {
        CartItem {
            id,
            name: format!("meal-{id}"),
            price_cents,
            quantity,
        }
    }

    #[test]
    fn test_user_details_decodes_null_fields() {
        let json = r#"{"id":7,"email":"owner@cafe.com","business":null,"image":null}"#;
        let user: UserDetails = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert!(user.business.is_none());
        assert!(user.image.is_none());
        assert_eq!(user.display_name(), "owner@cafe.com");
    }

    #[test]
    fn test_display_name_prefers_business() {
        let user = UserDetails {
            id: 1,
            email: "a@b.com".to_string(),
            business: Some("Cafe".to_string()),
            image: None,
        };
        assert_eq!(user.display_name(), "Cafe");
    }

    #[test]
    fn test_cart_merges_same_item() {
        let mut cart = Cart::new();
        cart.add(item(1, 450, 1));
        cart.add(item(1, 450, 2));
        cart.add(item(2, 1000, 1));

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total_cents(), 450 * 3 + 1000);
    }

    #[test]
    fn test_cart_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(item(1, 100, 1));
        cart.add(item(2, 200, 1));

        assert!(cart.remove(1));
        assert!(!cart.remove(1));
        assert_eq!(cart.total_cents(), 200);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0.00");
        assert_eq!(format_price(1205), "12.05");
    }
}
