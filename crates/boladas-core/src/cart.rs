//! # Cart
//!
//! The shopping cart and its operations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Storefront Action        Intent Handler          Cart Change           │
//! │  ─────────────────        ──────────────          ───────────           │
//! │                                                                         │
//! │  Click "Adicionar" ─────► add_to_cart() ────────► qty += 1 or push     │
//! │                                                                         │
//! │  Click +/- ─────────────► update_quantity() ────► qty = max(1, q+Δ)    │
//! │                                                                         │
//! │  Click trash icon ──────► remove_from_cart() ───► retain(id != ...)    │
//! │                                                                         │
//! │  Successful checkout ───► (internal) ───────────► items.clear()        │
//! │                                                                         │
//! │  NOTE: quantity can never reach 0 through update_quantity; removal     │
//! │        only happens through remove_from_cart.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{OrderItem, Product};

/// An item in the shopping cart: a product plus a quantity.
///
/// Identity is the underlying product id. The product is carried whole so
/// the cart keeps rendering an entry even after the catalog entry is
/// deleted by an admin.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,

    /// Always >= 1.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart item for a single unit of the product.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    /// The order-history snapshot of this line.
    pub fn snapshot(&self) -> OrderItem {
        OrderItem {
            name: self.product.name.clone(),
            quantity: self.quantity,
            price_centavos: self.product.price_centavos,
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product id (adding the same product increments
///   its quantity)
/// - Quantity is always >= 1; `update_quantity` clamps instead of removing
///
/// Persisted as a plain sequence of items (`#[serde(transparent)]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: appended with quantity 1
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
            return;
        }
        self.items.push(CartItem::from_product(product));
    }

    /// Adjusts an item's quantity by a signed delta, clamped at 1.
    ///
    /// Reaching 0 is impossible through this path: a delta that would drop
    /// the quantity below 1 leaves it at 1. Removal goes through
    /// [`Cart::remove`]. An id not in the cart is a no-op.
    pub fn update_quantity(&mut self, product_id: &str, delta: i64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = (item.quantity + delta).max(1);
        }
    }

    /// Removes an item by product id. An absent id is a no-op.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Empties the cart. Invoked only as a consequence of a successful
    /// checkout recording.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Looks up an item by product id.
    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Number of distinct items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all items (the navbar badge count).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        Money::from_centavos(self.items.iter().map(|i| i.line_total().centavos()).sum())
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Order-history snapshots for every line, in cart order.
    pub fn snapshots(&self) -> Vec<OrderItem> {
        self.items.iter().map(CartItem::snapshot).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Condition};

    fn test_product(id: &str, price_mt: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            price_centavos: Money::from_meticais(price_mt).centavos(),
            original_price_centavos: Money::from_meticais(price_mt + 5_000).centavos(),
            category: Category::Smartphones,
            condition: Condition::Good,
            images: vec!["img".to_string()],
            rating: 4.5,
            reviews_count: 10,
        }
    }

    #[test]
    fn test_add_same_product_twice_merges_into_one_entry() {
        let mut cart = Cart::new();
        let product = test_product("1", 45_000);

        cart.add(&product);
        cart.add(&product);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get("1").unwrap().quantity, 2);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_quantity_never_drops_below_one() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 45_000));

        cart.update_quantity("1", -5);
        assert_eq!(cart.get("1").unwrap().quantity, 1);

        cart.update_quantity("1", 3);
        assert_eq!(cart.get("1").unwrap().quantity, 4);

        cart.update_quantity("1", -2);
        assert_eq!(cart.get("1").unwrap().quantity, 2);
    }

    #[test]
    fn test_update_quantity_on_absent_id_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 45_000));

        cart.update_quantity("missing", 5);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get("1").unwrap().quantity, 1);
    }

    #[test]
    fn test_remove_and_remove_absent() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 45_000));
        cart.add(&test_product("2", 65_000));

        cart.remove("1");
        assert_eq!(cart.item_count(), 1);
        assert!(cart.get("1").is_none());

        // Absent id: no error, no change.
        cart.remove("1");
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 45_000));
        cart.add(&test_product("1", 45_000));
        cart.add(&test_product("2", 65_000));

        assert_eq!(cart.subtotal(), Money::from_meticais(155_000));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 45_000));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::zero());
    }

    #[test]
    fn test_snapshots_freeze_name_and_price() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 45_000));
        cart.update_quantity("1", 1);

        let snapshots = cart.snapshots();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].name, "Product 1");
        assert_eq!(snapshots[0].quantity, 2);
        assert_eq!(snapshots[0].line_total(), Money::from_meticais(90_000));
    }

    #[test]
    fn test_cart_persists_as_plain_sequence() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 45_000));

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back.item_count(), 1);
    }
}
