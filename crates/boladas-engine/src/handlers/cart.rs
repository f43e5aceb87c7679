//! # Cart Handlers
//!
//! Intent handlers for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Auth?   │────►│ Recorded │       │
//! │  │  Cart    │     │          │     │          │     │  Order   │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │                   add_to_cart                        checkout           │
//! │                   update_quantity                    (checkout.rs)      │
//! │                   remove_from_cart                        │             │
//! │                                                           ▼             │
//! │                                                    cart cleared         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use boladas_core::{Cart, CartItem};

use crate::engine::Engine;
use crate::error::{EngineError, EngineResult};

/// Cart totals summary for handler responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_centavos: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal_centavos: cart.subtotal().centavos(),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

impl Engine {
    /// The current cart contents.
    pub fn cart(&self) -> CartView {
        debug!("cart intent");
        self.cart.with(|c| CartView::from(c))
    }

    /// Adds one unit of a catalog product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: appended with quantity 1
    /// - Id not in the catalog: NOT_FOUND, cart untouched
    ///
    /// Contract for the shell: a successful add also reveals the cart view
    /// ("add implies the cart becomes visible").
    pub async fn add_to_cart(&self, product_id: &str) -> EngineResult<CartView> {
        debug!(product_id = %product_id, "add_to_cart intent");

        let product = self
            .catalog
            .with(|c| c.get(product_id).cloned())
            .ok_or_else(|| EngineError::not_found("Product", product_id))?;

        let view = self.cart.with_mut(|c| {
            c.add(&product);
            CartView::from(&*c)
        });

        self.persist_cart().await?;
        Ok(view)
    }

    /// Adjusts an item's quantity by a signed delta.
    ///
    /// Clamped at 1: a delta that would drop below 1 leaves the quantity
    /// at 1, so removal never happens through this path. An absent id is
    /// a no-op.
    pub async fn update_quantity(&self, product_id: &str, delta: i64) -> EngineResult<CartView> {
        debug!(product_id = %product_id, delta = %delta, "update_quantity intent");

        let view = self.cart.with_mut(|c| {
            c.update_quantity(product_id, delta);
            CartView::from(&*c)
        });

        self.persist_cart().await?;
        Ok(view)
    }

    /// Removes an item from the cart. An absent id is a no-op.
    pub async fn remove_from_cart(&self, product_id: &str) -> EngineResult<CartView> {
        debug!(product_id = %product_id, "remove_from_cart intent");

        let view = self.cart.with_mut(|c| {
            c.remove(product_id);
            CartView::from(&*c)
        });

        self.persist_cart().await?;
        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::test_support::*;
    use crate::error::ErrorCode;
    use boladas_core::Money;

    #[tokio::test]
    async fn test_add_twice_merges_quantities() {
        let engine = test_engine().await;

        engine.add_to_cart("1").await.unwrap();
        let view = engine.add_to_cart("1").await.unwrap();

        assert_eq!(view.totals.item_count, 1);
        assert_eq!(view.totals.total_quantity, 2);
        assert_eq!(
            view.totals.subtotal_centavos,
            Money::from_meticais(90_000).centavos()
        );
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_not_found() {
        let engine = test_engine().await;

        let err = engine.add_to_cart("missing").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(engine.cart().items.is_empty());
    }

    #[tokio::test]
    async fn test_quantity_clamps_at_one() {
        let engine = test_engine().await;

        engine.add_to_cart("1").await.unwrap();
        let view = engine.update_quantity("1", -5).await.unwrap();

        assert_eq!(view.items[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_remove_and_absent_remove() {
        let engine = test_engine().await;

        engine.add_to_cart("1").await.unwrap();
        engine.add_to_cart("2").await.unwrap();

        let view = engine.remove_from_cart("1").await.unwrap();
        assert_eq!(view.totals.item_count, 1);

        // Absent id: a no-op, not an error.
        let view = engine.remove_from_cart("1").await.unwrap();
        assert_eq!(view.totals.item_count, 1);
    }

    #[tokio::test]
    async fn test_cart_changes_are_persisted() {
        let engine = test_engine().await;
        engine.add_to_cart("2").await.unwrap();
        engine.update_quantity("2", 2).await.unwrap();

        let reopened = reopen(&engine).await;
        let view = reopened.cart();
        assert_eq!(view.totals.total_quantity, 3);
        assert_eq!(view.items[0].product.id, "2");
    }
}
