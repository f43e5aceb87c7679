//! # Checkout Handler
//!
//! Order recording and the WhatsApp handoff.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       checkout intent                                   │
//! │                                                                         │
//! │  cart empty? ──────────────► VALIDATION_ERROR (nothing mutates)         │
//! │       │                                                                 │
//! │  no session user? ─────────► AUTH_REQUIRED  (nothing mutates)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mint Order (SB-XXXXXX, now, item snapshots, computed total)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  append to user's history ──► merge into registered set                │
//! │  refresh session ──► clear cart ──► persist users/current-user/cart   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  return order + WhatsApp handoff (the shell opens the URL)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use tracing::info;

use boladas_core::{auth, Order, Role};

use crate::engine::Engine;
use crate::error::{EngineError, EngineResult};
use crate::whatsapp::{self, WhatsAppHandoff};

/// The result of a successful checkout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order: Order,
    pub handoff: WhatsAppHandoff,
}

/// Short human-readable order token, e.g. "SB-9F3K2A".
fn order_token() -> String {
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect::<String>()
        .to_uppercase();
    format!("SB-{}", token)
}

impl Engine {
    /// Records an order for the signed-in user and clears the cart.
    ///
    /// A no-op on failure: an empty cart or a missing session user leaves
    /// every slice exactly as it was. An order is never minted without an
    /// owner.
    pub async fn checkout(&self) -> EngineResult<CheckoutReceipt> {
        let items = self.cart.with(|c| c.items.clone());
        if items.is_empty() {
            return Err(EngineError::validation("O carrinho está vazio"));
        }

        let Some(user) = self.session.with(|s| s.user.clone()) else {
            return Err(EngineError::auth_required());
        };

        let snapshots = items.iter().map(|i| i.snapshot()).collect();
        let order = Order::new(order_token(), Utc::now(), snapshots);

        let mut refreshed = user;
        refreshed.orders.push(order.clone());

        // Apply the transition: history, registered set, session, cart.
        if refreshed.role == Role::Customer {
            self.users.with_mut(|u| auth::merge_user(u, &refreshed));
        }
        self.session.with_mut(|s| s.set(refreshed.clone()));
        self.cart.with_mut(|c| c.clear());

        self.persist_users().await?;
        self.persist_session().await?;
        self.persist_cart().await?;

        let layout = self.layout.snapshot();
        let message =
            whatsapp::checkout_message(&layout.brand_name, &refreshed, &items, order.total());
        let handoff = whatsapp::handoff(&layout.whatsapp_number, &message)?;

        info!(
            order_id = %order.id,
            total = %order.total(),
            items = order.items.len(),
            "Order recorded"
        );

        Ok(CheckoutReceipt { order, handoff })
    }
}
