//! # boladas-engine: Application State Container
//!
//! The storefront's owned state container and intent handlers. A UI shell
//! embeds one [`Engine`] and drives it; presentation itself lives outside
//! this repository.
//!
//! ## Module Organization
//! ```text
//! boladas_engine/
//! ├── lib.rs          ◄─── You are here
//! ├── engine.rs       ◄─── The Engine: slices, load-on-init, persistence
//! ├── state.rs        ◄─── SliceState<T> cells and the Session
//! ├── handlers/
//! │   ├── cart.rs     ◄─── add_to_cart, update_quantity, remove
//! │   ├── catalog.rs  ◄─── browse/search + admin add/delete product
//! │   ├── layout.rs   ◄─── wholesale layout replacement (admin)
//! │   ├── auth.rs     ◄─── login, register, logout
//! │   ├── settings.rs ◄─── preferences + anonymous theme
//! │   └── checkout.rs ◄─── order recording + WhatsApp handoff
//! ├── whatsapp.rs     ◄─── message composition, wa.me link
//! ├── recommend.rs    ◄─── best-effort AI shopping tips
//! ├── config.rs       ◄─── admin credentials, API key (env-overridable)
//! └── error.rs        ◄─── EngineError for handler results
//! ```
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  shell event ──► intent handler ──► slice mutation ──► persist slice   │
//! │                                                         (whole value)  │
//! │                                                                         │
//! │  Validation failures return BEFORE any mutation. The two external      │
//! │  boundaries (AI tip, WhatsApp handoff) never touch slice state.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use boladas_engine::{Engine, EngineConfig};
//! use boladas_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("./boladas.db")).await?;
//! let engine = Engine::open(store, EngineConfig::from_env()).await?;
//!
//! engine.add_to_cart("1").await?;
//! let receipt = engine.checkout().await?; // needs a signed-in user
//! open_external(&receipt.handoff.url);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod recommend;
pub mod state;
pub mod whatsapp;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{EngineError, EngineResult, ErrorCode};
pub use handlers::{CartTotals, CartView, CheckoutReceipt, NewProduct};
pub use recommend::RecommendationClient;
pub use state::{Session, SliceState};
pub use whatsapp::WhatsAppHandoff;
