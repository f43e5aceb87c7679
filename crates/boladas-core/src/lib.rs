//! # boladas-core: Pure Business Logic for Só Boladas
//!
//! This crate is the heart of the Só Boladas storefront. It contains all
//! business logic as pure functions and collection types with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Só Boladas Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Storefront Shell (out of scope)               │   │
//! │  │    Browse ──► Cart Drawer ──► Auth Modal ──► WhatsApp Checkout  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 boladas-engine (Intent Handlers)                │   │
//! │  │    add_to_cart, login, register, checkout, update_layout, ...   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ boladas-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ cart/cat. │  │   auth    │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │   User    │  │  (MZN)    │  │  Catalog  │  │   merge   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                boladas-store (Persistence Layer)                │   │
//! │  │           SQLite key-value slices, the storage analogue         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Order, LayoutSettings, ...)
//! - [`money`] - Integer metical arithmetic (no floating point!)
//! - [`cart`] - The shopping cart and its operations
//! - [`catalog`] - The product catalog and the filtered-view selector
//! - [`auth`] - Session/auth gate rules (login, registration, merge)
//! - [`validation`] - Boundary validation for admin input
//! - [`defaults`] - Seeded catalog and layout content
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic; ids and timestamps are passed in
//! 2. **No I/O**: database, network and file system access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are centavos (i64)
//! 4. **Replace, don't mutate**: every transition replaces an entity or a
//!    whole collection, which keeps serialize-whole-slice persistence honest

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod defaults;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use error::{AuthError, ValidationError};
pub use money::Money;
pub use types::*;
