//! # boladas-store: Persistence Layer for Só Boladas
//!
//! The storefront's local-storage analogue: six JSON state slices stored
//! as rows of a single SQLite table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Só Boladas Data Flow                               │
//! │                                                                         │
//! │  Intent handler (add_to_cart, login, update_layout, ...)               │
//! │       │ mutates the in-memory slice, then…                             │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   boladas-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │    KvStore    │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│    (kv.rs)    │    │  (embedded)  │  │   │
//! │  │   │  SqlitePool   │    │ load/save/    │    │ 001_init.sql │  │   │
//! │  │   │  WAL mode     │    │ remove slices │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file (one `slices` table, one row per state slice)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded schema migrations
//! - [`kv`] - The load/save/remove slice repository
//! - [`slices`] - The six versioned slice keys
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boladas_store::{Store, StoreConfig, Slice};
//!
//! let store = Store::new(StoreConfig::new("./boladas.db")).await?;
//! let cart: Option<Cart> = store.kv().read_slice(Slice::Cart).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod kv;
pub mod migrations;
pub mod pool;
pub mod slices;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StoreError;
pub use kv::KvStore;
pub use pool::{Store, StoreConfig};
pub use slices::Slice;
