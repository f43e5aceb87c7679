//! # Slice Keys
//!
//! The six logical state records the storefront persists, each under a
//! versioned key.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Persisted State Layout                               │
//! │                                                                         │
//! │  sb-cart-v12          sequence of CartItem                             │
//! │  sb-products-v12      sequence of Product (the catalog)                │
//! │  sb-layout-v12        LayoutSettings object                            │
//! │  sb-users-v12         sequence of User                                 │
//! │  sb-current-user-v12  User; ABSENT means logged out (never null)       │
//! │  sb-theme-v12         "light" | "dark"                                 │
//! │                                                                         │
//! │  Each record is independently optional at load time. There is no       │
//! │  schema versioning inside a record: a breaking payload change bumps    │
//! │  the key suffix and abandons the old namespace.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// One independently persisted top-level piece of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    /// The shopping cart (sequence of cart items).
    Cart,
    /// The product catalog.
    Catalog,
    /// The singleton layout/theming configuration.
    Layout,
    /// The registered-user collection.
    Users,
    /// The current session user. Removed (not nulled) on logout.
    CurrentUser,
    /// The process-wide theme preference (tracked even when logged out).
    Theme,
}

impl Slice {
    /// The versioned storage key for this slice.
    pub const fn key(&self) -> &'static str {
        match self {
            Slice::Cart => "sb-cart-v12",
            Slice::Catalog => "sb-products-v12",
            Slice::Layout => "sb-layout-v12",
            Slice::Users => "sb-users-v12",
            Slice::CurrentUser => "sb-current-user-v12",
            Slice::Theme => "sb-theme-v12",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct_and_versioned() {
        let keys = [
            Slice::Cart.key(),
            Slice::Catalog.key(),
            Slice::Layout.key(),
            Slice::Users.key(),
            Slice::CurrentUser.key(),
            Slice::Theme.key(),
        ];

        for (i, a) in keys.iter().enumerate() {
            assert!(a.starts_with("sb-"));
            assert!(a.ends_with("-v12"));
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
