//! # Domain Types
//!
//! Core domain types for the Só Boladas storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id (SB-XXXXXX) │       │
//! │  │  category       │   │  email / phone  │   │  date           │       │
//! │  │  condition      │   │  role           │   │  item snapshots │       │
//! │  │  price_centavos │   │  orders         │   │  total_centavos │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ LayoutSettings  │   │  UserSettings   │   │     Theme       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  brand, hero,   │   │  theme          │   │  Light          │       │
//! │  │  home sections  │   │  language       │   │  Dark           │       │
//! │  │  whatsapp nr    │   │  notifications  │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every entity is immutable by convention: mutations replace the entity (or
//! the containing collection) rather than editing fields in place, which is
//! what makes the serialize-whole-slice persistence model correct.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category. The set is fixed; the persisted vocabulary keeps the
/// storefront's Portuguese labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Smartphones,
    Laptops,
    Consoles,
    #[serde(rename = "Áudio")]
    Audio,
    #[serde(rename = "Câmeras")]
    Cameras,
    #[serde(rename = "Acessórios")]
    Accessories,
}

impl Category {
    /// All categories, in storefront display order.
    pub const ALL: [Category; 6] = [
        Category::Smartphones,
        Category::Laptops,
        Category::Consoles,
        Category::Audio,
        Category::Cameras,
        Category::Accessories,
    ];

    /// The display label (also the persisted string).
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Smartphones => "Smartphones",
            Category::Laptops => "Laptops",
            Category::Consoles => "Consoles",
            Category::Audio => "Áudio",
            Category::Cameras => "Câmeras",
            Category::Accessories => "Acessórios",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog browsing filter: a single category, or everything ("Todos").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product of the given category passes this filter.
    #[inline]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("Todos"),
            CategoryFilter::Only(c) => c.fmt(f),
        }
    }
}

// =============================================================================
// Condition
// =============================================================================

/// Cosmetic/functional condition of a second-hand device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Condition {
    #[serde(rename = "Excelente")]
    Excellent,
    #[serde(rename = "Bom")]
    Good,
    #[serde(rename = "Aceitável")]
    Acceptable,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Condition::Excellent => "Excelente",
            Condition::Good => "Bom",
            Condition::Acceptable => "Aceitável",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A device listed in the catalog.
///
/// Products are never mutated in place: admin actions create a new entry
/// (prepended to the catalog) or filter an entry out by id.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name, e.g. "iPhone 13 Pro 128GB - Grafite".
    pub name: String,

    /// Sales copy shown on the detail view.
    pub description: String,

    /// Asking price in centavos.
    pub price_centavos: i64,

    /// Original (new) price in centavos, for the discount badge.
    pub original_price_centavos: i64,

    pub category: Category,

    pub condition: Condition,

    /// Image references; the first entry is the primary image.
    pub images: Vec<String>,

    /// Average review rating, 0-5.
    pub rating: f32,

    pub reviews_count: u32,
}

impl Product {
    /// Returns the asking price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_centavos(self.price_centavos)
    }

    /// Returns the original (new) price as a Money value.
    #[inline]
    pub fn original_price(&self) -> Money {
        Money::from_centavos(self.original_price_centavos)
    }

    /// Discount relative to the original price, as a rounded percentage.
    ///
    /// Returns `None` when there is no meaningful discount (original price
    /// missing, zero, or not above the asking price).
    pub fn discount_percent(&self) -> Option<u32> {
        if self.original_price_centavos <= self.price_centavos || self.original_price_centavos <= 0
        {
            return None;
        }
        let saved = self.original_price_centavos - self.price_centavos;
        let pct = (saved * 100 + self.original_price_centavos / 2) / self.original_price_centavos;
        Some(pct as u32)
    }
}

// =============================================================================
// Theme / Language / User Settings
// =============================================================================

/// UI theme. Persisted standalone (anonymous preference) and inside each
/// user's settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Default)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

/// Per-user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub theme: Theme,
    pub language: Language,
    pub notifications: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        UserSettings {
            theme: Theme::Light,
            language: Language::Pt,
            notifications: true,
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// Account role. Exactly one synthetic admin exists, recognized by a fixed
/// credential pair and never persisted into the registered-user slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

/// A storefront account.
///
/// ## Identity
/// A customer is uniquely identified by id OR non-empty email OR non-empty
/// phone; any of the three counts as "the same person" during the post-auth
/// merge (see [`crate::auth::same_identity`]).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    pub full_name: String,

    /// Empty when the account was registered with a phone number.
    pub email: String,

    /// Empty when the account was registered with an e-mail address.
    pub phone: String,

    /// Stored in plaintext for fidelity with the reference data; the
    /// comparison is isolated in [`crate::auth::password_matches`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    pub role: Role,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Order history, append-only.
    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub settings: UserSettings,
}

impl User {
    /// Whether this account carries the admin role.
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Preferred contact string for order handoffs: phone when present,
    /// e-mail otherwise.
    pub fn contact(&self) -> &str {
        if self.phone.is_empty() {
            &self.email
        } else {
            &self.phone
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// One line of an order: a snapshot of the product at purchase time.
/// Deliberately decoupled from the live catalog so later edits never
/// retroactively alter order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub quantity: i64,
    pub price_centavos: i64,
}

impl OrderItem {
    /// Line total (price × quantity) at snapshot prices.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_centavos(self.price_centavos).multiply_quantity(self.quantity)
    }
}

/// A recorded purchase. Immutable once created; appended to the owning
/// user's order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Short human-readable token, e.g. "SB-9F3K2A".
    pub id: String,

    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    pub items: Vec<OrderItem>,

    /// Sum of price × quantity over the snapshot items.
    pub total_centavos: i64,
}

impl Order {
    /// Builds an order from item snapshots, computing the total.
    pub fn new(id: String, date: DateTime<Utc>, items: Vec<OrderItem>) -> Self {
        let total_centavos = items.iter().map(|i| i.line_total().centavos()).sum();
        Order {
            id,
            date,
            items,
            total_centavos,
        }
    }

    /// Returns the order total as a Money value.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_centavos(self.total_centavos)
    }
}

// =============================================================================
// Layout Settings
// =============================================================================

/// One editable content block on the home view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HomeSection {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub button_text: String,
}

/// The process-wide theming/content configuration. Singleton: exactly one
/// instance, admin-editable, persisted wholesale on every change.
///
/// Deserialization fills missing fields from [`Default`], so a partial
/// stored object merges over the shipped defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutSettings {
    pub primary_color: String,
    pub background_color: String,
    pub brand_name: String,
    pub banner_text: String,
    pub banner_font_size: u32,
    pub hero_image: String,
    pub hero_badge: String,
    pub hero_title: String,
    pub hero_title_size: u32,
    pub hero_subtitle: String,
    pub hero_subtitle_size: u32,
    pub header_bg_image: String,
    pub font_family: String,
    /// Destination number for the checkout handoff, digits only with
    /// country code (e.g. "258840000000").
    pub whatsapp_number: String,
    /// Gates the best-effort AI shopping tips.
    pub show_ai_tips: bool,
    /// Ordered content blocks on the home view.
    pub home_sections: Vec<HomeSection>,
}

// `Default for LayoutSettings` lives in `defaults.rs` next to the shipped
// catalog, mirroring where the storefront keeps its seeded content.

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price_mt: i64, original_mt: i64) -> Product {
        Product {
            id: "p-1".to_string(),
            name: "iPhone 13 Pro".to_string(),
            description: String::new(),
            price_centavos: Money::from_meticais(price_mt).centavos(),
            original_price_centavos: Money::from_meticais(original_mt).centavos(),
            category: Category::Smartphones,
            condition: Condition::Excellent,
            images: vec!["img-1".to_string()],
            rating: 4.8,
            reviews_count: 124,
        }
    }

    #[test]
    fn test_category_serde_uses_portuguese_labels() {
        let json = serde_json::to_string(&Category::Audio).unwrap();
        assert_eq!(json, "\"Áudio\"");

        let back: Category = serde_json::from_str("\"Acessórios\"").unwrap();
        assert_eq!(back, Category::Accessories);
    }

    #[test]
    fn test_category_filter() {
        assert!(CategoryFilter::All.matches(Category::Laptops));
        assert!(CategoryFilter::Only(Category::Laptops).matches(Category::Laptops));
        assert!(!CategoryFilter::Only(Category::Laptops).matches(Category::Audio));
        assert_eq!(CategoryFilter::All.to_string(), "Todos");
    }

    #[test]
    fn test_discount_percent() {
        // 45.000 of 52.000: saved 7.000 → 13% (rounded)
        assert_eq!(product(45_000, 52_000).discount_percent(), Some(13));
        // No discount when the original price is not above the asking price.
        assert_eq!(product(45_000, 45_000).discount_percent(), None);
        assert_eq!(product(45_000, 0).discount_percent(), None);
    }

    #[test]
    fn test_order_total_is_computed_from_snapshots() {
        let items = vec![
            OrderItem {
                name: "iPhone 13 Pro".to_string(),
                quantity: 2,
                price_centavos: Money::from_meticais(45_000).centavos(),
            },
            OrderItem {
                name: "MacBook Air M1".to_string(),
                quantity: 1,
                price_centavos: Money::from_meticais(65_000).centavos(),
            },
        ];
        let order = Order::new("SB-TEST01".to_string(), Utc::now(), items);
        assert_eq!(order.total(), Money::from_meticais(155_000));
    }

    #[test]
    fn test_user_contact_prefers_phone() {
        let mut user = User {
            id: "u-1".to_string(),
            full_name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "841234567".to_string(),
            password: None,
            role: Role::Customer,
            created_at: Utc::now(),
            orders: Vec::new(),
            settings: UserSettings::default(),
        };
        assert_eq!(user.contact(), "841234567");

        user.phone.clear();
        assert_eq!(user.contact(), "alice@example.com");
    }

    #[test]
    fn test_user_defaults_fill_missing_fields() {
        // Stored users from before orders/settings existed still load.
        let json = r#"{
            "id": "u-1",
            "fullName": "Alice",
            "email": "alice@example.com",
            "phone": "",
            "role": "customer",
            "createdAt": "2026-01-10T09:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.orders.is_empty());
        assert_eq!(user.settings, UserSettings::default());
        assert!(user.password.is_none());
    }

    #[test]
    fn test_theme_persists_as_literal_string() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }
}
