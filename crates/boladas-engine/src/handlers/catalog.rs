//! # Catalog Handlers
//!
//! Browsing and search for everyone; catalog mutations for the admin.
//!
//! The admin check lives HERE, not in the UI. The reference gated the
//! admin panel presentationally; the engine treats the role check as the
//! actual trust boundary and enforces it on every mutating intent.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use boladas_core::{validation, Category, CategoryFilter, Condition, Money, Product};

use crate::engine::Engine;
use crate::error::EngineResult;

/// Admin input for a new listing.
///
/// Rating and review count are not part of the form: a fresh listing
/// starts at rating 5 with zero reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price_centavos: i64,
    pub original_price_centavos: i64,
    pub category: Category,
    pub condition: Condition,
    pub images: Vec<String>,
}

impl Engine {
    /// The full catalog, newest first.
    pub fn products(&self) -> Vec<Product> {
        self.catalog.with(|c| c.products.clone())
    }

    /// Looks up a single product.
    pub fn product(&self, product_id: &str) -> Option<Product> {
        self.catalog.with(|c| c.get(product_id).cloned())
    }

    /// The derived product view: name contains the term
    /// (case-insensitively) AND the category passes the filter.
    pub fn search(&self, term: &str, filter: &CategoryFilter) -> EngineResult<Vec<Product>> {
        let term = validation::validate_search_query(term)?;
        debug!(term = %term, filter = %filter, "search intent");

        Ok(self.catalog.with(|c| c.filtered(&term, filter)))
    }

    /// Lists a new product (admin only).
    ///
    /// ## Validation
    /// - non-empty name
    /// - strictly positive price
    /// - at least one image
    ///
    /// The listing is prepended: newest products lead the storefront.
    pub async fn add_product(&self, new: NewProduct) -> EngineResult<Product> {
        self.require_admin()?;

        validation::validate_product_name(&new.name)?;
        validation::validate_price(Money::from_centavos(new.price_centavos))?;
        validation::validate_images(&new.images)?;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: new.name.trim().to_string(),
            description: new.description,
            price_centavos: new.price_centavos,
            original_price_centavos: new.original_price_centavos,
            category: new.category,
            condition: new.condition,
            images: new.images,
            rating: 5.0,
            reviews_count: 0,
        };

        self.catalog.with_mut(|c| c.add(product.clone()))?;
        self.persist_catalog().await?;

        info!(product_id = %product.id, name = %product.name, "Product listed");
        Ok(product)
    }

    /// Delists a product by id (admin only).
    ///
    /// Existing cart items and recorded orders are unaffected: both carry
    /// their own copies of the product data. An absent id is a no-op.
    pub async fn delete_product(&self, product_id: &str) -> EngineResult<()> {
        self.require_admin()?;

        let removed = self.catalog.with_mut(|c| c.remove(product_id));
        if removed {
            self.persist_catalog().await?;
            info!(product_id = %product_id, "Product delisted");
        } else {
            debug!(product_id = %product_id, "delete_product on absent id");
        }

        Ok(())
    }
}
