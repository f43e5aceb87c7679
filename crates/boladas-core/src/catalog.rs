//! # Catalog
//!
//! The product catalog and its derived view selector.
//!
//! The selector is a pure function of its inputs (catalog, search term,
//! category filter); the storefront recomputes it on every keystroke and
//! category click, so there is no caching here.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::types::{CategoryFilter, Product};

/// The product catalog.
///
/// ## Invariants
/// - Product ids are unique within the catalog
/// - New products are prepended (newest first, as the storefront lists them)
///
/// Persisted as a plain sequence of products (`#[serde(transparent)]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from an existing product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Prepends a product to the catalog.
    ///
    /// ## Errors
    /// Rejects a duplicate id; the catalog is keyed by product id.
    pub fn add(&mut self, product: Product) -> ValidationResult<()> {
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: product.id,
            });
        }
        self.products.insert(0, product);
        Ok(())
    }

    /// Removes a product by id, returning whether an entry was removed.
    ///
    /// Existing cart items and order snapshots are unaffected: both carry
    /// their own copies of the product data.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != product_id);
        self.products.len() != before
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Number of listed products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The derived view selector: products whose name case-insensitively
    /// contains the trimmed search term AND whose category passes the
    /// filter. Catalog order is preserved.
    pub fn filtered(&self, search_term: &str, filter: &CategoryFilter) -> Vec<Product> {
        let needle = search_term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .filter(|p| filter.matches(p.category))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Category, Condition};

    fn test_product(id: &str, name: &str, category: Category) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price_centavos: Money::from_meticais(10_000).centavos(),
            original_price_centavos: Money::from_meticais(12_000).centavos(),
            category,
            condition: Condition::Excellent,
            images: vec!["img".to_string()],
            rating: 4.0,
            reviews_count: 1,
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            test_product("1", "iPhone 13 Pro", Category::Smartphones),
            test_product("2", "MacBook Air M1", Category::Laptops),
            test_product("3", "Headphone Sony WH-1000XM4", Category::Audio),
        ])
    }

    #[test]
    fn test_add_prepends() {
        let mut catalog = sample_catalog();
        catalog
            .add(test_product("4", "PlayStation 5", Category::Consoles))
            .unwrap();

        assert_eq!(catalog.products[0].id, "4");
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = sample_catalog();
        let err = catalog
            .add(test_product("1", "Another", Category::Cameras))
            .unwrap_err();

        assert!(matches!(err, ValidationError::Duplicate { .. }));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut catalog = sample_catalog();
        assert!(catalog.remove("2"));
        assert!(!catalog.remove("2"));
        assert!(catalog.get("2").is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_filtered_matches_name_case_insensitively_across_categories() {
        let catalog = sample_catalog();

        // "phone" hits both "iPhone 13 Pro" and "Headphone ..." under All.
        let hits = catalog.filtered("phone", &CategoryFilter::All);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "1");
        assert_eq!(hits[1].id, "3");
    }

    #[test]
    fn test_filtered_combines_search_and_category() {
        let catalog = sample_catalog();

        let hits = catalog.filtered("phone", &CategoryFilter::Only(Category::Audio));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");

        let none = catalog.filtered("macbook", &CategoryFilter::Only(Category::Smartphones));
        assert!(none.is_empty());
    }

    #[test]
    fn test_filtered_empty_term_returns_everything_in_order() {
        let catalog = sample_catalog();
        let all = catalog.filtered("", &CategoryFilter::All);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, "1");
    }

    #[test]
    fn test_filtered_trims_the_search_term() {
        let catalog = sample_catalog();
        let hits = catalog.filtered("  macbook  ", &CategoryFilter::All);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
    }
}
