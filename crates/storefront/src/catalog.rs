//! Product catalog: the fixed set of purchasable products.
//!
//! The catalog document is embedded at compile time and parsed once at
//! load; after that the catalog is immutable and read-only for the rest
//! of the process lifetime. Nothing in the storefront ever creates,
//! mutates, or removes a product.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use loomworks_core::{Price, ProductId};

/// The embedded catalog document.
const CATALOG_JSON: &str = include_str!("../content/catalog.json");

/// A purchasable product.
///
/// Immutable once loaded; cart items carry owned copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Whole-unit price.
    pub price: Price,
    /// Image reference for the render boundary (hosting is external).
    pub image: String,
    /// Short description shown in the detail view.
    pub description: String,
    /// Category badge label.
    pub category: String,
}

/// Errors that can occur while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON or violates a field
    /// constraint (e.g. a non-positive price).
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product has an empty name.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
}

/// The immutable product catalog, keyed by product id.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Parse and validate the embedded catalog document.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the document fails to parse or
    /// violates a catalog invariant.
    pub fn load() -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(CATALOG_JSON)?;
        let catalog = Self::from_products(products)?;
        tracing::info!(count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Build a catalog from an explicit product list.
    ///
    /// Shared validation entry point for [`Catalog::load`] and for tests
    /// and embedders that supply their own table. Prices are already
    /// positive by construction of [`Price`]; this checks the remaining
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two products share an id,
    /// or [`CatalogError::EmptyName`] for a blank product name.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Category labels in first-appearance order, without duplicates.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }
}
