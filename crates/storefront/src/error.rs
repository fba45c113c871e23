//! Unified error handling for the storefront.
//!
//! The cart and selection operations are total functions and never fail;
//! errors only exist at the construction and input boundaries. `StoreError`
//! unifies them so embedders handle one type.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::intake::FormError;

/// Top-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The catalog document failed to load.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration failed validation.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A custom-order form failed boundary validation.
    #[error("invalid form: {0}")]
    Form(#[from] FormError),
}

/// Result type alias for [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
