//! The top-level storefront context.
//!
//! One [`Storefront`] owns every mutable store for a visitor session -
//! cart, selection, custom-order draft - plus the immutable catalog and
//! configuration. The render boundary reads snapshots through the
//! accessor methods and feeds user intents back through the mutation
//! methods; it never touches a store directly, and the store is never
//! duplicated across components.
//!
//! Every intent runs to completion synchronously inside one `&mut self`
//! call, so a consumer can only ever observe fully-settled state.

use std::sync::Arc;

use tracing::instrument;

use loomworks_core::ProductId;

use crate::cart::{CartStore, CartView};
use crate::catalog::{Catalog, Product};
use crate::config::StoreConfig;
use crate::error::Result;
use crate::intake::{CustomOrderDraft, CustomOrderRequest, OrderIntake, OrderReceipt};
use crate::notify::Notifier;
use crate::selection::SelectionState;

/// The storefront application context.
#[derive(Debug)]
pub struct Storefront {
    config: StoreConfig,
    catalog: Catalog,
    cart: CartStore,
    selection: SelectionState,
    draft: CustomOrderDraft,
    intake: OrderIntake,
}

impl Storefront {
    /// Create a storefront over the embedded catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog document fails to load.
    pub fn new(config: StoreConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let catalog = Catalog::load()?;
        Ok(Self::with_catalog(config, catalog, notifier))
    }

    /// Create a storefront over an explicit catalog.
    #[must_use]
    pub fn with_catalog(
        config: StoreConfig,
        catalog: Catalog,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            catalog,
            cart: CartStore::new(Arc::clone(&notifier)),
            selection: SelectionState::new(),
            draft: CustomOrderDraft::default(),
            intake: OrderIntake::new(notifier),
        }
    }

    // =========================================================================
    // User intents
    // =========================================================================

    /// Open the detail view for a catalog product.
    ///
    /// A stale id is absorbed without changing the current selection.
    #[instrument(skip(self))]
    pub fn select_product(&mut self, id: ProductId) {
        match self.catalog.get(id) {
            Some(product) => self.selection.select(product.clone()),
            None => tracing::warn!(product_id = %id, "select for id not in catalog"),
        }
    }

    /// Dismiss the detail view.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Add one unit of a catalog product to the cart.
    ///
    /// A stale id is absorbed without touching the cart.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, id: ProductId) {
        match self.catalog.get(id) {
            Some(product) => self.cart.add_to_cart(product),
            None => tracing::warn!(product_id = %id, "add for id not in catalog"),
        }
    }

    /// Add the inspected product to the cart and close the detail view.
    ///
    /// Composite intent: both effects happen inside this one synchronous
    /// call, so consumers observe them together or not at all. With no
    /// selection this is a no-op.
    #[instrument(skip(self))]
    pub fn add_selected_to_cart(&mut self) {
        if let Some(product) = self.selection.take_selected() {
            self.cart.add_to_cart(&product);
        }
    }

    /// Remove a cart item. Idempotent; unknown ids are absorbed.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove_from_cart(id);
    }

    /// Set a cart item's quantity; any `quantity <= 0` removes the item.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        self.cart.update_quantity(id, quantity);
    }

    /// Step a cart item's quantity up by one (the "+" button).
    ///
    /// No-op when the item is not in the cart - the stepper only exists
    /// on rendered cart lines, so a miss means the reference is stale.
    pub fn increment_quantity(&mut self, id: ProductId) {
        if let Some(quantity) = self.cart.quantity_of(id) {
            self.cart.update_quantity(id, quantity + 1);
        }
    }

    /// Step a cart item's quantity down by one (the "-" button).
    ///
    /// Stepping down from 1 removes the item, via the same non-positive
    /// path as [`Self::update_quantity`].
    pub fn decrement_quantity(&mut self, id: ProductId) {
        if let Some(quantity) = self.cart.quantity_of(id) {
            self.cart.update_quantity(id, quantity - 1);
        }
    }

    /// Show or hide the custom-order dialog.
    ///
    /// Closing the dialog also resets the draft: form data does not
    /// survive a cancel.
    pub fn set_custom_order_open(&mut self, open: bool) {
        self.selection.set_custom_order_open(open);
        if !open {
            self.draft.reset();
        }
    }

    /// Replace the custom-order draft with the latest form contents.
    pub fn set_draft(&mut self, draft: CustomOrderDraft) {
        self.draft = draft;
    }

    /// Submit the custom-order draft.
    ///
    /// Validates at the input boundary; on success the intake acknowledges
    /// the request, the draft resets, and the dialog closes - all within
    /// this one call. On failure every piece of state is left untouched so
    /// the visitor can correct the form.
    ///
    /// # Errors
    ///
    /// Returns the boundary's [`crate::intake::FormError`] (as
    /// [`crate::error::StoreError::Form`]) when a field fails validation.
    #[instrument(skip(self))]
    pub fn submit_custom_order(&mut self) -> Result<OrderReceipt> {
        let request = CustomOrderRequest::parse(&self.draft)?;
        let receipt = self.intake.submit(&request);
        self.draft.reset();
        self.selection.set_custom_order_open(false);
        Ok(receipt)
    }

    // =========================================================================
    // Render-boundary snapshot
    // =========================================================================

    /// The store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The immutable product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart store (read-only access for consumers).
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The cart rendered with the configured currency.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        self.cart.view(self.config.currency)
    }

    /// The product in the detail view, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.selection.selected()
    }

    /// Whether the custom-order dialog is visible.
    #[must_use]
    pub const fn custom_order_open(&self) -> bool {
        self.selection.custom_order_open()
    }

    /// The in-progress custom-order form.
    #[must_use]
    pub const fn draft(&self) -> &CustomOrderDraft {
        &self.draft
    }
}
