//! Selection state: the inspected product and the custom-order dialog.
//!
//! Two orthogonal fields, not one exclusive automaton: a visitor can have
//! a product detail view and the custom-order dialog open independently.
//! Neither field touches the cart.

use crate::catalog::Product;

/// The detail-view selection and custom-order dialog visibility.
///
/// Initial state: no selection, dialog closed.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<Product>,
    custom_order_open: bool,
}

impl SelectionState {
    /// Create the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inspected product.
    pub fn select(&mut self, product: Product) {
        self.selected = Some(product);
    }

    /// Clear the inspected product (detail dialog dismissed).
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Clear the selection and hand it back in one step.
    ///
    /// The context uses this for the composite "add selection to cart and
    /// close the detail view" intent, so both effects happen inside one
    /// synchronous call.
    pub fn take_selected(&mut self) -> Option<Product> {
        self.selected.take()
    }

    /// The currently inspected product, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// Show or hide the custom-order dialog.
    pub fn set_custom_order_open(&mut self, open: bool) {
        self.custom_order_open = open;
    }

    /// Whether the custom-order dialog is visible.
    #[must_use]
    pub const fn custom_order_open(&self) -> bool {
        self.custom_order_open
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use loomworks_core::{Price, ProductId};

    use super::*;

    fn product(id: i32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(1000).unwrap(),
            image: String::new(),
            description: String::new(),
            category: "Decor".to_owned(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = SelectionState::new();
        assert!(state.selected().is_none());
        assert!(!state.custom_order_open());
    }

    #[test]
    fn test_select_then_clear() {
        let mut state = SelectionState::new();
        state.select(product(2));
        assert_eq!(state.selected().unwrap().id, ProductId::new(2));

        state.clear();
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_take_selected_clears() {
        let mut state = SelectionState::new();
        state.select(product(3));

        let taken = state.take_selected().unwrap();
        assert_eq!(taken.id, ProductId::new(3));
        assert!(state.selected().is_none());
        assert!(state.take_selected().is_none());
    }

    #[test]
    fn test_dialog_independent_of_selection() {
        let mut state = SelectionState::new();
        state.set_custom_order_open(true);
        state.select(product(1));
        assert!(state.custom_order_open());
        assert!(state.selected().is_some());

        state.clear();
        assert!(state.custom_order_open(), "clearing selection leaves the dialog alone");

        state.set_custom_order_open(false);
        assert!(!state.custom_order_open());
    }
}
