//! Cart store: the visitor's working collection of cart items.
//!
//! The cart is an ordered sequence keyed by product id, with at most one
//! item per id. New items append at the end; quantity changes never move
//! an item. A quantity can never reach zero or below - that state is
//! represented by the item's absence.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use loomworks_core::{CurrencyCode, ProductId, format_amount};

use crate::catalog::Product;
use crate::notify::Notifier;

/// Notification emitted whenever a product lands in the cart.
pub const ITEM_ADDED_MESSAGE: &str = "Item added to cart";

/// A product paired with a quantity.
///
/// Invariant: `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    /// Owned copy of the catalog product.
    pub product: Product,
    /// How many of it the visitor wants.
    pub quantity: i64,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub const fn line_total(&self) -> i64 {
        self.product.price.amount() * self.quantity
    }
}

/// Owns the mutable cart and exposes the enumerated cart operations.
///
/// Constructed with an injected [`Notifier`]; adding an item emits
/// [`ITEM_ADDED_MESSAGE`] toward it. Derived totals are recomputed from
/// the items on every read, so a consumer can never observe a stale
/// value.
pub struct CartStore {
    items: Vec<CartItem>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            items: Vec::new(),
            notifier,
        }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// If the product is already in the cart its quantity is incremented
    /// in place (position unchanged); otherwise a new item with quantity 1
    /// is appended. Always succeeds - the product is assumed to come from
    /// the catalog.
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            }),
        }
        tracing::debug!(product_id = %product.id, "added to cart");
        self.notifier.notify(ITEM_ADDED_MESSAGE);
    }

    /// Remove the item with `id`, if present.
    ///
    /// Idempotent: an absent id is a no-op, not an error, so stale UI
    /// references never crash the flow.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != id);
        if self.items.len() == before {
            tracing::warn!(product_id = %id, "remove for id not in cart");
        } else {
            tracing::debug!(product_id = %id, "removed from cart");
        }
    }

    /// Set the quantity of the item with `id`.
    ///
    /// Any `quantity <= 0` behaves exactly as [`Self::remove_from_cart`].
    /// Positive quantities are accepted as-is, never clamped upward, and
    /// the item keeps its position. An absent id is a no-op.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(id);
            return;
        }
        match self.items.iter_mut().find(|item| item.product.id == id) {
            Some(item) => {
                item.quantity = quantity;
                tracing::debug!(product_id = %id, quantity, "quantity updated");
            }
            None => tracing::warn!(product_id = %id, "quantity update for id not in cart"),
        }
    }

    /// The cart items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The quantity of the item with `id`, if present.
    #[must_use]
    pub fn quantity_of(&self, id: ProductId) -> Option<i64> {
        self.items
            .iter()
            .find(|item| item.product.id == id)
            .map(|item| item.quantity)
    }

    /// Sum of `price x quantity` over all items.
    #[must_use]
    pub fn total_price(&self) -> i64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all items (the cart badge number).
    #[must_use]
    pub fn cart_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Build the render-boundary snapshot of this cart.
    #[must_use]
    pub fn view(&self, currency: CurrencyCode) -> CartView {
        CartView {
            items: self
                .items
                .iter()
                .map(|item| CartItemView::render(item, currency))
                .collect(),
            subtotal: format_amount(self.total_price(), currency),
            item_count: u32::try_from(self.cart_count()).unwrap_or(0),
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore").field("items", &self.items).finish()
    }
}

/// Cart item display data for the render boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub quantity: i64,
    pub price: String,
    pub line_price: String,
}

impl CartItemView {
    fn render(item: &CartItem, currency: CurrencyCode) -> Self {
        Self {
            id: item.product.id,
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            quantity: item.quantity,
            price: item.product.price.display(currency),
            line_price: format_amount(item.line_total(), currency),
        }
    }
}

/// Cart display data for the render boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// The empty-cart view.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_amount(0, currency),
            item_count: 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use loomworks_core::Price;

    use super::*;
    use crate::notify::RecordingNotifier;

    fn product(id: i32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(price).unwrap(),
            image: format!("/images/products/{id}.jpg"),
            description: String::new(),
            category: "Decor".to_owned(),
        }
    }

    fn cart() -> (CartStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (CartStore::new(Arc::clone(&notifier) as Arc<dyn Notifier>), notifier)
    }

    fn assert_invariants(cart: &CartStore) {
        let mut seen = std::collections::HashSet::new();
        for item in cart.items() {
            assert!(item.quantity >= 1, "quantity must stay >= 1");
            assert!(seen.insert(item.product.id), "ids must stay unique");
        }
    }

    #[test]
    fn test_merge_law() {
        let (mut cart, _) = cart();
        let p = product(1, 4500);
        cart.add_to_cart(&p);
        cart.add_to_cart(&p);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(p.id), Some(2));
        assert_invariants(&cart);
    }

    #[test]
    fn test_add_emits_notification() {
        let (mut cart, notifier) = cart();
        cart.add_to_cart(&product(1, 100));
        assert_eq!(notifier.messages(), vec![ITEM_ADDED_MESSAGE]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut cart, _) = cart();
        let p = product(1, 100);
        cart.add_to_cart(&p);
        cart.add_to_cart(&product(2, 200));

        cart.remove_from_cart(p.id);
        let after_once: Vec<_> = cart.items().to_vec();
        cart.remove_from_cart(p.id);

        assert_eq!(cart.items(), after_once.as_slice());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (mut cart, _) = cart();
        cart.add_to_cart(&product(1, 100));
        cart.remove_from_cart(ProductId::new(999));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_zero_equals_remove() {
        let (mut zeroed, _) = cart();
        let (mut removed, _) = cart();
        let p = product(1, 100);
        for c in [&mut zeroed, &mut removed] {
            c.add_to_cart(&p);
            c.add_to_cart(&product(2, 200));
        }

        zeroed.update_quantity(p.id, 0);
        removed.remove_from_cart(p.id);

        assert_eq!(zeroed.items(), removed.items());
    }

    #[test]
    fn test_update_negative_removes() {
        let (mut cart, _) = cart();
        let p = product(1, 100);
        cart.add_to_cart(&p);
        cart.update_quantity(p.id, -3);
        assert!(cart.is_empty());
        assert_invariants(&cart);
    }

    #[test]
    fn test_update_sets_quantity_in_place() {
        let (mut cart, _) = cart();
        let first = product(1, 100);
        let second = product(2, 200);
        cart.add_to_cart(&first);
        cart.add_to_cart(&second);

        cart.update_quantity(first.id, 7);

        let ids: Vec<ProductId> = cart.items().iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec![first.id, second.id], "position preserved");
        assert_eq!(cart.quantity_of(first.id), Some(7));
        assert_invariants(&cart);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (mut cart, _) = cart();
        cart.add_to_cart(&product(1, 100));
        cart.update_quantity(ProductId::new(999), 5);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), Some(1));
    }

    #[test]
    fn test_large_quantities_not_clamped() {
        let (mut cart, _) = cart();
        let p = product(1, 100);
        cart.add_to_cart(&p);
        cart.update_quantity(p.id, 1_000_000);
        assert_eq!(cart.quantity_of(p.id), Some(1_000_000));
    }

    #[test]
    fn test_totals() {
        let (mut cart, _) = cart();
        let first = product(1, 4500);
        let second = product(2, 2800);
        cart.add_to_cart(&first);
        cart.add_to_cart(&second);
        cart.update_quantity(second.id, 2);

        assert_eq!(cart.total_price(), 10_100);
        assert_eq!(cart.cart_count(), 3);
    }

    #[test]
    fn test_new_items_append_at_end() {
        let (mut cart, _) = cart();
        for id in 1..=3 {
            cart.add_to_cart(&product(id, 100));
        }
        let ids: Vec<i32> = cart.items().iter().map(|i| i.product.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_view_formats_prices() {
        let (mut cart, _) = cart();
        let first = product(1, 4500);
        let second = product(2, 2800);
        cart.add_to_cart(&first);
        cart.add_to_cart(&second);
        cart.update_quantity(second.id, 2);

        let view = cart.view(CurrencyCode::RUB);
        assert_eq!(view.subtotal, "10 100 \u{20bd}");
        assert_eq!(view.item_count, 3);
        let second_line = view.items.last().unwrap();
        assert_eq!(second_line.price, "2 800 \u{20bd}");
        assert_eq!(second_line.line_price, "5 600 \u{20bd}");
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::empty(CurrencyCode::RUB);
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal, "0 \u{20bd}");
    }
}
