//! Custom-order dialog and intake scenarios.

use loomworks_core::ProductId;
use loomworks_integration_tests::TestSession;
use loomworks_storefront::intake::{CustomOrderDraft, ORDER_ACK_MESSAGE};

fn filled_draft() -> CustomOrderDraft {
    CustomOrderDraft {
        name: "Anna".to_owned(),
        email: "anna@example.com".to_owned(),
        message: "A table runner to match the wall hanging".to_owned(),
    }
}

/// Scenario: fill the form, submit, observe reset + close + ack together.
#[test]
fn submit_resets_form_and_closes_dialog() {
    let mut session = TestSession::new();
    let store = &mut session.store;

    store.set_custom_order_open(true);
    store.set_draft(filled_draft());
    assert!(store.custom_order_open());

    let receipt = store.submit_custom_order().expect("validated draft submits");

    assert!(store.draft().is_empty(), "form resets to empty");
    assert!(!store.custom_order_open(), "dialog closes");
    assert_eq!(session.notifier.messages(), vec![ORDER_ACK_MESSAGE]);
    assert!(!receipt.reference.is_nil());
}

/// An incomplete form is rejected at the boundary and nothing moves.
#[test]
fn incomplete_form_is_rejected() {
    let mut session = TestSession::new();
    let store = &mut session.store;

    store.set_custom_order_open(true);
    store.set_draft(CustomOrderDraft {
        name: "Anna".to_owned(),
        email: "anna@example.com".to_owned(),
        message: String::new(),
    });

    assert!(store.submit_custom_order().is_err());
    assert!(store.custom_order_open(), "dialog stays open for correction");
    assert_eq!(store.draft().message, "", "draft untouched");
    assert!(session.notifier.messages().is_empty(), "no acknowledgment");
}

/// Cancelling the dialog discards whatever was typed.
#[test]
fn cancel_discards_draft() {
    let mut session = TestSession::new();
    let store = &mut session.store;

    store.set_custom_order_open(true);
    store.set_draft(filled_draft());
    store.set_custom_order_open(false);

    assert!(store.draft().is_empty());
}

/// The dialog is orthogonal to cart and selection state.
#[test]
fn dialog_is_independent_of_cart_and_selection() {
    let mut session = TestSession::new();
    let store = &mut session.store;

    store.add_to_cart(ProductId::new(1));
    store.select_product(ProductId::new(2));
    store.set_custom_order_open(true);
    store.set_draft(filled_draft());

    store.submit_custom_order().expect("submits");

    assert_eq!(store.cart().cart_count(), 1, "cart untouched by submission");
    assert_eq!(
        store.selected_product().map(|p| p.id),
        Some(ProductId::new(2)),
        "detail view untouched by submission"
    );
}

/// Two sessions never share state.
#[test]
fn sessions_are_isolated() {
    let mut first = TestSession::new();
    let second = TestSession::new();

    first.store.add_to_cart(ProductId::new(1));

    assert_eq!(first.store.cart().cart_count(), 1);
    assert!(second.store.cart().is_empty());
    assert!(second.notifier.messages().is_empty());
}
