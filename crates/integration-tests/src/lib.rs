//! Integration tests for Loomworks.
//!
//! The tests drive a whole visitor session through the public
//! [`Storefront`] API - catalog browsing, cart accumulation, custom-order
//! submission - with a recording notifier in place of a toast UI.
//!
//! # Test Categories
//!
//! - `cart_session` - Cart accumulation scenarios and invariants
//! - `custom_order` - Custom-order dialog and intake scenarios

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use loomworks_storefront::Storefront;
use loomworks_storefront::config::StoreConfig;
use loomworks_storefront::notify::{Notifier, RecordingNotifier};

/// A storefront session wired for observation.
pub struct TestSession {
    pub store: Storefront,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestSession {
    /// Start a session over the embedded catalog with default config.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog fails to load - a test environment
    /// bug, not a scenario under test.
    #[must_use]
    pub fn new() -> Self {
        init_tracing();
        let notifier = Arc::new(RecordingNotifier::new());
        let store = Storefront::new(
            StoreConfig::default(),
            Arc::clone(&notifier) as Arc<dyn Notifier>,
        )
        .expect("embedded catalog must load");
        Self { store, notifier }
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a tracing subscriber for test output.
///
/// Defaults to warn level unless `RUST_LOG` overrides it; repeat calls
/// are harmless.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
