//! Loomworks Core - Shared types library.
//!
//! This crate provides the domain types used across the Loomworks
//! components:
//! - `storefront` - The storefront state machine (catalog, cart, intake)
//! - `integration-tests` - End-to-end session scenarios
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clients, no state
//! machines. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
