//! Custom-order intake boundary.
//!
//! Captures the free-form "made to order" request. Field validation lives
//! in [`CustomOrderRequest::parse`] - the input boundary - so the intake
//! stub itself can assume well-formed input, mirroring how the rest of
//! the storefront trusts pre-validated data. The stub acknowledges
//! receipt and hands off to nothing: an order-processing collaborator
//! would be wired here.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use loomworks_core::{Email, EmailError};

use crate::notify::Notifier;

/// Acknowledgment notification emitted on a successful submission.
pub const ORDER_ACK_MESSAGE: &str = "Request sent! We will get back to you shortly.";

/// The in-progress custom-order form.
///
/// Transient: reset to empty after a successful submission or when the
/// dialog is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomOrderDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl CustomOrderDraft {
    /// Reset all fields to empty.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Errors from the custom-order input boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The name field is empty.
    #[error("name is required")]
    EmptyName,

    /// The email field failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The message field is empty.
    #[error("message is required")]
    EmptyMessage,
}

/// A validated custom-order request.
///
/// Only [`CustomOrderRequest::parse`] constructs one, so holding a value
/// is proof all three fields passed the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomOrderRequest {
    name: String,
    email: Email,
    message: String,
}

impl CustomOrderRequest {
    /// Validate a draft at the input boundary.
    ///
    /// Name and message are trimmed and must be non-empty; the email must
    /// parse as a valid address.
    ///
    /// # Errors
    ///
    /// Returns the first failed [`FormError`] constraint; the draft is
    /// left untouched for correction.
    pub fn parse(draft: &CustomOrderDraft) -> Result<Self, FormError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }

        let email = Email::parse(&draft.email)?;

        let message = draft.message.trim();
        if message.is_empty() {
            return Err(FormError::EmptyMessage);
        }

        Ok(Self {
            name: name.to_owned(),
            email,
            message: message.to_owned(),
        })
    }

    /// The requester's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The requester's email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// The free-form request text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Acknowledgment returned by the intake stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    /// Reference the visitor could quote in follow-up contact.
    pub reference: Uuid,
    /// When the request was accepted.
    pub submitted_at: DateTime<Utc>,
}

/// Boundary stub that accepts validated custom-order requests.
///
/// No network or storage effect: it acknowledges receipt, notifies, and
/// returns. Submission handling beyond that belongs to an external
/// collaborator.
pub struct OrderIntake {
    notifier: Arc<dyn Notifier>,
}

impl OrderIntake {
    /// Create the intake boundary with its notification sink.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Accept a validated request and acknowledge it.
    ///
    /// Performs no validation of its own - the [`CustomOrderRequest`] type
    /// already guarantees the precondition.
    pub fn submit(&self, request: &CustomOrderRequest) -> OrderReceipt {
        let receipt = OrderReceipt {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
        };
        tracing::info!(
            reference = %receipt.reference,
            email = %request.email(),
            "custom order request received"
        );
        self.notifier.notify(ORDER_ACK_MESSAGE);
        receipt
    }
}

impl fmt::Debug for OrderIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderIntake").finish_non_exhaustive()
    }
}
