//! Notification boundary.
//!
//! The storefront emits fire-and-forget messages ("item added", order
//! acknowledgments) toward whatever toast or banner mechanism the
//! embedding UI provides. The capability is injected at construction so
//! the core never depends on a UI being attached.

use std::sync::Mutex;

/// A fire-and-forget notification sink.
///
/// Implementations must not fail visibly; delivery problems are the
/// collaborator's concern, never the storefront's.
pub trait Notifier: Send + Sync {
    /// Deliver a user-facing message.
    fn notify(&self, message: &str);
}

/// Notifier that emits messages to the `tracing` pipeline.
///
/// The default sink for embedders that have not wired a toast mechanism
/// yet.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "loomworks::notify", %message, "notification");
    }
}

/// Notifier that records every message, for tests.
///
/// Lives here rather than behind `#[cfg(test)]` so the integration crate
/// can observe emissions too.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages delivered so far, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut guard) = self.messages.lock() {
            guard.push(message.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }
}
