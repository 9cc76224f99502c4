//! Notification sink
//!
//! Toasts are fire-and-forget: the activator never looks at what happened to
//! a notification after handing it over.

use parking_lot::Mutex;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
}

/// A notification as shown to the administrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub kind: NotificationKind,
    /// Short title
    pub title: String,
    /// Body text
    pub message: String,
}

/// Destination for user-facing notifications
pub trait Notifier: Send + Sync {
    /// Show a success notification
    fn success(&self, title: &str, message: &str);

    /// Show an error notification
    fn error(&self, title: &str, message: &str);
}

/// Notifier that writes every notification to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, title: &str, message: &str) {
        tracing::info!(title, message, "notification");
    }

    fn error(&self, title: &str, message: &str) {
        tracing::warn!(title, message, "notification");
    }
}

/// Notifier that keeps a history of everything it was asked to show
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    history: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    /// Create an empty notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications so far, oldest first
    pub fn history(&self) -> Vec<Notification> {
        self.history.lock().clone()
    }

    /// The most recent notification
    pub fn last(&self) -> Option<Notification> {
        self.history.lock().last().cloned()
    }

    /// Number of notifications of a given kind
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.history.lock().iter().filter(|n| n.kind == kind).count()
    }

    /// Forget all recorded notifications
    pub fn clear(&self) {
        self.history.lock().clear();
    }

    fn push(&self, kind: NotificationKind, title: &str, message: &str) {
        self.history.lock().push(Notification {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, title: &str, message: &str) {
        self.push(NotificationKind::Success, title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.push(NotificationKind::Error, title, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_history() {
        let notifier = RecordingNotifier::new();
        notifier.success("Saved", "All good");
        notifier.error("Failed", "Nope");

        let history = notifier.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, NotificationKind::Success);
        assert_eq!(history[1].title, "Failed");
        assert_eq!(notifier.count(NotificationKind::Error), 1);
        assert_eq!(notifier.last().unwrap().message, "Nope");

        notifier.clear();
        assert!(notifier.history().is_empty());
        assert_eq!(notifier.last(), None);
    }

    #[test]
    fn test_tracing_notifier_is_fire_and_forget() {
        let notifier = TracingNotifier;
        notifier.success("Saved", "All good");
        notifier.error("Failed", "Nope");
    }
}
