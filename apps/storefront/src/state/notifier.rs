//! # Notification Port
//!
//! Where toasts go once the reducer has asked for them.
//!
//! ```text
//! reduce() ──► Effect::Notify(n) ──► NotificationPolicy::apply(n) ──► Notifier
//!                                     (position, quiet flag)
//! ```
//!
//! The policy only decorates; a quiet notification is still delivered and
//! the sink decides how to render it.

use std::sync::{Mutex, MutexGuard};

use parapharm_core::{Notification, ToastPosition};
use tracing::info;

/// Viewport width (px) below which notifications are quiet.
pub const DEFAULT_QUIET_BELOW_PX: u32 = 768;

/// Receives notifications produced by dispatched actions.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

// =============================================================================
// Policy
// =============================================================================

/// Presentation settings applied to every notification before delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPolicy {
    pub quiet_below_px: u32,

    /// Unknown until the front end reports it; unknown is never quiet.
    pub viewport_width: Option<u32>,

    pub position: ToastPosition,
}

impl Default for NotificationPolicy {
    fn default() -> Self {
        NotificationPolicy {
            quiet_below_px: DEFAULT_QUIET_BELOW_PX,
            viewport_width: None,
            position: ToastPosition::default(),
        }
    }
}

impl NotificationPolicy {
    pub fn is_quiet(&self) -> bool {
        self.viewport_width
            .is_some_and(|width| width < self.quiet_below_px)
    }

    pub fn apply(&self, notification: Notification) -> Notification {
        notification.at(self.position).quiet(self.is_quiet())
    }
}

// =============================================================================
// Implementations
// =============================================================================

/// Writes each notification to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        info!(
            severity = ?notification.severity,
            position = ?notification.position,
            quiet = notification.quiet,
            "{}",
            notification.message
        );
    }
}

/// Keeps every notification in memory, for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        RecordingNotifier::default()
    }

    /// Everything delivered so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().map(|n| n.clone()).unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }

    fn lock(&self) -> Option<MutexGuard<'_, Vec<Notification>>> {
        self.received.lock().ok()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        if let Some(mut received) = self.lock() {
            received.push(notification.clone());
        }
    }
}
