//! Transient notifications ("toasts")
//!
//! The slot holds at most one live notification. Showing a new one replaces
//! the old one together with its deadline, so there is never more than one
//! pending auto-dismiss.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A message for the user, produced by a view transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

#[derive(Debug, Clone)]
struct Live {
    notification: Notification,
    deadline: Instant,
}

/// Holder for the one notification currently on screen
#[derive(Debug, Clone)]
pub struct NotificationSlot {
    duration: Duration,
    live: Option<Live>,
}

impl NotificationSlot {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            live: None,
        }
    }

    /// Show `notification` until `now + duration`, replacing whatever was live.
    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.live = Some(Live {
            notification,
            deadline: now + self.duration,
        });
    }

    /// Explicit close. Returns the notification that was live, if any.
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.live.take().map(|live| live.notification)
    }

    /// Drop the live notification once its deadline has passed.
    ///
    /// Returns true when something was dismissed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.live {
            Some(live) if now >= live.deadline => {
                self.live = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.live.as_ref().map(|live| &live.notification)
    }

    /// When the live notification auto-dismisses. `None` when nothing is live.
    pub fn deadline(&self) -> Option<Instant> {
        self.live.as_ref().map(|live| live.deadline)
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_NOTIFICATION_MS))
    }
}
