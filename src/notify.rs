//! User-facing notifications (toasts).
//!
//! The presenter is a collaborator: workflow code pushes [`Notification`]s into
//! anything that implements [`Notifier`]. The TUI uses [`Toasts`], tests and the
//! headless command collect into a plain `Vec`.

use std::time::{Duration, Instant};

use crate::defaults::Defaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub duration: Duration,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            duration: Defaults::TOAST_DURATION,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, description)
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::new(Severity::Error, "Error", description)
    }
}

pub trait Notifier {
    fn notify(&mut self, n: Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, n: Notification) {
        self.push(n);
    }
}

/// On-screen toast stack. Each toast lives for its own `duration`.
#[derive(Debug, Default)]
pub struct Toasts {
    active: Vec<(Notification, Instant)>,
}

impl Toasts {
    /// Drop expired toasts. Called once per frame.
    pub fn prune(&mut self, now: Instant) {
        self.active.retain(|(n, shown)| now.duration_since(*shown) < n.duration);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|(n, _)| n)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, n: Notification) {
        match n.severity {
            Severity::Error => tracing::warn!(title = %n.title, "{}", n.description),
            _ => tracing::info!(title = %n.title, "{}", n.description),
        }
        self.active.push((n, Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_their_duration() {
        let mut t = Toasts::default();
        t.notify(Notification::info("a", "b"));
        let start = Instant::now();
        t.prune(start);
        assert_eq!(t.visible().count(), 1);

        t.prune(start + Defaults::TOAST_DURATION + Duration::from_millis(50));
        assert!(t.is_empty());
    }

    #[test]
    fn error_toasts_use_generic_title() {
        let n = Notification::error("boom");
        assert_eq!(n.title, "Error");
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.duration, Duration::from_millis(3000));
    }
}
