//! Notification queue
//!
//! Transient status messages that slide in, stay for a fixed time and slide
//! out again. Entries expire independently of one another.

use crate::consts::cli_consts::notifications::{transition, ttl};
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Parses a severity name; anything unrecognised becomes [`Severity::Info`].
    pub fn parse_lossy(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" | "warn" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Severity::parse_lossy(name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

/// Where a notification is in its on-screen lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Sliding in.
    Entering,
    /// Fully visible.
    Shown,
    /// Sliding out; removed once the transition completes.
    Leaving { since: Instant },
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
    pub phase: Phase,
}

impl Notification {
    /// Fraction of the current transition that has completed (1.0 when idle).
    pub fn transition_progress(&self, now: Instant) -> f64 {
        let started = match self.phase {
            Phase::Entering => self.created_at,
            Phase::Leaving { since } => since,
            Phase::Shown => return 1.0,
        };
        let elapsed = now.saturating_duration_since(started).as_secs_f64();
        (elapsed / transition().as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Horizontal slide offset as a fraction of the toast width: 1.0 is
    /// fully off screen, 0.0 fully shown.
    pub fn slide_offset(&self, now: Instant) -> f64 {
        let progress = self.transition_progress(now);
        match self.phase {
            Phase::Entering => 1.0 - progress,
            Phase::Shown => 0.0,
            Phase::Leaving { .. } => progress,
        }
    }
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification below any already on screen.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.push_back(Notification {
            id,
            message: message.into(),
            severity,
            created_at: now,
            phase: Phase::Entering,
        });
        id
    }

    /// Starts the exit transition of a notification ahead of its expiry.
    ///
    /// Returns `false` if the notification is unknown or already leaving.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        match self.entries.iter_mut().find(|n| n.id == id) {
            Some(entry) if !matches!(entry.phase, Phase::Leaving { .. }) => {
                entry.phase = Phase::Leaving { since: now };
                true
            }
            _ => false,
        }
    }

    /// Dismisses the most recent notification that is not already leaving.
    pub fn dismiss_latest(&mut self, now: Instant) -> bool {
        let latest = self
            .entries
            .iter()
            .rev()
            .find(|n| !matches!(n.phase, Phase::Leaving { .. }))
            .map(|n| n.id);
        match latest {
            Some(id) => self.dismiss(id, now),
            None => false,
        }
    }

    /// Starts the exit transition of every notification still on screen.
    pub fn dismiss_all(&mut self, now: Instant) {
        for entry in self.entries.iter_mut() {
            if !matches!(entry.phase, Phase::Leaving { .. }) {
                entry.phase = Phase::Leaving { since: now };
            }
        }
    }

    /// Advances transitions and drops notifications whose exit has finished.
    pub fn tick(&mut self, now: Instant) {
        for entry in self.entries.iter_mut() {
            let age = now.saturating_duration_since(entry.created_at);
            match entry.phase {
                Phase::Entering if age >= ttl() => {
                    entry.phase = Phase::Leaving {
                        since: entry.created_at + ttl(),
                    };
                }
                Phase::Entering if age >= transition() => entry.phase = Phase::Shown,
                Phase::Shown if age >= ttl() => {
                    entry.phase = Phase::Leaving {
                        since: entry.created_at + ttl(),
                    };
                }
                _ => {}
            }
        }
        self.entries.retain(|entry| match entry.phase {
            Phase::Leaving { since } => now.saturating_duration_since(since) < transition(),
            _ => true,
        });
    }

    /// Notifications currently on screen, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.entries.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Notifications pushed after the given id, for transcript output.
    pub fn since(&self, after: Option<NotificationId>) -> impl Iterator<Item = &Notification> {
        self.entries
            .iter()
            .filter(move |n| after.is_none_or(|after| n.id > after))
    }

    pub fn last_id(&self) -> Option<NotificationId> {
        self.next_id.checked_sub(1).map(NotificationId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unknown_severity_falls_back_to_info() {
        assert_eq!(Severity::parse_lossy("success"), Severity::Success);
        assert_eq!(Severity::parse_lossy("ERROR"), Severity::Error);
        assert_eq!(Severity::parse_lossy("warning"), Severity::Warning);
        assert_eq!(Severity::parse_lossy("catastrophic"), Severity::Info);
        assert_eq!(Severity::from(""), Severity::Info);
    }

    #[test]
    // Pushing several messages stacks them instead of replacing.
    fn test_entries_stack() {
        let now = Instant::now();
        let mut queue = NotificationQueue::new();
        queue.push("first", Severity::Info, now);
        queue.push("second", Severity::Success, now);
        let messages: Vec<_> = queue.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    // A notification enters, shows, leaves after the TTL and is then removed.
    fn test_lifecycle_follows_fixed_timings() {
        let start = Instant::now();
        let mut queue = NotificationQueue::new();
        queue.push("saved", Severity::Success, start);
        assert_eq!(queue.iter().next().unwrap().phase, Phase::Entering);

        queue.tick(start + Duration::from_millis(300));
        assert_eq!(queue.iter().next().unwrap().phase, Phase::Shown);

        queue.tick(start + Duration::from_millis(4_999));
        assert_eq!(queue.iter().next().unwrap().phase, Phase::Shown);

        queue.tick(start + Duration::from_millis(5_000));
        assert!(matches!(
            queue.iter().next().unwrap().phase,
            Phase::Leaving { .. }
        ));

        queue.tick(start + Duration::from_millis(5_300));
        assert!(queue.is_empty());
    }

    #[test]
    // Each entry expires on its own schedule.
    fn test_independent_expiry() {
        let start = Instant::now();
        let mut queue = NotificationQueue::new();
        queue.push("early", Severity::Info, start);
        queue.push("late", Severity::Info, start + Duration::from_secs(3));

        queue.tick(start + Duration::from_millis(5_400));
        let remaining: Vec<_> = queue.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(remaining, vec!["late"]);
    }

    #[test]
    // Dismissing pre-empts the scheduled removal.
    fn test_dismiss_before_expiry() {
        let start = Instant::now();
        let mut queue = NotificationQueue::new();
        let id = queue.push("bye", Severity::Warning, start);

        let at = start + Duration::from_secs(1);
        assert!(queue.dismiss(id, at));
        assert!(!queue.dismiss(id, at));

        queue.tick(at + Duration::from_millis(300));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_latest_skips_leaving_entries() {
        let start = Instant::now();
        let mut queue = NotificationQueue::new();
        let first = queue.push("one", Severity::Info, start);
        let second = queue.push("two", Severity::Info, start);

        assert!(queue.dismiss_latest(start));
        assert!(queue.dismiss_latest(start));
        assert!(!queue.dismiss_latest(start));
        assert!(!queue.dismiss(first, start));
        assert!(!queue.dismiss(second, start));
    }

    #[test]
    // Clearing slides every entry out, then removes them together.
    fn test_dismiss_all_clears_queue() {
        let start = Instant::now();
        let mut queue = NotificationQueue::new();
        queue.push("one", Severity::Info, start);
        queue.push("two", Severity::Error, start);
        queue.tick(start + Duration::from_millis(300));
        assert_eq!(queue.iter().next().unwrap().slide_offset(start), 0.0);

        let at = start + Duration::from_secs(1);
        queue.dismiss_all(at);
        let entry = queue.iter().next().unwrap();
        assert_eq!(entry.slide_offset(at), 0.0);
        assert_eq!(entry.slide_offset(at + Duration::from_millis(300)), 1.0);

        queue.tick(at + Duration::from_millis(300));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_since_returns_newer_entries() {
        let now = Instant::now();
        let mut queue = NotificationQueue::new();
        assert_eq!(queue.last_id(), None);
        queue.push("a", Severity::Info, now);
        let marker = queue.last_id();
        queue.push("b", Severity::Info, now);

        let newer: Vec<_> = queue.since(marker).map(|n| n.message.as_str()).collect();
        assert_eq!(newer, vec!["b"]);
        assert_eq!(queue.since(None).count(), 2);
    }
}
