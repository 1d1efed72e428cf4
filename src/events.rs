//! Event System
//!
//! Activity events emitted by the dashboard engine for the activity log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The part of the dashboard an event originated from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    Orders,
    Listings,
    Chart,
    Modal,
    QuickActions,
    Drafts,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A record was mutated.
    Mutation,
    /// Something was shown to the user without changing records.
    Display,
    /// A requested record did not exist.
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardEvent {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl DashboardEvent {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn mutation(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Mutation, LogLevel::Info)
    }

    pub fn display(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Display, LogLevel::Debug)
    }

    pub fn miss(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Miss, LogLevel::Debug)
    }

    pub fn should_display(&self) -> bool {
        // Mutations are always shown
        if self.event_type == EventType::Mutation {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for DashboardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Mutation events are shown regardless of the log threshold.
    fn test_mutations_always_display() {
        let event = DashboardEvent::mutation(Source::Orders, "Order ORD-1 shipped");
        assert!(event.should_display());
        assert_eq!(event.log_level, LogLevel::Info);
    }

    #[test]
    fn test_display_format_includes_source() {
        let event = DashboardEvent::miss(Source::Listings, "LST-9 not found");
        let rendered = event.to_string();
        assert!(rendered.starts_with("Miss ["));
        assert!(rendered.ends_with("Listings: LST-9 not found"));
    }
}
