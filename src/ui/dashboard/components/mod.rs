//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod chart;
pub mod footer;
pub mod header;
pub mod logs;
pub mod modal;
pub mod notifications;
pub mod orders;
pub mod listings;
pub mod sidebar;
pub mod stats;
