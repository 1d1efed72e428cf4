//! Managers translating row and tool actions into record mutations,
//! modal content and notifications

pub mod listings;
pub mod orders;
pub mod quick_actions;

pub use listings::{ListingAction, ListingManager};
pub use orders::OrderManager;
pub use quick_actions::{QuickAction, QuickActions};
