//! Dashboard records
//!
//! Order and listing data, the reference dataset, and the in-memory store

pub mod seed;
pub mod store;
pub mod types;

pub use store::RecordStore;
pub use types::{
    Condition, DashboardData, Listing, OrderStatus, Period, SalesSeries, StatsSummary,
    TopSeller, Trend,
};
