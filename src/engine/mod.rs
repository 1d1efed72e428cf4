//! Dashboard engine

pub mod dashboard;
pub mod scheduler;
pub mod services;

pub use dashboard::Dashboard;
pub use services::DashboardServices;
