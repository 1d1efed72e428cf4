//! Built-in reference dataset and dataset loading

use super::types::{
    Condition, DashboardData, Listing, Order, OrderStatus, SalesSeries, StatsSummary, TopSeller,
    Trend,
};
use crate::error::DashboardError;
use chrono::NaiveDate;
use std::path::Path;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal dates below are all valid calendar days.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The dataset the dashboard ships with.
pub fn reference_data() -> DashboardData {
    DashboardData {
        stats: StatsSummary {
            active_listings: 12,
            sold_this_month: 24,
            monthly_revenue: 1847.0,
            total_views: 2345,
        },
        recent_orders: vec![
            Order {
                id: "ORD-12345".to_string(),
                item: "Super Mario World (SNES)".to_string(),
                buyer: "MarioFan".to_string(),
                date: date(2025, 2, 15),
                total: 79.99,
                status: OrderStatus::Paid,
            },
            Order {
                id: "ORD-12346".to_string(),
                item: "The Legend of Zelda (NES)".to_string(),
                buyer: "ZeldaFan".to_string(),
                date: date(2025, 2, 14),
                total: 129.99,
                status: OrderStatus::Shipped,
            },
            Order {
                id: "ORD-12347".to_string(),
                item: "Sonic the Hedgehog 2 (Genesis)".to_string(),
                buyer: "SonicFan".to_string(),
                date: date(2025, 2, 12),
                total: 49.99,
                status: OrderStatus::Pending,
            },
        ],
        active_listings: vec![
            Listing {
                id: "LST-001".to_string(),
                item: "Mega Man 2 (NES)".to_string(),
                price: 79.99,
                condition: Condition::Mint,
                views: 234,
                watchers: 12,
                listed_date: date(2025, 2, 10),
            },
            Listing {
                id: "LST-002".to_string(),
                item: "Donkey Kong Country (SNES)".to_string(),
                price: 44.99,
                condition: Condition::Good,
                views: 156,
                watchers: 8,
                listed_date: date(2025, 2, 8),
            },
            Listing {
                id: "LST-003".to_string(),
                item: "Castlevania (NES)".to_string(),
                price: 44.99,
                condition: Condition::Fair,
                views: 89,
                watchers: 3,
                listed_date: date(2025, 2, 5),
            },
        ],
        top_selling: vec![
            TopSeller {
                item: "Super Mario World (SNES)".to_string(),
                sold: 24,
                revenue: 1919.76,
                trend: Trend::Up,
                trend_percentage: 12,
            },
            TopSeller {
                item: "The Legend of Zelda (NES)".to_string(),
                sold: 18,
                revenue: 2339.82,
                trend: Trend::Up,
                trend_percentage: 8,
            },
            TopSeller {
                item: "Sonic the Hedgehog 2 (Genesis)".to_string(),
                sold: 15,
                revenue: 749.85,
                trend: Trend::Down,
                trend_percentage: 3,
            },
        ],
        sales_data: SalesSeries {
            week: vec![40, 65, 45, 80, 55, 70, 90],
            month: vec![450, 520, 480, 600, 750, 820, 690, 540, 580, 620, 710, 680],
            year: vec![
                1250, 1480, 1620, 1890, 2100, 2350, 2780, 2650, 2420, 2250, 1980, 2150,
            ],
        },
    }
}

/// Loads a dataset from a JSON file with the same shape as [`reference_data`].
///
/// # Errors
/// Returns [`DashboardError::Io`] or [`DashboardError::Json`] when the file
/// cannot be read or parsed.
pub fn load_data_file(path: &Path) -> Result<DashboardData, DashboardError> {
    let buf = std::fs::read(path)?;
    let data: DashboardData = serde_json::from_slice(&buf)?;
    Ok(data)
}
