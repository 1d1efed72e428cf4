//! Record types backing the dashboard

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fulfilment status of an order.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
}

impl OrderStatus {
    /// Label shown in the status indicator of an order row.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Shipped => "Shipped",
        }
    }
}

/// Physical condition of a listed item.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Condition {
    Mint,
    Good,
    Fair,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Mint => "Mint",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }

    /// The next condition in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Condition::Mint => Condition::Good,
            Condition::Good => Condition::Fair,
            Condition::Fair => Condition::Mint,
        }
    }

    /// The previous condition in display order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Condition::Mint => Condition::Fair,
            Condition::Good => Condition::Mint,
            Condition::Fair => Condition::Good,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub item: String,
    pub buyer: String,
    pub date: NaiveDate,
    pub total: f64,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub item: String,
    pub price: f64,
    pub condition: Condition,
    pub views: u32,
    pub watchers: u32,
    pub listed_date: NaiveDate,
}

/// Time bucket selecting which sales series the chart renders.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Period {
    #[default]
    Week,
    Month,
    Year,
}

impl Period {
    /// Label shown on the period selector control.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "Week",
            Period::Month => "Month",
            Period::Year => "Year",
        }
    }
}

/// One sales value per time slot for each period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSeries {
    pub week: Vec<u64>,
    pub month: Vec<u64>,
    pub year: Vec<u64>,
}

impl SalesSeries {
    pub fn get(&self, period: Period) -> &[u64] {
        match period {
            Period::Week => &self.week,
            Period::Month => &self.month,
            Period::Year => &self.year,
        }
    }
}

/// Headline numbers shown on the stats cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub active_listings: u32,
    pub sold_this_month: u32,
    pub monthly_revenue: f64,
    pub total_views: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSeller {
    pub item: String,
    pub sold: u32,
    pub revenue: f64,
    pub trend: Trend,
    pub trend_percentage: u32,
}

/// Complete reference dataset the dashboard is seeded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    #[serde(default)]
    pub stats: StatsSummary,
    pub recent_orders: Vec<Order>,
    pub active_listings: Vec<Listing>,
    #[serde(default)]
    pub top_selling: Vec<TopSeller>,
    pub sales_data: SalesSeries,
}
