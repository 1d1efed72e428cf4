//! Display rows the managers rewrite
//!
//! Rows are created once from the record store at startup. Afterwards the
//! managers only rewrite their text or append and remove listing rows.

use crate::records::{OrderStatus, RecordStore};

/// Actions available on an order row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum OrderAction {
    Process,
    Track,
    View,
}

impl OrderAction {
    /// The action a freshly rendered row offers for an order in `status`.
    pub fn for_status(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Paid => OrderAction::Process,
            OrderStatus::Shipped => OrderAction::Track,
            OrderStatus::Pending => OrderAction::View,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub order_id: String,
    pub status_label: String,
    pub action: OrderAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub listing_id: String,
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct DisplaySurface {
    pub order_rows: Vec<OrderRow>,
    pub listing_rows: Vec<ListingRow>,
}

impl DisplaySurface {
    pub fn from_store(store: &RecordStore) -> Self {
        Self {
            order_rows: store
                .orders()
                .iter()
                .map(|order| OrderRow {
                    order_id: order.id.clone(),
                    status_label: order.status.label().to_string(),
                    action: OrderAction::for_status(order.status),
                })
                .collect(),
            listing_rows: store
                .listings()
                .iter()
                .map(|listing| ListingRow {
                    listing_id: listing.id.clone(),
                    title: listing.item.clone(),
                })
                .collect(),
        }
    }

    pub fn order_row_mut(&mut self, order_id: &str) -> Option<&mut OrderRow> {
        self.order_rows.iter_mut().find(|r| r.order_id == order_id)
    }

    pub fn append_listing_row(&mut self, row: ListingRow) {
        self.listing_rows.push(row);
    }

    pub fn remove_listing_row(&mut self, listing_id: &str) -> bool {
        let before = self.listing_rows.len();
        self.listing_rows.retain(|r| r.listing_id != listing_id);
        self.listing_rows.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::seed::reference_data;
    use std::str::FromStr;

    fn surface() -> DisplaySurface {
        let data = reference_data();
        let store = RecordStore::new(data.recent_orders, data.active_listings).unwrap();
        DisplaySurface::from_store(&store)
    }

    #[test]
    // Row actions follow the order status at load time.
    fn test_rows_offer_action_by_status() {
        let surface = surface();
        let actions: Vec<_> = surface.order_rows.iter().map(|r| r.action).collect();
        assert_eq!(
            actions,
            vec![OrderAction::Process, OrderAction::Track, OrderAction::View]
        );
        assert_eq!(surface.order_rows[0].status_label, "Paid");
    }

    #[test]
    fn test_listing_rows_append_and_remove() {
        let mut surface = surface();
        surface.append_listing_row(ListingRow {
            listing_id: "LST-004".to_string(),
            title: "Copy".to_string(),
        });
        assert_eq!(surface.listing_rows.last().unwrap().listing_id, "LST-004");
        assert!(surface.remove_listing_row("LST-004"));
        assert!(!surface.remove_listing_row("LST-004"));
    }

    #[test]
    fn test_order_action_parses_button_labels() {
        assert_eq!(OrderAction::from_str("process").unwrap(), OrderAction::Process);
        assert_eq!(OrderAction::Track.to_string(), "Track");
    }
}
