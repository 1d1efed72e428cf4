//! In-memory record store for orders and listings

use super::types::{Listing, Order, OrderStatus};
use crate::error::DashboardError;
use std::collections::HashSet;

const LISTING_ID_PREFIX: &str = "LST-";

/// The orders and listings backing the dashboard.
///
/// Collections keep their load order; duplicated listings are appended.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    orders: Vec<Order>,
    listings: Vec<Listing>,
}

impl RecordStore {
    /// Builds a store, rejecting collections with repeated identifiers or
    /// amounts that are negative or not finite.
    pub fn new(orders: Vec<Order>, listings: Vec<Listing>) -> Result<Self, DashboardError> {
        ensure_unique("order", orders.iter().map(|o| o.id.as_str()))?;
        ensure_unique("listing", listings.iter().map(|l| l.id.as_str()))?;
        ensure_amounts("order", orders.iter().map(|o| (o.id.as_str(), o.total)))?;
        ensure_amounts("listing", listings.iter().map(|l| (l.id.as_str(), l.price)))?;
        Ok(Self { orders, listings })
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn listing(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Sets an order's status unconditionally.
    pub fn set_order_status(
        &mut self,
        id: &str,
        status: OrderStatus,
    ) -> Result<&Order, DashboardError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| DashboardError::OrderNotFound(id.to_string()))?;
        order.status = status;
        Ok(order)
    }

    /// Appends a listing. The caller is responsible for a fresh identifier,
    /// see [`RecordStore::mint_listing_id`].
    pub fn insert_listing(&mut self, listing: Listing) -> Result<(), DashboardError> {
        if self.listing(&listing.id).is_some() {
            return Err(DashboardError::DuplicateId {
                kind: "listing",
                id: listing.id,
            });
        }
        self.listings.push(listing);
        Ok(())
    }

    pub fn remove_listing(&mut self, id: &str) -> Result<Listing, DashboardError> {
        let index = self
            .listings
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| DashboardError::ListingNotFound(id.to_string()))?;
        Ok(self.listings.remove(index))
    }

    /// Returns an unused listing identifier of the form `LST-NNN`, numbered
    /// one past the highest numeric suffix currently in the store. If that
    /// suffix is already `u64::MAX`, the lowest free number is used instead.
    pub fn mint_listing_id(&self) -> String {
        let highest = self
            .listings
            .iter()
            .filter_map(|l| l.id.strip_prefix(LISTING_ID_PREFIX))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        // Terminates: the store holds finitely many listings.
        let mut candidate = highest.checked_add(1).unwrap_or(1);
        loop {
            let id = format!("{}{:03}", LISTING_ID_PREFIX, candidate);
            if self.listing(&id).is_none() {
                return id;
            }
            candidate = candidate.checked_add(1).unwrap_or(1);
        }
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), DashboardError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DashboardError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn ensure_amounts<'a>(
    kind: &'static str,
    amounts: impl Iterator<Item = (&'a str, f64)>,
) -> Result<(), DashboardError> {
    for (id, amount) in amounts {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DashboardError::InvalidAmount {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::types::Condition;
    use chrono::NaiveDate;

    fn listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            item: format!("Item {}", id),
            price: 10.0,
            condition: Condition::Good,
            views: 1,
            watchers: 0,
            listed_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            item: "Item".to_string(),
            buyer: "Buyer".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            total: 5.0,
            status,
        }
    }

    #[test]
    fn test_rejects_duplicate_listing_ids() {
        let result = RecordStore::new(vec![], vec![listing("LST-1"), listing("LST-1")]);
        assert!(matches!(
            result,
            Err(DashboardError::DuplicateId { kind: "listing", .. })
        ));
    }

    #[test]
    fn test_rejects_duplicate_order_ids() {
        let orders = vec![
            order("ORD-1", OrderStatus::Paid),
            order("ORD-1", OrderStatus::Pending),
        ];
        assert!(RecordStore::new(orders, vec![]).is_err());
    }

    #[test]
    // Totals and prices must be non-negative, finite amounts.
    fn test_rejects_invalid_amounts() {
        let mut refund = order("ORD-1", OrderStatus::Paid);
        refund.total = -19.5;
        assert!(matches!(
            RecordStore::new(vec![refund], vec![]),
            Err(DashboardError::InvalidAmount { kind: "order", id }) if id == "ORD-1"
        ));

        let mut unpriced = listing("LST-1");
        unpriced.price = f64::NAN;
        assert!(matches!(
            RecordStore::new(vec![], vec![unpriced]),
            Err(DashboardError::InvalidAmount { kind: "listing", id }) if id == "LST-1"
        ));

        let mut free = listing("LST-2");
        free.price = 0.0;
        assert!(RecordStore::new(vec![], vec![free]).is_ok());
    }

    #[test]
    fn test_set_order_status_reports_missing_order() {
        let mut store = RecordStore::new(vec![order("ORD-1", OrderStatus::Paid)], vec![]).unwrap();
        assert_eq!(
            store
                .set_order_status("ORD-1", OrderStatus::Shipped)
                .unwrap()
                .status,
            OrderStatus::Shipped
        );
        assert!(matches!(
            store.set_order_status("ORD-2", OrderStatus::Shipped),
            Err(DashboardError::OrderNotFound(id)) if id == "ORD-2"
        ));
    }

    #[test]
    // Minted identifiers continue past the highest numeric suffix.
    fn test_mint_listing_id_skips_existing_numbers() {
        let store =
            RecordStore::new(vec![], vec![listing("LST-001"), listing("LST-007")]).unwrap();
        assert_eq!(store.mint_listing_id(), "LST-008");
    }

    #[test]
    // Non-numeric identifiers do not confuse minting.
    fn test_mint_listing_id_with_foreign_ids() {
        let store = RecordStore::new(vec![], vec![listing("vintage-1"), listing("LST-1")]).unwrap();
        let minted = store.mint_listing_id();
        assert_eq!(minted, "LST-002");
        assert!(store.listing(&minted).is_none());
    }

    #[test]
    // A suffix at the top of the number range falls back to the lowest free number.
    fn test_mint_listing_id_at_numeric_limit() {
        let store = RecordStore::new(
            vec![],
            vec![listing(&format!("LST-{}", u64::MAX)), listing("LST-001")],
        )
        .unwrap();
        assert_eq!(store.mint_listing_id(), "LST-002");
    }

    #[test]
    fn test_insert_and_remove_listing() {
        let mut store = RecordStore::new(vec![], vec![listing("LST-1")]).unwrap();
        store.insert_listing(listing("LST-2")).unwrap();
        assert_eq!(store.listings().len(), 2);
        assert!(store.insert_listing(listing("LST-2")).is_err());

        let removed = store.remove_listing("LST-1").unwrap();
        assert_eq!(removed.id, "LST-1");
        assert!(store.listing("LST-1").is_none());
        assert!(store.remove_listing("LST-1").is_err());
    }
}
