//! Order row actions

use crate::engine::DashboardServices;
use crate::error::DashboardError;
use crate::events::{DashboardEvent, Source};
use crate::modal::{DetailRow, ModalContent, ModalController};
use crate::notifications::Severity;
use crate::records::OrderStatus;
use crate::surface::OrderAction;
use log::info;

/// Placeholder shipment details shown by the Track action.
const TRACKING_CARRIER: &str = "USPS";
const TRACKING_NUMBER: &str = "9405 5012 3456 7890 1234 56";
const TRACKING_STATUS: &str = "In Transit";
const TRACKING_ESTIMATE: &str = "March 3-5, 2025";

#[derive(Debug, Default, Clone, Copy)]
pub struct OrderManager;

impl OrderManager {
    pub fn handle_action(
        &self,
        action: OrderAction,
        order_id: &str,
        services: &mut DashboardServices,
        modal: &mut ModalController<DashboardServices>,
    ) -> Result<(), DashboardError> {
        if services.store.order(order_id).is_none() {
            return Err(DashboardError::OrderNotFound(order_id.to_string()));
        }
        match action {
            OrderAction::Process => self.process(order_id, services),
            OrderAction::Track => {
                self.track(order_id, services, modal);
                Ok(())
            }
            OrderAction::View => self.view(order_id, services, modal),
        }
    }

    /// Marks the order shipped whatever its previous status was.
    fn process(
        &self,
        order_id: &str,
        services: &mut DashboardServices,
    ) -> Result<(), DashboardError> {
        services.notify(format!("Processing order {}", order_id), Severity::Info);

        let previous = services
            .store
            .order(order_id)
            .map(|o| o.status)
            .ok_or_else(|| DashboardError::OrderNotFound(order_id.to_string()))?;
        services.store.set_order_status(order_id, OrderStatus::Shipped)?;

        if let Some(row) = services.surface.order_row_mut(order_id) {
            row.status_label = OrderStatus::Shipped.label().to_string();
            row.action = OrderAction::Track;
        }

        services.notify(
            format!("Order {} marked as shipped", order_id),
            Severity::Success,
        );
        info!("Order {} shipped (was {})", order_id, previous);
        services.record(DashboardEvent::mutation(
            Source::Orders,
            format!("Order {} marked as shipped (was {})", order_id, previous),
        ));
        Ok(())
    }

    fn track(
        &self,
        order_id: &str,
        services: &mut DashboardServices,
        modal: &mut ModalController<DashboardServices>,
    ) {
        services.notify(
            format!("Tracking information for {}", order_id),
            Severity::Info,
        );
        modal.show(
            "Tracking Information",
            ModalContent::Details(vec![
                DetailRow::new("Order", order_id),
                DetailRow::new("Carrier", TRACKING_CARRIER),
                DetailRow::new("Tracking #", TRACKING_NUMBER),
                DetailRow::new("Status", TRACKING_STATUS),
                DetailRow::new("Estimated Delivery", TRACKING_ESTIMATE),
            ]),
        );
        services.record(DashboardEvent::display(
            Source::Orders,
            format!("Showing tracking for {}", order_id),
        ));
    }

    fn view(
        &self,
        order_id: &str,
        services: &mut DashboardServices,
        modal: &mut ModalController<DashboardServices>,
    ) -> Result<(), DashboardError> {
        let order = services
            .store
            .order(order_id)
            .cloned()
            .ok_or_else(|| DashboardError::OrderNotFound(order_id.to_string()))?;

        services.notify(format!("Viewing details for {}", order_id), Severity::Info);
        modal.show(
            "Order Details",
            ModalContent::Details(vec![
                DetailRow::new("Order ID", order.id.as_str()),
                DetailRow::new("Item", order.item.as_str()),
                DetailRow::new("Buyer", order.buyer.as_str()),
                DetailRow::new("Date", order.date.format("%-m/%-d/%Y").to_string()),
                DetailRow::new("Total", format!("${:.2}", order.total)),
                DetailRow::new("Status", order.status.to_string()),
            ]),
        );
        services.record(DashboardEvent::display(
            Source::Orders,
            format!("Showing details for {}", order_id),
        ));
        Ok(())
    }
}
