//! Dashboard facade
//!
//! Owns every engine component and exposes the gestures the display layers
//! forward to it. All methods take the current time explicitly so the
//! headless replay and the tests can drive time without sleeping.

use crate::chart::ChartRenderer;
use crate::draft::DraftStorage;
use crate::engine::scheduler::Scheduler;
use crate::engine::services::DashboardServices;
use crate::error::DashboardError;
use crate::events::{DashboardEvent, Source};
use crate::managers::{ListingAction, ListingManager, OrderManager, QuickAction, QuickActions};
use crate::modal::{ConfirmChoice, ConfirmHandler, ListingForm, ModalContent, ModalController};
use crate::notifications::{NotificationId, Severity};
use crate::records::{DashboardData, Period, RecordStore, StatsSummary, TopSeller};
use crate::surface::OrderAction;
use log::{debug, info, warn};
use std::fmt;
use std::time::Instant;

pub struct Dashboard {
    services: DashboardServices,
    modal: ModalController<DashboardServices>,
    chart: ChartRenderer,
    scheduler: Scheduler,
    orders: OrderManager,
    listings: ListingManager,
    quick_actions: QuickActions,
    stats: StatsSummary,
    top_selling: Vec<TopSeller>,
}

impl fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dashboard")
            .field("services", &self.services)
            .field("modal", &self.modal)
            .field("period", &self.chart.active())
            .field("scheduled", &!self.scheduler.is_empty())
            .finish()
    }
}

impl Dashboard {
    /// Builds the engine from a dataset. Fails if the dataset repeats an id
    /// or holds a negative or non-finite amount.
    pub fn new(
        data: DashboardData,
        drafts: Box<dyn DraftStorage>,
        initial_period: Period,
        now: Instant,
    ) -> Result<Self, DashboardError> {
        let store = RecordStore::new(data.recent_orders, data.active_listings)?;
        Ok(Self {
            services: DashboardServices::new(store, drafts, now),
            modal: ModalController::new(),
            chart: ChartRenderer::new(data.sales_data, initial_period, now),
            scheduler: Scheduler::new(),
            orders: OrderManager,
            listings: ListingManager,
            quick_actions: QuickActions,
            stats: data.stats,
            top_selling: data.top_selling,
        })
    }

    pub fn push_notification(
        &mut self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
        now: Instant,
    ) -> NotificationId {
        self.services.set_now(now);
        self.services.notify(message, severity.into())
    }

    pub fn open_modal(&mut self, title: impl Into<String>, content: ModalContent) {
        self.modal.show(title, content);
    }

    pub fn confirm_action(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: Option<ConfirmHandler<DashboardServices>>,
    ) {
        self.modal.confirm(title, message, on_confirm);
    }

    pub fn switch_chart_period(&mut self, period: Period, now: Instant) {
        self.chart.switch_period(period, now);
        self.services.record(DashboardEvent::display(
            Source::Chart,
            format!("Showing {} sales", period),
        ));
    }

    /// Runs a row action on an order. Unknown orders are ignored.
    pub fn dispatch_order_action(&mut self, action: OrderAction, order_id: &str, now: Instant) {
        self.services.set_now(now);
        let result = self
            .orders
            .handle_action(action, order_id, &mut self.services, &mut self.modal);
        self.swallow_not_found(Source::Orders, result);
    }

    /// Runs a row action on a listing. Unknown listings are ignored.
    pub fn dispatch_listing_action(
        &mut self,
        action: ListingAction,
        listing_id: &str,
        now: Instant,
    ) {
        self.services.set_now(now);
        let result =
            self.listings
                .handle_action(action, listing_id, &mut self.services, &mut self.modal);
        self.swallow_not_found(Source::Listings, result);
    }

    fn swallow_not_found(&mut self, source: Source, result: Result<(), DashboardError>) {
        match result {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                debug!("Ignoring action: {}", e);
                self.services
                    .record(DashboardEvent::miss(source, e.to_string()));
            }
            Err(e) => warn!("Action failed: {}", e),
        }
    }

    pub fn run_quick_action(&mut self, action: QuickAction, now: Instant) {
        self.services.set_now(now);
        self.quick_actions.handle(
            action,
            &mut self.services,
            &mut self.modal,
            &mut self.scheduler,
        );
    }

    /// Reports the current modal content as drawn. See [`ModalController::attach`].
    pub fn attach_modal(&mut self) -> bool {
        self.modal.attach()
    }

    /// Answers an open confirmation dialog. Returns `false` if none is
    /// waiting or its controls are not wired yet.
    pub fn choose(&mut self, choice: ConfirmChoice, now: Instant) -> bool {
        self.services.set_now(now);
        let chosen = self.modal.select(choice, &mut self.services);
        if chosen {
            self.services.record(DashboardEvent::display(
                Source::Modal,
                format!("Confirmation answered: {:?}", choice),
            ));
        }
        chosen
    }

    pub fn click_backdrop(&mut self) -> bool {
        self.modal.click_backdrop()
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    /// Applies `edit` to an open listing form and auto-saves the draft if
    /// any field changed. Returns whether a change was made.
    pub fn edit_form(&mut self, edit: impl FnOnce(&mut ListingForm) -> bool) -> bool {
        let Some(form) = self
            .modal
            .content_mut()
            .and_then(ModalContent::listing_form_mut)
        else {
            return false;
        };
        if !edit(form) {
            return false;
        }
        let draft = form.to_draft();
        self.services.save_draft(&draft);
        true
    }

    /// Submits the open listing form. The saved draft is discarded and the
    /// modal closes; the listing itself is left as it was.
    pub fn submit_listing_form(&mut self, now: Instant) -> bool {
        let Some(title) = self
            .modal
            .current()
            .and_then(|open| open.content.listing_form())
            .map(|form| form.title.clone())
        else {
            return false;
        };
        self.services.set_now(now);
        self.services.clear_draft();
        self.modal.close();
        self.services.notify(
            format!("Listing changes submitted: {}", title),
            Severity::Info,
        );
        info!("Listing form submitted for {}", title);
        self.services.record(DashboardEvent::display(
            Source::Drafts,
            "Saved form data cleared",
        ));
        true
    }

    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.services.notifications.dismiss(id, now)
    }

    pub fn dismiss_latest(&mut self, now: Instant) -> bool {
        self.services.notifications.dismiss_latest(now)
    }

    /// Runs due scheduled tasks and advances notification transitions.
    pub fn tick(&mut self, now: Instant) {
        let due = self.scheduler.take_due(now);
        if !due.is_empty() {
            self.services.set_now(now);
        }
        for task in due {
            self.quick_actions
                .complete(task, &mut self.services, &mut self.modal);
        }
        self.services.notifications.tick(now);
    }

    pub fn drain_events(&mut self) -> Vec<DashboardEvent> {
        self.services.drain_events()
    }

    pub fn services(&self) -> &DashboardServices {
        &self.services
    }

    pub fn modal(&self) -> &ModalController<DashboardServices> {
        &self.modal
    }

    pub fn chart(&self) -> &ChartRenderer {
        &self.chart
    }

    pub fn stats(&self) -> &StatsSummary {
        &self.stats
    }

    pub fn top_selling(&self) -> &[TopSeller] {
        &self.top_selling
    }

    pub fn next_scheduled(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::MemoryDraftStorage;
    use crate::events::EventType;
    use crate::records::OrderStatus;
    use crate::records::seed::reference_data;
    use std::time::Duration;

    fn dashboard(now: Instant) -> Dashboard {
        Dashboard::new(
            reference_data(),
            Box::new(MemoryDraftStorage::default()),
            Period::Week,
            now,
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_ids_in_dataset_are_rejected() {
        let mut data = reference_data();
        let first = data.recent_orders[0].clone();
        data.recent_orders.push(first);
        let result = Dashboard::new(
            data,
            Box::new(MemoryDraftStorage::default()),
            Period::Week,
            Instant::now(),
        );
        assert!(matches!(result, Err(DashboardError::DuplicateId { .. })));
    }

    #[test]
    fn test_push_notification_accepts_severity_names() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        dash.push_notification("Hello", "bogus", now);
        let n = dash.services().notifications.iter().next().unwrap();
        assert_eq!(n.severity, Severity::Info);
    }

    #[test]
    // Confirm controls do nothing until the dialog has been drawn.
    fn test_confirm_requires_attach() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        dash.dispatch_listing_action(ListingAction::Duplicate, "LST-001", now);

        assert!(!dash.choose(ConfirmChoice::Confirm, now));
        assert_eq!(dash.services().store.listings().len(), 3);

        assert!(dash.attach_modal());
        assert!(dash.choose(ConfirmChoice::Confirm, now));
        assert_eq!(dash.services().store.listings().len(), 4);
        assert!(!dash.modal().is_open());
    }

    #[test]
    // A replaced confirmation never runs its handler.
    fn test_replaced_confirmation_is_dropped() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        dash.dispatch_listing_action(ListingAction::Delete, "LST-001", now);
        dash.attach_modal();
        dash.dispatch_order_action(OrderAction::View, "ORD-12345", now);
        dash.attach_modal();

        assert!(!dash.choose(ConfirmChoice::Confirm, now));
        assert_eq!(dash.services().store.listings().len(), 3);
        assert_eq!(dash.modal().current().unwrap().title, "Order Details");
    }

    #[test]
    // A caller-supplied handler runs once, against the shared services.
    fn test_confirm_action_runs_handler_once() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        dash.confirm_action(
            "Clear Notifications",
            "Dismiss everything?",
            Some(Box::new(|services: &mut DashboardServices| {
                services.notify("Handler ran", Severity::Success);
            })),
        );
        dash.attach_modal();
        assert!(dash.choose(ConfirmChoice::Confirm, now));
        assert!(!dash.choose(ConfirmChoice::Confirm, now));
        assert_eq!(dash.services().notifications.len(), 1);
    }

    #[test]
    fn test_open_modal_replaces_content() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        dash.confirm_action("Delete Listing", "Sure?", None);
        dash.open_modal(
            "Notice",
            ModalContent::Details(vec![crate::modal::DetailRow::new("Status", "Ready")]),
        );
        assert_eq!(dash.modal().revision(), 2);
        assert!(!dash.modal().current().unwrap().awaiting_choice());
        assert_eq!(dash.modal().current().unwrap().title, "Notice");
    }

    #[test]
    fn test_dismiss_starts_exit() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        let id = dash.push_notification("Bye", Severity::Info, now);
        assert!(dash.dismiss(id, now));
        dash.tick(now + Duration::from_millis(300));
        assert!(dash.services().notifications.is_empty());
    }

    #[test]
    fn test_backdrop_cancels_confirmation() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        dash.dispatch_listing_action(ListingAction::Delete, "LST-002", now);
        dash.attach_modal();
        assert!(dash.click_backdrop());
        assert!(!dash.choose(ConfirmChoice::Confirm, now));
        assert!(dash.services().store.listing("LST-002").is_some());
    }

    #[test]
    // Unknown ids are swallowed and leave a miss in the activity events.
    fn test_unknown_ids_record_miss() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        dash.dispatch_order_action(OrderAction::Process, "ORD-0", now);
        dash.dispatch_listing_action(ListingAction::Stats, "LST-999", now);

        let events = dash.drain_events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.event_type == EventType::Miss));
        assert!(dash.services().notifications.is_empty());
        assert!(!dash.modal().is_open());
    }

    #[test]
    fn test_process_through_facade() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        dash.dispatch_order_action(OrderAction::Process, "ORD-12347", now);
        assert_eq!(
            dash.services().store.order("ORD-12347").unwrap().status,
            OrderStatus::Shipped
        );
    }

    #[test]
    fn test_switch_chart_period() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        dash.switch_chart_period(Period::Month, now);
        assert_eq!(dash.chart().active(), Period::Month);
        let tallest = dash.chart().slots()[5].as_ref().unwrap();
        assert_eq!(tallest.value, 820);
        assert_eq!(tallest.height_px, 150.0);
    }

    #[test]
    // Edits save a draft that the next Edit of the same listing restores.
    fn test_form_edits_autosave_and_restore() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        dash.dispatch_listing_action(ListingAction::Edit, "LST-001", now);
        assert!(dash.edit_form(|form| form.insert_char('!')));
        dash.close_modal();

        dash.dispatch_listing_action(ListingAction::Edit, "LST-001", now);
        let form = dash
            .modal()
            .current()
            .unwrap()
            .content
            .listing_form()
            .unwrap();
        assert!(form.title.ends_with('!'));
        assert!(
            dash.services()
                .notifications
                .iter()
                .any(|n| n.message == "Draft restored from previous session")
        );
    }

    #[test]
    // Submitting clears the draft without touching the listing.
    fn test_submit_clears_draft() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        let before = dash.services().store.listing("LST-001").cloned();
        dash.dispatch_listing_action(ListingAction::Edit, "LST-001", now);
        dash.edit_form(|form| form.insert_char('X'));
        assert!(dash.submit_listing_form(now));
        assert!(!dash.modal().is_open());
        assert_eq!(dash.services().store.listing("LST-001").cloned(), before);

        dash.dispatch_listing_action(ListingAction::Edit, "LST-001", now);
        let form = dash
            .modal()
            .current()
            .unwrap()
            .content
            .listing_form()
            .unwrap();
        assert!(!form.title.ends_with('X'));
    }

    #[test]
    fn test_edit_form_without_form_is_noop() {
        let now = Instant::now();
        let mut dash = dashboard(now);
        assert!(!dash.edit_form(|form| form.insert_char('a')));
        assert!(!dash.submit_listing_form(now));
    }

    #[test]
    // Notifications expire on tick and the export finishes on schedule.
    fn test_tick_drives_time() {
        let start = Instant::now();
        let mut dash = dashboard(start);
        dash.run_quick_action(QuickAction::ExportData, start);
        assert_eq!(dash.services().notifications.len(), 1);

        dash.tick(start + Duration::from_millis(1_500));
        assert_eq!(dash.modal().current().unwrap().title, "Export Complete");
        assert_eq!(dash.services().notifications.len(), 2);

        dash.tick(start + Duration::from_millis(5_300));
        assert_eq!(dash.services().notifications.len(), 1);
        dash.tick(start + Duration::from_millis(6_800));
        assert!(dash.services().notifications.is_empty());
    }
}
