//! Dashboard state update logic
//!
//! Advances the engine clock, collects activity events and translates key and
//! mouse input into dashboard gestures.

use super::state::{DashboardState, Focus};
use super::utils::{modal_area, toast_area};

use crate::managers::{ListingAction, QuickAction};
use crate::engine::DashboardServices;
use crate::modal::{ConfirmChoice, DetailRow, FormField, ModalContent};
use crate::records::Period;
use crate::surface::OrderAction;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use std::time::Instant;
use strum::IntoEnumIterator;

impl DashboardState {
    /// Update the dashboard state with new tick and events.
    pub fn update(&mut self, now: Instant) {
        self.tick += 1;
        self.now = now;
        self.dashboard.tick(now);

        for event in self.dashboard.drain_events() {
            self.add_to_activity_log(event);
        }
        self.clamp_selection();
    }

    /// Keeps row selections inside the tables after rows were removed.
    fn clamp_selection(&mut self) {
        let surface = &self.dashboard.services().surface;
        let orders = surface.order_rows.len();
        let listings = surface.listing_rows.len();
        self.selected_order = self.selected_order.min(orders.saturating_sub(1));
        self.selected_listing = self.selected_listing.min(listings.saturating_sub(1));
    }

    /// Handles a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.now = now;
        let Some(open) = self.dashboard.modal().current() else {
            return self.handle_dashboard_key(key.code, now);
        };

        if open.awaiting_choice() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.dashboard.choose(ConfirmChoice::Confirm, now);
                }
                KeyCode::Char('n') => {
                    self.dashboard.choose(ConfirmChoice::Cancel, now);
                }
                KeyCode::Esc => self.dashboard.close_modal(),
                _ => {}
            }
        } else if open.content.listing_form().is_some() {
            self.handle_form_key(key.code, now);
        } else if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            self.dashboard.close_modal();
        }
        false
    }

    fn handle_form_key(&mut self, code: KeyCode, now: Instant) {
        match code {
            KeyCode::Esc => self.dashboard.close_modal(),
            KeyCode::Enter => {
                self.dashboard.submit_listing_form(now);
            }
            KeyCode::Tab | KeyCode::Down => {
                self.dashboard.edit_form(|form| {
                    form.focus = form.focus.next();
                    false
                });
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.dashboard.edit_form(|form| {
                    form.focus = form.focus.prev();
                    false
                });
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = code == KeyCode::Right;
                self.dashboard.edit_form(|form| {
                    form.focus == FormField::Condition && form.cycle_condition(forward)
                });
            }
            KeyCode::Backspace => {
                self.dashboard.edit_form(|form| form.backspace());
            }
            KeyCode::Char(c) => {
                self.dashboard.edit_form(|form| form.insert_char(c));
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode, now: Instant) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Enter => self.trigger_row_action(now),
            KeyCode::Char('e') => self.listing_action(ListingAction::Edit, now),
            KeyCode::Char('s') => self.listing_action(ListingAction::Stats, now),
            KeyCode::Char('d') => self.listing_action(ListingAction::Duplicate, now),
            KeyCode::Char('x') => self.listing_action(ListingAction::Delete, now),
            KeyCode::Char('v') => self.order_action(Some(OrderAction::View), now),
            KeyCode::Char('w') => self.dashboard.switch_chart_period(Period::Week, now),
            KeyCode::Char('m') => self.dashboard.switch_chart_period(Period::Month, now),
            KeyCode::Char('y') => self.dashboard.switch_chart_period(Period::Year, now),
            KeyCode::Char('c') => {
                self.dashboard.dismiss_latest(now);
            }
            KeyCode::Char('C') => self.confirm_clear_notifications(),
            KeyCode::Char('?') => self.show_key_help(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                if let Some(action) = QuickAction::iter().nth(index) {
                    self.dashboard.run_quick_action(action, now);
                }
            }
            _ => {}
        }
        false
    }

    fn confirm_clear_notifications(&mut self) {
        if self.dashboard.services().notifications.is_empty() {
            return;
        }
        self.dashboard.confirm_action(
            "Clear Notifications",
            "Dismiss all notifications?",
            Some(Box::new(|services: &mut DashboardServices| {
                let now = services.now();
                services.notifications.dismiss_all(now);
            })),
        );
    }

    fn show_key_help(&mut self) {
        let rows = [
            ("Tab", "Switch between orders and listings"),
            ("Up/Down", "Move the selection"),
            ("Enter", "Run the row action"),
            ("E S D X", "Edit, stats, duplicate, delete listing"),
            ("V", "View order"),
            ("W M Y", "Chart period"),
            ("1-5", "Quick actions"),
            ("c / C", "Dismiss latest / all notifications"),
            ("Click", "Dismiss a notification"),
        ];
        self.dashboard.open_modal(
            "Keyboard Shortcuts",
            ModalContent::Details(
                rows.iter()
                    .map(|(key, action)| DetailRow::new(*key, *action))
                    .collect(),
            ),
        );
    }

    fn move_selection(&mut self, delta: isize) {
        let surface = &self.dashboard.services().surface;
        let (selected, len) = match self.focus {
            Focus::Orders => (&mut self.selected_order, surface.order_rows.len()),
            Focus::Listings => (&mut self.selected_listing, surface.listing_rows.len()),
        };
        if len == 0 {
            return;
        }
        *selected = selected.saturating_add_signed(delta).min(len - 1);
    }

    /// Enter runs the action a row offers: the labelled order action, or Edit.
    fn trigger_row_action(&mut self, now: Instant) {
        match self.focus {
            Focus::Orders => self.order_action(None, now),
            Focus::Listings => self.listing_action(ListingAction::Edit, now),
        }
    }

    fn order_action(&mut self, action: Option<OrderAction>, now: Instant) {
        let services = self.dashboard.services();
        let Some(row) = services.surface.order_rows.get(self.selected_order) else {
            return;
        };
        let action = action.unwrap_or(row.action);
        let order_id = row.order_id.clone();
        self.dashboard.dispatch_order_action(action, &order_id, now);
    }

    fn listing_action(&mut self, action: ListingAction, now: Instant) {
        if let Some(listing_id) = self.selected_listing_id() {
            self.dashboard
                .dispatch_listing_action(action, &listing_id, now);
        }
    }

    /// A left click on a notification dismisses it. Otherwise a click
    /// outside the open modal closes it like a backdrop click.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        let clicked = self
            .dashboard
            .services()
            .notifications
            .iter()
            .enumerate()
            .find(|(index, n)| {
                toast_area(self.frame_area, *index, n.slide_offset(now))
                    .is_some_and(|rect| rect.contains(position))
            })
            .map(|(_, n)| n.id);
        if let Some(id) = clicked {
            self.dashboard.dismiss(id, now);
            return;
        }

        if self.dashboard.modal().is_open() && !modal_area(self.frame_area).contains(position) {
            self.dashboard.click_backdrop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::MemoryDraftStorage;
    use crate::engine::Dashboard;
    use crate::records::OrderStatus;
    use crate::records::seed::reference_data;
    use crate::ui::app::UIConfig;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn state() -> DashboardState {
        let now = Instant::now();
        let dashboard = Dashboard::new(
            reference_data(),
            Box::new(MemoryDraftStorage::default()),
            Period::Week,
            now,
        )
        .unwrap();
        let mut state = DashboardState::new(
            dashboard,
            now,
            UIConfig::new(false, "reference".to_string()),
        );
        state.frame_area = Rect::new(0, 0, 120, 40);
        state
    }

    fn press(state: &mut DashboardState, code: KeyCode) -> bool {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now())
    }

    #[test]
    // Redraws stay fast while something moves, then back off to the next task.
    fn test_poll_timeout_follows_motion() {
        use std::time::Duration;
        let mut state = state();
        let start = state.now;
        assert_eq!(state.poll_timeout(start), Duration::from_millis(16));

        let settled = start + Duration::from_secs(1);
        assert_eq!(state.poll_timeout(settled), Duration::from_millis(250));

        state.dashboard.run_quick_action(QuickAction::ExportData, settled);
        state.update(settled + Duration::from_secs(1));
        let later = settled + Duration::from_millis(1400);
        assert_eq!(state.poll_timeout(later), Duration::from_millis(100));
    }

    #[test]
    // Enter on the first order runs its labelled action, Process.
    fn test_enter_processes_paid_order() {
        let mut state = state();
        press(&mut state, KeyCode::Enter);
        let services = state.dashboard.services();
        assert_eq!(
            services.store.order("ORD-12345").unwrap().status,
            OrderStatus::Shipped
        );
        assert_eq!(services.surface.order_rows[0].action, OrderAction::Track);
    }

    #[test]
    // Confirm keys only work after the dialog has been drawn.
    fn test_duplicate_needs_drawn_dialog() {
        let mut state = state();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Char('d'));
        press(&mut state, KeyCode::Char('y'));
        assert_eq!(state.dashboard.services().store.listings().len(), 3);

        state.dashboard.attach_modal();
        press(&mut state, KeyCode::Char('y'));
        assert_eq!(state.dashboard.services().store.listings().len(), 4);
    }

    #[test]
    fn test_typing_goes_to_form_not_shortcuts() {
        let mut state = state();
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Enter);
        assert!(!press(&mut state, KeyCode::Char('q')));

        let form = state
            .dashboard
            .modal()
            .current()
            .unwrap()
            .content
            .listing_form()
            .unwrap();
        assert_eq!(form.title, "Mega Man 2 (NES)q");
    }

    #[test]
    fn test_selection_clamps_after_delete() {
        let mut state = state();
        press(&mut state, KeyCode::Tab);
        for _ in 0..5 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.selected_listing, 2);

        press(&mut state, KeyCode::Char('x'));
        state.dashboard.attach_modal();
        press(&mut state, KeyCode::Enter);
        state.update(Instant::now());
        assert_eq!(state.selected_listing, 1);
        assert!(!state.activity_logs.is_empty());
    }

    #[test]
    // Clicks outside the dialog close it; clicks inside do not.
    fn test_backdrop_click() {
        let mut state = state();
        press(&mut state, KeyCode::Char('v'));
        let modal = modal_area(state.frame_area);
        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        state.handle_mouse(click(modal.x + 1, modal.y + 1), Instant::now());
        assert!(state.dashboard.modal().is_open());
        state.handle_mouse(click(0, 0), Instant::now());
        assert!(!state.dashboard.modal().is_open());
    }

    #[test]
    fn test_quick_action_keys() {
        let mut state = state();
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(
            state.dashboard.modal().current().unwrap().title,
            "Bulk Edit Listings"
        );
        assert!(!press(&mut state, KeyCode::Esc));
        assert!(press(&mut state, KeyCode::Char('q')));
    }

    #[test]
    // Clicking a shown toast dismisses that notification only.
    fn test_click_dismisses_notification() {
        use std::time::Duration;
        let mut state = state();
        let start = state.now;
        state.dashboard.push_notification("first", "info", start);
        state.dashboard.push_notification("second", "success", start);
        let shown = start + Duration::from_millis(300);
        state.update(shown);

        let second = toast_area(state.frame_area, 1, 0.0).unwrap();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: second.x + 2,
            row: second.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        state.handle_mouse(click, shown);
        state.update(shown + Duration::from_millis(300));

        let remaining: Vec<_> = state
            .dashboard
            .services()
            .notifications
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(remaining, vec!["first"]);
    }

    #[test]
    // Shift-C asks before clearing; the answer applies once the dialog is drawn.
    fn test_clear_notifications_after_confirm() {
        let mut state = state();
        press(&mut state, KeyCode::Char('C'));
        assert!(!state.dashboard.modal().is_open());

        let now = Instant::now();
        state.dashboard.push_notification("one", "info", now);
        state.dashboard.push_notification("two", "warning", now);
        press(&mut state, KeyCode::Char('C'));
        assert_eq!(
            state.dashboard.modal().current().unwrap().title,
            "Clear Notifications"
        );
        state.dashboard.attach_modal();
        press(&mut state, KeyCode::Char('y'));
        assert!(!state.dashboard.modal().is_open());
        assert!(
            state
                .dashboard
                .services()
                .notifications
                .iter()
                .all(|n| matches!(n.phase, crate::notifications::Phase::Leaving { .. }))
        );
    }

    #[test]
    fn test_help_key_lists_shortcuts() {
        let mut state = state();
        press(&mut state, KeyCode::Char('?'));
        let open = state.dashboard.modal().current().unwrap();
        assert_eq!(open.title, "Keyboard Shortcuts");
        assert!(!open.awaiting_choice());
        assert!(!press(&mut state, KeyCode::Esc));
        assert!(!state.dashboard.modal().is_open());
    }
}
