//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::engine::Dashboard;
use crate::events::DashboardEvent;
use crate::notifications::Phase;
use crate::ui::app::UIConfig;

use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Which record table receives row navigation and actions.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Orders,
    Listings,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Orders => Focus::Listings,
            Focus::Listings => Focus::Orders,
        }
    }
}

/// Terminal-side state wrapped around the dashboard engine.
#[derive(Debug)]
pub struct DashboardState {
    /// The engine all gestures are forwarded to.
    pub dashboard: Dashboard,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Time of the most recent update, used for animations.
    pub now: Instant,
    /// Where the records came from.
    pub dataset: String,
    /// Activity logs for display
    pub activity_logs: VecDeque<DashboardEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Table with keyboard focus
    pub focus: Focus,
    /// Selected row in the orders table
    pub selected_order: usize,
    /// Selected row in the listings table
    pub selected_listing: usize,
    /// Area of the last drawn frame, for hit-testing mouse clicks.
    pub frame_area: Rect,
    /// Animation tick counter
    pub tick: usize,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(dashboard: Dashboard, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            dashboard,
            start_time,
            now: start_time,
            dataset: ui_config.dataset,
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            focus: Focus::default(),
            selected_order: 0,
            selected_listing: 0,
            frame_area: Rect::default(),
            tick: 0,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: DashboardEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Identifier of the selected listing row, if any.
    pub fn selected_listing_id(&self) -> Option<String> {
        self.dashboard
            .services()
            .surface
            .listing_rows
            .get(self.selected_listing)
            .map(|row| row.listing_id.clone())
    }

    /// How long the event loop may wait for input before redrawing.
    ///
    /// Short while the chart or a notification is moving, otherwise bounded
    /// by the next scheduled task.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let moving = self.dashboard.chart().is_animating(now)
            || self
                .dashboard
                .services()
                .notifications
                .iter()
                .any(|n| n.phase != Phase::Shown);
        if moving {
            return FRAME_INTERVAL;
        }
        match self.dashboard.next_scheduled() {
            Some(due) => due.saturating_duration_since(now).min(IDLE_INTERVAL),
            None => IDLE_INTERVAL,
        }
    }
}
