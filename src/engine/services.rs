//! Services shared by the dashboard managers
//!
//! Constructed once at startup and handed to the managers by reference.
//! Confirm handlers receive the same struct when they run.

use crate::consts::cli_consts::DRAFT_STORAGE_KEY;
use crate::draft::DraftStorage;
use crate::events::{DashboardEvent, Source};
use crate::modal::ListingDraft;
use crate::notifications::{NotificationId, NotificationQueue, Severity};
use crate::records::RecordStore;
use crate::surface::DisplaySurface;
use log::warn;
use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

pub struct DashboardServices {
    pub store: RecordStore,
    pub surface: DisplaySurface,
    pub notifications: NotificationQueue,
    drafts: Box<dyn DraftStorage>,
    /// Activity events not yet collected by the display layer.
    events: VecDeque<DashboardEvent>,
    /// Time of the gesture currently being processed.
    now: Instant,
}

impl fmt::Debug for DashboardServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardServices")
            .field("store", &self.store)
            .field("surface", &self.surface)
            .field("notifications", &self.notifications)
            .field("pending_events", &self.events.len())
            .finish()
    }
}

impl DashboardServices {
    pub fn new(store: RecordStore, drafts: Box<dyn DraftStorage>, now: Instant) -> Self {
        let surface = DisplaySurface::from_store(&store);
        Self {
            store,
            surface,
            notifications: NotificationQueue::new(),
            drafts,
            events: VecDeque::new(),
            now,
        }
    }

    /// Stamps subsequent notifications with the time of the current gesture.
    pub fn set_now(&mut self, now: Instant) {
        self.now = now;
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.notifications.push(message, severity, self.now)
    }

    pub fn record(&mut self, event: DashboardEvent) {
        self.events.push_back(event);
    }

    pub fn drain_events(&mut self) -> Vec<DashboardEvent> {
        self.events.drain(..).collect()
    }

    /// Loads the saved edit-listing draft. Storage failures are logged and
    /// treated as no draft.
    pub fn load_draft(&mut self) -> Option<ListingDraft> {
        match self.drafts.load(DRAFT_STORAGE_KEY) {
            Ok(draft) => draft,
            Err(e) => {
                warn!("Failed to load saved form data: {}", e);
                self.record(DashboardEvent::miss(
                    Source::Drafts,
                    format!("Failed to load saved form data: {}", e),
                ));
                None
            }
        }
    }

    pub fn save_draft(&mut self, draft: &ListingDraft) {
        if let Err(e) = self.drafts.save(DRAFT_STORAGE_KEY, draft) {
            warn!("Failed to save form draft: {}", e);
        }
    }

    pub fn clear_draft(&mut self) {
        if let Err(e) = self.drafts.clear(DRAFT_STORAGE_KEY) {
            warn!("Failed to clear form draft: {}", e);
        }
    }
}
