//! Listing row actions

use crate::engine::DashboardServices;
use crate::error::DashboardError;
use crate::events::{DashboardEvent, Source};
use crate::modal::{DetailRow, ListingForm, ModalContent, ModalController};
use crate::notifications::Severity;
use crate::surface::ListingRow;
use log::info;

/// Static illustrative metrics on the statistics modal.
const CONVERSION_RATE: &str = "5.2%";
const AVERAGE_TIME_TO_SALE: &str = "8 days";

const COPY_SUFFIX: &str = " (Copy)";

/// Actions available on a listing row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ListingAction {
    Edit,
    Stats,
    Duplicate,
    Delete,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ListingManager;

impl ListingManager {
    pub fn handle_action(
        &self,
        action: ListingAction,
        listing_id: &str,
        services: &mut DashboardServices,
        modal: &mut ModalController<DashboardServices>,
    ) -> Result<(), DashboardError> {
        let listing = services
            .store
            .listing(listing_id)
            .cloned()
            .ok_or_else(|| DashboardError::ListingNotFound(listing_id.to_string()))?;

        match action {
            ListingAction::Edit => {
                services.notify(format!("Editing: {}", listing.item), Severity::Info);
                let mut form = ListingForm::from_listing(&listing);
                if let Some(draft) = services.load_draft() {
                    if draft.listing_id == listing.id {
                        form.apply_draft(draft);
                        services.notify("Draft restored from previous session", Severity::Info);
                    }
                }
                modal.show("Edit Listing", ModalContent::ListingForm(form));
                services.record(DashboardEvent::display(
                    Source::Listings,
                    format!("Editing {}", listing.id),
                ));
            }
            ListingAction::Stats => {
                modal.show(
                    "Listing Statistics",
                    ModalContent::Details(vec![
                        DetailRow::new("Item", listing.item.as_str()),
                        DetailRow::new("Total Views", listing.views.to_string()),
                        DetailRow::new("Current Watchers", listing.watchers.to_string()),
                        DetailRow::new("Conversion Rate", CONVERSION_RATE),
                        DetailRow::new("Average Time to Sale", AVERAGE_TIME_TO_SALE),
                    ]),
                );
                services.record(DashboardEvent::display(
                    Source::Listings,
                    format!("Showing statistics for {}", listing.id),
                ));
            }
            ListingAction::Duplicate => {
                let source_id = listing.id.clone();
                modal.confirm(
                    "Duplicate Listing",
                    format!("Create a copy of \"{}\"?", listing.item),
                    Some(Box::new(move |services: &mut DashboardServices| {
                        Self::duplicate(&source_id, services);
                    })),
                );
            }
            ListingAction::Delete => {
                let target_id = listing.id.clone();
                modal.confirm(
                    "Delete Listing",
                    format!("Are you sure you want to delete \"{}\"?", listing.item),
                    Some(Box::new(move |services: &mut DashboardServices| {
                        Self::delete(&target_id, services);
                    })),
                );
            }
        }
        Ok(())
    }

    /// Inserts a copy of the listing under a freshly minted identifier.
    /// Does nothing if the source disappeared before confirmation.
    fn duplicate(source_id: &str, services: &mut DashboardServices) {
        let Some(source) = services.store.listing(source_id).cloned() else {
            return;
        };

        let mut copy = source.clone();
        copy.id = services.store.mint_listing_id();
        copy.item = format!("{}{}", source.item, COPY_SUFFIX);
        if let Err(e) = services.store.insert_listing(copy.clone()) {
            log::error!("Failed to insert duplicated listing: {}", e);
            return;
        }

        services.surface.append_listing_row(ListingRow {
            listing_id: copy.id.clone(),
            title: copy.item.clone(),
        });
        services.notify(
            format!("Listing duplicated: {}", source.item),
            Severity::Success,
        );
        info!("Listing {} duplicated as {}", source.id, copy.id);
        services.record(DashboardEvent::mutation(
            Source::Listings,
            format!("Listing {} duplicated as {}", source.id, copy.id),
        ));
    }

    fn delete(listing_id: &str, services: &mut DashboardServices) {
        let Ok(removed) = services.store.remove_listing(listing_id) else {
            return;
        };
        services.surface.remove_listing_row(listing_id);
        services.notify(
            format!("Listing deleted: {}", removed.item),
            Severity::Success,
        );
        info!("Listing {} deleted", listing_id);
        services.record(DashboardEvent::mutation(
            Source::Listings,
            format!("Listing {} deleted", listing_id),
        ));
    }
}
