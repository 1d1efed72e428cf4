//! Session setup and initialization

use crate::config::Config;
use crate::draft::{FileDraftStorage, get_drafts_path};
use crate::engine::Dashboard;
use crate::error::DashboardError;
use crate::records::seed::{load_data_file, reference_data};
use log::info;
use std::path::Path;
use std::time::Instant;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// The dashboard engine driven by the session
    pub dashboard: Dashboard,
    /// Loaded user configuration
    pub config: Config,
    /// Where the records came from, for display purposes
    pub dataset: String,
}

/// Builds the dashboard from the reference dataset or a seed file.
///
/// Drafts are kept in the file under the user's home directory.
///
/// # Errors
/// Fails if the home directory cannot be determined or the seed file cannot
/// be read, parsed, or contains duplicate identifiers.
pub fn setup_session(seed: Option<&Path>, config: Config) -> Result<SessionData, DashboardError> {
    let (data, dataset) = match seed {
        Some(path) => (load_data_file(path)?, path.display().to_string()),
        None => (reference_data(), "reference".to_string()),
    };
    let drafts = FileDraftStorage::new(get_drafts_path()?);
    info!(
        "Loaded {} orders and {} listings from {} dataset",
        data.recent_orders.len(),
        data.active_listings.len(),
        dataset
    );

    let dashboard = Dashboard::new(
        data,
        Box::new(drafts),
        config.default_period,
        Instant::now(),
    )?;
    Ok(SessionData {
        dashboard,
        config,
        dataset,
    })
}
