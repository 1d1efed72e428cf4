//! Draft storage for the edit-listing form
//!
//! Drafts are saved under a fixed key on every form change and restored the
//! next time the same listing is edited.

use crate::consts::cli_consts::APP_DIR_NAME;
use crate::modal::ListingDraft;
#[cfg(test)]
use std::collections::HashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::PathBuf;

/// Key/value storage for form drafts.
#[cfg_attr(test, mockall::automock)]
pub trait DraftStorage {
    /// Returns the draft saved under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<ListingDraft>, Error>;

    /// Saves `draft` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, draft: &ListingDraft) -> Result<(), Error>;

    /// Removes the draft saved under `key`. Missing keys are not an error.
    fn clear(&mut self, key: &str) -> Result<(), Error>;
}

/// Returns the path of the draft file under the user's home directory.
pub fn get_drafts_path() -> Result<PathBuf, Error> {
    let home_path = home::home_dir().ok_or(Error::new(
        ErrorKind::NotFound,
        "Failed to determine home directory",
    ))?;
    Ok(home_path.join(APP_DIR_NAME).join("drafts.json"))
}

/// Drafts kept in a single JSON file mapping keys to drafts.
#[derive(Debug, Clone)]
pub struct FileDraftStorage {
    path: PathBuf,
}

impl FileDraftStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, ListingDraft>, Error> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let buf = fs::read(&self.path)?;
        serde_json::from_slice(&buf).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    fn write_all(&self, drafts: &BTreeMap<String, ListingDraft>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(drafts).map_err(|e| {
            Error::new(
                ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(&self.path, json)
    }
}

impl DraftStorage for FileDraftStorage {
    fn load(&self, key: &str) -> Result<Option<ListingDraft>, Error> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, draft: &ListingDraft) -> Result<(), Error> {
        // An unreadable file is replaced rather than blocking every save.
        let mut drafts = self.read_all().unwrap_or_default();
        drafts.insert(key.to_string(), draft.clone());
        self.write_all(&drafts)
    }

    fn clear(&mut self, key: &str) -> Result<(), Error> {
        let mut drafts = self.read_all()?;
        if drafts.remove(key).is_some() {
            self.write_all(&drafts)?;
        }
        Ok(())
    }
}

/// Drafts kept only for the lifetime of the process.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStorage {
    drafts: HashMap<String, ListingDraft>,
}

#[cfg(test)]
impl DraftStorage for MemoryDraftStorage {
    fn load(&self, key: &str) -> Result<Option<ListingDraft>, Error> {
        Ok(self.drafts.get(key).cloned())
    }

    fn save(&mut self, key: &str, draft: &ListingDraft) -> Result<(), Error> {
        self.drafts.insert(key.to_string(), draft.clone());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), Error> {
        self.drafts.remove(key);
        Ok(())
    }
}
