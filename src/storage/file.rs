//! File-backed collection store

use crate::inventory::Collection;
use crate::storage::StoreOptions;
use crate::{Result, TcgError};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes one collection file
#[derive(Debug, Clone)]
pub struct CollectionStore {
    path: PathBuf,
    options: StoreOptions,
}

impl CollectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, StoreOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: StoreOptions) -> Self {
        CollectionStore {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write the collection, replacing any existing file
    pub fn export(&self, collection: &Collection) -> Result<()> {
        let json = if self.options.pretty {
            collection.to_json_pretty()?
        } else {
            collection.to_json()?
        };

        if self.options.create_parent_dirs {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, json)?;
        info!(
            "Exported collection ({} cards, {} decks) to {}",
            collection.all_cards_count(),
            collection.deck_count(),
            self.path.display()
        );
        Ok(())
    }

    /// Read the collection back
    ///
    /// Fails with `NotFound` if the file doesn't exist, `InvalidSource` if it
    /// doesn't parse, and `CardNotInCollection` if its decks over-claim.
    pub fn import(&self) -> Result<Collection> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| TcgError::from_read(&self.path, e))?;
        let collection = Collection::from_json(&content).inspect_err(|e| {
            warn!("Rejected collection file {}: {}", self.path.display(), e);
        })?;

        info!(
            "Imported collection ({} cards, {} decks) from {}",
            collection.all_cards_count(),
            collection.deck_count(),
            self.path.display()
        );
        Ok(collection)
    }
}

impl Collection {
    /// Load a collection file with default options
    pub fn import(path: &Path) -> Result<Self> {
        CollectionStore::new(path).import()
    }

    /// Save to a collection file with default options
    pub fn export(&self, path: &Path) -> Result<()> {
        CollectionStore::new(path).export(self)
    }
}
