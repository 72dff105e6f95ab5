//! Async collection store
//!
//! Same contract as `CollectionStore`, with file I/O on tokio so a host can
//! wrap imports and exports in its own timeouts.

use crate::inventory::Collection;
use crate::storage::StoreOptions;
use crate::{Result, TcgError};
use log::{info, warn};
use std::path::{Path, PathBuf};
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub struct AsyncCollectionStore {
    path: PathBuf,
    options: StoreOptions,
}

impl AsyncCollectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, StoreOptions::default())
    }

    pub fn with_options(path: impl Into<PathBuf>, options: StoreOptions) -> Self {
        AsyncCollectionStore {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        tokio::fs::metadata(&self.path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    pub async fn export(&self, collection: &Collection) -> Result<()> {
        let json = if self.options.pretty {
            collection.to_json_pretty()?
        } else {
            collection.to_json()?
        };

        if self.options.create_parent_dirs {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, json).await?;
        info!("Exported collection to {}", self.path.display());
        Ok(())
    }

    pub async fn import(&self) -> Result<Collection> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| TcgError::from_read(&self.path, e))?;
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

    /// Import several collection files in parallel
    ///
    /// Results keep the order of `paths`. The first failing file (in that
    /// order) fails the whole call.
    pub async fn import_all(paths: &[PathBuf], options: StoreOptions) -> Result<Vec<Collection>> {
        let start = Instant::now();

        let tasks: Vec<_> = paths
            .iter()
            .map(|path| {
                let store = AsyncCollectionStore::with_options(path.clone(), options);
                tokio::spawn(async move { store.import().await })
            })
            .collect();

        let mut collections = Vec::with_capacity(tasks.len());
        for task in tasks {
            collections.push(task.await??);
        }

        info!(
            "Imported {} collection file(s) in {:?}",
            collections.len(),
            start.elapsed()
        );
        Ok(collections)
    }
}
