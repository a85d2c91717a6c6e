//! Durable CRUD over one day's checklist.
//!
//! Every mutator follows the same protocol: read the whole collection, change it in
//! memory, write the whole collection back under the same key. There is no locking and no
//! version check, so two overlapping mutations on the same key can lose one of the writes
//! (last completed write wins). Callers serialize gestures per screen.

use std::sync::Arc;

use log::{error, info, warn};

use crate::error::{Result, StoreError, ValidationError};
use crate::line_item::{ItemKind, LineItem, DEFAULT_MAX_SETS};
use crate::schedule::{StorageKey, Weekday};
use crate::storage::KeyValueStorage;

pub struct ChecklistStore<S: KeyValueStorage> {
    storage: Arc<S>,
    key: StorageKey,
    kind: ItemKind,
    max_sets: u32,
}

impl<S: KeyValueStorage> Clone for ChecklistStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            key: self.key.clone(),
            kind: self.kind,
            max_sets: self.max_sets,
        }
    }
}

impl<S: KeyValueStorage> ChecklistStore<S> {
    pub fn new(storage: Arc<S>, key: StorageKey, kind: ItemKind) -> Self {
        Self {
            storage,
            key,
            kind,
            max_sets: DEFAULT_MAX_SETS,
        }
    }

    /// The store for one day of the weekly schedule.
    pub fn for_day(storage: Arc<S>, day: Weekday) -> Self {
        Self::new(storage, day.storage_key(), day.item_kind())
    }

    pub fn with_max_sets(mut self, max_sets: u32) -> Self {
        self.max_sets = max_sets;
        self
    }

    pub fn key(&self) -> &StorageKey {
        &self.key
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Reads the collection, treating any failure as an empty one.
    ///
    /// Missing, unreadable and corrupt records all load as `[]`; the cause is logged.
    pub async fn load(&self) -> Vec<LineItem> {
        match self.try_load().await {
            Ok(items) => items,
            Err(e) => {
                warn!("Loading {} failed, showing empty checklist: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Reads the collection and reports why it could not be read.
    pub async fn try_load(&self) -> Result<Vec<LineItem>> {
        let raw = self
            .storage
            .get(self.key.as_str())
            .await
            .map_err(StoreError::StorageRead)?;

        match raw {
            None => Ok(Vec::new()),
            Some(json) => Ok(serde_json::from_str(&json)?),
        }
    }

    /// Appends a validated, unchecked item and persists.
    pub async fn add(&self, mut item: LineItem) -> Result<Vec<LineItem>> {
        self.validate(&item)?;
        item.set_checked(false);

        let mut items = self.load_for_write().await?;
        items.push(item);
        self.persist(&items).await?;
        Ok(items)
    }

    /// Replaces the item at `index` in place. The replacement starts unchecked.
    pub async fn update(&self, index: usize, mut item: LineItem) -> Result<Vec<LineItem>> {
        self.validate(&item)?;
        item.set_checked(false);

        let mut items = self.load_for_write().await?;
        let slot = Self::slot(&mut items, index)?;
        *slot = item;
        self.persist(&items).await?;
        Ok(items)
    }

    /// Flips `checked` on the item at `index`. No field validation runs.
    pub async fn toggle(&self, index: usize) -> Result<Vec<LineItem>> {
        let mut items = self.load_for_write().await?;
        Self::slot(&mut items, index)?.toggle();
        self.persist(&items).await?;
        Ok(items)
    }

    /// Removes the item at `index`; later items shift down by one.
    ///
    /// Confirmation with the user happens before this is called.
    pub async fn remove(&self, index: usize) -> Result<Vec<LineItem>> {
        let mut items = self.load_for_write().await?;
        if index >= items.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        items.remove(index);
        self.persist(&items).await?;
        Ok(items)
    }

    /// The starting point for a mutation.
    ///
    /// A corrupt record is replaced, as `load` would show it empty. A failed read aborts
    /// the mutation so the stored record is left as it was.
    async fn load_for_write(&self) -> Result<Vec<LineItem>> {
        match self.try_load().await {
            Ok(items) => Ok(items),
            Err(StoreError::Serialization(e)) => {
                warn!("Record under {} is corrupt and will be replaced: {}", self.key, e);
                Ok(Vec::new())
            }
            Err(e) => {
                error!("Not modifying {}: {}", self.key, e);
                Err(e)
            }
        }
    }

    fn validate(&self, item: &LineItem) -> std::result::Result<(), ValidationError> {
        if item.kind() != self.kind {
            return Err(ValidationError::WrongKind {
                expected: self.kind.as_str(),
            });
        }
        item.validate(self.max_sets)
    }

    fn slot(items: &mut [LineItem], index: usize) -> Result<&mut LineItem> {
        let len = items.len();
        items
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })
    }

    async fn persist(&self, items: &[LineItem]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        match self.storage.set(self.key.as_str(), &json).await {
            Ok(()) => {
                info!("Saved {} items under {}", items.len(), self.key);
                Ok(())
            }
            Err(e) => {
                error!("Failed to save {}: {}", self.key, e);
                Err(StoreError::StorageWrite(e))
            }
        }
    }
}
