//! Item List
//!
//! Ordered, user-editable list of order lines. All edits go through the
//! reducer methods here; components only hold the list in a signal.

use std::ops::Range;

use thiserror::Error;

use crate::models::{ItemEntry, SubmissionRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemListError {
    #[error("cannot remove the only remaining item")]
    LastEntry,
    #[error("no item at index {index} (list has {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Editable field of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Item,
    Fallback,
}

/// Display heading for the row at `index`, numbered from 1
pub fn row_heading(index: usize) -> String {
    format!("Item #{}", index + 1)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    entries: Vec<ItemEntry>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blank_entry() -> Self {
        Self {
            entries: vec![ItemEntry::default()],
        }
    }

    pub fn from_entries(entries: Vec<ItemEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ItemEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ItemEntry> {
        self.entries.get(index)
    }

    /// Push a blank entry if the list is empty. Returns true if one was added.
    pub fn ensure_non_empty(&mut self) -> bool {
        if self.entries.is_empty() {
            self.entries.push(ItemEntry::default());
            true
        } else {
            false
        }
    }

    pub fn append(&mut self) {
        self.entries.push(ItemEntry::default());
    }

    /// Remove is only offered while more than one row exists
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    /// Delete the entry at `index`, shifting later entries down
    pub fn remove(&mut self, index: usize) -> Result<ItemEntry, ItemListError> {
        let len = self.entries.len();
        if index >= len {
            return Err(ItemListError::OutOfRange { index, len });
        }
        if !self.can_remove() {
            return Err(ItemListError::LastEntry);
        }
        Ok(self.entries.remove(index))
    }

    pub fn update(
        &mut self,
        index: usize,
        field: EntryField,
        value: String,
    ) -> Result<(), ItemListError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(ItemListError::OutOfRange { index, len })?;
        match field {
            EntryField::Item => entry.item = value,
            EntryField::Fallback => entry.fallback = value,
        }
        Ok(())
    }

    /// Clear everything, then restore the single blank row
    pub fn reset(&mut self) {
        self.entries.clear();
        self.ensure_non_empty();
    }

    /// Indices of the rows to render, in list order
    pub fn row_indices(&self) -> Range<usize> {
        0..self.entries.len()
    }

    pub fn snapshot(&self) -> SubmissionRecord {
        SubmissionRecord {
            items: self.entries.clone(),
        }
    }
}
