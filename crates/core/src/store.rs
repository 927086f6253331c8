//! Append-only, uniquely keyed in-memory collections.
//!
//! A [`ResourceStore`] owns its records for the lifetime of the process. There is
//! no update or delete: once inserted a record is only ever handed out as a clone.

use std::collections::HashMap;

use crate::identity::Timestamp;

/// A record that can live in a [`ResourceStore`]
pub trait Record: Clone {
    fn id(&self) -> &str;
    fn created_at(&self) -> &Timestamp;
}

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("record with id {0} already exists")]
    DuplicateId(String),
}

#[derive(Debug, Clone)]
pub struct ResourceStore<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for ResourceStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Record> ResourceStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, returning a copy of what was stored
    ///
    /// Fails only when the id is already taken, which the id generator is
    /// expected to make impossible.
    pub fn insert(&mut self, record: T) -> Result<T, StoreError> {
        if self.index.contains_key(record.id()) {
            return Err(StoreError::DuplicateId(record.id().to_string()));
        }

        self.index.insert(record.id().to_string(), self.records.len());
        self.records.push(record.clone());

        Ok(record)
    }

    pub fn get_by_id(&self, id: &str) -> Option<T> {
        self.index.get(id).map(|&position| self.records[position].clone())
    }

    /// Snapshot of every record, in insertion order
    pub fn list_all(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
