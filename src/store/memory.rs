use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Result, TordError};
use crate::model::{Author, Dare, Truth};

/// A record that can live in a [`Collection`].
pub trait Record {
    /// Singular kind name, used in log events and not-found errors.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// A record carrying an author foreign key.
pub trait Authored: Record {
    fn author_id(&self) -> &str;
}

impl Record for Author {
    const KIND: &'static str = "author";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Truth {
    const KIND: &'static str = "truth";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Authored for Truth {
    fn author_id(&self) -> &str {
        &self.author_id
    }
}

impl Record for Dare {
    const KIND: &'static str = "dare";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Authored for Dare {
    fn author_id(&self) -> &str {
        &self.author_id
    }
}

/// One ordered collection of records, insertion order = display order.
///
/// Lookups are linear scans; the interface is shaped so an indexed
/// implementation could be swapped in without touching callers.
pub struct Collection<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Record + Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a record and hand back a copy of what was stored.
    pub fn insert(&self, record: T) -> T {
        tracing::debug!(kind = T::KIND, id = record.id(), "inserting record");
        self.write().push(record.clone());
        record
    }

    /// First record whose id matches exactly, if any.
    pub fn get(&self, id: &str) -> Option<T> {
        self.read().iter().find(|r| r.id() == id).cloned()
    }

    /// The full collection in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Apply `mutate` to the record with the given id and return the updated
    /// record. Missing ids are an explicit error, so callers never mutate a
    /// lookup miss.
    pub fn update(&self, id: &str, mutate: impl FnOnce(&mut T)) -> Result<T> {
        let mut records = self.write();
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| TordError::not_found(T::KIND, id))?;
        mutate(record);
        tracing::debug!(kind = T::KIND, id, "updated record");
        Ok(record.clone())
    }

    /// Remove the record with the given id, returning it, or `None` when
    /// nothing matched. Ids are unique, so at most one record goes.
    pub fn remove(&self, id: &str) -> Option<T> {
        let mut records = self.write();
        let pos = records.iter().position(|r| r.id() == id)?;
        tracing::debug!(kind = T::KIND, id, "removing record");
        Some(records.remove(pos))
    }
}

impl<T: Authored + Clone> Collection<T> {
    /// All records whose foreign key points at the given author, in
    /// insertion order. A dangling key simply yields an empty list.
    pub fn by_author(&self, author_id: &str) -> Vec<T> {
        self.read()
            .iter()
            .filter(|r| r.author_id() == author_id)
            .cloned()
            .collect()
    }
}

/// The deck: one collection per record type, shared via the schema context.
///
/// Constructed at process start (seeded or empty) and torn down with the
/// process; nothing is persisted. Tests build a fresh store each.
#[derive(Default)]
pub struct Store {
    pub authors: Collection<Author>,
    pub truths: Collection<Truth>,
    pub dares: Collection<Dare>,
}

impl Store {
    /// An empty store with no authors or prompts.
    pub fn new() -> Self {
        Self::default()
    }
}
