//! Store traits the registry operations run against.
//!
//! Keyed person records plus an append-only offense log. Both are
//! synchronous and single-writer; the registry owns the store for the
//! duration of each operation.

use crate::error::StoreResult;
use roadreg_core::{DemeritEntry, Person, PersonId};

/// Keyed person-record storage.
pub trait PersonStore {
    /// Fetch the record keyed by `id`, if any.
    fn get(&self, id: &PersonId) -> StoreResult<Option<Person>>;

    /// Insert or replace the record keyed by `record.id`.
    fn put(&mut self, record: &Person) -> StoreResult<()>;

    /// Replace the record keyed by `old_id` with `record`, which may carry
    /// a different key. Fails with `NotFound` when `old_id` is absent.
    fn replace(&mut self, old_id: &PersonId, record: &Person) -> StoreResult<()>;

    /// Existence check via `get`.
    fn exists(&self, id: &PersonId) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }
}

/// Append-only offense log keyed by person.
///
/// Entries are never edited or deleted; `list_for` may return them in any
/// order, the caller re-filters by window.
pub trait DemeritStore {
    fn append(&mut self, entry: &DemeritEntry) -> StoreResult<()>;

    fn list_for(&self, id: &PersonId) -> StoreResult<Vec<DemeritEntry>>;
}
