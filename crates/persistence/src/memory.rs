//! In-memory stores for tests and embedding.

use crate::error::{StoreError, StoreResult};
use crate::stores::{DemeritStore, PersonStore};
use roadreg_core::{DemeritEntry, Person, PersonId};
use std::collections::HashMap;

/// HashMap-backed person store.
#[derive(Debug, Default)]
pub struct MemoryPersonStore {
    records: HashMap<PersonId, Person>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PersonStore for MemoryPersonStore {
    fn get(&self, id: &PersonId) -> StoreResult<Option<Person>> {
        Ok(self.records.get(id).cloned())
    }

    fn put(&mut self, record: &Person) -> StoreResult<()> {
        self.records.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn replace(&mut self, old_id: &PersonId, record: &Person) -> StoreResult<()> {
        if self.records.remove(old_id).is_none() {
            return Err(StoreError::not_found("person", old_id.as_str()));
        }
        self.records.insert(record.id.clone(), record.clone());
        Ok(())
    }
}

/// Vec-backed append-only demerit log.
#[derive(Debug, Default)]
pub struct MemoryDemeritStore {
    entries: Vec<DemeritEntry>,
}

impl MemoryDemeritStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DemeritStore for MemoryDemeritStore {
    fn append(&mut self, entry: &DemeritEntry) -> StoreResult<()> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn list_for(&self, id: &PersonId) -> StoreResult<Vec<DemeritEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| &e.person_id == id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadreg_core::{parse_date, Address};

    fn person(id: &str) -> Person {
        Person::new(
            PersonId::parse(id).unwrap(),
            "Alice",
            "Nguyen",
            Address::parse("32|Highland Street|Melbourne|Victoria|Australia").unwrap(),
            parse_date("15-11-1990").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_put_get_round_trip() {
        let mut store = MemoryPersonStore::new();
        let p = person("56s_d%&fAB");
        store.put(&p).unwrap();
        assert_eq!(store.get(&p.id).unwrap(), Some(p.clone()));
        assert!(store.exists(&p.id).unwrap());
    }

    #[test]
    fn test_get_absent() {
        let store = MemoryPersonStore::new();
        let id = PersonId::parse("56s_d%&fAB").unwrap();
        assert_eq!(store.get(&id).unwrap(), None);
        assert!(!store.exists(&id).unwrap());
    }

    #[test]
    fn test_replace_with_key_change() {
        let mut store = MemoryPersonStore::new();
        let old = person("56s_d%&fAB");
        store.put(&old).unwrap();

        let mut new = person("78!@#%_zAB");
        new.first_name = "Bob".to_string();
        store.replace(&old.id, &new).unwrap();

        assert_eq!(store.get(&old.id).unwrap(), None);
        assert_eq!(store.get(&new.id).unwrap().unwrap().first_name, "Bob");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_missing_key() {
        let mut store = MemoryPersonStore::new();
        let p = person("56s_d%&fAB");
        let err = store.replace(&p.id, &p).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_demerit_append_and_filter() {
        let mut store = MemoryDemeritStore::new();
        let a = PersonId::parse("56s_d%&fAB").unwrap();
        let b = PersonId::parse("78!@#%_zAB").unwrap();

        store
            .append(&DemeritEntry::new(a.clone(), parse_date("01-01-2024").unwrap(), 3).unwrap())
            .unwrap();
        store
            .append(&DemeritEntry::new(b.clone(), parse_date("02-01-2024").unwrap(), 5).unwrap())
            .unwrap();
        store
            .append(&DemeritEntry::new(a.clone(), parse_date("03-01-2024").unwrap(), 2).unwrap())
            .unwrap();

        let for_a = store.list_for(&a).unwrap();
        assert_eq!(for_a.len(), 2);
        assert!(for_a.iter().all(|e| e.person_id == a));
        assert_eq!(store.list_for(&b).unwrap().len(), 1);
    }
}
