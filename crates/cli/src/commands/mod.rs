//! CLI command handlers.

pub mod demerits;
pub mod person;

use anyhow::Result;
use roadreg_persistence::{FileDemeritStore, FilePersonStore};
use roadreg_registry::Registry;
use std::path::Path;

/// Open the file-backed registry over the configured paths.
pub fn open_registry(
    people_file: &Path,
    demerits_file: &Path,
) -> Result<Registry<FilePersonStore, FileDemeritStore>> {
    let people = FilePersonStore::new(people_file)?;
    let demerits = FileDemeritStore::new(demerits_file)?;
    Ok(Registry::new(people, demerits))
}
