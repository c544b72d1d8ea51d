//! # RoadReg Persistence
//!
//! Storage layer for RoadReg - keyed person records plus an append-only
//! demerit log, behind the [`PersonStore`] / [`DemeritStore`] traits.
//!
//! ## Implementations
//!
//! - [`FilePersonStore`] / [`FileDemeritStore`] - line-oriented flat text,
//!   the production backend. Person lines use `###` between fields so the
//!   `|` inside addresses never collides; demerit lines use `|`.
//! - [`MemoryPersonStore`] / [`MemoryDemeritStore`] - HashMap/Vec backed,
//!   for tests and embedding.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roadreg_persistence::{FileDemeritStore, FilePersonStore, PersonStore};
//!
//! let mut people = FilePersonStore::new("data/people.txt")?;
//! let demerits = FileDemeritStore::new("data/demerit_points.txt")?;
//! let record = people.get(&id)?;
//! ```

pub mod error;
pub mod flat_file;
pub mod memory;
pub mod stores;

pub use error::{StoreError, StoreResult};
pub use flat_file::{FileDemeritStore, FilePersonStore};
pub use memory::{MemoryDemeritStore, MemoryPersonStore};
pub use stores::{DemeritStore, PersonStore};
