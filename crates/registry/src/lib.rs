//! # RoadReg Registry
//!
//! Lifecycle operations over the person and demerit stores: create and
//! update person records under the platform's business rules, and record
//! offenses with suspension recomputation.

pub mod error;
pub mod service;

pub use error::{RegistryError, RegistryResult};
pub use service::{DemeritOutcome, Registry, ADDRESS_LOCK_AGE};
