//! # RoadReg Core
//!
//! Domain types and pure rules for the RoadReg platform:
//! - [`PersonId`] / [`Address`] - validated identifier and address types
//! - [`dates`] - DD-MM-YYYY parsing, age and rolling-window arithmetic
//! - [`demerit`] - offense entries and the suspension rule engine
//!
//! This crate does no I/O; storage lives in `roadreg-persistence` and the
//! lifecycle operations in `roadreg-registry`.

pub mod address;
pub mod dates;
pub mod demerit;
pub mod error;
pub mod person;

pub use address::{Address, ADDRESS_SEPARATOR, REQUIRED_STATE};
pub use dates::{
    age_at, format_date, in_window, is_future, parse_date, window_start, DATE_FORMAT,
    DEMERIT_WINDOW_YEARS,
};
pub use demerit::{
    evaluate_suspension, points_in_window, validate_points, DemeritEntry, DEFAULT_LIMIT,
    MAX_POINTS, MIN_POINTS, UNDER_21_LIMIT, YOUNG_DRIVER_AGE,
};
pub use error::{CoreError, CoreResult};
pub use person::{validate_name, Person, PersonId};
