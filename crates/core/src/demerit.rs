//! Demerit points and the suspension rule engine.
//!
//! Offenses are append-only dated point records. Suspension is derived by
//! summing points inside the rolling 2-year window ending at a reference
//! offense date and comparing against an age-dependent threshold.

use crate::dates::{age_at, in_window, window_start};
use crate::error::{CoreError, CoreResult};
use crate::person::PersonId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Minimum points a single offense can carry.
pub const MIN_POINTS: u32 = 1;
/// Maximum points a single offense can carry.
pub const MAX_POINTS: u32 = 6;

/// Windowed point total above which a driver under 21 is suspended.
pub const UNDER_21_LIMIT: u32 = 6;
/// Windowed point total above which everyone else is suspended.
pub const DEFAULT_LIMIT: u32 = 12;
/// Age below which the stricter limit applies.
pub const YOUNG_DRIVER_AGE: i32 = 21;

/// Validate an offense point value.
pub fn validate_points(points: u32) -> CoreResult<()> {
    if !(MIN_POINTS..=MAX_POINTS).contains(&points) {
        return Err(CoreError::PointsOutOfRange(points));
    }
    Ok(())
}

/// One recorded offense. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemeritEntry {
    pub person_id: PersonId,
    pub offense_date: NaiveDate,
    pub points: u32,
}

impl DemeritEntry {
    pub fn new(person_id: PersonId, offense_date: NaiveDate, points: u32) -> CoreResult<Self> {
        validate_points(points)?;
        Ok(Self {
            person_id,
            offense_date,
            points,
        })
    }
}

/// Sum the points of entries falling inside the window ending at `reference`.
pub fn points_in_window(entries: &[DemeritEntry], reference: NaiveDate) -> u32 {
    let start = window_start(reference);
    entries
        .iter()
        .filter(|e| in_window(e.offense_date, start))
        .map(|e| e.points)
        .sum()
}

/// Derive the suspension flag for one person's full offense history.
///
/// Age is taken at the reference offense date, not at "now": a back-dated
/// offense is judged against the age the person had then. The result
/// replaces any prior flag outright, so a windowed total that later drops
/// un-suspends the person.
pub fn evaluate_suspension(
    birth_date: NaiveDate,
    reference: NaiveDate,
    entries: &[DemeritEntry],
) -> bool {
    let age = age_at(birth_date, reference);
    let total = points_in_window(entries, reference);
    if age < YOUNG_DRIVER_AGE {
        total > UNDER_21_LIMIT
    } else {
        total > DEFAULT_LIMIT
    }
}
