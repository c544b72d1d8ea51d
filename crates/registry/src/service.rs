//! Registry operations - create, update, add demerit points.
//!
//! Each operation validates its candidate, checks the business rules
//! against the stored record, recomputes derived state, then persists.
//! Operations are synchronous and assume exclusive ownership of the
//! stores for their duration.

use crate::error::{RegistryError, RegistryResult};
use chrono::{Local, NaiveDate};
use roadreg_core::{
    age_at, evaluate_suspension, is_future, points_in_window, validate_name, validate_points,
    CoreError, DemeritEntry, Person, PersonId,
};
use roadreg_persistence::{DemeritStore, PersonStore};
use tracing::{info, warn};

/// Age below which a stored address is locked against updates.
pub const ADDRESS_LOCK_AGE: i32 = 18;

/// Outcome of a successful demerit-point addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemeritOutcome {
    /// Point total inside the 2-year window ending at the offense date,
    /// the new entry included.
    pub window_points: u32,
    /// Suspension flag now persisted on the person record.
    pub suspended: bool,
}

/// The registry engine over a pair of stores.
pub struct Registry<P: PersonStore, D: DemeritStore> {
    people: P,
    demerits: D,
    today_override: Option<NaiveDate>,
}

impl<P: PersonStore, D: DemeritStore> Registry<P, D> {
    pub fn new(people: P, demerits: D) -> Self {
        Self {
            people,
            demerits,
            today_override: None,
        }
    }

    /// Pin "today" to a fixed date. Used by tests; production takes the
    /// local calendar date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today_override = Some(today);
        self
    }

    pub fn people(&self) -> &P {
        &self.people
    }

    pub fn demerits(&self) -> &D {
        &self.demerits
    }

    fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Create a new person record.
    ///
    /// Candidate fields must be syntactically valid, the birth date must
    /// not be in the future, and the id must be unused. The stored record
    /// always starts unsuspended. Nothing is written on rejection.
    pub fn add_person(&mut self, candidate: Person) -> RegistryResult<()> {
        validate_name("First name", &candidate.first_name)?;
        validate_name("Last name", &candidate.last_name)?;

        if is_future(candidate.birth_date, self.today()) {
            return Err(CoreError::FutureDate {
                field: "Birth date",
                date: candidate.birth_date,
            }
            .into());
        }

        if self.people.exists(&candidate.id)? {
            warn!(id = %candidate.id, "rejected create: duplicate id");
            return Err(RegistryError::DuplicateId(candidate.id.to_string()));
        }

        let record = candidate.with_suspended(false);
        self.people.put(&record)?;
        info!(id = %record.id, "person added");
        Ok(())
    }

    /// Update the personal details of the record keyed by `existing_id`.
    ///
    /// Beyond syntactic validity, three rules apply independently:
    /// - a person under 18 cannot change address
    /// - a birth-date change must be the only change
    /// - an id whose first digit is even can never change, and a changed
    ///   id must not collide with another record
    ///
    /// The suspension flag is carried over from the stored record; updates
    /// never alter it.
    pub fn update_personal_details(
        &mut self,
        existing_id: &PersonId,
        candidate: Person,
    ) -> RegistryResult<()> {
        let existing = self
            .people
            .get(existing_id)?
            .ok_or_else(|| RegistryError::PersonNotFound(existing_id.to_string()))?;

        validate_name("First name", &candidate.first_name)?;
        validate_name("Last name", &candidate.last_name)?;

        if is_future(candidate.birth_date, self.today()) {
            return Err(CoreError::FutureDate {
                field: "Birth date",
                date: candidate.birth_date,
            }
            .into());
        }

        if age_at(existing.birth_date, self.today()) < ADDRESS_LOCK_AGE
            && candidate.address != existing.address
        {
            warn!(id = %existing_id, "rejected update: minor address lock");
            return Err(RegistryError::MinorAddressLocked);
        }

        if candidate.birth_date != existing.birth_date {
            let others_unchanged = candidate.id == existing.id
                && candidate.first_name == existing.first_name
                && candidate.last_name == existing.last_name
                && candidate.address == existing.address;
            if !others_unchanged {
                warn!(id = %existing_id, "rejected update: birth date change not isolated");
                return Err(RegistryError::BirthdateNotExclusive);
            }
        }

        if candidate.id != existing.id {
            if existing.id.starts_with_even_digit() {
                warn!(id = %existing_id, "rejected update: even-digit id is locked");
                return Err(RegistryError::IdentityLocked);
            }
            if self.people.exists(&candidate.id)? {
                warn!(id = %existing_id, new_id = %candidate.id, "rejected update: new id taken");
                return Err(RegistryError::DuplicateId(candidate.id.to_string()));
            }
        }

        let record = candidate.with_suspended(existing.suspended);
        self.people.replace(existing_id, &record)?;
        info!(old_id = %existing_id, id = %record.id, "person updated");
        Ok(())
    }

    /// Record an offense and recompute the person's suspension status.
    ///
    /// The offense joins the person's history, the suspension engine runs
    /// over the full updated history with age taken at the offense date,
    /// and both the refreshed person record and the new entry are
    /// persisted. There is no rollback between the two writes: if the
    /// entry append fails after the person write succeeded, the store is
    /// left with a refreshed suspension flag and no matching entry. Known
    /// limitation of the flat-file model.
    pub fn add_demerit_points(
        &mut self,
        person_id: &PersonId,
        offense_date: NaiveDate,
        points: u32,
    ) -> RegistryResult<DemeritOutcome> {
        if is_future(offense_date, self.today()) {
            return Err(CoreError::FutureDate {
                field: "Offense date",
                date: offense_date,
            }
            .into());
        }

        validate_points(points)?;

        let person = self
            .people
            .get(person_id)?
            .ok_or_else(|| RegistryError::PersonNotFound(person_id.to_string()))?;

        let entry = DemeritEntry::new(person_id.clone(), offense_date, points)?;

        let mut history = self.demerits.list_for(person_id)?;
        history.push(entry.clone());

        let suspended = evaluate_suspension(person.birth_date, offense_date, &history);
        let window_points = points_in_window(&history, offense_date);

        self.people.put(&person.with_suspended(suspended))?;
        self.demerits.append(&entry)?;

        info!(
            id = %person_id,
            points,
            window_points,
            suspended,
            "demerit points added"
        );
        Ok(DemeritOutcome {
            window_points,
            suspended,
        })
    }

    /// Fetch a record, failing when absent.
    pub fn get_person(&self, id: &PersonId) -> RegistryResult<Person> {
        self.people
            .get(id)?
            .ok_or_else(|| RegistryError::PersonNotFound(id.to_string()))
    }

    /// Full offense history for an existing person.
    pub fn demerit_history(&self, id: &PersonId) -> RegistryResult<Vec<DemeritEntry>> {
        if !self.people.exists(id)? {
            return Err(RegistryError::PersonNotFound(id.to_string()));
        }
        Ok(self.demerits.list_for(id)?)
    }
}
