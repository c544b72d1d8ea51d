//! # Person Module
//!
//! PersonId and the Person record held by the registry.
//!
//! A PersonId is the 10-character structured key uniquely naming a record:
//! two leading digits in 2-9, at least two special characters among
//! positions 3-8, and two trailing uppercase letters.

use crate::address::Address;
use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated 10-character person identifier.
///
/// # Invariant
/// Enforced by [`PersonId::parse`]:
/// - exactly 10 characters
/// - characters 1-2 are digits in `'2'..='9'`
/// - characters 3-8 contain at least 2 specials (neither letter nor digit)
/// - characters 9-10 are uppercase letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(String);

impl PersonId {
    /// Minimum special characters required among positions 3-8.
    pub const MIN_SPECIALS: usize = 2;

    /// Validate and wrap an identifier string.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 10 {
            return Err(CoreError::IdWrongLength(chars.len()));
        }

        if !chars[..2].iter().all(|c| ('2'..='9').contains(c)) {
            return Err(CoreError::IdBadLeadingDigits);
        }

        let specials = chars[2..8].iter().filter(|c| !c.is_alphanumeric()).count();
        if specials < Self::MIN_SPECIALS {
            return Err(CoreError::IdTooFewSpecials(specials));
        }

        if !chars[8..10].iter().all(|c| c.is_uppercase()) {
            return Err(CoreError::IdBadTrailingLetters);
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the leading digit is even.
    ///
    /// Records whose key starts with an even digit can never be re-keyed
    /// (the update identity lock).
    pub fn starts_with_even_digit(&self) -> bool {
        self.0
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .is_some_and(|d| d % 2 == 0)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PersonId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PersonId {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

/// Non-blank name check, shared by first and last names.
pub fn validate_name(field: &'static str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::EmptyName { field });
    }
    Ok(())
}

/// A person record as held in the registry.
///
/// `suspended` is derived from demerit history; callers never set it
/// directly. Construction leaves it false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub address: Address,
    pub birth_date: NaiveDate,
    pub suspended: bool,
}

impl Person {
    /// Build an unsuspended record, validating the names.
    ///
    /// Identifier and address arrive already validated by their own types;
    /// the future-date check on `birth_date` belongs to the registry layer,
    /// which knows what "today" is.
    pub fn new(
        id: PersonId,
        first_name: &str,
        last_name: &str,
        address: Address,
        birth_date: NaiveDate,
    ) -> CoreResult<Self> {
        validate_name("First name", first_name)?;
        validate_name("Last name", last_name)?;

        Ok(Self {
            id,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            address,
            birth_date,
            suspended: false,
        })
    }

    /// Functional copy with a different suspension flag.
    ///
    /// Suspension changes always go through this rather than field mutation
    /// so every store write sees a whole, internally valid record.
    pub fn with_suspended(&self, suspended: bool) -> Self {
        Self {
            suspended,
            ..self.clone()
        }
    }

    /// Whether all personal details (everything but `suspended`) match.
    pub fn same_details(&self, other: &Person) -> bool {
        self.id == other.id
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.address == other.address
            && self.birth_date == other.birth_date
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.id)
    }
}
