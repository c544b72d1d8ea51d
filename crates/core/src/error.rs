//! # Error Module
//!
//! Domain validation errors for RoadReg, using thiserror.

use thiserror::Error;

/// Core domain errors.
///
/// Syntactic rule violations on identifiers, names, addresses, dates and
/// demerit points. Business rules that need a stored record to evaluate
/// live in the registry layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    // === Identifier errors ===
    #[error("Person ID must be exactly 10 characters, got {0}")]
    IdWrongLength(usize),

    #[error("Person ID must start with two digits between 2 and 9")]
    IdBadLeadingDigits,

    #[error("Person ID needs at least 2 special characters in positions 3-8, found {0}")]
    IdTooFewSpecials(usize),

    #[error("Person ID must end with two uppercase letters")]
    IdBadTrailingLetters,

    // === Name errors ===
    #[error("{field} cannot be empty")]
    EmptyName { field: &'static str },

    // === Address errors ===
    #[error("Address must have 5 '|'-separated parts, got {0}")]
    AddressWrongPartCount(usize),

    #[error("Address part cannot be blank: {part}")]
    AddressBlankPart { part: &'static str },

    #[error("Street number must be a positive integer: {0}")]
    BadStreetNumber(String),

    #[error("State must be Victoria, got {0}")]
    StateNotVictoria(String),

    // === Date errors ===
    #[error("Invalid date, expected DD-MM-YYYY: {0}")]
    BadDateFormat(String),

    #[error("{field} cannot be in the future: {date}")]
    FutureDate {
        field: &'static str,
        date: chrono::NaiveDate,
    },

    // === Demerit errors ===
    #[error("Demerit points must be between 1 and 6, got {0}")]
    PointsOutOfRange(u32),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Whether this is an identifier-shape error
    pub fn is_id_error(&self) -> bool {
        matches!(
            self,
            CoreError::IdWrongLength(_)
                | CoreError::IdBadLeadingDigits
                | CoreError::IdTooFewSpecials(_)
                | CoreError::IdBadTrailingLetters
        )
    }

    /// Whether this is an address-shape error
    pub fn is_address_error(&self) -> bool {
        matches!(
            self,
            CoreError::AddressWrongPartCount(_)
                | CoreError::AddressBlankPart { .. }
                | CoreError::BadStreetNumber(_)
                | CoreError::StateNotVictoria(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::IdWrongLength(7);
        assert_eq!(err.to_string(), "Person ID must be exactly 10 characters, got 7");

        let err = CoreError::StateNotVictoria("NSW".to_string());
        assert_eq!(err.to_string(), "State must be Victoria, got NSW");
    }

    #[test]
    fn test_error_checks() {
        assert!(CoreError::IdBadLeadingDigits.is_id_error());
        assert!(!CoreError::IdBadLeadingDigits.is_address_error());
        assert!(CoreError::AddressWrongPartCount(3).is_address_error());
    }
}
