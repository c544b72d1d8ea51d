//! Registry operation errors.
//!
//! Wraps core validation and store errors and adds the business rules that
//! need an existing record to evaluate.

use roadreg_core::CoreError;
use roadreg_persistence::StoreError;
use thiserror::Error;

/// Errors from registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    // === Wrapped validation / store errors ===
    #[error("Validation failed: {0}")]
    Validation(#[from] CoreError),

    #[error("Store failure: {0}")]
    Store(#[from] StoreError),

    // === Lookup errors ===
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("Person already exists: {0}")]
    DuplicateId(String),

    // === Update business rules ===
    #[error("Cannot change address for a person under 18")]
    MinorAddressLocked,

    #[error("When changing the birth date, no other personal detail may change")]
    BirthdateNotExclusive,

    #[error("Cannot change an ID whose first digit is even")]
    IdentityLocked,
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

impl RegistryError {
    /// Whether this is a syntactic validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this is a semantic business-rule rejection
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::DuplicateId(_)
                | Self::MinorAddressLocked
                | Self::BirthdateNotExclusive
                | Self::IdentityLocked
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(RegistryError::Validation(CoreError::IdBadLeadingDigits).is_validation());
        assert!(!RegistryError::Validation(CoreError::IdBadLeadingDigits).is_business_rule());

        assert!(RegistryError::MinorAddressLocked.is_business_rule());
        assert!(RegistryError::IdentityLocked.is_business_rule());
        assert!(!RegistryError::PersonNotFound("x".into()).is_business_rule());
    }

    #[test]
    fn test_error_display() {
        let err = RegistryError::DuplicateId("56s_d%&fAB".to_string());
        assert_eq!(err.to_string(), "Person already exists: 56s_d%&fAB");
    }
}
