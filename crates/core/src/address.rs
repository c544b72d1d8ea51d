//! Address - structured Victorian street address.
//!
//! Parsed from the `"number|street|city|state|country"` textual form used at
//! the storage boundary. The state is fixed to Victoria; the registry does
//! not model other jurisdictions.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field separator inside an address. Distinct from the person-record
/// separator so stored addresses never need escaping.
pub const ADDRESS_SEPARATOR: char = '|';

/// The only state the registry accepts.
pub const REQUIRED_STATE: &str = "Victoria";

/// A validated street address.
///
/// # Invariant
/// `street_number > 0`, every part non-blank, `state == "Victoria"`.
/// Enforced by [`Address::parse`]; fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street_number: u32,
    street: String,
    city: String,
    state: String,
    country: String,
}

impl Address {
    /// Parse `"number|street|city|state|country"`.
    ///
    /// Exactly 5 parts, all non-blank after trimming; part 0 a positive
    /// integer; part 3 the literal `"Victoria"`. Parts are stored trimmed.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let parts: Vec<&str> = s.split(ADDRESS_SEPARATOR).collect();
        if parts.len() != 5 {
            return Err(CoreError::AddressWrongPartCount(parts.len()));
        }

        const PART_NAMES: [&str; 5] = ["street number", "street", "city", "state", "country"];
        for (part, name) in parts.iter().zip(PART_NAMES) {
            if part.trim().is_empty() {
                return Err(CoreError::AddressBlankPart { part: name });
            }
        }

        let number_text = parts[0].trim();
        let street_number: u32 = number_text
            .parse()
            .map_err(|_| CoreError::BadStreetNumber(number_text.to_string()))?;
        if street_number == 0 {
            return Err(CoreError::BadStreetNumber(number_text.to_string()));
        }

        let state = parts[3].trim();
        if state != REQUIRED_STATE {
            return Err(CoreError::StateNotVictoria(state.to_string()));
        }

        Ok(Self {
            street_number,
            street: parts[1].trim().to_string(),
            city: parts[2].trim().to_string(),
            state: state.to_string(),
            country: parts[4].trim().to_string(),
        })
    }

    pub fn street_number(&self) -> u32 {
        self.street_number
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.street_number,
            self.street,
            self.city,
            self.state,
            self.country,
            sep = ADDRESS_SEPARATOR
        )
    }
}

impl std::str::FromStr for Address {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_address() {
        let addr = Address::parse("32|Highland Street|Melbourne|Victoria|Australia").unwrap();
        assert_eq!(addr.street_number(), 32);
        assert_eq!(addr.street(), "Highland Street");
        assert_eq!(addr.city(), "Melbourne");
        assert_eq!(addr.state(), "Victoria");
        assert_eq!(addr.country(), "Australia");
    }

    #[test]
    fn test_parse_trims_parts() {
        let addr = Address::parse(" 32 | Highland Street | Melbourne | Victoria | Australia ").unwrap();
        assert_eq!(addr.street(), "Highland Street");
        assert_eq!(addr.state(), "Victoria");
    }

    #[test]
    fn test_wrong_part_count() {
        assert_eq!(
            Address::parse("32|Highland Street|Melbourne|Victoria"),
            Err(CoreError::AddressWrongPartCount(4))
        );
        assert!(Address::parse("32|A|B|Victoria|C|D").is_err());
    }

    #[test]
    fn test_blank_part() {
        let err = Address::parse("32||Melbourne|Victoria|Australia").unwrap_err();
        assert_eq!(err, CoreError::AddressBlankPart { part: "street" });
    }

    #[test]
    fn test_street_number_must_be_positive_integer() {
        assert!(Address::parse("abc|Highland Street|Melbourne|Victoria|Australia").is_err());
        assert!(Address::parse("0|Highland Street|Melbourne|Victoria|Australia").is_err());
        assert!(Address::parse("-5|Highland Street|Melbourne|Victoria|Australia").is_err());
    }

    #[test]
    fn test_state_must_be_victoria() {
        let err = Address::parse("32|Highland Street|Sydney|NSW|Australia").unwrap_err();
        assert_eq!(err, CoreError::StateNotVictoria("NSW".to_string()));
        // case-sensitive
        assert!(Address::parse("32|Highland Street|Melbourne|victoria|Australia").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let text = "32|Highland Street|Melbourne|Victoria|Australia";
        let addr = Address::parse(text).unwrap();
        assert_eq!(addr.to_string(), text);
        assert_eq!(Address::parse(&addr.to_string()).unwrap(), addr);
    }
}
