use std::fmt;
use std::ops::RangeInclusive;

use crate::error::FormatError;

pub const RESERVATION_CODE_LEN: usize = 6;
pub const FLIGHT_NUMBER_LEN: RangeInclusive<usize> = 4..=6;

/// Non-empty and made only of letters and digits.
pub fn is_alphanumeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphanumeric)
}

/// At least one uppercase letter and no lowercase ones, so `"AA311"` passes
/// while `"123456"` and `"Aa311"` do not.
pub fn is_uppercase(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

pub fn is_valid_reservation_code(code: &str) -> bool {
    code.chars().count() == RESERVATION_CODE_LEN && is_alphanumeric(code) && is_uppercase(code)
}

pub fn is_valid_flight_number(flight_number: &str) -> bool {
    FLIGHT_NUMBER_LEN.contains(&flight_number.chars().count())
        && is_alphanumeric(flight_number)
        && is_uppercase(flight_number)
}

/// The flight an agent is boarding, as typed at the gate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightNumber(String);

impl FlightNumber {
    /// Accepts a single alphanumeric word in any case and stores it uppercased.
    /// Length is not checked here; an unknown flight simply admits nobody.
    pub fn parse_selection(token: &str) -> Result<Self, FormatError> {
        if !is_alphanumeric(token) {
            return Err(FormatError::FlightToken(token.to_string()));
        }
        Ok(Self(token.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
