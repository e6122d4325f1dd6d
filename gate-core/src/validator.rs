//! Whole-batch checks run before reservations are accepted for boarding.
//!
//! Checks run in a fixed order and stop at the first failure:
//! required fields, reservation codes, flight numbers, seat assignments.

use gate_shared::models::record::{
    FLIGHT_NUMBER, PASSENGER_NAME, RESERVATION_CODE, SEAT, TICKET_TYPE,
};
use gate_shared::{RawRecord, REQUIRED_FIELDS};
use serde_json::Value;
use std::collections::HashSet;

use crate::error::ValidationFailure;
use crate::identifiers::{is_valid_flight_number, is_valid_reservation_code};
use crate::reservation::{Reservation, ReservationStore};

/// Validate a raw batch and build the store it describes.
///
/// Nothing is built unless every check passes, so a failure leaves the
/// caller's current store untouched.
pub fn validate(records: &[RawRecord]) -> Result<ReservationStore, ValidationFailure> {
    let reservations = check_required_fields(records)?;
    check_reservation_codes(&reservations)?;
    check_flight_numbers(&reservations)?;
    check_seat_assignments(records, &reservations)?;

    Ok(ReservationStore::from_reservations(reservations))
}

/// An empty batch has no columns at all, so it is reported as missing the
/// first required field at record 0.
fn check_required_fields(records: &[RawRecord]) -> Result<Vec<Reservation>, ValidationFailure> {
    if records.is_empty() {
        return Err(ValidationFailure::MissingRequiredField {
            record: 0,
            field: REQUIRED_FIELDS[0],
        });
    }

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if let Some(field) = REQUIRED_FIELDS
                .into_iter()
                .find(|field| required_text(record, field).is_none())
            {
                return Err(ValidationFailure::MissingRequiredField {
                    record: index + 1,
                    field,
                });
            }

            let text = |name: &str| required_text(record, name).unwrap_or_default();
            Ok(Reservation::new(
                text(RESERVATION_CODE),
                text(PASSENGER_NAME),
                text(FLIGHT_NUMBER),
                text(TICKET_TYPE),
                text(SEAT),
            ))
        })
        .collect()
}

/// Text of a required field, or `None` when it is absent, null, empty, or
/// not a scalar. Numbers and booleans are taken in their JSON text form.
fn required_text(record: &RawRecord, field: &str) -> Option<String> {
    let text = match record.get(field)? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn check_reservation_codes(reservations: &[Reservation]) -> Result<(), ValidationFailure> {
    let mut seen = HashSet::with_capacity(reservations.len());
    for res in reservations {
        if !seen.insert(res.reservation_code.as_str()) {
            return Err(ValidationFailure::DuplicateReservationCode {
                code: res.reservation_code.clone(),
            });
        }
    }

    match reservations
        .iter()
        .find(|r| !is_valid_reservation_code(&r.reservation_code))
    {
        Some(res) => Err(ValidationFailure::InvalidReservationCodeFormat {
            code: res.reservation_code.clone(),
        }),
        None => Ok(()),
    }
}

fn check_flight_numbers(reservations: &[Reservation]) -> Result<(), ValidationFailure> {
    match reservations
        .iter()
        .find(|r| !is_valid_flight_number(&r.flight_number))
    {
        Some(res) => Err(ValidationFailure::InvalidFlightNumberFormat {
            flight_number: res.flight_number.clone(),
        }),
        None => Ok(()),
    }
}

// Seat labels only collide within the same flight, and a numeric seat
// never collides with a text seat that reads the same.
fn check_seat_assignments(
    records: &[RawRecord],
    reservations: &[Reservation],
) -> Result<(), ValidationFailure> {
    let mut taken = HashSet::with_capacity(reservations.len());
    for (record, res) in records.iter().zip(reservations) {
        let is_text = record.get(SEAT).is_some_and(Value::is_string);
        if !taken.insert((res.flight_number.as_str(), res.seat.as_str(), is_text)) {
            return Err(ValidationFailure::DuplicateSeatAssignment {
                flight_number: res.flight_number.clone(),
                seat: res.seat.clone(),
            });
        }
    }
    Ok(())
}
