//! Fixed lines printed by the gate shell, one per engine outcome.

use gate_core::{BoardingProgress, NotInitialized, ScanOutcome, SourceError, ValidationFailure};
use std::path::Path;

pub const INTRO: &str = "Welcome to the Boarding Gate Simulator. To start, use the load \
command to input a JSONL file of reservation information. Type help or ? to see all commands.";

pub const VALIDATION_FAILED: &str = "Reservations data failed validation.";
pub const FLIGHT_OK: &str = "OK";
pub const FLIGHT_FORMAT: &str =
    "Expected flight number to be a single alphanumeric word, e.g. AA311.";
pub const NEED_LOAD: &str =
    "Please load in the reservation information first with the load command.";
pub const NEED_FLIGHT: &str =
    "Please set the flight number to board guests for with the flight command.";
pub const GOODBYE: &str = "Goodbye.";

pub fn loaded(count: usize) -> String {
    format!("Loaded {} reservations.", count)
}

pub fn source_failure(path: &Path, err: &SourceError) -> String {
    match err {
        SourceError::NotFound { .. } => format!(
            "Unable to load reservations from {}. Please check the path.",
            path.display()
        ),
        other => format!(
            "Unable to read reservations from {}: {}",
            path.display(),
            other
        ),
    }
}

pub fn validation_failure(failure: &ValidationFailure) -> &'static str {
    match failure {
        ValidationFailure::MissingRequiredField { .. } => {
            "Reservations data does not contain all required columns."
        }
        ValidationFailure::DuplicateReservationCode { .. }
        | ValidationFailure::InvalidReservationCodeFormat { .. } => {
            "Reservation codes in reservations are not valid."
        }
        ValidationFailure::InvalidFlightNumberFormat { .. } => {
            "Flight numbers in reservations are not valid."
        }
        ValidationFailure::DuplicateSeatAssignment { .. } => {
            "Per flight, seat assignments are overlapping but should not be."
        }
    }
}

pub fn not_initialized(reason: NotInitialized) -> &'static str {
    match reason {
        NotInitialized::NeedLoad => NEED_LOAD,
        NotInitialized::NeedFlight => NEED_FLIGHT,
    }
}

pub fn scan_outcome(outcome: &ScanOutcome) -> &'static str {
    match outcome {
        ScanOutcome::Allow => "ALLOW",
        ScanOutcome::Deny(_) => "DENY",
        ScanOutcome::NotInitializedNeedLoad => NEED_LOAD,
        ScanOutcome::NotInitializedNeedFlight => NEED_FLIGHT,
    }
}

pub fn progress(progress: &BoardingProgress) -> String {
    format!(
        "{}: {} of {} passengers boarded.",
        progress.flight, progress.boarded, progress.booked
    )
}

pub fn unknown_syntax(line: &str) -> String {
    format!("*** Unknown syntax: {}", line)
}
