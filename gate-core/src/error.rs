use std::path::PathBuf;

/// Reasons a reservation batch is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    /// `record` is 1-based; 0 means the batch had no records at all.
    #[error("Record {record} is missing required field `{field}`")]
    MissingRequiredField { record: usize, field: &'static str },

    #[error("Duplicate reservation code: {code}")]
    DuplicateReservationCode { code: String },

    #[error("Invalid reservation code: {code:?}")]
    InvalidReservationCodeFormat { code: String },

    #[error("Invalid flight number: {flight_number:?}")]
    InvalidFlightNumberFormat { flight_number: String },

    #[error("Seat {seat} assigned more than once on flight {flight_number}")]
    DuplicateSeatAssignment { flight_number: String, seat: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Flight number is not a single alphanumeric word: {0:?}")]
    FlightToken(String),
}

/// Preconditions for boarding that are not yet met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NotInitialized {
    #[error("No reservations loaded")]
    NeedLoad,

    #[error("No flight selected")]
    NeedFlight,
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Reservation file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Line {line} is not valid JSON: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Line {line} is not a JSON object")]
    NotAnObject { line: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}
