use serde_json::{Map, Value};

/// One reservation as decoded from a single input line, before validation.
///
/// Field order and unknown fields are preserved; the engine only looks at
/// [`REQUIRED_FIELDS`].
pub type RawRecord = Map<String, Value>;

pub const PASSENGER_NAME: &str = "passenger_name";
pub const FLIGHT_NUMBER: &str = "flight_number";
pub const RESERVATION_CODE: &str = "reservation_code";
pub const TICKET_TYPE: &str = "ticket_type";
pub const SEAT: &str = "seat";

/// Fields every reservation record must carry with a non-empty value.
pub const REQUIRED_FIELDS: [&str; 5] = [
    PASSENGER_NAME,
    FLIGHT_NUMBER,
    RESERVATION_CODE,
    TICKET_TYPE,
    SEAT,
];
