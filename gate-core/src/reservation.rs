use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A single passenger booking on one flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_code: String,
    pub passenger_name: String,
    pub flight_number: String,
    pub ticket_type: String,
    pub seat: String,
    pub scanned: bool,
    pub boarded_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn new(
        reservation_code: String,
        passenger_name: String,
        flight_number: String,
        ticket_type: String,
        seat: String,
    ) -> Self {
        Self {
            reservation_code,
            passenger_name,
            flight_number,
            ticket_type,
            seat,
            scanned: false,
            boarded_at: None,
        }
    }

    /// Mark as boarded (boarding pass accepted at the gate)
    pub fn board(&mut self) {
        self.scanned = true;
        self.boarded_at = Some(Utc::now());
    }
}

/// Validated reservations keyed by reservation code.
///
/// Only [`crate::validator::validate`] builds one, so every store upholds the
/// batch invariants: unique well-formed codes, well-formed flight numbers,
/// one passenger per seat per flight, nobody boarded yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationStore {
    reservations: HashMap<String, Reservation>,
}

impl ReservationStore {
    pub(crate) fn from_reservations(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations: reservations
                .into_iter()
                .map(|r| (r.reservation_code.clone(), r))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn get(&self, reservation_code: &str) -> Option<&Reservation> {
        self.reservations.get(reservation_code)
    }

    pub(crate) fn get_mut(&mut self, reservation_code: &str) -> Option<&mut Reservation> {
        self.reservations.get_mut(reservation_code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.values()
    }

    /// All reservations booked on the given flight
    pub fn on_flight<'a>(&'a self, flight_number: &'a str) -> impl Iterator<Item = &'a Reservation> + 'a {
        self.reservations
            .values()
            .filter(move |r| r.flight_number == flight_number)
    }
}
