use gate_shared::{Masked, RawRecord};
use tracing::{debug, info, warn};

use crate::error::{FormatError, LoadError, NotInitialized, ValidationFailure};
use crate::identifiers::FlightNumber;
use crate::reservation::ReservationStore;
use crate::source::ReservationSource;
use crate::validator;

/// Result of presenting a reservation code at the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Allow,
    Deny(DenyReason),
    NotInitializedNeedLoad,
    NotInitializedNeedFlight,
}

impl ScanOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, ScanOutcome::Allow)
    }
}

impl From<NotInitialized> for ScanOutcome {
    fn from(reason: NotInitialized) -> Self {
        match reason {
            NotInitialized::NeedLoad => ScanOutcome::NotInitializedNeedLoad,
            NotInitialized::NeedFlight => ScanOutcome::NotInitializedNeedFlight,
        }
    }
}

/// Why a scan was denied. Checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    UnknownReservation,
    AlreadyScanned,
    WrongFlight { booked: String },
}

/// Boarding counts for the selected flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardingProgress {
    pub flight: FlightNumber,
    pub boarded: usize,
    pub booked: usize,
}

/// One agent's gate session: the loaded reservations and the flight being
/// boarded. The two are set independently; reloading keeps the flight.
#[derive(Debug, Default)]
pub struct BoardingSession {
    store: Option<ReservationStore>,
    flight: Option<FlightNumber>,
}

impl BoardingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a batch and replace the current reservations with it.
    pub fn load_batch(&mut self, records: &[RawRecord]) -> Result<(), ValidationFailure> {
        let store = validator::validate(records).inspect_err(|failure| {
            warn!(%failure, records = records.len(), "Rejected reservation batch");
        })?;

        info!(reservations = store.len(), "Loaded reservation batch");
        self.store = Some(store);
        Ok(())
    }

    /// Fetch from a source, then [`load_batch`](Self::load_batch).
    /// Returns the number of reservations now loaded.
    pub fn load_from<S>(&mut self, source: &S) -> Result<usize, LoadError>
    where
        S: ReservationSource + ?Sized,
    {
        let records = source.fetch()?;
        self.load_batch(&records)?;
        Ok(records.len())
    }

    pub fn select_flight(&mut self, token: &str) -> Result<(), FormatError> {
        let flight = FlightNumber::parse_selection(token)?;
        info!(%flight, "Boarding flight selected");
        self.flight = Some(flight);
        Ok(())
    }

    /// Decide whether the holder of `code` may board the selected flight.
    ///
    /// Only an ALLOW changes state: the reservation is marked boarded and
    /// every later scan of the same code is denied.
    pub fn scan(&mut self, code: &str) -> ScanOutcome {
        let Some(store) = self.store.as_mut() else {
            return NotInitialized::NeedLoad.into();
        };
        let Some(flight) = self.flight.as_ref() else {
            return NotInitialized::NeedFlight.into();
        };

        let Some(reservation) = store.get_mut(code) else {
            debug!(code, "Denied: unknown reservation");
            return ScanOutcome::Deny(DenyReason::UnknownReservation);
        };

        if reservation.scanned {
            debug!(code, "Denied: already boarded");
            return ScanOutcome::Deny(DenyReason::AlreadyScanned);
        }

        if reservation.flight_number != flight.as_str() {
            debug!(code, booked = %reservation.flight_number, %flight, "Denied: wrong flight");
            return ScanOutcome::Deny(DenyReason::WrongFlight {
                booked: reservation.flight_number.clone(),
            });
        }

        reservation.board();
        info!(
            code,
            %flight,
            seat = %reservation.seat,
            passenger = %Masked(&reservation.passenger_name),
            "Passenger admitted"
        );
        ScanOutcome::Allow
    }

    pub fn progress(&self) -> Result<BoardingProgress, NotInitialized> {
        let store = self.store.as_ref().ok_or(NotInitialized::NeedLoad)?;
        let flight = self.flight.as_ref().ok_or(NotInitialized::NeedFlight)?;

        let (boarded, booked) = store
            .on_flight(flight.as_str())
            .fold((0, 0), |(boarded, booked), r| {
                (boarded + usize::from(r.scanned), booked + 1)
            });

        Ok(BoardingProgress {
            flight: flight.clone(),
            boarded,
            booked,
        })
    }

    pub fn store(&self) -> Option<&ReservationStore> {
        self.store.as_ref()
    }

    pub fn flight(&self) -> Option<&FlightNumber> {
        self.flight.as_ref()
    }
}
