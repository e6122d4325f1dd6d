pub mod error;
pub mod identifiers;
pub mod reservation;
pub mod session;
pub mod source;
pub mod validator;

pub use error::{FormatError, LoadError, NotInitialized, SourceError, ValidationFailure};
pub use identifiers::FlightNumber;
pub use reservation::{Reservation, ReservationStore};
pub use session::{BoardingProgress, BoardingSession, DenyReason, ScanOutcome};
pub use source::ReservationSource;
pub use validator::validate;
