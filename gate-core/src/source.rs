use gate_shared::RawRecord;

use crate::error::SourceError;

/// Supplies raw reservation records to the engine.
///
/// The engine itself never touches files; whatever reads and decodes the
/// input lives behind this trait.
pub trait ReservationSource {
    /// Fetch all records, in input order
    fn fetch(&self) -> Result<Vec<RawRecord>, SourceError>;
}

/// In-memory batches, used when records are already decoded.
impl ReservationSource for Vec<RawRecord> {
    fn fetch(&self) -> Result<Vec<RawRecord>, SourceError> {
        Ok(self.clone())
    }
}
