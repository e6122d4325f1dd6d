pub mod models;
pub mod pii;

pub use models::record::{RawRecord, REQUIRED_FIELDS};
pub use pii::Masked;
