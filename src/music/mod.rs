pub mod scales;
pub mod progressions;
pub mod instruments;

pub use scales::{note_name, scale_notes, Key, ScaleMode};
pub use progressions::Progression;
pub use instruments::{instrument_name, Instrument, INSTRUMENTS};
