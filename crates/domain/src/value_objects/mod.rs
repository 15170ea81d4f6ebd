//! Value objects - immutable, validated-by-construction domain values.

mod coordinate;
mod direction;
mod names;
mod vitals;

pub use coordinate::Coordinate;
pub use direction::Direction;
pub use names::{LocationKey, PlayerId, PlayerName};
pub use vitals::{clamp_vital, is_low, Vitals, LOW_VITAL_THRESHOLD, MAX_VITAL};
