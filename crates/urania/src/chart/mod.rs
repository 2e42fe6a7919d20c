pub mod body;
pub mod filter;
pub mod overlap;
pub mod zodiac;

pub use body::{bodies_from_entries, BodyError, CelestialBody, RawBodyEntry};
pub use filter::{filter_aspects, filter_bodies, FilterOptions};
pub use overlap::{resolve_overlaps, OverlapOutcome, OverlapResolver, OverlapSettings};
pub use zodiac::{BodyCategory, BodyKind, Sign, WheelMarker};
