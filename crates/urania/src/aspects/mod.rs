pub mod calculator;
pub mod layers;
pub mod merge;
pub mod types;

pub use calculator::{detect_aspects, detect_cross_aspects, AspectCalculator};
pub use layers::{classify, classify_all};
pub use merge::merge_aspects;
pub use types::{AspectKey, AspectKind, AspectRecord, Layer, LayeredAspect, PairKey};
