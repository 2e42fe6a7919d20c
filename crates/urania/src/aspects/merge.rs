use std::collections::HashSet;

use crate::aspects::types::{AspectKey, AspectRecord};

/// Union of two aspect lists where `primary` wins.
///
/// `primary` is kept as-is and in order. A `secondary` record is appended
/// only when no record with the same unordered pair and kind has been seen,
/// so the result never repeats a key that `primary` did not already repeat.
pub fn merge_aspects(primary: &[AspectRecord], secondary: &[AspectRecord]) -> Vec<AspectRecord> {
    let mut seen: HashSet<AspectKey> = primary.iter().map(AspectRecord::key).collect();
    let mut merged = primary.to_vec();

    for record in secondary {
        if seen.insert(record.key()) {
            merged.push(record.clone());
        }
    }

    log::debug!(
        "Merged aspects: {} primary + {} of {} secondary",
        primary.len(),
        merged.len() - primary.len(),
        secondary.len()
    );
    merged
}
