//! JSON payload accepted from the position service.
//!
//! Entry arrays are parsed element by element: a malformed body entry or
//! cross-aspect record is logged and skipped, and the rest of the payload
//! still renders. Only a broken top level (not JSON, missing or unknown
//! `mode`) fails the whole parse.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::aspects::AspectRecord;
use crate::chart::{bodies_from_entries, RawBodyEntry};
use crate::config::ChartMode;
use crate::pipeline::{ChartPipeline, RenderedChart, RenderedDualChart};

/// Keep the elements of a JSON array that deserialize as `T`.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = values.len();
    let kept: Vec<T> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("Skipping malformed payload element: {}", e);
                None
            }
        })
        .collect();
    if kept.len() < total {
        log::debug!("Kept {} of {} payload elements", kept.len(), total);
    }
    Ok(kept)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub mode: ChartMode,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub inner: Vec<RawBodyEntry>,
    /// Second wheel for transit and synastry
    #[serde(default, deserialize_with = "lenient_vec")]
    pub outer: Vec<RawBodyEntry>,
    /// Cross aspects already computed upstream
    #[serde(default, deserialize_with = "lenient_vec")]
    pub cross_aspects: Vec<AspectRecord>,
}

/// A rendered payload, single or dual wheel depending on the mode
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RenderedPayload {
    Single(RenderedChart),
    Dual(RenderedDualChart),
}

impl Payload {
    pub fn from_json_str(text: &str) -> Result<Payload, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Render with `pipeline`; dual-wheel modes use the outer entries and
    /// upstream cross aspects, single-wheel modes ignore them.
    pub fn render(&self, pipeline: &ChartPipeline) -> RenderedPayload {
        let inner = bodies_from_entries(self.inner.iter().cloned());
        match self.mode.wheel_marker() {
            Some(marker) => {
                let outer = bodies_from_entries(self.outer.iter().cloned());
                RenderedPayload::Dual(pipeline.render_dual(
                    &inner,
                    &outer,
                    marker,
                    &self.cross_aspects,
                ))
            }
            None => RenderedPayload::Single(pipeline.render_single(&inner)),
        }
    }
}
