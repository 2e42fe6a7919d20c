use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspect kinds, declared in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Square,
    Trine,
    Sextile,
}

impl AspectKind {
    /// Detection priority: the first kind within orb wins.
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Sextile,
    ];

    /// Exact separation for this aspect, in degrees.
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Sextile => 60.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Sextile => "sextile",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An aspect between two bodies. The pair is unordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectRecord {
    pub body_a: String,
    pub body_b: String,
    pub kind: AspectKind,
    /// Deviation from the exact angle, always non-negative
    pub orb: f64,
    /// Applying/separating as reported upstream; never computed here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applying: Option<bool>,
}

impl AspectRecord {
    pub fn new(
        body_a: impl Into<String>,
        body_b: impl Into<String>,
        kind: AspectKind,
        orb: f64,
    ) -> Self {
        Self {
            body_a: body_a.into(),
            body_b: body_b.into(),
            kind,
            orb: orb.abs(),
            applying: None,
        }
    }

    pub fn with_applying(mut self, applying: bool) -> Self {
        self.applying = Some(applying);
        self
    }

    pub fn pair(&self) -> PairKey {
        PairKey::new(&self.body_a, &self.body_b)
    }

    pub fn key(&self) -> AspectKey {
        AspectKey {
            pair: self.pair(),
            kind: self.kind,
        }
    }
}

/// Order-independent body pair: `(A, B)` and `(B, A)` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(String, String);

impl PairKey {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            PairKey(a.to_string(), b.to_string())
        } else {
            PairKey(b.to_string(), a.to_string())
        }
    }
}

/// Identity of an aspect for merging: unordered pair plus kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AspectKey {
    pub pair: PairKey,
    pub kind: AspectKind,
}

/// Rendering-priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Foreground,
    Midground,
    Background,
}

/// An aspect tagged with its rendering tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayeredAspect {
    #[serde(flatten)]
    pub aspect: AspectRecord,
    pub layer: Layer,
}
