//! Zodiac signs, body identities and wheel markers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The twelve tropical signs in zodiac order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    /// Signs in zodiac order; index 0 starts at 0° longitude.
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Sign {
        Sign::ALL[(index % 12) as usize]
    }

    /// Sign containing the given longitude.
    pub fn from_longitude(longitude: f64) -> Sign {
        let lon = crate::angles::normalize_angle(longitude);
        Sign::from_index((lon / 30.0).floor() as u8)
    }

    pub fn name(self) -> &'static str {
        SIGN_NAMES[self as usize]
    }
}

const SIGN_NAMES: [&str; 12] = [
    "aries",
    "taurus",
    "gemini",
    "cancer",
    "leo",
    "virgo",
    "libra",
    "scorpio",
    "sagittarius",
    "capricorn",
    "aquarius",
    "pisces",
];

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown zodiac sign: {0:?}")]
pub struct UnknownSign(pub String);

impl FromStr for Sign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        SIGN_NAMES
            .iter()
            .position(|name| *name == lower)
            .map(|idx| Sign::ALL[idx])
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

/// Display category a body belongs to; each maps to one visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyCategory {
    Planet,
    Angle,
    Node,
    Chiron,
    Lilith,
    Asteroid,
}

/// Every body the engine recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ascendant,
    Midheaven,
    Descendant,
    ImumCoeli,
    NorthNode,
    SouthNode,
    Chiron,
    Lilith,
    Ceres,
    Pallas,
    Juno,
    Vesta,
}

/// Accepted spellings, already folded to lowercase with single spaces.
const BODY_ALIASES: &[(&str, BodyKind)] = &[
    ("sun", BodyKind::Sun),
    ("moon", BodyKind::Moon),
    ("mercury", BodyKind::Mercury),
    ("venus", BodyKind::Venus),
    ("mars", BodyKind::Mars),
    ("jupiter", BodyKind::Jupiter),
    ("saturn", BodyKind::Saturn),
    ("uranus", BodyKind::Uranus),
    ("neptune", BodyKind::Neptune),
    ("pluto", BodyKind::Pluto),
    ("ascendant", BodyKind::Ascendant),
    ("asc", BodyKind::Ascendant),
    ("rising", BodyKind::Ascendant),
    ("midheaven", BodyKind::Midheaven),
    ("mc", BodyKind::Midheaven),
    ("descendant", BodyKind::Descendant),
    ("desc", BodyKind::Descendant),
    ("dsc", BodyKind::Descendant),
    ("ic", BodyKind::ImumCoeli),
    ("imum coeli", BodyKind::ImumCoeli),
    ("north node", BodyKind::NorthNode),
    ("northnode", BodyKind::NorthNode),
    ("true node", BodyKind::NorthNode),
    ("south node", BodyKind::SouthNode),
    ("southnode", BodyKind::SouthNode),
    ("chiron", BodyKind::Chiron),
    ("lilith", BodyKind::Lilith),
    ("black moon lilith", BodyKind::Lilith),
    ("ceres", BodyKind::Ceres),
    ("pallas", BodyKind::Pallas),
    ("juno", BodyKind::Juno),
    ("vesta", BodyKind::Vesta),
];

impl BodyKind {
    /// Recognise a body from its display name. Case, `_` and `-` are ignored.
    pub fn from_name(name: &str) -> Option<BodyKind> {
        let folded = name
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        BODY_ALIASES
            .iter()
            .find(|(alias, _)| *alias == folded)
            .map(|(_, kind)| *kind)
    }

    /// `None` for the South Node, which no mode ever displays.
    pub fn category(self) -> Option<BodyCategory> {
        use BodyKind::*;
        match self {
            Sun | Moon | Mercury | Venus | Mars | Jupiter | Saturn | Uranus | Neptune | Pluto => {
                Some(BodyCategory::Planet)
            }
            Ascendant | Midheaven | Descendant | ImumCoeli => Some(BodyCategory::Angle),
            NorthNode => Some(BodyCategory::Node),
            SouthNode => None,
            Chiron => Some(BodyCategory::Chiron),
            Lilith => Some(BodyCategory::Lilith),
            Ceres | Pallas | Juno | Vesta => Some(BodyCategory::Asteroid),
        }
    }

    /// Sun, Moon and Ascendant.
    pub fn is_luminary(self) -> bool {
        matches!(self, BodyKind::Sun | BodyKind::Moon | BodyKind::Ascendant)
    }

    /// Uranus, Neptune and Pluto.
    pub fn is_outer_planet(self) -> bool {
        matches!(self, BodyKind::Uranus | BodyKind::Neptune | BodyKind::Pluto)
    }

    /// Descendant and IC are hidden unless a caller asks for all angles.
    pub fn is_secondary_angle(self) -> bool {
        matches!(self, BodyKind::Descendant | BodyKind::ImumCoeli)
    }
}

/// Prefix marking which wheel of a dual chart an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelMarker {
    /// Outer wheel of a natal-vs-transit chart.
    Transit,
    /// Second person's wheel in synastry.
    Partner,
}

impl WheelMarker {
    pub const ALL: [WheelMarker; 2] = [WheelMarker::Transit, WheelMarker::Partner];

    pub fn prefix(self) -> &'static str {
        match self {
            WheelMarker::Transit => "t_",
            WheelMarker::Partner => "p_",
        }
    }

    /// Prefix `name` unless it already carries a marker.
    pub fn apply(self, name: &str) -> String {
        match split_wheel_marker(name) {
            (Some(_), _) => name.to_string(),
            (None, base) => format!("{}{}", self.prefix(), base),
        }
    }
}

/// Split an identifier into its wheel marker (if any) and base name.
pub fn split_wheel_marker(id: &str) -> (Option<WheelMarker>, &str) {
    for marker in WheelMarker::ALL {
        if let Some(base) = id.strip_prefix(marker.prefix()) {
            if !base.is_empty() {
                return (Some(marker), base);
            }
        }
    }
    (None, id)
}

/// Body kind for an identifier, ignoring any wheel marker.
pub fn body_kind_of(id: &str) -> Option<BodyKind> {
    let (_, base) = split_wheel_marker(id);
    BodyKind::from_name(base)
}
