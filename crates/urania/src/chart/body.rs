use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::angles::longitude_of;
use crate::chart::zodiac::{body_kind_of, BodyKind, Sign, UnknownSign, WheelMarker};

/// Errors raised when turning a fetched entry into a [`CelestialBody`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("body entry has an empty name")]
    EmptyName,
    #[error(transparent)]
    UnknownSign(#[from] UnknownSign),
    #[error("degree {0} outside [0, 30)")]
    DegreeOutOfRange(f64),
    #[error("minute {0} outside [0, 60)")]
    MinuteOutOfRange(f64),
    #[error("house {0} outside 1..=12")]
    HouseOutOfRange(u8),
}

/// One body as delivered by the position service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBodyEntry {
    pub name: String,
    pub sign: String,
    pub degree: f64,
    #[serde(default)]
    pub minute: Option<f64>,
    #[serde(default)]
    pub retrograde: bool,
    /// Out-of-range houses are ignored rather than rejecting the entry
    #[serde(default)]
    pub house: Option<i64>,
}

/// A body placed on the chart.
///
/// `absolute_angle` is derived once from sign, degree and minute and never
/// changes. `visual_angle` starts as a copy of it and is the only value the
/// overlap resolver moves.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<BodyKind>,
    sign: Sign,
    degree: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    minute: Option<f64>,
    retrograde: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    house: Option<u8>,
    absolute_angle: f64,
    visual_angle: f64,
}

impl CelestialBody {
    /// Build a body from its zodiac position.
    pub fn new(
        id: impl Into<String>,
        sign: Sign,
        degree: f64,
        minute: Option<f64>,
    ) -> Result<Self, BodyError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(BodyError::EmptyName);
        }
        if !degree.is_finite() || !(0.0..30.0).contains(&degree) {
            return Err(BodyError::DegreeOutOfRange(degree));
        }
        if let Some(m) = minute {
            if !m.is_finite() || !(0.0..60.0).contains(&m) {
                return Err(BodyError::MinuteOutOfRange(m));
            }
        }

        let absolute_angle = longitude_of(sign, degree, minute.unwrap_or(0.0));
        Ok(Self {
            kind: body_kind_of(&id),
            id,
            sign,
            degree,
            minute,
            retrograde: false,
            house: None,
            absolute_angle,
            visual_angle: absolute_angle,
        })
    }

    /// Build a body from an absolute longitude, splitting it into sign and
    /// degree. Non-finite longitudes are placed at 0°.
    pub fn at_longitude(id: impl Into<String>, longitude: f64) -> Self {
        let lon = if longitude.is_finite() {
            crate::angles::normalize_angle(longitude)
        } else {
            0.0
        };
        let sign = Sign::from_longitude(lon);
        let degree = lon - sign.index() as f64 * 30.0;
        let id = id.into();
        Self {
            kind: body_kind_of(&id),
            id,
            sign,
            degree,
            minute: None,
            retrograde: false,
            house: None,
            absolute_angle: lon,
            visual_angle: lon,
        }
    }

    pub fn with_retrograde(mut self, retrograde: bool) -> Self {
        self.retrograde = retrograde;
        self
    }

    pub fn with_house(mut self, house: u8) -> Result<Self, BodyError> {
        if !(1..=12).contains(&house) {
            return Err(BodyError::HouseOutOfRange(house));
        }
        self.house = Some(house);
        Ok(self)
    }

    /// Copy of this body with its identifier prefixed by a wheel marker.
    pub fn marked(&self, marker: WheelMarker) -> Self {
        let mut body = self.clone();
        body.id = marker.apply(&self.id);
        body
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Recognised identity, ignoring any wheel marker.
    pub fn kind(&self) -> Option<BodyKind> {
        self.kind
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn degree(&self) -> f64 {
        self.degree
    }

    pub fn minute(&self) -> Option<f64> {
        self.minute
    }

    pub fn is_retrograde(&self) -> bool {
        self.retrograde
    }

    pub fn house(&self) -> Option<u8> {
        self.house
    }

    /// True ecliptic longitude in `[0, 360)`.
    pub fn absolute_angle(&self) -> f64 {
        self.absolute_angle
    }

    /// Label placement angle.
    pub fn visual_angle(&self) -> f64 {
        self.visual_angle
    }

    pub(crate) fn set_visual_angle(&mut self, angle: f64) {
        self.visual_angle = angle;
    }
}

impl TryFrom<RawBodyEntry> for CelestialBody {
    type Error = BodyError;

    fn try_from(entry: RawBodyEntry) -> Result<Self, Self::Error> {
        let sign: Sign = entry.sign.parse()?;
        let body = CelestialBody::new(entry.name, sign, entry.degree, entry.minute)?
            .with_retrograde(entry.retrograde);
        let Some(house) = entry.house else {
            return Ok(body);
        };
        match u8::try_from(house) {
            Ok(house) if (1..=12).contains(&house) => body.with_house(house),
            _ => {
                log::debug!("Ignoring house {} for {}", house, body.id());
                Ok(body)
            }
        }
    }
}

/// Convert fetched entries into bodies, dropping the malformed ones.
pub fn bodies_from_entries<I>(entries: I) -> Vec<CelestialBody>
where
    I: IntoIterator<Item = RawBodyEntry>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let name = entry.name.clone();
            match CelestialBody::try_from(entry) {
                Ok(body) => Some(body),
                Err(e) => {
                    log::warn!("Dropping body entry {:?}: {}", name, e);
                    None
                }
            }
        })
        .collect()
}
