//! Chart mode configuration.
//!
//! Every mode is fully specified: one visibility flag per body category, one
//! [`AspectTypeConfig`] per aspect kind and three layer thresholds. Presets
//! for the four chart modes live in a static table; custom modes are loaded
//! from TOML and validated before use.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::aspects::types::AspectKind;
use crate::chart::zodiac::{BodyCategory, WheelMarker};

/// Errors that can occur when loading a mode configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
    #[error("Unknown chart mode: {0}")]
    UnknownMode(String),
}

/// Chart types the presentation layer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    Natal,
    Composite,
    Synastry,
    Transit,
}

impl ChartMode {
    pub const ALL: [ChartMode; 4] = [
        ChartMode::Natal,
        ChartMode::Composite,
        ChartMode::Synastry,
        ChartMode::Transit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartMode::Natal => "natal",
            ChartMode::Composite => "composite",
            ChartMode::Synastry => "synastry",
            ChartMode::Transit => "transit",
        }
    }

    /// Marker carried by outer-wheel identifiers; `None` for single wheels.
    pub fn wheel_marker(self) -> Option<WheelMarker> {
        match self {
            ChartMode::Transit => Some(WheelMarker::Transit),
            ChartMode::Synastry => Some(WheelMarker::Partner),
            ChartMode::Natal | ChartMode::Composite => None,
        }
    }

    pub fn is_dual_wheel(self) -> bool {
        self.wheel_marker().is_some()
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ChartMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == lower)
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}

/// Enable flag and orb tolerance for one aspect kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AspectTypeConfig {
    pub enabled: bool,
    /// Maximum deviation from the exact angle, in degrees
    pub orb: f64,
}

impl AspectTypeConfig {
    pub const fn on(orb: f64) -> Self {
        Self { enabled: true, orb }
    }

    pub const fn off() -> Self {
        Self {
            enabled: false,
            orb: 0.0,
        }
    }
}

/// One entry per aspect kind; no kind can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AspectConfig {
    pub conjunction: AspectTypeConfig,
    pub opposition: AspectTypeConfig,
    pub square: AspectTypeConfig,
    pub trine: AspectTypeConfig,
    pub sextile: AspectTypeConfig,
}

impl AspectConfig {
    /// Every kind disabled.
    pub const fn none() -> Self {
        Self {
            conjunction: AspectTypeConfig::off(),
            opposition: AspectTypeConfig::off(),
            square: AspectTypeConfig::off(),
            trine: AspectTypeConfig::off(),
            sextile: AspectTypeConfig::off(),
        }
    }

    pub fn get(&self, kind: AspectKind) -> &AspectTypeConfig {
        match kind {
            AspectKind::Conjunction => &self.conjunction,
            AspectKind::Opposition => &self.opposition,
            AspectKind::Square => &self.square,
            AspectKind::Trine => &self.trine,
            AspectKind::Sextile => &self.sextile,
        }
    }

    pub fn get_mut(&mut self, kind: AspectKind) -> &mut AspectTypeConfig {
        match kind {
            AspectKind::Conjunction => &mut self.conjunction,
            AspectKind::Opposition => &mut self.opposition,
            AspectKind::Square => &mut self.square,
            AspectKind::Trine => &mut self.trine,
            AspectKind::Sextile => &mut self.sextile,
        }
    }

    /// Copy with a single kind replaced.
    pub fn with(mut self, kind: AspectKind, config: AspectTypeConfig) -> Self {
        *self.get_mut(kind) = config;
        self
    }

    /// Enabled kinds with their tolerance, in detection priority order.
    pub fn enabled(&self) -> impl Iterator<Item = (AspectKind, f64)> + '_ {
        AspectKind::ALL.into_iter().filter_map(move |kind| {
            let cfg = self.get(kind);
            cfg.enabled.then_some((kind, cfg.orb))
        })
    }
}

/// Which body categories a mode displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyVisibility {
    pub planets: bool,
    pub angles: bool,
    pub nodes: bool,
    pub chiron: bool,
    pub lilith: bool,
    pub asteroids: bool,
}

impl BodyVisibility {
    pub fn shows(&self, category: BodyCategory) -> bool {
        match category {
            BodyCategory::Planet => self.planets,
            BodyCategory::Angle => self.angles,
            BodyCategory::Node => self.nodes,
            BodyCategory::Chiron => self.chiron,
            BodyCategory::Lilith => self.lilith,
            BodyCategory::Asteroid => self.asteroids,
        }
    }
}

/// Orb thresholds (degrees) separating the rendering tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerThresholds {
    pub highlight: f64,
    pub midground: f64,
    pub background: f64,
}

/// Complete configuration for one chart mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartModeConfig {
    pub bodies: BodyVisibility,
    pub aspects: AspectConfig,
    pub layers: LayerThresholds,
}

lazy_static::lazy_static! {
    static ref MODE_PRESETS: HashMap<ChartMode, ChartModeConfig> = {
        let mut presets = HashMap::new();
        presets.insert(ChartMode::Natal, ChartModeConfig {
            bodies: BodyVisibility {
                planets: true,
                angles: true,
                nodes: true,
                chiron: true,
                lilith: true,
                asteroids: false,
            },
            aspects: AspectConfig {
                conjunction: AspectTypeConfig::on(8.0),
                opposition: AspectTypeConfig::on(8.0),
                square: AspectTypeConfig::on(7.0),
                trine: AspectTypeConfig::on(7.0),
                sextile: AspectTypeConfig::on(5.0),
            },
            layers: LayerThresholds { highlight: 2.0, midground: 5.0, background: 8.0 },
        });
        presets.insert(ChartMode::Composite, ChartModeConfig {
            bodies: BodyVisibility {
                planets: true,
                angles: true,
                nodes: true,
                chiron: true,
                lilith: false,
                asteroids: false,
            },
            aspects: AspectConfig {
                conjunction: AspectTypeConfig::on(6.0),
                opposition: AspectTypeConfig::on(6.0),
                square: AspectTypeConfig::on(5.0),
                trine: AspectTypeConfig::on(5.0),
                sextile: AspectTypeConfig::on(4.0),
            },
            layers: LayerThresholds { highlight: 1.5, midground: 4.0, background: 6.0 },
        });
        presets.insert(ChartMode::Synastry, ChartModeConfig {
            bodies: BodyVisibility {
                planets: true,
                angles: true,
                nodes: true,
                chiron: false,
                lilith: false,
                asteroids: false,
            },
            aspects: AspectConfig {
                conjunction: AspectTypeConfig::on(6.0),
                opposition: AspectTypeConfig::on(6.0),
                square: AspectTypeConfig::on(5.0),
                trine: AspectTypeConfig::on(5.0),
                sextile: AspectTypeConfig::on(3.0),
            },
            layers: LayerThresholds { highlight: 1.5, midground: 3.5, background: 6.0 },
        });
        // Transits only matter close to exact
        presets.insert(ChartMode::Transit, ChartModeConfig {
            bodies: BodyVisibility {
                planets: true,
                angles: true,
                nodes: true,
                chiron: false,
                lilith: false,
                asteroids: false,
            },
            aspects: AspectConfig {
                conjunction: AspectTypeConfig::on(3.0),
                opposition: AspectTypeConfig::on(3.0),
                square: AspectTypeConfig::on(3.0),
                trine: AspectTypeConfig::on(2.0),
                sextile: AspectTypeConfig::on(2.0),
            },
            layers: LayerThresholds { highlight: 1.0, midground: 2.0, background: 3.0 },
        });
        presets
    };
}

impl ChartModeConfig {
    /// Built-in preset for a chart mode.
    pub fn for_mode(mode: ChartMode) -> ChartModeConfig {
        MODE_PRESETS[&mode]
    }

    /// Parse and validate a TOML mode configuration.
    pub fn from_toml_str(text: &str) -> Result<ChartModeConfig, ConfigError> {
        let config: ChartModeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Check orbs and thresholds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in AspectKind::ALL {
            let orb = self.aspects.get(kind).orb;
            if !orb.is_finite() || !(0.0..=180.0).contains(&orb) {
                return Err(ConfigError::InvalidFieldValue(format!(
                    "aspects.{}.orb must be within [0, 180], got: {}",
                    kind, orb
                )));
            }
        }

        let LayerThresholds {
            highlight,
            midground,
            background,
        } = self.layers;
        for (name, value) in [
            ("highlight", highlight),
            ("midground", midground),
            ("background", background),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidFieldValue(format!(
                    "layers.{} must be a non-negative number, got: {}",
                    name, value
                )));
            }
        }
        if highlight > midground || midground > background {
            return Err(ConfigError::InvalidFieldValue(format!(
                "layers must satisfy highlight <= midground <= background, got: {} / {} / {}",
                highlight, midground, background
            )));
        }

        Ok(())
    }
}

/// Load a mode configuration from a TOML file.
pub fn load_mode_config(path: &Path) -> Result<ChartModeConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ChartModeConfig::from_toml_str(&text)?;
    log::debug!("Loaded chart mode config from {}", path.display());
    Ok(config)
}
