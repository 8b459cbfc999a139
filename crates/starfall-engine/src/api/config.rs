use serde::{Deserialize, Serialize};

use crate::error::{Result, StarfallError};

/// Field configuration, provided by the page at init.
/// Loaded from JSON; every missing key falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Radius of the globe stars land on (world units).
    pub earth_radius: f32,
    /// Base orbit radius; each star varies it by up to ±1.
    pub orbit_radius: f32,
    /// Base angular speed (rad/s); each star varies it by up to ±0.05.
    pub orbit_speed: f32,
    /// Seconds a claimed star takes to reach the ground.
    pub fall_duration: f32,
    /// Whether landed stars bounce before settling.
    pub bounce: bool,
    /// Impact effect radius handed to the presentation layer.
    pub impact_radius: f32,
    /// Largest frame delta fed to the simulators (seconds).
    pub max_frame_delta: f32,
    /// Maximum number of stars in the field.
    pub max_stars: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            earth_radius: 2.5,
            orbit_radius: 4.5,
            orbit_speed: 0.1,
            fall_duration: 3.0,
            bounce: true,
            impact_radius: 0.3,
            max_frame_delta: 0.1,
            max_stars: 256,
        }
    }
}

impl FieldConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("earth_radius", self.earth_radius),
            ("orbit_radius", self.orbit_radius),
            ("fall_duration", self.fall_duration),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(StarfallError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.max_stars == 0 {
            return Err(StarfallError::InvalidConfig("max_stars must be at least 1".into()));
        }
        Ok(())
    }
}
