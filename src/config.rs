//! Globe settings with defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::rotation::RotationRates;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GlobeConfig {
    /// Radius of the textured surface sphere, in scene units.
    pub globe_radius: f32,
    /// How far the cloud shell sits above the surface.
    pub cloud_offset: f32,
    /// How far the marker orbit sits above the surface. Must clear the clouds.
    pub marker_altitude: f32,
    /// Surface rotation per frame, radians.
    pub surface_rotation_rate: f32,
    /// Cloud/marker rotation per frame, radians.
    pub overlay_rotation_rate: f32,
    /// Normalize angles into [0, 2pi) every frame.
    pub wrap_angles: bool,
    /// Text attached to the marker.
    pub marker_label: String,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            globe_radius: 2.0,
            cloud_offset: 0.01,
            marker_altitude: 0.25,
            surface_rotation_rate: 0.0005,
            overlay_rotation_rate: 0.0007,
            wrap_angles: true,
            marker_label: "ISS".to_string(),
        }
    }
}

impl GlobeConfig {
    pub fn cloud_radius(&self) -> f32 {
        self.globe_radius + self.cloud_offset
    }

    pub fn marker_radius(&self) -> f32 {
        self.globe_radius + self.marker_altitude
    }

    pub fn rotation_rates(&self) -> RotationRates {
        RotationRates {
            surface: self.surface_rotation_rate,
            overlay: self.overlay_rotation_rate,
            wrap: self.wrap_angles,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("globe_radius", self.globe_radius),
            ("cloud_offset", self.cloud_offset),
            ("marker_altitude", self.marker_altitude),
            ("surface_rotation_rate", self.surface_rotation_rate),
            ("overlay_rotation_rate", self.overlay_rotation_rate),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::InvalidShells(format!(
                "{name} must be finite, got {value}"
            )));
        }

        if self.globe_radius <= 0.0 {
            return Err(ConfigError::InvalidShells(format!(
                "globe_radius must be positive, got {}",
                self.globe_radius
            )));
        }
        if self.cloud_radius() <= self.globe_radius {
            return Err(ConfigError::InvalidShells(format!(
                "cloud shell ({}) must sit above the surface ({})",
                self.cloud_radius(),
                self.globe_radius
            )));
        }
        if self.marker_radius() <= self.cloud_radius() {
            return Err(ConfigError::InvalidShells(format!(
                "marker shell ({}) must sit above the cloud shell ({})",
                self.marker_radius(),
                self.cloud_radius()
            )));
        }
        Ok(())
    }

    /// Parses and validates a config. Missing fields take their defaults.
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(ConfigError::SerializeError)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        Self::from_ron_str(&contents)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_ron_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }
        std::fs::write(path, contents).map_err(ConfigError::WriteError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_nest_the_shells() {
        let config = GlobeConfig::default();
        config.validate().unwrap();
        assert!(config.globe_radius < config.cloud_radius());
        assert!(config.cloud_radius() < config.marker_radius());
        assert_eq!(config.marker_radius(), 2.25);
    }

    #[test]
    fn partial_ron_fills_defaults() {
        let config = GlobeConfig::from_ron_str("(globe_radius: 5.0, marker_label: \"Hubble\")")
            .unwrap();
        assert_eq!(config.globe_radius, 5.0);
        assert_eq!(config.marker_label, "Hubble");
        assert_eq!(config.cloud_offset, 0.01);
        assert!(config.wrap_angles);
    }

    #[test]
    fn ron_round_trip() {
        let config = GlobeConfig {
            wrap_angles: false,
            marker_label: "Tiangong".to_string(),
            ..GlobeConfig::default()
        };
        let text = config.to_ron_string().unwrap();
        assert_eq!(GlobeConfig::from_ron_str(&text).unwrap(), config);
    }

    #[test]
    fn marker_inside_clouds_is_rejected() {
        let config = GlobeConfig {
            cloud_offset: 0.3,
            marker_altitude: 0.25,
            ..GlobeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidShells(_))
        ));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let config = GlobeConfig {
            globe_radius: 0.0,
            ..GlobeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidShells(_))
        ));
    }

    #[test]
    fn non_finite_rate_is_rejected() {
        let config = GlobeConfig {
            overlay_rotation_rate: f32::NAN,
            ..GlobeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("overlay_rotation_rate"));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            GlobeConfig::from_ron_str("(globe_radius: \"big\")"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("globe.ron");
        let config = GlobeConfig {
            globe_radius: 3.0,
            ..GlobeConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(GlobeConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            GlobeConfig::load(&dir.path().join("nope.ron")),
            Err(ConfigError::ReadError(_))
        ));
    }
}
