//! Loading `Tunables` from YAML or JSON files.
//!
//! Every field has a default, so a file only needs to name what it overrides:
//! ```text
//! bounds:
//!   min_x: -4.0
//!   max_x: 4.0
//! motion:
//!   gravity: 9.8
//! ```

use std::path::Path;

use crate::tunables::Tunables;

/// Errors from loading or validating tunables.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config format: {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
    #[error("{axis} bounds are inverted: min {min} > max {max}")]
    InvertedBounds { axis: char, min: f32, max: f32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("pitch limit must be in [0, 90), got {0}")]
    PitchLimit(f32),
    #[error("zoom range [{min}, {max}] must satisfy 0 < min <= max < 180")]
    ZoomRange { min: f32, max: f32 },
    #[error("initial zoom {zoom} outside [{min}, {max}]")]
    InitialZoom { zoom: f32, min: f32, max: f32 },
    #[error("world up vector must be non-zero")]
    DegenerateWorldUp,
    #[error("world up vector must lie on the Y axis, got {0}")]
    WorldUpNotVertical(glam::Vec3),
}

impl Tunables {
    /// Parse and validate tunables from a YAML document.
    pub fn from_yaml_str(src: &str) -> Result<Self, ConfigError> {
        let tunables: Tunables = serde_yaml::from_str(src)?;
        tunables.validate()?;
        Ok(tunables)
    }

    /// Parse and validate tunables from a JSON document.
    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        let tunables: Tunables = serde_json::from_str(src)?;
        tunables.validate()?;
        Ok(tunables)
    }

    /// Load tunables from a file, choosing the parser by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let src = std::fs::read_to_string(path)?;
        let tunables = match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&src)?,
            "json" => Self::from_json_str(&src)?,
            _ => return Err(ConfigError::UnsupportedFormat(ext)),
        };
        tracing::debug!(path = %path.display(), "loaded tunables");
        Ok(tunables)
    }

    /// Serialize to YAML, e.g. to dump the active configuration.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn partial_yaml_fills_defaults() {
        let t = Tunables::from_yaml_str("motion:\n  gravity: 9.8\n").unwrap();
        assert_eq!(t.motion.gravity, 9.8);
        assert_eq!(t.motion.movement_speed, 7.0);
        assert_eq!(t.bounds, crate::WorldBounds::default());
    }

    #[test]
    fn empty_json_is_default() {
        let t = Tunables::from_json_str("{}").unwrap();
        assert_eq!(t, Tunables::default());
    }

    #[test]
    fn vec3_fields_parse_as_arrays() {
        let t = Tunables::from_json_str(r#"{"spawn":{"position":[1.0,2.0,3.0]}}"#).unwrap();
        assert_eq!(t.spawn.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn invalid_values_fail_loading() {
        let err = Tunables::from_yaml_str("bounds:\n  min_x: 5.0\n  max_x: -5.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvertedBounds { axis: 'x', .. }));
    }

    #[test]
    fn sideways_world_up_fails_loading() {
        let err = Tunables::from_json_str(r#"{"look":{"world_up":[1.0,0.0,0.0]}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::WorldUpNotVertical(_)));
        assert!(err.to_string().contains("Y axis"));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = Tunables::from_yaml_str("motion: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn yaml_dump_round_trips() {
        let mut t = Tunables::default();
        t.motion.sprint_speed = 20.0;
        let text = t.to_yaml_string().unwrap();
        assert_eq!(Tunables::from_yaml_str(&text).unwrap(), t);
    }

    #[test]
    fn file_loading_by_extension() {
        let dir = std::env::temp_dir().join(format!("arena-common-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let yaml = dir.join("tunables.yaml");
        std::fs::write(&yaml, "look:\n  sensitivity: 0.1\n").unwrap();
        assert_eq!(Tunables::from_path(&yaml).unwrap().look.sensitivity, 0.1);

        let json = dir.join("tunables.json");
        std::fs::write(&json, r#"{"motion":{"jump_velocity":5.0}}"#).unwrap();
        assert_eq!(Tunables::from_path(&json).unwrap().motion.jump_velocity, 5.0);

        let toml = dir.join("tunables.toml");
        std::fs::write(&toml, "").unwrap();
        assert!(matches!(
            Tunables::from_path(&toml),
            Err(ConfigError::UnsupportedFormat(_))
        ));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Tunables::from_path("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
