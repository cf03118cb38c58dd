use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Axis-aligned playable rectangle plus the floor height the eye rests at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
    /// Eye height when standing on the floor.
    pub ground_y: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            min_x: -8.5,
            max_x: 8.5,
            min_z: -8.5,
            max_z: 8.5,
            ground_y: 2.0,
        }
    }
}

impl WorldBounds {
    /// Hard-clamp x and z independently into the rectangle. `y` passes through.
    pub fn clamp_horizontal(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y,
            p.z.clamp(self.min_z, self.max_z),
        )
    }

    /// Whether `p` lies inside the rectangle (inclusive). Ignores `y`.
    pub fn contains_horizontal(&self, p: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_z..=self.max_z).contains(&p.z)
    }
}

/// Speeds and vertical dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionTunables {
    pub movement_speed: f32,
    pub sprint_speed: f32,
    /// Downward acceleration in units/s².
    pub gravity: f32,
    /// Upward speed applied by a jump.
    pub jump_velocity: f32,
}

impl Default for MotionTunables {
    fn default() -> Self {
        Self {
            movement_speed: 7.0,
            sprint_speed: 14.0,
            gravity: 14.0,
            jump_velocity: 7.0,
        }
    }
}

/// Mouse look and field-of-view limits. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookTunables {
    /// Degrees per pixel of mouse travel.
    pub sensitivity: f32,
    pub pitch_limit: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub initial_zoom: f32,
    pub world_up: Vec3,
}

impl Default for LookTunables {
    fn default() -> Self {
        Self {
            sensitivity: 0.05,
            pitch_limit: 89.0,
            min_zoom: 1.0,
            max_zoom: 45.0,
            initial_zoom: 45.0,
            world_up: Vec3::Y,
        }
    }
}

/// Where a camera built from these tunables starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for SpawnPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 7.0),
            yaw: -90.0,
            pitch: 0.0,
        }
    }
}

/// Every constant the controller reads. Injected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub spawn: SpawnPose,
    pub bounds: WorldBounds,
    pub motion: MotionTunables,
    pub look: LookTunables,
}

impl Tunables {
    /// Reject configurations the controller cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("bounds.min_x", self.bounds.min_x),
            ("bounds.max_x", self.bounds.max_x),
            ("bounds.min_z", self.bounds.min_z),
            ("bounds.max_z", self.bounds.max_z),
            ("bounds.ground_y", self.bounds.ground_y),
            ("motion.movement_speed", self.motion.movement_speed),
            ("motion.sprint_speed", self.motion.sprint_speed),
            ("motion.gravity", self.motion.gravity),
            ("motion.jump_velocity", self.motion.jump_velocity),
            ("look.sensitivity", self.look.sensitivity),
            ("look.pitch_limit", self.look.pitch_limit),
            ("look.min_zoom", self.look.min_zoom),
            ("look.max_zoom", self.look.max_zoom),
            ("look.initial_zoom", self.look.initial_zoom),
            ("spawn.yaw", self.spawn.yaw),
            ("spawn.pitch", self.spawn.pitch),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }
        if !self.spawn.position.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "spawn.position",
            });
        }
        if !self.look.world_up.is_finite() || self.look.world_up.length_squared() == 0.0 {
            return Err(ConfigError::DegenerateWorldUp);
        }
        // Movement and the floor are fixed to the x/z plane.
        if self.look.world_up.x != 0.0 || self.look.world_up.z != 0.0 {
            return Err(ConfigError::WorldUpNotVertical(self.look.world_up));
        }

        if self.bounds.min_x > self.bounds.max_x {
            return Err(ConfigError::InvertedBounds {
                axis: 'x',
                min: self.bounds.min_x,
                max: self.bounds.max_x,
            });
        }
        if self.bounds.min_z > self.bounds.max_z {
            return Err(ConfigError::InvertedBounds {
                axis: 'z',
                min: self.bounds.min_z,
                max: self.bounds.max_z,
            });
        }

        let positive = [
            ("motion.movement_speed", self.motion.movement_speed),
            ("motion.sprint_speed", self.motion.sprint_speed),
            ("motion.gravity", self.motion.gravity),
            ("motion.jump_velocity", self.motion.jump_velocity),
            ("look.sensitivity", self.look.sensitivity),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if !(0.0..90.0).contains(&self.look.pitch_limit) {
            return Err(ConfigError::PitchLimit(self.look.pitch_limit));
        }

        let (lo, hi) = (self.look.min_zoom, self.look.max_zoom);
        if lo <= 0.0 || hi >= 180.0 || lo > hi {
            return Err(ConfigError::ZoomRange { min: lo, max: hi });
        }
        if !(lo..=hi).contains(&self.look.initial_zoom) {
            return Err(ConfigError::InitialZoom {
                zoom: self.look.initial_zoom,
                min: lo,
                max: hi,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        Tunables::default().validate().unwrap();
    }

    #[test]
    fn defaults_match_arena() {
        let t = Tunables::default();
        assert_eq!(t.spawn.position, Vec3::new(0.0, 2.0, 7.0));
        assert_eq!(t.spawn.yaw, -90.0);
        assert_eq!(t.bounds.min_x, -8.5);
        assert_eq!(t.bounds.max_z, 8.5);
        assert_eq!(t.motion.movement_speed, 7.0);
        assert_eq!(t.motion.sprint_speed, 14.0);
        assert_eq!(t.look.max_zoom, 45.0);
    }

    #[test]
    fn clamp_horizontal_leaves_y() {
        let b = WorldBounds::default();
        let p = b.clamp_horizontal(Vec3::new(20.0, 5.0, -20.0));
        assert_eq!(p, Vec3::new(8.5, 5.0, -8.5));
        assert!(b.contains_horizontal(p));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let mut t = Tunables::default();
        t.bounds.min_z = 3.0;
        t.bounds.max_z = -3.0;
        assert!(matches!(
            t.validate(),
            Err(ConfigError::InvertedBounds { axis: 'z', .. })
        ));
    }

    #[test]
    fn non_positive_gravity_rejected() {
        let mut t = Tunables::default();
        t.motion.gravity = 0.0;
        assert!(matches!(
            t.validate(),
            Err(ConfigError::NonPositive {
                field: "motion.gravity",
                ..
            })
        ));
    }

    #[test]
    fn zoom_range_checked() {
        let mut t = Tunables::default();
        t.look.min_zoom = 50.0;
        assert!(matches!(t.validate(), Err(ConfigError::ZoomRange { .. })));

        let mut t = Tunables::default();
        t.look.initial_zoom = 60.0;
        assert!(matches!(t.validate(), Err(ConfigError::InitialZoom { .. })));
    }

    #[test]
    fn pitch_limit_must_stay_below_pole() {
        let mut t = Tunables::default();
        t.look.pitch_limit = 90.0;
        assert!(matches!(t.validate(), Err(ConfigError::PitchLimit(_))));
    }

    #[test]
    fn zero_world_up_rejected() {
        let mut t = Tunables::default();
        t.look.world_up = Vec3::ZERO;
        assert!(matches!(t.validate(), Err(ConfigError::DegenerateWorldUp)));
    }

    #[test]
    fn tilted_world_up_rejected() {
        let mut t = Tunables::default();
        for up in [Vec3::X, Vec3::NEG_Z, Vec3::new(0.1, 1.0, 0.0)] {
            t.look.world_up = up;
            assert!(matches!(
                t.validate(),
                Err(ConfigError::WorldUpNotVertical(v)) if v == up
            ));
        }
        t.look.world_up = Vec3::new(0.0, 3.0, 0.0);
        t.validate().unwrap();
        t.look.world_up = Vec3::NEG_Y;
        t.validate().unwrap();
    }

    #[test]
    fn nan_rejected() {
        let mut t = Tunables::default();
        t.spawn.yaw = f32::NAN;
        assert!(matches!(
            t.validate(),
            Err(ConfigError::NotFinite { field: "spawn.yaw" })
        ));
    }
}
