use arena_common::{MoveDirection, SpawnPose, Tunables};
use glam::{Mat4, Vec3};

use crate::basis::{Basis, horizontal};
use crate::motion::MotionState;
use crate::view::look_at;

/// First-person camera driven by look, move, jump and zoom events.
///
/// Yaw and pitch (degrees) are authoritative; the basis is a cache rebuilt on
/// every orientation change. Movement is planar, clamped to the world bounds,
/// and vertical motion is a single jump impulse under constant gravity.
#[derive(Debug, Clone)]
pub struct FpsCamera {
    tunables: Tunables,
    position: Vec3,
    yaw: f32,
    pitch: f32,
    basis: Basis,
    zoom: f32,
    motion: MotionState,
    /// Pose restored by `reset`.
    home: SpawnPose,
}

impl Default for FpsCamera {
    fn default() -> Self {
        Self::new(Tunables::default())
    }
}

impl FpsCamera {
    /// Camera at the spawn pose described by `tunables`.
    pub fn new(tunables: Tunables) -> Self {
        let spawn = tunables.spawn;
        Self::with_pose(tunables, spawn.position, spawn.yaw, spawn.pitch)
    }

    /// Camera at an explicit pose. Pitch is clamped to the configured limit.
    pub fn with_pose(tunables: Tunables, position: Vec3, yaw: f32, pitch: f32) -> Self {
        let limit = tunables.look.pitch_limit;
        let pitch = pitch.clamp(-limit, limit);
        Self {
            position,
            yaw,
            pitch,
            basis: Basis::from_euler(yaw, pitch, tunables.look.world_up),
            zoom: tunables.look.initial_zoom,
            motion: MotionState::new(),
            home: SpawnPose {
                position,
                yaw,
                pitch,
            },
            tunables,
        }
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn front(&self) -> Vec3 {
        self.basis.front
    }

    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.tunables.look.world_up
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn is_airborne(&self) -> bool {
        self.motion.is_airborne()
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.motion.vertical_velocity()
    }

    pub fn sprint_enabled(&self) -> bool {
        self.motion.sprint()
    }

    /// Field of view in degrees, for the projection matrix.
    pub fn zoom_degrees(&self) -> f32 {
        self.zoom
    }

    /// Speed currently applied to planar movement.
    pub fn current_speed(&self) -> f32 {
        if self.motion.sprint() {
            self.tunables.motion.sprint_speed
        } else {
            self.tunables.motion.movement_speed
        }
    }

    /// World-to-view transform for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        look_at(self.position, self.position + self.basis.front, self.basis.up)
    }

    /// Move along the horizontal projection of `front` or `right`, then clamp
    /// x and z into the world bounds. Height is untouched.
    pub fn process_keyboard(&mut self, direction: MoveDirection, dt: f32) {
        let axis = if direction.is_longitudinal() {
            self.basis.front
        } else {
            self.basis.right
        };
        let step = horizontal(axis) * (direction.sign() * self.current_speed() * dt);
        self.position = self.tunables.bounds.clamp_horizontal(self.position + step);
    }

    /// Apply a look delta in pixels. `dy` is positive for looking up.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32) {
        let sensitivity = self.tunables.look.sensitivity;
        let limit = self.tunables.look.pitch_limit;

        self.yaw += dx * sensitivity;
        self.pitch = (self.pitch + dy * sensitivity).clamp(-limit, limit);
        self.basis = Basis::from_euler(self.yaw, self.pitch, self.tunables.look.world_up);
    }

    /// Scrolling up narrows the field of view.
    pub fn process_mouse_scroll(&mut self, delta: f32) {
        let look = &self.tunables.look;
        self.zoom = (self.zoom - delta).clamp(look.min_zoom, look.max_zoom);
    }

    pub fn set_sprint(&mut self, on: bool) {
        if self.motion.sprint() != on {
            tracing::debug!(sprint = on, "sprint changed");
        }
        self.motion.set_sprint(on);
    }

    /// Leave the ground with the configured jump velocity. No-op in the air.
    pub fn jump(&mut self) {
        if self.motion.jump(self.tunables.motion.jump_velocity) {
            tracing::debug!(y = self.position.y, "jump");
        }
    }

    /// Advance vertical motion by `dt` seconds and enforce the floor.
    pub fn update(&mut self, dt: f32) {
        let step = self.motion.integrate(
            self.position.y,
            dt,
            self.tunables.motion.gravity,
            self.tunables.bounds.ground_y,
        );
        self.position.y = step.y;
        if step.landed {
            tracing::debug!(x = self.position.x, z = self.position.z, "landed");
        }
        tracing::trace!(
            y = self.position.y,
            vy = self.motion.vertical_velocity(),
            "camera update"
        );
    }

    /// Return to the construction pose with the initial zoom, grounded and at
    /// rest. The sprint latch follows the held keys, so it survives.
    pub fn reset(&mut self) {
        let sprint = self.motion.sprint();
        let home = self.home;
        *self = Self::with_pose(self.tunables, home.position, home.yaw, home.pitch);
        self.motion.set_sprint(sprint);
        tracing::debug!(sprint, "camera reset");
    }
}
