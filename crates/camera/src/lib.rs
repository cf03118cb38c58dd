//! Camera/Controller: turns look, move, jump and zoom events into a pose and a view matrix.
//!
//! # Invariants
//! - `front`, `right`, `up` are unit length and mutually orthogonal after every
//!   orientation change; they are only ever derived from yaw and pitch.
//! - Pitch stays within the configured limit; zoom stays within its range.
//! - Horizontal position stays inside the world bounds after every move.
//! - Eye height never drops below the ground after `update`.
//!
//! # Frame order
//! Hosts apply input first, then `update(dt)`, then read `view_matrix`. The
//! controller does not detect out-of-order calls or negative `dt`.

mod basis;
mod camera;
mod motion;
mod view;

pub use basis::Basis;
pub use camera::FpsCamera;
pub use motion::{MotionState, Stance, VerticalStep};
pub use view::look_at;

pub fn crate_info() -> &'static str {
    "arena-camera v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("camera"));
    }
}
