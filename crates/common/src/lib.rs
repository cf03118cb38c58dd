//! Shared types for the arena controller: tunables, movement directions, config loading.
//!
//! # Invariants
//! - Every loaded `Tunables` has passed `Tunables::validate`.
//! - Tunables are plain data; nothing here holds mutable runtime state.

pub mod config;
pub mod tunables;
pub mod types;

pub use config::ConfigError;
pub use tunables::{LookTunables, MotionTunables, SpawnPose, Tunables, WorldBounds};
pub use types::MoveDirection;

pub fn crate_info() -> &'static str {
    "arena-common v0.1.0"
}
