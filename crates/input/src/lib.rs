//! Input translation: raw key, cursor and scroll samples mapped to controller actions.
//!
//! # Invariants
//! - Bindings are fixed; there is no remapping.
//! - Jump fires on the press edge only, never on key repeat.
//! - Sprint is on iff at least one sprint key is held.

pub mod action;
pub mod bindings;
pub mod cursor;
pub mod sprint;
pub mod state;

pub use action::Action;
pub use bindings::{Binding, Key, KeyBindings};
pub use cursor::CursorTracker;
pub use sprint::{SprintSource, SprintSources};
pub use state::InputState;

pub fn crate_info() -> &'static str {
    "arena-input v0.1.0"
}
