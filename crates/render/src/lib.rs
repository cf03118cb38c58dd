//! Rendering Adapter: what the camera hands to a renderer.
//!
//! # Invariants
//! - Renderers never mutate the camera.
//! - Render state derives from the camera pose and the static level.
//!
//! # Workaround
//! GPU backends are not part of this workspace. The level is exposed as plain
//! vertex data and model matrices, and a debug text renderer stands in for a
//! real backend behind the same trait.

mod level;
mod renderer;

pub use level::{Level, LevelVertex, Surface, SurfaceKind};
pub use renderer::{DebugTextRenderer, RenderView, Renderer, ViewUniforms};

pub fn crate_info() -> &'static str {
    "arena-render v0.1.0"
}
