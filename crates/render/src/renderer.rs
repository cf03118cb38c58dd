use arena_camera::FpsCamera;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::level::{Level, SurfaceKind};

/// Camera/view configuration for one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point one unit ahead of the eye.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub view: Mat4,
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from_camera(&FpsCamera::default(), Self::DEFAULT_ASPECT)
    }
}

impl RenderView {
    /// 1600×900 window.
    pub const DEFAULT_ASPECT: f32 = 1600.0 / 900.0;
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 100.0;

    /// Snapshot the camera after this frame's `update`. The field of view is
    /// the camera's current zoom.
    pub fn from_camera(camera: &FpsCamera, aspect: f32) -> Self {
        Self {
            eye: camera.position(),
            target: camera.position() + camera.front(),
            fov_degrees: camera.zoom_degrees(),
            aspect,
            near: Self::NEAR,
            far: Self::FAR,
            view: camera.view_matrix(),
        }
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view
    }

    pub fn uniforms(&self) -> ViewUniforms {
        ViewUniforms {
            view: self.view.to_cols_array_2d(),
            projection: self.projection().to_cols_array_2d(),
        }
    }
}

/// View and projection as uploaded to a uniform buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ViewUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

/// Draws the arena for one frame.
///
/// Takes a `RenderView` snapshot instead of the camera, so drawing can never
/// move it.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of `level` as seen from `view`.
    fn render(&self, level: &Level, view: &RenderView) -> Self::Output;
}

/// Debug text renderer: a readable dump of the frame for CLI output and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, level: &Level, view: &RenderView) -> String {
        let _span = tracing::debug_span!("debug_text_render").entered();
        let mut out = String::new();
        out.push_str(&format!(
            "=== Arena (surfaces={}) ===\n",
            level.surfaces.len()
        ));
        out.push_str(&format!(
            "Camera: eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2}) fov={:.1}\n",
            view.eye.x,
            view.eye.y,
            view.eye.z,
            view.target.x,
            view.target.y,
            view.target.z,
            view.fov_degrees
        ));

        let view_proj = view.view_projection();
        for surface in &level.surfaces {
            let kind = match surface.kind {
                SurfaceKind::Floor => "floor",
                SurfaceKind::Wall => "wall",
            };
            let centre = surface.model_matrix().transform_point3(Vec3::ZERO);
            let clip = view_proj * centre.extend(1.0);
            let depth = if clip.w > 0.0 { clip.z / clip.w } else { f32::NAN };
            out.push_str(&format!(
                "  {kind:<5} at ({:.1}, {:.1}, {:.1}) yaw={:.0} depth={:.3}\n",
                centre.x, centre.y, centre.z, surface.yaw_degrees, depth
            ));
        }

        out
    }
}
