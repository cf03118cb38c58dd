use arena_camera::FpsCamera;
use arena_common::MoveDirection;

/// One controller call, produced by the input layer and applied to a camera.
///
/// Hosts can log, record or replay actions instead of touching raw events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Planar move for `dt` seconds.
    Move { direction: MoveDirection, dt: f32 },
    /// Look delta in pixels, `dy` positive for looking up.
    Look { dx: f32, dy: f32 },
    /// Scroll delta; positive narrows the field of view.
    Zoom(f32),
    /// New sprint state.
    Sprint(bool),
    Jump,
    /// Return the camera to its spawn pose.
    Reset,
    /// Host should close. Does nothing to the camera.
    Quit,
}

impl Action {
    pub fn apply(self, camera: &mut FpsCamera) {
        match self {
            Action::Move { direction, dt } => camera.process_keyboard(direction, dt),
            Action::Look { dx, dy } => camera.process_mouse_movement(dx, dy),
            Action::Zoom(delta) => camera.process_mouse_scroll(delta),
            Action::Sprint(on) => camera.set_sprint(on),
            Action::Jump => camera.jump(),
            Action::Reset => camera.reset(),
            Action::Quit => {}
        }
    }
}
