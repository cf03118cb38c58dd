use std::collections::HashSet;

use arena_camera::FpsCamera;

use crate::action::Action;
use crate::bindings::{Binding, Key, KeyBindings};
use crate::cursor::CursorTracker;
use crate::sprint::SprintSources;

/// Per-window input state: held keys, sprint sources, cursor history.
///
/// Edge events (`handle_key`, `handle_cursor`, `handle_scroll`) return the
/// action they produce; held movement is polled once per frame with
/// `held_actions`. `dispatch` and `apply_held` are the shortcuts most hosts want.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    bindings: KeyBindings,
    keys_held: HashSet<Key>,
    sprint: SprintSources,
    cursor: CursorTracker,
    quit_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.keys_held.contains(&key)
    }

    pub fn sprint_active(&self) -> bool {
        self.sprint.is_active()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Record a key press or release. Repeats of an already held key are
    /// treated as held, not as a new press.
    pub fn handle_key(&mut self, key: Key, pressed: bool) -> Option<Action> {
        let edge = if pressed {
            self.keys_held.insert(key)
        } else {
            self.keys_held.remove(&key)
        };

        match self.bindings.binding(key)? {
            Binding::Move(_) => None,
            Binding::Sprint(source) => {
                let before = self.sprint.is_active();
                let after = if pressed {
                    self.sprint.press(source)
                } else {
                    self.sprint.release(source)
                };
                (before != after).then_some(Action::Sprint(after))
            }
            Binding::Jump if pressed && edge => Some(Action::Jump),
            Binding::Reset if pressed && edge => Some(Action::Reset),
            Binding::Quit if pressed && edge => {
                self.quit_requested = true;
                tracing::info!("quit requested");
                Some(Action::Quit)
            }
            Binding::Jump | Binding::Reset | Binding::Quit => None,
        }
    }

    /// Feed an absolute cursor position. The first sample yields no action.
    pub fn handle_cursor(&mut self, x: f32, y: f32) -> Option<Action> {
        let seeded = self.cursor.is_seeded();
        let (dx, dy) = self.cursor.sample(x, y);
        seeded.then_some(Action::Look { dx, dy })
    }

    /// Feed an already-relative look delta in cursor space (y grows downward).
    pub fn handle_cursor_delta(&self, dx: f32, dy: f32) -> Action {
        Action::Look { dx, dy: -dy }
    }

    pub fn handle_scroll(&self, dy: f32) -> Action {
        Action::Zoom(dy)
    }

    /// Movement for every held movement key, in W, S, A, D order.
    pub fn held_actions(&self, dt: f32) -> Vec<Action> {
        self.bindings
            .movement_keys()
            .into_iter()
            .filter(|(key, _)| self.keys_held.contains(key))
            .map(|(_, direction)| Action::Move { direction, dt })
            .collect()
    }

    /// Apply an optional edge action to the camera.
    pub fn dispatch(camera: &mut FpsCamera, action: Option<Action>) {
        if let Some(action) = action {
            tracing::trace!(?action, "dispatch");
            action.apply(camera);
        }
    }

    /// Apply held movement for this frame.
    pub fn apply_held(&self, camera: &mut FpsCamera, dt: f32) {
        for action in self.held_actions(dt) {
            action.apply(camera);
        }
    }

    /// Drop all held keys and cursor history, e.g. when focus is lost.
    /// Returns `Sprint(false)` if sprint was on.
    pub fn release_all(&mut self) -> Option<Action> {
        let was_sprinting = self.sprint.is_active();
        self.keys_held.clear();
        self.sprint.clear();
        self.cursor.reset();
        was_sprinting.then_some(Action::Sprint(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_common::MoveDirection;
    use glam::Vec3;

    #[test]
    fn jump_fires_on_press_edge_only() {
        let mut input = InputState::new();
        assert_eq!(input.handle_key(Key::Space, true), Some(Action::Jump));
        assert_eq!(input.handle_key(Key::Space, true), None);
        assert_eq!(input.handle_key(Key::Space, false), None);
        assert_eq!(input.handle_key(Key::Space, true), Some(Action::Jump));
    }

    #[test]
    fn two_shifts_share_sprint() {
        let mut input = InputState::new();
        assert_eq!(input.handle_key(Key::LeftShift, true), Some(Action::Sprint(true)));
        assert_eq!(input.handle_key(Key::RightShift, true), None);
        assert_eq!(input.handle_key(Key::LeftShift, false), None);
        assert!(input.sprint_active());
        assert_eq!(input.handle_key(Key::RightShift, false), Some(Action::Sprint(false)));
        assert!(!input.sprint_active());
    }

    #[test]
    fn sprint_survives_partial_release_on_camera() {
        let mut input = InputState::new();
        let mut cam = FpsCamera::default();
        for (key, pressed) in [
            (Key::LeftShift, true),
            (Key::RightShift, true),
            (Key::LeftShift, false),
        ] {
            let action = input.handle_key(key, pressed);
            InputState::dispatch(&mut cam, action);
        }
        assert!(cam.sprint_enabled());
    }

    #[test]
    fn held_movement_in_poll_order() {
        let mut input = InputState::new();
        input.handle_key(Key::D, true);
        input.handle_key(Key::W, true);
        let actions = input.held_actions(0.1);
        assert_eq!(
            actions,
            vec![
                Action::Move {
                    direction: MoveDirection::Forward,
                    dt: 0.1
                },
                Action::Move {
                    direction: MoveDirection::Right,
                    dt: 0.1
                },
            ]
        );
        input.handle_key(Key::W, false);
        assert_eq!(input.held_actions(0.1).len(), 1);
    }

    #[test]
    fn apply_held_moves_camera() {
        let mut input = InputState::new();
        let mut cam = FpsCamera::default();
        input.handle_key(Key::W, true);
        input.apply_held(&mut cam, 0.5);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 2.0, 3.5), 1e-4));
    }

    #[test]
    fn cursor_first_sample_is_swallowed() {
        let mut input = InputState::new();
        assert_eq!(input.handle_cursor(800.0, 450.0), None);
        assert_eq!(
            input.handle_cursor(820.0, 430.0),
            Some(Action::Look { dx: 20.0, dy: 20.0 })
        );
    }

    #[test]
    fn relative_delta_is_inverted() {
        let input = InputState::new();
        assert_eq!(
            input.handle_cursor_delta(3.0, 4.0),
            Action::Look { dx: 3.0, dy: -4.0 }
        );
    }

    #[test]
    fn escape_requests_quit() {
        let mut input = InputState::new();
        assert!(!input.quit_requested());
        assert_eq!(input.handle_key(Key::Escape, true), Some(Action::Quit));
        assert!(input.quit_requested());
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut input = InputState::new();
        assert_eq!(input.handle_key(Key::Other, true), None);
        assert!(input.held_actions(1.0).is_empty());
    }

    #[test]
    fn release_all_clears_sprint_and_movement() {
        let mut input = InputState::new();
        input.handle_key(Key::LeftShift, true);
        input.handle_key(Key::W, true);
        input.handle_cursor(1.0, 1.0);
        assert_eq!(input.release_all(), Some(Action::Sprint(false)));
        assert!(input.held_actions(1.0).is_empty());
        assert_eq!(input.handle_cursor(5.0, 5.0), None);
        assert_eq!(input.release_all(), None);
    }

    #[test]
    fn reset_while_sprinting_keeps_sprint() {
        let mut input = InputState::new();
        let mut cam = FpsCamera::default();
        InputState::dispatch(&mut cam, input.handle_key(Key::LeftShift, true));
        InputState::dispatch(&mut cam, input.handle_key(Key::W, true));
        input.apply_held(&mut cam, 0.5);

        InputState::dispatch(&mut cam, input.handle_key(Key::R, true));
        assert_eq!(cam.position(), FpsCamera::default().position());
        assert!(cam.sprint_enabled());
        assert_eq!(cam.sprint_enabled(), input.sprint_active());

        InputState::dispatch(&mut cam, input.handle_key(Key::LeftShift, false));
        assert!(!cam.sprint_enabled());
    }
}
