use arena_common::MoveDirection;
use serde::{Deserialize, Serialize};

use crate::sprint::SprintSource;

/// Physical keys the controller cares about. Hosts translate their own key
/// codes into these; anything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    LeftShift,
    RightShift,
    R,
    Escape,
    Other,
}

/// What a key does when bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Held: move every frame.
    Move(MoveDirection),
    /// Held: contributes a sprint source.
    Sprint(SprintSource),
    /// Press edge: jump.
    Jump,
    /// Press edge: reset the camera.
    Reset,
    /// Press edge: ask the host to exit.
    Quit,
}

/// The fixed control scheme: WASD move, either shift sprints, space jumps,
/// R resets, escape quits.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyBindings;

impl KeyBindings {
    pub fn new() -> Self {
        Self
    }

    pub fn binding(&self, key: Key) -> Option<Binding> {
        match key {
            Key::W => Some(Binding::Move(MoveDirection::Forward)),
            Key::S => Some(Binding::Move(MoveDirection::Backward)),
            Key::A => Some(Binding::Move(MoveDirection::Left)),
            Key::D => Some(Binding::Move(MoveDirection::Right)),
            Key::LeftShift => Some(Binding::Sprint(SprintSource::LeftShift)),
            Key::RightShift => Some(Binding::Sprint(SprintSource::RightShift)),
            Key::Space => Some(Binding::Jump),
            Key::R => Some(Binding::Reset),
            Key::Escape => Some(Binding::Quit),
            Key::Other => None,
        }
    }

    /// Movement keys in the order they are polled each frame.
    pub fn movement_keys(&self) -> [(Key, MoveDirection); 4] {
        [
            (Key::W, MoveDirection::Forward),
            (Key::S, MoveDirection::Backward),
            (Key::A, MoveDirection::Left),
            (Key::D, MoveDirection::Right),
        ]
    }
}
