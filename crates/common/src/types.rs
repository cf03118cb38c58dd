use serde::{Deserialize, Serialize};

/// Planar movement directions, relative to where the camera is facing.
///
/// Kept independent of any windowing system so hosts map their own key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    /// All directions in the order a host polls them each frame.
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// +1 for directions along the basis vector, -1 against it.
    pub fn sign(self) -> f32 {
        match self {
            MoveDirection::Forward | MoveDirection::Right => 1.0,
            MoveDirection::Backward | MoveDirection::Left => -1.0,
        }
    }

    /// True for directions that follow `front` rather than `right`.
    pub fn is_longitudinal(self) -> bool {
        matches!(self, MoveDirection::Forward | MoveDirection::Backward)
    }
}
