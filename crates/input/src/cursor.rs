use glam::Vec2;

/// Turns absolute cursor positions into look deltas.
///
/// The first sample only seeds the tracker so the camera does not jump when
/// the cursor is captured. The vertical delta is inverted (`last_y - y`)
/// because cursor space grows downward while pitch grows upward.
#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    last: Option<Vec2>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an absolute cursor position, get `(dx, dy)` with `dy` look-up-positive.
    pub fn sample(&mut self, x: f32, y: f32) -> (f32, f32) {
        let current = Vec2::new(x, y);
        let last = self.last.replace(current).unwrap_or(current);
        (current.x - last.x, last.y - current.y)
    }

    /// Forget the last position, e.g. after the cursor is released.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn is_seeded(&self) -> bool {
        self.last.is_some()
    }
}
