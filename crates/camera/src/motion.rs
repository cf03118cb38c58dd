use serde::{Deserialize, Serialize};

/// Vertical-motion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    Grounded,
    Airborne,
}

/// Result of one vertical integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStep {
    pub y: f32,
    /// The step ended airborne and touched the ground.
    pub landed: bool,
}

/// Sprint latch and jump/gravity state owned by one camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    sprint: bool,
    stance: Stance,
    vertical_velocity: f32,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            sprint: false,
            stance: Stance::Grounded,
            vertical_velocity: 0.0,
        }
    }
}

impl MotionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprint(&self) -> bool {
        self.sprint
    }

    pub fn set_sprint(&mut self, on: bool) {
        self.sprint = on;
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn is_airborne(&self) -> bool {
        self.stance == Stance::Airborne
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Start a jump. Returns false (and changes nothing) when already airborne.
    pub fn jump(&mut self, jump_velocity: f32) -> bool {
        if self.is_airborne() {
            return false;
        }
        self.stance = Stance::Airborne;
        self.vertical_velocity = jump_velocity;
        true
    }

    /// Semi-implicit Euler step followed by the floor constraint.
    ///
    /// Position advances with the velocity from before this step; gravity is
    /// applied afterwards. The floor check runs in every stance.
    pub fn integrate(&mut self, y: f32, dt: f32, gravity: f32, ground_y: f32) -> VerticalStep {
        let mut y = y;
        if self.is_airborne() {
            y += self.vertical_velocity * dt;
            self.vertical_velocity -= gravity * dt;
        }

        let mut landed = false;
        if y < ground_y {
            y = ground_y;
            landed = self.is_airborne();
            self.stance = Stance::Grounded;
            self.vertical_velocity = 0.0;
        }
        VerticalStep { y, landed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_grounded() {
        let m = MotionState::new();
        assert_eq!(m.stance(), Stance::Grounded);
        assert!(!m.sprint());
        assert_eq!(m.vertical_velocity(), 0.0);
    }

    #[test]
    fn no_double_jump() {
        let mut m = MotionState::new();
        assert!(m.jump(7.0));
        let mut y = 2.0;
        y = m.integrate(y, 0.1, 14.0, 2.0).y;
        let v = m.vertical_velocity();
        assert!(!m.jump(7.0));
        assert_eq!(m.vertical_velocity(), v);
        assert!(y > 2.0);
    }

    #[test]
    fn position_uses_pre_step_velocity() {
        let mut m = MotionState::new();
        m.jump(10.0);
        let step = m.integrate(0.0, 0.5, 4.0, -100.0);
        assert_eq!(step.y, 5.0);
        assert_eq!(m.vertical_velocity(), 8.0);
        assert!(!step.landed);
    }

    #[test]
    fn grounded_is_not_integrated() {
        let mut m = MotionState::new();
        let step = m.integrate(3.0, 1.0, 14.0, 2.0);
        assert_eq!(step.y, 3.0);
        assert_eq!(m.vertical_velocity(), 0.0);
    }

    #[test]
    fn floor_applies_while_grounded() {
        let mut m = MotionState::new();
        let step = m.integrate(-1.0, 0.016, 14.0, 2.0);
        assert_eq!(step.y, 2.0);
        assert!(!step.landed);
    }

    #[test]
    fn landing_snaps_and_resets() {
        let mut m = MotionState::new();
        m.jump(1.0);
        let step = m.integrate(2.0, 1.0, 14.0, 2.0);
        assert_eq!(step.y, 3.0);
        let step = m.integrate(step.y, 1.0, 14.0, 2.0);
        assert!(step.landed);
        assert_eq!(step.y, 2.0);
        assert_eq!(m.stance(), Stance::Grounded);
        assert_eq!(m.vertical_velocity(), 0.0);
    }
}
