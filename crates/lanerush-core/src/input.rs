//! Input latch - the boundary between host key events and the simulation.
//!
//! Hosts report raw key transitions with [`InputLatch::set_held`] and
//! edge actions with [`InputLatch::trigger`]; the engine polls the
//! latch once per update. Duplicate down/up transitions are idempotent,
//! and repeated triggers between two updates collapse into a single
//! pending action. Whether a pending action has any effect is decided
//! by the engine when it drains the latch, not at event time.

use lanerush_logic::kinematics::steer_axis;

/// A key the host reports as held or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldKey {
    Forward,
    Back,
    Left,
    Right,
    /// Level-triggered: crouching exactly while held.
    Crouch,
}

/// An edge-triggered action, queued until the next update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    AirDash,
    Reset,
}

/// Movement axes sampled from the held keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Steering {
    /// +1 right, -1 left.
    pub horizontal: f32,
    /// +1 toward the camera (back), -1 into the field (forward).
    pub depth: f32,
}

/// Actions latched since the previous drain.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingActions {
    pub jump: bool,
    pub air_dash: bool,
    pub reset: bool,
}

/// Held/latched key state between host events and simulation ticks.
#[derive(Debug, Default)]
pub struct InputLatch {
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
    crouch: bool,
    pending: PendingActions,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Repeating the current state is a no-op.
    pub fn set_held(&mut self, key: HeldKey, held: bool) {
        match key {
            HeldKey::Forward => self.forward = held,
            HeldKey::Back => self.back = held,
            HeldKey::Left => self.left = held,
            HeldKey::Right => self.right = held,
            HeldKey::Crouch => self.crouch = held,
        }
    }

    /// Latch an action for the next update.
    pub fn trigger(&mut self, action: Action) {
        match action {
            Action::Jump => self.pending.jump = true,
            Action::AirDash => self.pending.air_dash = true,
            Action::Reset => self.pending.reset = true,
        }
    }

    /// Current crouch hold (level-triggered, not an edge).
    pub fn crouching(&self) -> bool {
        self.crouch
    }

    /// Sample the movement axes from the held keys.
    pub fn steering(&self) -> Steering {
        Steering {
            horizontal: steer_axis(self.right, self.left),
            depth: steer_axis(self.back, self.forward),
        }
    }

    /// Take and clear the actions latched since the last drain.
    pub fn drain_actions(&mut self) -> PendingActions {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_transitions_are_idempotent() {
        let mut latch = InputLatch::new();
        latch.set_held(HeldKey::Right, true);
        latch.set_held(HeldKey::Right, true);
        assert_eq!(latch.steering().horizontal, 1.0);
        latch.set_held(HeldKey::Right, false);
        latch.set_held(HeldKey::Right, false);
        assert_eq!(latch.steering().horizontal, 0.0);
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut latch = InputLatch::new();
        latch.set_held(HeldKey::Left, true);
        latch.set_held(HeldKey::Right, true);
        assert_eq!(latch.steering().horizontal, 0.0);

        latch.set_held(HeldKey::Forward, true);
        assert_eq!(latch.steering().depth, -1.0);
    }

    #[test]
    fn repeated_triggers_collapse() {
        let mut latch = InputLatch::new();
        latch.trigger(Action::Jump);
        latch.trigger(Action::Jump);
        let drained = latch.drain_actions();
        assert!(drained.jump);
        assert!(!drained.air_dash);
        // Drained latch is empty again.
        assert!(!latch.drain_actions().jump);
    }

    #[test]
    fn crouch_is_level_triggered() {
        let mut latch = InputLatch::new();
        assert!(!latch.crouching());
        latch.set_held(HeldKey::Crouch, true);
        assert!(latch.crouching());
        latch.drain_actions();
        assert!(latch.crouching(), "draining actions must not release crouch");
        latch.set_held(HeldKey::Crouch, false);
        assert!(!latch.crouching());
    }
}
