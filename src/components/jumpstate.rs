//! Jump state machine for kinematic actors.
//!
//! [`JumpState`] tracks whether an actor stands on a platform, is in a
//! jump-initiated ascent, and how much of its double-jump budget is used.
//! The physical side of a jump (the vertical impulse) is applied by
//! [`KinematicActor::request_jump`](crate::components::kinematicactor::KinematicActor::request_jump);
//! this type only owns the discrete state.
//!
//! Transitions:
//! - `Grounded --take_off--> Rising` (`jump_count + 1`)
//! - airborne + floor contact while descending, `!is_jumping` --> `Grounded`
//! - airborne + floor contact while descending, `is_jumping` --> still
//!   airborne, `is_jumping` cleared
//! - second jump taken --> `Grounded` immediately, without a landing

/// Jumps available before the budget resets.
pub const MAX_JUMPS: u8 = 2;

/// Coarse vertical phase, mostly for display and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    Rising,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpState {
    pub phase: JumpPhase,
    /// Set by a jump, cleared by the first descending floor contact or by the
    /// terminal second jump. While set, floor contacts do not snap.
    pub is_jumping: bool,
    pub is_on_floor: bool,
    /// Jumps taken since the last reset, always `< MAX_JUMPS` between calls.
    pub jump_count: u8,
    /// Set when the terminal jump fired; cleared at the start of the next
    /// frame. Makes further requests in the same frame no-ops.
    budget_spent: bool,
}

impl Default for JumpState {
    fn default() -> Self {
        Self {
            phase: JumpPhase::Grounded,
            is_jumping: false,
            is_on_floor: true,
            jump_count: 0,
            budget_spent: false,
        }
    }
}

impl JumpState {
    /// Whether a jump request would be accepted right now.
    pub fn can_jump(&self) -> bool {
        !self.budget_spent && self.jump_count < MAX_JUMPS
    }

    /// Apply the state side of a jump. Returns false (and changes nothing)
    /// when the budget is exhausted.
    pub fn take_off(&mut self) -> bool {
        if !self.can_jump() {
            return false;
        }
        self.is_jumping = true;
        self.is_on_floor = false;
        self.jump_count += 1;
        self.phase = JumpPhase::Rising;

        if self.jump_count == MAX_JUMPS {
            self.is_jumping = false;
            self.is_on_floor = true;
            self.jump_count = 0;
            self.phase = JumpPhase::Grounded;
            self.budget_spent = true;
        }
        true
    }

    /// Confirmed landing on a platform surface.
    pub fn land(&mut self) {
        self.is_on_floor = true;
        self.is_jumping = false;
        self.jump_count = 0;
        self.phase = JumpPhase::Grounded;
    }

    /// Re-arm the budget for a new frame.
    pub fn begin_frame(&mut self) {
        self.budget_spent = false;
    }

    /// Recompute the phase after integration and collision resolution.
    pub fn update_phase(&mut self, vertical_velocity: f32, grounded_this_frame: bool) {
        self.phase = if grounded_this_frame || (self.is_on_floor && vertical_velocity == 0.0) {
            JumpPhase::Grounded
        } else if vertical_velocity > 0.0 {
            JumpPhase::Rising
        } else {
            JumpPhase::Falling
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_grounded() {
        let js = JumpState::default();
        assert_eq!(js.phase, JumpPhase::Grounded);
        assert!(js.is_on_floor);
        assert!(!js.is_jumping);
        assert_eq!(js.jump_count, 0);
        assert!(js.can_jump());
    }

    #[test]
    fn test_first_take_off() {
        let mut js = JumpState::default();
        assert!(js.take_off());
        assert_eq!(js.phase, JumpPhase::Rising);
        assert!(js.is_jumping);
        assert!(!js.is_on_floor);
        assert_eq!(js.jump_count, 1);
    }

    #[test]
    fn test_second_take_off_self_resets() {
        let mut js = JumpState::default();
        assert!(js.take_off());
        assert!(js.take_off());
        assert_eq!(js.phase, JumpPhase::Grounded);
        assert!(!js.is_jumping);
        assert!(js.is_on_floor);
        assert_eq!(js.jump_count, 0);
        assert!(!js.can_jump());
    }

    #[test]
    fn test_third_take_off_same_frame_is_noop() {
        let mut js = JumpState::default();
        js.take_off();
        js.take_off();
        let before = js;
        assert!(!js.take_off());
        assert_eq!(js, before);
    }

    #[test]
    fn test_begin_frame_rearms_budget() {
        let mut js = JumpState::default();
        js.take_off();
        js.take_off();
        js.begin_frame();
        assert!(js.can_jump());
        assert!(js.take_off());
        assert_eq!(js.jump_count, 1);
    }

    #[test]
    fn test_land_resets_count() {
        let mut js = JumpState::default();
        js.take_off();
        js.is_jumping = false;
        js.land();
        assert_eq!(js.phase, JumpPhase::Grounded);
        assert!(js.is_on_floor);
        assert_eq!(js.jump_count, 0);
    }

    #[test]
    fn test_update_phase() {
        let mut js = JumpState::default();
        js.take_off();
        js.update_phase(0.5, false);
        assert_eq!(js.phase, JumpPhase::Rising);
        js.update_phase(-0.5, false);
        assert_eq!(js.phase, JumpPhase::Falling);
        js.update_phase(-0.5, true);
        assert_eq!(js.phase, JumpPhase::Grounded);
    }

    #[test]
    fn test_update_phase_on_floor_at_rest() {
        let mut js = JumpState::default();
        js.update_phase(0.0, false);
        assert_eq!(js.phase, JumpPhase::Grounded);
        // walked off a ledge: still flagged on floor, but visibly falling
        js.update_phase(-0.05, false);
        assert_eq!(js.phase, JumpPhase::Falling);
    }
}
