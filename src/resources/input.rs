//! Per-tick logical-button snapshot.
//!
//! The host samples its devices (keyboard, gamepad, whatever it merges) into
//! an [`InputSnapshot`] before each tick. Every system reads the same
//! snapshot, so mid-tick device changes can never make sub-controllers
//! disagree about what is held.

use bevy_ecs::prelude::Resource;

/// State of one logical button within the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Whether the button is currently held.
    pub held: bool,
    /// Whether the button went down this tick.
    pub just_pressed: bool,
    /// Whether the button went up this tick.
    pub just_released: bool,
}

/// The logical buttons the controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Jump,
    Grab,
    Dash,
}

/// Resource holding the sampled button states for the current tick.
///
/// Edge flags (`just_pressed` / `just_released`) are cleared by the schedule
/// at the end of every tick; the host only reports transitions.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub left: ButtonState,
    pub right: ButtonState,
    pub up: ButtonState,
    pub down: ButtonState,
    pub jump: ButtonState,
    pub grab: ButtonState,
    pub dash: ButtonState,
}

impl InputSnapshot {
    fn state_mut(&mut self, button: Button) -> &mut ButtonState {
        match button {
            Button::Left => &mut self.left,
            Button::Right => &mut self.right,
            Button::Up => &mut self.up,
            Button::Down => &mut self.down,
            Button::Jump => &mut self.jump,
            Button::Grab => &mut self.grab,
            Button::Dash => &mut self.dash,
        }
    }

    /// Report a button going down. Held stays set until [`release`](Self::release).
    pub fn press(&mut self, button: Button) {
        let state = self.state_mut(button);
        if !state.held {
            state.just_pressed = true;
        }
        state.held = true;
    }

    /// Report a button going up.
    pub fn release(&mut self, button: Button) {
        let state = self.state_mut(button);
        if state.held {
            state.just_released = true;
        }
        state.held = false;
    }

    /// Clear the per-tick edge flags. Runs at the end of each tick.
    pub fn settle_edges(&mut self) {
        for state in [
            &mut self.left,
            &mut self.right,
            &mut self.up,
            &mut self.down,
            &mut self.jump,
            &mut self.grab,
            &mut self.dash,
        ] {
            state.just_pressed = false;
            state.just_released = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_held_and_edge() {
        let mut input = InputSnapshot::default();
        input.press(Button::Jump);
        assert!(input.jump.held);
        assert!(input.jump.just_pressed);
        assert!(!input.jump.just_released);
    }

    #[test]
    fn test_press_while_held_is_not_an_edge() {
        let mut input = InputSnapshot::default();
        input.press(Button::Grab);
        input.settle_edges();
        input.press(Button::Grab);
        assert!(input.grab.held);
        assert!(!input.grab.just_pressed);
    }

    #[test]
    fn test_release_sets_edge_only_when_held() {
        let mut input = InputSnapshot::default();
        input.release(Button::Dash);
        assert!(!input.dash.just_released);

        input.press(Button::Dash);
        input.settle_edges();
        input.release(Button::Dash);
        assert!(!input.dash.held);
        assert!(input.dash.just_released);
    }

    #[test]
    fn test_settle_edges_preserves_held() {
        let mut input = InputSnapshot::default();
        input.press(Button::Left);
        input.settle_edges();
        assert!(input.left.held);
        assert!(!input.left.just_pressed);
    }
}
