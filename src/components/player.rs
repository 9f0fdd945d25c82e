//! The controller's own state: facing, action gates, and owned timer handles.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::resources::timers::TimerHandle;

/// Horizontal facing direction. Drives the grab zone placement and is exposed
/// for renderers to flip sprites.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Per-player controller state.
///
/// The booleans are gates for the jump/dash state machines; each `false` gate
/// corresponds to exactly one pending timer whose handle is stored next to it,
/// so teardown can cancel everything the player scheduled.
#[derive(Component, Clone, Debug)]
pub struct Player {
    pub facing: Facing,

    pub can_jump: bool,
    pub jump_cooldown: Option<TimerHandle>,

    pub can_dash: bool,
    pub is_dashing: bool,
    pub dash_velocity: Vec2,
    pub dash_duration: Option<TimerHandle>,
    pub dash_cooldown: Option<TimerHandle>,

    pub life: u32,
    pub dead: bool,
    pub respawn_timer: Option<TimerHandle>,
}

impl Player {
    pub fn new(lives: u32) -> Self {
        Self {
            facing: Facing::Right,
            can_jump: true,
            jump_cooldown: None,
            can_dash: true,
            is_dashing: false,
            dash_velocity: Vec2::ZERO,
            dash_duration: None,
            dash_cooldown: None,
            life: lives,
            dead: false,
            respawn_timer: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_is_ready() {
        let p = Player::new(3);
        assert_eq!(p.facing, Facing::Right);
        assert!(p.can_jump);
        assert!(p.can_dash);
        assert!(!p.is_dashing);
        assert!(!p.dead);
        assert_eq!(p.life, 3);
        assert!(p.jump_cooldown.is_none());
        assert!(p.dash_duration.is_none());
        assert!(p.dash_cooldown.is_none());
        assert!(p.respawn_timer.is_none());
    }

    #[test]
    fn test_facing_sign() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
    }
}
