//! Single-shot jump with a cooldown.
//!
//! The ground sensor keeps reporting contact for a few ticks after liftoff,
//! so an immediate re-check would double-trigger; the cooldown bridges that
//! window. Holding the button does not retrigger while cooling down.

use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::touching::Touching;
use crate::events::timer::TimerFired;
use crate::resources::input::InputSnapshot;
use crate::resources::timers::{TimerAction, TimerQueue};
use crate::resources::tuning::Tuning;

pub fn jump(
    input: Res<InputSnapshot>,
    tuning: Res<Tuning>,
    mut timers: ResMut<TimerQueue>,
    mut fired: MessageReader<TimerFired>,
    mut query: Query<(Entity, &mut Player, &mut RigidBody, &Touching)>,
) {
    // cooldowns that elapsed this tick
    for message in fired.read() {
        if message.action != TimerAction::JumpReady {
            continue;
        }
        if let Ok((_, mut player, _, _)) = query.get_mut(message.target) {
            player.can_jump = true;
            player.jump_cooldown = None;
        }
    }

    for (entity, mut player, mut rigidbody, touching) in query.iter_mut() {
        if input.jump.held && player.can_jump && touching.ground {
            rigidbody.velocity.y = tuning.jump_velocity;
            player.can_jump = false;
            player.jump_cooldown = Some(timers.schedule_once(
                tuning.jump_cooldown_secs(),
                entity,
                TimerAction::JumpReady,
            ));
        }
    }
}
