//! Timed dash with concurrent duration and cooldown timers.
//!
//! Triggering samples the held directional buttons once: each axis gets
//! ±dash speed, opposing pairs cancel to zero. The sampled vector is forced
//! onto the body every tick while dashing, overriding gravity and locomotion;
//! button changes mid-dash have no effect. The cooldown timer starts together
//! with the duration timer and outlives it, so a dash can never retrigger
//! before its cooldown window closes.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::events::timer::TimerFired;
use crate::resources::input::InputSnapshot;
use crate::resources::timers::{TimerAction, TimerQueue};
use crate::resources::tuning::Tuning;

pub fn dash(
    input: Res<InputSnapshot>,
    tuning: Res<Tuning>,
    mut timers: ResMut<TimerQueue>,
    mut fired: MessageReader<TimerFired>,
    mut query: Query<(Entity, &mut Player, &mut RigidBody)>,
) {
    for message in fired.read() {
        let Ok((_, mut player, _)) = query.get_mut(message.target) else {
            continue;
        };
        match message.action {
            TimerAction::DashOver => {
                player.is_dashing = false;
                player.dash_duration = None;
            }
            TimerAction::DashReady => {
                player.can_dash = true;
                player.dash_cooldown = None;
            }
            _ => {}
        }
    }

    for (entity, mut player, mut rigidbody) in query.iter_mut() {
        if input.dash.held && player.can_dash {
            let dir = Vec2::new(
                (input.right.held as i32 - input.left.held as i32) as f32,
                (input.down.held as i32 - input.up.held as i32) as f32,
            );
            player.dash_velocity = dir * tuning.dash_speed;
            player.can_dash = false;
            player.is_dashing = true;
            player.dash_duration = Some(timers.schedule_once(
                tuning.dash_duration_secs(),
                entity,
                TimerAction::DashOver,
            ));
            player.dash_cooldown = Some(timers.schedule_once(
                tuning.dash_cooldown_secs(),
                entity,
                TimerAction::DashReady,
            ));
        }

        if player.is_dashing {
            rigidbody.velocity = player.dash_velocity;
        }
    }
}
