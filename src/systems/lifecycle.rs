//! Death and respawn.
//!
//! A player dies on contact with a lethal body, by falling past the world
//! bound, or on an external [`KillPlayer`] request. Death is idempotent:
//! while `dead` is set every further trigger is dropped, so the lethal check
//! is effectively disarmed until the respawn completes.
//!
//! Dying releases any carried body, decrements the life counter, and starts
//! the respawn timer; when it fires the player reappears at the spawn point
//! with zero velocity.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::bodytag::BodyTag;
use crate::components::grab::Grab;
use crate::components::highlight::Highlighted;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::{GRAVITY_FORCE, RigidBody};
use crate::events::contact::{ContactMessage, ContactPhase};
use crate::events::player::{KillPlayer, PlayerDied, PlayerRespawned, RespawnPlayer};
use crate::events::timer::TimerFired;
use crate::resources::timers::{TimerAction, TimerQueue};
use crate::resources::tuning::Tuning;

fn respawn_now(
    tuning: &Tuning,
    entity: Entity,
    position: &mut MapPosition,
    rigidbody: &mut RigidBody,
    player: &mut Player,
    respawned: &mut MessageWriter<PlayerRespawned>,
) {
    position.pos = tuning.spawn_point;
    rigidbody.velocity = Vec2::ZERO;
    player.dead = false;
    player.respawn_timer = None;
    respawned.write(PlayerRespawned { player: entity });
    info!("player {:?} respawned at {:?}", entity, tuning.spawn_point);
}

#[allow(clippy::too_many_arguments)]
pub fn lifecycle(
    tuning: Res<Tuning>,
    mut timers: ResMut<TimerQueue>,
    mut contacts: MessageReader<ContactMessage>,
    mut fired: MessageReader<TimerFired>,
    mut kill_requests: MessageReader<KillPlayer>,
    mut respawn_requests: MessageReader<RespawnPlayer>,
    mut died: MessageWriter<PlayerDied>,
    mut respawned: MessageWriter<PlayerRespawned>,
    mut players: Query<(
        Entity,
        &mut MapPosition,
        &mut RigidBody,
        &mut Player,
        &mut Grab,
    )>,
    mut bodies: Query<&mut RigidBody, Without<Player>>,
    mut commands: Commands,
) {
    let contact_events: Vec<ContactMessage> = contacts.read().copied().collect();
    let fired_events: Vec<TimerFired> = fired.read().copied().collect();
    let kill_list: Vec<Entity> = kill_requests.read().map(|k| k.0).collect();
    let respawn_list: Vec<Entity> = respawn_requests.read().map(|r| r.0).collect();

    for (entity, mut position, mut rigidbody, mut player, mut grab) in players.iter_mut() {
        // respawn: timer expiry or external request
        let timer_elapsed = fired_events
            .iter()
            .any(|f| f.target == entity && f.action == TimerAction::Respawn);
        let requested = respawn_list.contains(&entity);
        if timer_elapsed || requested {
            if requested {
                if let Some(handle) = player.respawn_timer.take() {
                    timers.cancel(handle);
                }
            }
            respawn_now(
                &tuning,
                entity,
                &mut position,
                &mut rigidbody,
                &mut player,
                &mut respawned,
            );
        }

        // death triggers
        let lethal_touch = contact_events.iter().any(|m| {
            m.phase == ContactPhase::Start
                && m.other_of(entity)
                    .is_some_and(|other| !other.sensor && other.tag == BodyTag::Lethal)
        });
        let fell_out = position.pos.y > tuning.fall_limit;
        let should_die = lethal_touch || fell_out || kill_list.contains(&entity);

        if !should_die || player.dead {
            continue;
        }

        // drop anything carried before going down
        if grab.is_grabbing {
            if let Some(caught) = grab.caught {
                if let Ok(mut body) = bodies.get_mut(caught) {
                    body.set_force_enabled(GRAVITY_FORCE, true);
                }
            }
            grab.is_grabbing = false;
        }
        if let Some(caught) = grab.caught.take() {
            if let Ok(mut caught) = commands.get_entity(caught) {
                caught.remove::<Highlighted>();
            }
        }

        player.life = player.life.saturating_sub(1);
        player.dead = true;
        player.respawn_timer = Some(timers.schedule_once(
            tuning.respawn_delay_secs(),
            entity,
            TimerAction::Respawn,
        ));
        died.write(PlayerDied {
            player: entity,
            lives_left: player.life,
        });
        info!("player {:?} died, {} lives left", entity, player.life);
    }
}
