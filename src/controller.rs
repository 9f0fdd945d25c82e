//! World setup, player spawn/teardown, and the tick driver.
//!
//! The host owns the loop: it samples devices into the
//! [`InputSnapshot`](crate::resources::input::InputSnapshot) resource between
//! ticks and calls [`tick`] once per fixed step. Everything else (contact
//! tracking, the sub-controllers, timers, lifecycle) runs inside the
//! schedule built by [`build_tick_schedule`], in a fixed chain so flags are
//! never stale within a tick.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::grab::{Grab, GrabZone};
use crate::components::highlight::Highlighted;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::{GRAVITY_FORCE, RigidBody};
use crate::components::rotation::Rotation;
use crate::components::touching::{SensorRig, Touching};
use crate::events::contact::ContactMessage;
use crate::events::player::{KillPlayer, PlayerDied, PlayerRespawned, RespawnPlayer};
use crate::events::timer::TimerFired;
use crate::resources::input::InputSnapshot;
use crate::resources::timers::TimerQueue;
use crate::resources::tuning::Tuning;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::collision_detector;
use crate::systems::contact::{reset_touching, track_touching};
use crate::systems::dash::dash;
use crate::systems::grab::{grab_action, grab_capture, grab_zone_follow};
use crate::systems::jump::jump;
use crate::systems::lifecycle::lifecycle;
use crate::systems::locomotion::locomotion;
use crate::systems::movement::movement;
use crate::systems::time::{update_timers, update_world_time};

/// Clear the per-tick input edges once every system has seen them.
fn settle_input(mut input: ResMut<InputSnapshot>) {
    input.settle_edges();
}

/// Advance every message mailbox so last tick's messages age out.
fn flush_messages(
    mut contacts: ResMut<Messages<ContactMessage>>,
    mut timers: ResMut<Messages<TimerFired>>,
    mut kills: ResMut<Messages<KillPlayer>>,
    mut respawns: ResMut<Messages<RespawnPlayer>>,
    mut died: ResMut<Messages<PlayerDied>>,
    mut respawned: ResMut<Messages<PlayerRespawned>>,
) {
    contacts.update();
    timers.update();
    kills.update();
    respawns.update();
    died.update();
    respawned.update();
}

/// Insert every resource and mailbox the tick schedule needs. Existing
/// resources (a pre-loaded [`Tuning`], say) are left untouched.
pub fn init_controller_world(world: &mut World) {
    world.init_resource::<WorldTime>();
    world.init_resource::<InputSnapshot>();
    world.init_resource::<TimerQueue>();
    world.init_resource::<Tuning>();
    world.init_resource::<Messages<ContactMessage>>();
    world.init_resource::<Messages<TimerFired>>();
    world.init_resource::<Messages<KillPlayer>>();
    world.init_resource::<Messages<RespawnPlayer>>();
    world.init_resource::<Messages<PlayerDied>>();
    world.init_resource::<Messages<PlayerRespawned>>();
}

/// Build the per-tick schedule.
///
/// The chain order is the contract: touching flags are cleared before the
/// step moves anything, contacts are rebuilt before any controller reads
/// them, timers fire before their consumers run, and the controllers run
/// locomotion → jump → dash → grab, with lifecycle last.
pub fn build_tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            reset_touching,
            movement,
            track_touching,
            collision_detector,
            update_timers,
            grab_capture,
            locomotion,
            jump,
            dash,
            grab_zone_follow,
            grab_action,
            lifecycle,
            settle_input,
            flush_messages,
        )
            .chain(),
    );
    schedule
}

/// Advance the simulation by one fixed step of `dt` seconds.
pub fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

/// Spawn a player (body, sensor rig, grab zone) at the given position and
/// make it the configured spawn point for respawns.
pub fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    let tuning = world.resource::<Tuning>().clone();
    world.resource_mut::<Tuning>().spawn_point = Vec2::new(x, y);

    let player = world
        .spawn((
            Player::new(tuning.lives),
            Touching::default(),
            SensorRig::for_body(tuning.body_width, tuning.body_height),
            MapPosition::new(x, y),
            RigidBody::with_gravity(tuning.gravity),
            BoxCollider::new(tuning.body_width, tuning.body_height),
        ))
        .id();

    let zone = world
        .spawn((
            GrabZone { owner: player },
            MapPosition::new(
                x + tuning.grab_zone_offset.x,
                y + tuning.grab_zone_offset.y,
            ),
            Rotation::new(tuning.grab_zone_tilt_deg),
            BoxCollider::new(tuning.grab_zone_size.x, tuning.grab_zone_size.y).as_sensor(),
        ))
        .id();

    world.entity_mut(player).insert(Grab::new(zone));
    player
}

/// Tear a player down: cancel every timer it scheduled, release anything it
/// carries (clearing the capture highlight), and despawn both the body and
/// the grab zone. Safe to call again after the player is gone.
pub fn despawn_player(world: &mut World, player: Entity) {
    let Some(grab) = world.get::<Grab>(player).copied() else {
        return;
    };

    world.resource_mut::<TimerQueue>().cancel_all_for(player);

    if let Some(caught) = grab.caught {
        if grab.is_grabbing {
            if let Some(mut body) = world.get_mut::<RigidBody>(caught) {
                body.set_force_enabled(GRAVITY_FORCE, true);
            }
        }
        if let Ok(mut caught) = world.get_entity_mut(caught) {
            caught.remove::<Highlighted>();
        }
    }

    if world.get_entity(grab.zone).is_ok() {
        world.despawn(grab.zone);
    }
    world.despawn(player);
}

/// Request a scripted death; handled by the lifecycle system next tick.
pub fn kill_player(world: &mut World, player: Entity) {
    world
        .resource_mut::<Messages<KillPlayer>>()
        .write(KillPlayer(player));
}

/// Request a scripted respawn; handled by the lifecycle system next tick.
pub fn respawn_player(world: &mut World, player: Entity) {
    world
        .resource_mut::<Messages<RespawnPlayer>>()
        .write(RespawnPlayer(player));
}

/// Player position, for camera and HUD consumers.
pub fn player_position(world: &World, player: Entity) -> Option<Vec2> {
    world.get::<MapPosition>(player).map(|p| p.pos)
}

/// Whether the player is currently alive.
pub fn player_is_alive(world: &World, player: Entity) -> Option<bool> {
    world.get::<Player>(player).map(|p| p.is_alive())
}
