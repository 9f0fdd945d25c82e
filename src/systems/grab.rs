//! Grab zone placement, capture bookkeeping, and carry/release.
//!
//! The zone is a tilted sensor box swept in front of the player; it flips to
//! the facing side every tick. Capturable bodies entering it become the
//! current grab candidate (latest wins, no queue) and get a [`Highlighted`]
//! marker; the candidate is dropped again when it leaves the zone, unless it
//! is being carried at that moment (picking a body up moves it out of the
//! zone, which must not break the carry).
//!
//! Carrying is a one-shot snap: on the grab press the body loses gravity and
//! is placed at the carry offset once, not re-pinned every tick. On release
//! only gravity is restored, the candidate reference stays, so press-release-
//! press without leaving the zone grabs the same body again.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{debug, trace};

use crate::components::bodytag::BodyTag;
use crate::components::grab::{Grab, GrabZone};
use crate::components::highlight::Highlighted;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::{GRAVITY_FORCE, RigidBody};
use crate::components::rotation::Rotation;
use crate::events::contact::{ContactMessage, ContactPhase};
use crate::resources::input::InputSnapshot;
use crate::resources::tuning::Tuning;

/// Track which capturable body is inside the grab zone.
pub fn grab_capture(
    mut contacts: MessageReader<ContactMessage>,
    mut players: Query<&mut Grab>,
    mut commands: Commands,
) {
    for message in contacts.read() {
        for mut grab in players.iter_mut() {
            let Some(other) = message.other_of(grab.zone) else {
                continue;
            };
            if other.sensor || other.tag != BodyTag::Capturable {
                continue;
            }
            match message.phase {
                ContactPhase::Start => {
                    // a carried body keeps the reference until release
                    if grab.is_grabbing || grab.caught == Some(other.entity) {
                        continue;
                    }
                    if let Some(previous) = grab.caught {
                        if let Ok(mut previous) = commands.get_entity(previous) {
                            previous.remove::<Highlighted>();
                        }
                    }
                    if let Ok(mut entity) = commands.get_entity(other.entity) {
                        entity.insert(Highlighted);
                    }
                    grab.caught = Some(other.entity);
                    debug!("grab candidate: {:?}", other.entity);
                }
                ContactPhase::End => {
                    if grab.caught == Some(other.entity) && !grab.is_grabbing {
                        grab.caught = None;
                        if let Ok(mut entity) = commands.get_entity(other.entity) {
                            entity.remove::<Highlighted>();
                        }
                    }
                }
                ContactPhase::Active => {}
            }
        }
    }
}

/// Keep the zone at the facing-side offset with the facing-side tilt.
pub fn grab_zone_follow(
    tuning: Res<Tuning>,
    players: Query<(&MapPosition, &Player, &Grab)>,
    mut zones: Query<(&mut MapPosition, &mut Rotation), (With<GrabZone>, Without<Player>)>,
) {
    for (player_position, player, grab) in players.iter() {
        let Ok((mut zone_position, mut rotation)) = zones.get_mut(grab.zone) else {
            continue;
        };
        let sign = player.facing.sign();
        zone_position.pos = player_position.pos
            + Vec2::new(tuning.grab_zone_offset.x * sign, tuning.grab_zone_offset.y);
        rotation.degrees = tuning.grab_zone_tilt_deg * sign;
    }
}

/// Pick up the candidate on the grab press edge, drop it on the release edge.
pub fn grab_action(
    input: Res<InputSnapshot>,
    tuning: Res<Tuning>,
    mut players: Query<(&MapPosition, &mut Grab), With<Player>>,
    mut bodies: Query<(&mut MapPosition, &mut RigidBody), Without<Player>>,
) {
    for (player_position, mut grab) in players.iter_mut() {
        if input.grab.just_pressed && !grab.is_grabbing {
            let Some(caught) = grab.caught else {
                continue;
            };
            if let Ok((mut body_position, mut body)) = bodies.get_mut(caught) {
                body.set_force_enabled(GRAVITY_FORCE, false);
                body.velocity = Vec2::ZERO;
                body_position.pos = player_position.pos + tuning.carry_offset;
                grab.is_grabbing = true;
                debug!("carrying {:?}", caught);
            } else {
                trace!("grab candidate {:?} vanished before pickup", caught);
                grab.caught = None;
            }
        } else if input.grab.just_released && grab.is_grabbing {
            if let Some(caught) = grab.caught {
                if let Ok((_, mut body)) = bodies.get_mut(caught) {
                    body.set_force_enabled(GRAVITY_FORCE, true);
                }
            }
            grab.is_grabbing = false;
        }
    }
}
