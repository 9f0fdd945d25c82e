//! Wall/ground contact tracking.
//!
//! `reset_touching` runs first in the tick chain, so the flags only ever
//! describe the current tick. `track_touching` then tests the player's three
//! sensor boxes against every solid collider and sets the flags.
//!
//! For the side sensors, the player is also nudged away from the wall until
//! only a small sliver of overlap remains. The sliver keeps the sensor in
//! contact on the next tick even if the player does not move, so the flag
//! cannot flicker, while making it impossible to hang on a wall by pushing
//! into it.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::touching::{SensorRig, Touching};
use crate::resources::tuning::Tuning;

/// Clear all touching flags. Must run before any contact is processed.
pub fn reset_touching(mut query: Query<&mut Touching>) {
    for mut touching in query.iter_mut() {
        touching.reset();
    }
}

/// Rebuild the touching flags from sensor overlaps and push the player out of
/// walls down to the configured overlap sliver.
pub fn track_touching(
    tuning: Res<Tuning>,
    mut players: Query<(&mut MapPosition, &SensorRig, &mut Touching), With<Player>>,
    solids: Query<(&MapPosition, &BoxCollider), Without<Player>>,
) {
    let sliver = tuning.wall_overlap_sliver;
    for (mut position, rig, mut touching) in players.iter_mut() {
        for (solid_position, solid) in solids.iter() {
            if solid.sensor {
                continue;
            }
            if rig
                .bottom
                .overlap_depth(position.pos, solid, solid_position.pos)
                .is_some()
            {
                touching.ground = true;
            }
            if let Some(depth) = rig
                .left
                .overlap_depth(position.pos, solid, solid_position.pos)
            {
                touching.left = true;
                if depth.x > sliver {
                    position.pos.x += depth.x - sliver;
                }
            }
            if let Some(depth) = rig
                .right
                .overlap_depth(position.pos, solid, solid_position.pos)
            {
                touching.right = true;
                if depth.x > sliver {
                    position.pos.x -= depth.x - sliver;
                }
            }
        }
    }
}
