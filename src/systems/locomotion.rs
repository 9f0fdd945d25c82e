//! Horizontal locomotion.
//!
//! Maintains the named drive force on the player's rigid body from the held
//! left/right buttons: full acceleration on the ground, reduced in the air,
//! and none at all when airborne and pressing into a wall that is already
//! touched (otherwise the player could pin objects against walls mid-air).
//! Facing follows the button that actually produced drive.
//!
//! Finally the horizontal velocity is clamped; without the clamp the drive
//! force would accumulate speed forever. Vertical velocity is left alone so
//! gravity and jumps are unaffected.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::player::{Facing, Player};
use crate::components::rigidbody::{DRIVE_FORCE, RigidBody};
use crate::components::touching::Touching;
use crate::resources::input::InputSnapshot;
use crate::resources::tuning::Tuning;

pub fn locomotion(
    input: Res<InputSnapshot>,
    tuning: Res<Tuning>,
    mut query: Query<(&mut Player, &mut RigidBody, &Touching)>,
) {
    for (mut player, mut rigidbody, touching) in query.iter_mut() {
        let on_ground = touching.ground;
        let accel = if on_ground {
            tuning.accel_ground
        } else {
            tuning.accel_air
        };

        let mut drive = 0.0;
        if input.left.held {
            // don't push into a wall while airborne
            if !(!on_ground && touching.left) {
                drive = -accel;
                player.facing = Facing::Left;
            }
        } else if input.right.held {
            if !(!on_ground && touching.right) {
                drive = accel;
                player.facing = Facing::Right;
            }
        }

        if drive != 0.0 {
            rigidbody.add_force(DRIVE_FORCE, Vec2::new(drive, 0.0));
        } else {
            rigidbody.remove_force(DRIVE_FORCE);
        }

        let clamp = tuning.max_run_speed;
        rigidbody.velocity.x = rigidbody.velocity.x.clamp(-clamp, clamp);
    }
}
