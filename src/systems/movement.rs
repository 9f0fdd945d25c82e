//! Rigid-body integration.
//!
//! This is the thin "physics world" side of the controller boundary: it sums
//! each body's enabled acceleration forces into its velocity and advances its
//! position, once per tick. Constraint solving and collision response are a
//! host concern; the controller only reacts to contact events.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    for (mut position, mut rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        let accel = rigidbody.total_acceleration();
        rigidbody.velocity += accel * time.delta;
        let delta = rigidbody.velocity * time.delta;
        position.pos += delta;
    }
}
