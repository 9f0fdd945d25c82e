//! Grab capture state and the marker for the grab zone entity.

use bevy_ecs::prelude::{Component, Entity};

/// Capture/carry state, stored on the player.
///
/// `caught` is the most recent capturable body seen by the grab zone; it is
/// not an ownership relation, just an entity id that queries may miss once the
/// body despawns. At most one body is referenced at a time, latest wins.
#[derive(Component, Clone, Copy, Debug)]
pub struct Grab {
    /// The sensor entity that sweeps in front of the player.
    pub zone: Entity,
    /// Body currently eligible for grabbing, if any.
    pub caught: Option<Entity>,
    /// True while the caught body is carried (its gravity disabled).
    pub is_grabbing: bool,
}

impl Grab {
    pub fn new(zone: Entity) -> Self {
        Self {
            zone,
            caught: None,
            is_grabbing: false,
        }
    }
}

/// Marker on the sensor entity that belongs to a player's [`Grab`].
#[derive(Component, Clone, Copy, Debug)]
pub struct GrabZone {
    pub owner: Entity,
}
