//! Contact messages emitted by the collision detector.
//!
//! Every overlapping collider pair produces one [`ContactMessage`] per tick,
//! tagged with its [`ContactPhase`]. The payload carries everything a consumer
//! needs to pattern-match on (sensor flags, body tags, penetration), so no
//! system has to probe components of possibly-despawned entities.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

use crate::components::bodytag::BodyTag;

/// Where in its lifetime a contact pair currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    /// The pair started overlapping this tick.
    Start,
    /// The pair was already overlapping last tick and still is.
    Active,
    /// The pair stopped overlapping this tick (or one side despawned).
    End,
}

/// One side of a contact pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactSide {
    pub entity: Entity,
    pub sensor: bool,
    pub tag: BodyTag,
}

/// A contact between two colliders. Sides carry no ordering guarantee; use
/// [`ContactMessage::other_of`] to orient a message around a known entity.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ContactMessage {
    pub phase: ContactPhase,
    pub a: ContactSide,
    pub b: ContactSide,
    /// Smallest-axis overlap depth. Zero for `End` contacts.
    pub penetration: f32,
}

impl ContactMessage {
    /// If `entity` participates in this contact, return the other side.
    pub fn other_of(&self, entity: Entity) -> Option<ContactSide> {
        if self.a.entity == entity {
            Some(self.b)
        } else if self.b.entity == entity {
            Some(self.a)
        } else {
            None
        }
    }

    pub fn involves(&self, entity: Entity) -> bool {
        self.a.entity == entity || self.b.entity == entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    fn side(entity: Entity, tag: BodyTag) -> ContactSide {
        ContactSide {
            entity,
            sensor: false,
            tag,
        }
    }

    #[test]
    fn test_other_of_orients_the_pair() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let c = world.spawn_empty().id();

        let msg = ContactMessage {
            phase: ContactPhase::Start,
            a: side(a, BodyTag::Other),
            b: side(b, BodyTag::Lethal),
            penetration: 1.0,
        };

        assert_eq!(msg.other_of(a).unwrap().entity, b);
        assert_eq!(msg.other_of(a).unwrap().tag, BodyTag::Lethal);
        assert_eq!(msg.other_of(b).unwrap().entity, a);
        assert!(msg.other_of(c).is_none());
        assert!(msg.involves(a) && msg.involves(b) && !msg.involves(c));
    }
}
