//! Overlap detection with contact phases.
//!
//! Every tick, all collider pairs are tested for AABB overlap. Comparing the
//! result with the previous tick's pairs yields the contact phase:
//! new pairs emit `Start`, surviving pairs `Active`, vanished pairs `End`.
//! Pairs where both sides are sensors are ignored entirely.
//!
//! The sides captured at overlap time are kept in the detector's local state,
//! so `End` messages can still describe a body that despawned mid-contact.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::bodytag::BodyTag;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::events::contact::{ContactMessage, ContactPhase, ContactSide};

/// Pairs that overlapped last tick, keyed in normalized entity order.
type ContactLedger = FxHashMap<(Entity, Entity), (ContactSide, ContactSide)>;

fn pair_key(a: Entity, b: Entity) -> (Entity, Entity) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Detect overlapping collider pairs and emit phased [`ContactMessage`]s.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider, Option<&BodyTag>)>,
    mut ledger: Local<ContactLedger>,
    mut writer: MessageWriter<ContactMessage>,
) {
    let mut current: ContactLedger = FxHashMap::default();

    for [
        (entity_a, position_a, collider_a, tag_a),
        (entity_b, position_b, collider_b, tag_b),
    ] in query.iter_combinations()
    {
        if collider_a.sensor && collider_b.sensor {
            continue;
        }
        let Some(depth) = collider_a.overlap_depth(position_a.pos, collider_b, position_b.pos)
        else {
            continue;
        };

        let side_a = ContactSide {
            entity: entity_a,
            sensor: collider_a.sensor,
            tag: tag_a.copied().unwrap_or_default(),
        };
        let side_b = ContactSide {
            entity: entity_b,
            sensor: collider_b.sensor,
            tag: tag_b.copied().unwrap_or_default(),
        };

        let phase = if ledger.contains_key(&pair_key(entity_a, entity_b)) {
            ContactPhase::Active
        } else {
            ContactPhase::Start
        };
        writer.write(ContactMessage {
            phase,
            a: side_a,
            b: side_b,
            penetration: depth.x.min(depth.y),
        });
        current.insert(pair_key(entity_a, entity_b), (side_a, side_b));
    }

    // pairs that existed last tick but not anymore
    for (key, (side_a, side_b)) in ledger.iter() {
        if !current.contains_key(key) {
            writer.write(ContactMessage {
                phase: ContactPhase::End,
                a: *side_a,
                b: *side_b,
                penetration: 0.0,
            });
        }
    }

    *ledger = current;
}
