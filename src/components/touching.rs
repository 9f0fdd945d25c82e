//! Wall/ground contact flags and the player's sensor layout.
//!
//! The player body is conceptually a compound shape:
//!
//! ```text
//!                  A = main body
//!
//!                   +---------+
//!                   |         |
//!                 +-+         +-+
//!       B = left  | |         | |  C = right
//!     wall sensor |B|    A    |C|  wall sensor
//!                 | |         | |
//!                 +-+         +-+
//!                   |         |
//!                   +-+-----+-+
//!                     |  D  |
//!                     +-----+
//!
//!                D = ground sensor
//! ```
//!
//! The main body is what collides with the world; the thin sensor boxes only
//! feed the [`Touching`] flags, which the contact system rebuilds every tick.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::boxcollider::BoxCollider;

/// Which surfaces the player is touching this tick.
///
/// Owned exclusively by the contact systems; everything else reads it.
/// Cleared at the start of every tick, before any contact is processed.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Touching {
    pub left: bool,
    pub right: bool,
    pub ground: bool,
}

impl Touching {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The three sensor boxes attached to the player at fixed offsets.
#[derive(Component, Clone, Copy, Debug)]
pub struct SensorRig {
    pub left: BoxCollider,
    pub right: BoxCollider,
    pub bottom: BoxCollider,
}

impl SensorRig {
    /// Sensor layout for a main body of the given size: thin vertical strips
    /// hugging each side over the middle half, and a short strip under the feet.
    pub fn for_body(width: f32, height: f32) -> Self {
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        Self {
            left: BoxCollider {
                size: Vec2::new(2.0, height * 0.5),
                offset: Vec2::new(-half_w - 2.0, -height * 0.25),
                sensor: true,
            },
            right: BoxCollider {
                size: Vec2::new(2.0, height * 0.5),
                offset: Vec2::new(half_w, -height * 0.25),
                sensor: true,
            },
            bottom: BoxCollider {
                size: Vec2::new(width * 0.4, 2.0),
                offset: Vec2::new(-width * 0.2, half_h),
                sensor: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_all_flags() {
        let mut t = Touching {
            left: true,
            right: true,
            ground: true,
        };
        t.reset();
        assert_eq!(t, Touching::default());
    }

    #[test]
    fn test_rig_sensors_are_sensors() {
        let rig = SensorRig::for_body(20.0, 64.0);
        assert!(rig.left.sensor);
        assert!(rig.right.sensor);
        assert!(rig.bottom.sensor);
    }

    #[test]
    fn test_rig_sides_flank_the_body() {
        let rig = SensorRig::for_body(20.0, 64.0);
        // left sensor sits entirely left of the body, right one entirely right
        assert!(rig.left.offset.x + rig.left.size.x <= -10.0);
        assert!(rig.right.offset.x >= 10.0);
        // bottom sensor starts at the feet
        assert_eq!(rig.bottom.offset.y, 32.0);
    }
}
