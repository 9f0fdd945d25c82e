use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) of an entity, in map units.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}

impl From<Vec2> for MapPosition {
    fn from(pos: Vec2) -> Self {
        Self { pos }
    }
}
