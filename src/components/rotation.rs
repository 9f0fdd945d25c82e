use bevy_ecs::prelude::Component;

/// Rotation angle in degrees. Used by the grab zone to tilt with facing;
/// renderers may consume it for sprite orientation.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }
}
