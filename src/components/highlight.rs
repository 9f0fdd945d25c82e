use bevy_ecs::prelude::Component;

/// Marker for a body currently inside the grab zone and eligible for capture.
/// Renderers can use it to dim or outline the body; the controller only adds
/// and removes it.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Highlighted;
