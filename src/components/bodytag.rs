use bevy_ecs::prelude::Component;

/// Gameplay classification of a body, carried on contact messages so systems
/// can match on it instead of probing ad hoc metadata.
///
/// A missing `BodyTag` component is treated as [`BodyTag::Other`].
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BodyTag {
    /// Eligible for the grab mechanic.
    Capturable,
    /// Contact kills the player.
    Lethal,
    /// No special contact behavior.
    #[default]
    Other,
}
