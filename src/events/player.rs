//! Lifecycle commands and notifications.
//!
//! [`KillPlayer`] and [`RespawnPlayer`] are commands a host scene may write
//! for scripted deaths and checkpoints; the lifecycle system consumes them on
//! the next tick. [`PlayerDied`] and [`PlayerRespawned`] are notifications for
//! HUD, camera, and audio consumers.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

/// Ask the lifecycle system to kill a player. Ignored while already dead.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillPlayer(pub Entity);

/// Ask the lifecycle system to respawn a player immediately, cancelling any
/// pending respawn timer.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RespawnPlayer(pub Entity);

/// A player just died.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDied {
    pub player: Entity,
    /// Lives remaining after this death.
    pub lives_left: u32,
}

/// A player just reappeared at the spawn point.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerRespawned {
    pub player: Entity,
}
