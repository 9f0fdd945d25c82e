//! Expired-timer messages.
//!
//! The timer system drains the [`TimerQueue`](crate::resources::timers::TimerQueue)
//! once per tick and publishes each expired entry as a [`TimerFired`] message.
//! Consumers match on the action and ignore messages for entities they no
//! longer know about.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

use crate::resources::timers::TimerAction;

/// A one-shot timer elapsed.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    /// The entity the timer was scheduled for.
    pub target: Entity,
    /// What the timer was supposed to do.
    pub action: TimerAction,
}
