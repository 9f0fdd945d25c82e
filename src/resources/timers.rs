//! Cooperative one-shot timer queue.
//!
//! Controllers schedule delayed actions here instead of holding free-floating
//! callbacks: each entry targets an entity and names a [`TimerAction`], and
//! the returned [`TimerHandle`] can cancel it. The timer system drains expired
//! entries once per tick and publishes them as
//! [`TimerFired`](crate::events::timer::TimerFired) messages, which the
//! owning systems consume. A fired timer whose target entity is gone is
//! simply ignored by its consumer.

use bevy_ecs::prelude::{Entity, Resource};

/// Opaque handle to a scheduled timer; cancelling a handle that already fired
/// or was cancelled is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// What to do when a timer elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Jump cooldown elapsed; the player may jump again.
    JumpReady,
    /// Dash duration elapsed; stop forcing the dash velocity.
    DashOver,
    /// Dash cooldown elapsed; the player may dash again.
    DashReady,
    /// Respawn delay elapsed; put the player back at the spawn point.
    Respawn,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    handle: TimerHandle,
    remaining: f32,
    target: Entity,
    action: TimerAction,
}

/// Queue of pending one-shot timers.
#[derive(Resource, Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: Vec<Scheduled>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire on `target` after `delay` seconds.
    pub fn schedule_once(&mut self, delay: f32, target: Entity, action: TimerAction) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            handle,
            remaining: delay.max(0.0),
            target,
            action,
        });
        handle
    }

    /// Cancel a pending timer. Returns true if it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    /// Cancel every pending timer targeting `entity`. Returns how many were
    /// dropped. Called on teardown so no action can fire against a despawned
    /// player.
    pub fn cancel_all_for(&mut self, entity: Entity) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| t.target != entity);
        before - self.pending.len()
    }

    /// Whether the given handle is still pending.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|t| t.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance all timers by `dt` seconds and return the entries that expired,
    /// in scheduling order.
    pub fn advance(&mut self, dt: f32) -> Vec<(Entity, TimerAction)> {
        let mut fired = Vec::new();
        for timer in self.pending.iter_mut() {
            timer.remaining -= dt;
        }
        self.pending.retain(|t| {
            if t.remaining <= 0.0 {
                fired.push((t.target, t.action));
                false
            } else {
                true
            }
        });
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use bevy_ecs::world::World;

    fn entities(count: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn test_schedule_and_fire() {
        let mut queue = TimerQueue::new();
        let target = entities(1)[0];
        queue.schedule_once(0.25, target, TimerAction::JumpReady);

        assert!(queue.advance(0.1).is_empty());
        assert_eq!(queue.len(), 1);

        let fired = queue.advance(0.15);
        assert_eq!(fired, vec![(target, TimerAction::JumpReady)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut queue = TimerQueue::new();
        let target = entities(1)[0];
        let handle = queue.schedule_once(0.1, target, TimerAction::Respawn);
        assert!(queue.is_pending(handle));
        assert!(queue.cancel(handle));
        assert!(!queue.is_pending(handle));
        assert!(queue.advance(1.0).is_empty());
    }

    #[test]
    fn test_cancel_twice_is_noop() {
        let mut queue = TimerQueue::new();
        let target = entities(1)[0];
        let handle = queue.schedule_once(0.1, target, TimerAction::DashOver);
        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
    }

    #[test]
    fn test_cancel_all_for_only_drops_that_target() {
        let mut queue = TimerQueue::new();
        let targets = entities(2);
        queue.schedule_once(1.0, targets[0], TimerAction::JumpReady);
        queue.schedule_once(1.0, targets[0], TimerAction::DashReady);
        queue.schedule_once(1.0, targets[1], TimerAction::Respawn);

        assert_eq!(queue.cancel_all_for(targets[0]), 2);
        assert_eq!(queue.len(), 1);
        let fired = queue.advance(2.0);
        assert_eq!(fired, vec![(targets[1], TimerAction::Respawn)]);
    }

    #[test]
    fn test_concurrent_timers_fire_independently() {
        let mut queue = TimerQueue::new();
        let target = entities(1)[0];
        queue.schedule_once(0.2, target, TimerAction::DashOver);
        queue.schedule_once(1.0, target, TimerAction::DashReady);

        let fired = queue.advance(0.2);
        assert_eq!(fired, vec![(target, TimerAction::DashOver)]);
        assert_eq!(queue.len(), 1);

        let fired = queue.advance(0.8);
        assert_eq!(fired, vec![(target, TimerAction::DashReady)]);
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut queue = TimerQueue::new();
        let target = entities(1)[0];
        queue.schedule_once(0.0, target, TimerAction::Respawn);
        let fired = queue.advance(0.0);
        assert_eq!(fired.len(), 1);
    }
}
