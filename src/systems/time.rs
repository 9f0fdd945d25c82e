//! Time update and timer draining.

use bevy_ecs::prelude::*;

use crate::events::timer::TimerFired;
use crate::resources::timers::TimerQueue;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled tick delta in seconds. The function applies the
/// current `time_scale` and writes `elapsed`, `delta`, and `frame_count`.
/// Call once per tick, before running the schedule.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Drain expired one-shot timers and publish them as [`TimerFired`] messages.
///
/// Runs before the controller systems in the chain, so an expiry is observed
/// in the same tick it happens. Consumers are responsible for ignoring fired
/// timers whose target entity no longer exists.
pub fn update_timers(
    time: Res<WorldTime>,
    mut queue: ResMut<TimerQueue>,
    mut writer: MessageWriter<TimerFired>,
) {
    for (target, action) in queue.advance(time.delta) {
        writer.write(TimerFired { target, action });
    }
}
