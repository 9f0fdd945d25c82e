use bevy_ecs::prelude::Resource;

/// Simulation clock, updated once per tick before the schedule runs.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds since the world was created, scaled.
    pub elapsed: f32,
    /// Seconds covered by the current tick, scaled.
    pub delta: f32,
    /// Multiplier applied to incoming deltas (slow motion, pause).
    pub time_scale: f32,
    /// Number of completed ticks.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
