//! Controller tuning resource.
//!
//! All the knobs of the controller live here with safe defaults; an INI file
//! can override any subset. Missing keys keep their defaults, so a partial
//! file is fine.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! accel_ground = 40.0
//! accel_air = 20.0
//! max_run_speed = 7.0
//!
//! [jump]
//! velocity = -11.0
//! cooldown_ms = 250
//!
//! [dash]
//! speed = 20.0
//! duration_ms = 200
//! cooldown_ms = 1000
//!
//! [grab]
//! zone_tilt_deg = 35.0
//! carry_offset_y = -80.0
//!
//! [lifecycle]
//! lives = 3
//! respawn_delay_ms = 1000
//! fall_limit = 600.0
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use glam::Vec2;
use log::info;

const DEFAULT_ACCEL_GROUND: f32 = 40.0;
const DEFAULT_ACCEL_AIR: f32 = 20.0;
const DEFAULT_MAX_RUN_SPEED: f32 = 7.0;
const DEFAULT_GRAVITY: f32 = 25.0;
const DEFAULT_JUMP_VELOCITY: f32 = -11.0;
const DEFAULT_JUMP_COOLDOWN_MS: u64 = 250;
const DEFAULT_DASH_SPEED: f32 = 20.0;
const DEFAULT_DASH_DURATION_MS: u64 = 200;
const DEFAULT_DASH_COOLDOWN_MS: u64 = 1000;
const DEFAULT_RESPAWN_DELAY_MS: u64 = 1000;
const DEFAULT_LIVES: u32 = 3;

/// Tuning values for every sub-controller.
///
/// Distances are in map units, velocities in units per second, accelerations
/// in units per second squared, delays in milliseconds.
#[derive(Resource, Debug, Clone)]
pub struct Tuning {
    // movement
    pub accel_ground: f32,
    pub accel_air: f32,
    pub max_run_speed: f32,
    pub gravity: f32,
    /// Residual overlap left after pushing the player out of a wall, so the
    /// side sensor keeps reporting contact on the next tick.
    pub wall_overlap_sliver: f32,

    // body layout
    pub body_width: f32,
    pub body_height: f32,

    // jump
    pub jump_velocity: f32,
    pub jump_cooldown_ms: u64,

    // dash
    pub dash_speed: f32,
    pub dash_duration_ms: u64,
    pub dash_cooldown_ms: u64,

    // grab
    pub grab_zone_size: Vec2,
    pub grab_zone_offset: Vec2,
    pub grab_zone_tilt_deg: f32,
    pub carry_offset: Vec2,

    // lifecycle
    pub lives: u32,
    pub respawn_delay_ms: u64,
    pub spawn_point: Vec2,
    /// Vertical position beyond which the player counts as fallen out.
    pub fall_limit: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            accel_ground: DEFAULT_ACCEL_GROUND,
            accel_air: DEFAULT_ACCEL_AIR,
            max_run_speed: DEFAULT_MAX_RUN_SPEED,
            gravity: DEFAULT_GRAVITY,
            wall_overlap_sliver: 0.5,
            body_width: 20.0,
            body_height: 64.0,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            jump_cooldown_ms: DEFAULT_JUMP_COOLDOWN_MS,
            dash_speed: DEFAULT_DASH_SPEED,
            dash_duration_ms: DEFAULT_DASH_DURATION_MS,
            dash_cooldown_ms: DEFAULT_DASH_COOLDOWN_MS,
            grab_zone_size: Vec2::new(30.0, 50.0),
            grab_zone_offset: Vec2::new(30.0, 10.0),
            grab_zone_tilt_deg: 35.0,
            carry_offset: Vec2::new(0.0, -80.0),
            lives: DEFAULT_LIVES,
            respawn_delay_ms: DEFAULT_RESPAWN_DELAY_MS,
            spawn_point: Vec2::ZERO,
            fall_limit: 600.0,
        }
    }
}

impl Tuning {
    pub fn jump_cooldown_secs(&self) -> f32 {
        self.jump_cooldown_ms as f32 / 1000.0
    }

    pub fn dash_duration_secs(&self) -> f32 {
        self.dash_duration_ms as f32 / 1000.0
    }

    pub fn dash_cooldown_secs(&self) -> f32 {
        self.dash_cooldown_ms as f32 / 1000.0
    }

    pub fn respawn_delay_secs(&self) -> f32 {
        self.respawn_delay_ms as f32 / 1000.0
    }

    /// Load tuning from an INI file, starting from defaults.
    ///
    /// Missing values retain their defaults. Returns an error only if the
    /// file cannot be read or parsed.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config
            .load(path)
            .map_err(|e| format!("Failed to load tuning file: {}", e))?;

        let mut tuning = Self::default();

        // [movement] section
        if let Some(v) = config.getfloat("movement", "accel_ground").ok().flatten() {
            tuning.accel_ground = v as f32;
        }
        if let Some(v) = config.getfloat("movement", "accel_air").ok().flatten() {
            tuning.accel_air = v as f32;
        }
        if let Some(v) = config.getfloat("movement", "max_run_speed").ok().flatten() {
            tuning.max_run_speed = v as f32;
        }
        if let Some(v) = config.getfloat("movement", "gravity").ok().flatten() {
            tuning.gravity = v as f32;
        }
        if let Some(v) = config
            .getfloat("movement", "wall_overlap_sliver")
            .ok()
            .flatten()
        {
            tuning.wall_overlap_sliver = v as f32;
        }

        // [jump] section
        if let Some(v) = config.getfloat("jump", "velocity").ok().flatten() {
            tuning.jump_velocity = v as f32;
        }
        if let Some(v) = config.getuint("jump", "cooldown_ms").ok().flatten() {
            tuning.jump_cooldown_ms = v;
        }

        // [dash] section
        if let Some(v) = config.getfloat("dash", "speed").ok().flatten() {
            tuning.dash_speed = v as f32;
        }
        if let Some(v) = config.getuint("dash", "duration_ms").ok().flatten() {
            tuning.dash_duration_ms = v;
        }
        if let Some(v) = config.getuint("dash", "cooldown_ms").ok().flatten() {
            tuning.dash_cooldown_ms = v;
        }

        // [grab] section
        if let Some(v) = config.getfloat("grab", "zone_tilt_deg").ok().flatten() {
            tuning.grab_zone_tilt_deg = v as f32;
        }
        if let Some(v) = config.getfloat("grab", "zone_offset_x").ok().flatten() {
            tuning.grab_zone_offset.x = v as f32;
        }
        if let Some(v) = config.getfloat("grab", "zone_offset_y").ok().flatten() {
            tuning.grab_zone_offset.y = v as f32;
        }
        if let Some(v) = config.getfloat("grab", "carry_offset_x").ok().flatten() {
            tuning.carry_offset.x = v as f32;
        }
        if let Some(v) = config.getfloat("grab", "carry_offset_y").ok().flatten() {
            tuning.carry_offset.y = v as f32;
        }

        // [lifecycle] section
        if let Some(v) = config.getuint("lifecycle", "lives").ok().flatten() {
            tuning.lives = v as u32;
        }
        if let Some(v) = config
            .getuint("lifecycle", "respawn_delay_ms")
            .ok()
            .flatten()
        {
            tuning.respawn_delay_ms = v;
        }
        if let Some(v) = config.getfloat("lifecycle", "spawn_x").ok().flatten() {
            tuning.spawn_point.x = v as f32;
        }
        if let Some(v) = config.getfloat("lifecycle", "spawn_y").ok().flatten() {
            tuning.spawn_point.y = v as f32;
        }
        if let Some(v) = config.getfloat("lifecycle", "fall_limit").ok().flatten() {
            tuning.fall_limit = v as f32;
        }

        info!(
            "Loaded tuning: run {} (clamp {}), jump {} ({} ms), dash {} ({}/{} ms), {} lives",
            tuning.accel_ground,
            tuning.max_run_speed,
            tuning.jump_velocity,
            tuning.jump_cooldown_ms,
            tuning.dash_speed,
            tuning.dash_duration_ms,
            tuning.dash_cooldown_ms,
            tuning.lives
        );

        Ok(tuning)
    }
}
