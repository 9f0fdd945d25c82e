//! Kinematic body component with named, toggleable acceleration forces.
//!
//! The [`RigidBody`] component stores velocity and a set of named acceleration
//! forces. Each force can be individually enabled or disabled, which is how
//! the grab mechanic switches gravity off on a carried body without losing the
//! configured value.
//!
//! The `frozen` flag skips integration entirely, used when an entity's
//! position is controlled externally.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Name of the gravity force installed on dynamic bodies.
pub const GRAVITY_FORCE: &str = "gravity";
/// Name of the horizontal drive force the locomotion system maintains.
pub const DRIVE_FORCE: &str = "drive";

/// A named acceleration force that can be toggled on/off.
#[derive(Clone, Copy, Debug)]
pub struct AccelerationForce {
    /// The acceleration vector in world units per second squared.
    pub value: Vec2,
    /// Whether this force is currently active.
    pub enabled: bool,
}

impl AccelerationForce {
    pub fn new(value: Vec2) -> Self {
        Self {
            value,
            enabled: true,
        }
    }

    pub fn with_enabled(value: Vec2, enabled: bool) -> Self {
        Self { value, enabled }
    }
}

/// Kinematic body storing velocity and named acceleration forces.
///
/// The movement system integrates the sum of the enabled forces into
/// `velocity` and `velocity` into [`MapPosition`](super::mapposition::MapPosition)
/// each tick, unless `frozen` is set.
#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Named acceleration forces. Total acceleration is the sum of enabled ones.
    pub forces: FxHashMap<String, AccelerationForce>,
    /// When true, the movement system skips this entity entirely.
    pub frozen: bool,
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no forces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RigidBody with a downward gravity force already installed.
    pub fn with_gravity(gravity: f32) -> Self {
        let mut rb = Self::new();
        rb.add_force(GRAVITY_FORCE, Vec2::new(0.0, gravity));
        rb
    }

    /// Add or update a named acceleration force (enabled by default).
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces
            .insert(name.to_string(), AccelerationForce::new(value));
    }

    /// Add or update a named acceleration force with specified enabled state.
    pub fn add_force_with_state(&mut self, name: &str, value: Vec2, enabled: bool) {
        self.forces.insert(
            name.to_string(),
            AccelerationForce::with_enabled(value, enabled),
        );
    }

    /// Remove a named force entirely.
    pub fn remove_force(&mut self, name: &str) {
        self.forces.remove(name);
    }

    /// Enable or disable a specific force by name.
    /// Returns false if the force doesn't exist.
    pub fn set_force_enabled(&mut self, name: &str, enabled: bool) -> bool {
        if let Some(force) = self.forces.get_mut(name) {
            force.enabled = enabled;
            true
        } else {
            false
        }
    }

    /// Check if a force exists and is enabled.
    pub fn is_force_enabled(&self, name: &str) -> bool {
        self.forces.get(name).map(|f| f.enabled).unwrap_or(false)
    }

    /// Get a force by name.
    pub fn get_force(&self, name: &str) -> Option<&AccelerationForce> {
        self.forces.get(name)
    }

    /// Calculate the total acceleration from all enabled forces.
    pub fn total_acceleration(&self) -> Vec2 {
        let mut total = Vec2::ZERO;
        for force in self.forces.values() {
            if force.enabled {
                total += force.value;
            }
        }
        total
    }

    /// Freeze the rigid body, preventing the movement system from updating it.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Unfreeze the rigid body.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_new_is_empty() {
        let rb = RigidBody::new();
        assert!(vec_approx_eq(rb.velocity, Vec2::ZERO));
        assert!(rb.forces.is_empty());
        assert!(!rb.frozen);
    }

    #[test]
    fn test_with_gravity_installs_gravity_force() {
        let rb = RigidBody::with_gravity(25.0);
        let force = rb.get_force(GRAVITY_FORCE).unwrap();
        assert!(vec_approx_eq(force.value, Vec2::new(0.0, 25.0)));
        assert!(force.enabled);
    }

    #[test]
    fn test_add_force_overwrites() {
        let mut rb = RigidBody::new();
        rb.add_force("wind", Vec2::new(0.0, 100.0));
        rb.add_force("wind", Vec2::new(0.0, 200.0));
        assert_eq!(rb.forces.len(), 1);
        assert!(vec_approx_eq(
            rb.get_force("wind").unwrap().value,
            Vec2::new(0.0, 200.0)
        ));
    }

    #[test]
    fn test_remove_force() {
        let mut rb = RigidBody::with_gravity(25.0);
        rb.remove_force(GRAVITY_FORCE);
        assert!(rb.forces.is_empty());
        rb.remove_force("nonexistent"); // should not panic
    }

    #[test]
    fn test_set_force_enabled_round_trip() {
        let mut rb = RigidBody::with_gravity(25.0);
        assert!(rb.is_force_enabled(GRAVITY_FORCE));
        assert!(rb.set_force_enabled(GRAVITY_FORCE, false));
        assert!(!rb.is_force_enabled(GRAVITY_FORCE));
        assert!(rb.set_force_enabled(GRAVITY_FORCE, true));
        assert!(rb.is_force_enabled(GRAVITY_FORCE));
    }

    #[test]
    fn test_set_force_enabled_nonexistent() {
        let mut rb = RigidBody::new();
        assert!(!rb.set_force_enabled("nonexistent", true));
        assert!(!rb.is_force_enabled("nonexistent"));
    }

    #[test]
    fn test_total_acceleration_sums_enabled_only() {
        let mut rb = RigidBody::new();
        rb.add_force(GRAVITY_FORCE, Vec2::new(0.0, 100.0));
        rb.add_force(DRIVE_FORCE, Vec2::new(50.0, 0.0));
        rb.add_force_with_state("wind", Vec2::new(-10.0, 0.0), false);
        assert!(vec_approx_eq(rb.total_acceleration(), Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_freeze_unfreeze() {
        let mut rb = RigidBody::new();
        rb.freeze();
        assert!(rb.frozen);
        rb.unfreeze();
        assert!(!rb.frozen);
    }
}
