//! ECS components for the controller and the bodies it interacts with.
//!
//! Submodules overview:
//! - [`bodytag`] – classification of bodies (capturable, lethal, plain)
//! - [`boxcollider`] – axis-aligned rectangular collider, solid or sensor
//! - [`grab`] – grab sensor zone and capture/carry state
//! - [`highlight`] – marker for bodies currently caught by the grab sensor
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – the controller's own state machine flags and timers
//! - [`rigidbody`] – kinematic body with named, toggleable acceleration forces
//! - [`rotation`] – rotation angle in degrees
//! - [`touching`] – per-tick wall/ground contact flags and the sensor layout

pub mod bodytag;
pub mod boxcollider;
pub mod grab;
pub mod highlight;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
pub mod rotation;
pub mod touching;
