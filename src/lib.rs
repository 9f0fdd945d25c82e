//! Crated: a per-tick 2D platformer character controller.
//!
//! The crate turns logical-button input and collision contacts into running,
//! jumping, dashing, crate grabbing, and a death/respawn lifecycle, all inside
//! a bevy_ecs [`World`](bevy_ecs::world::World) driven by a fixed-step
//! [`Schedule`](bevy_ecs::schedule::Schedule).
//!
//! # Module layout
//!
//! - [`components`] – ECS components (position, rigid body, colliders, player
//!   state, grab state, contact flags)
//! - [`resources`] – shared state (simulation time, input snapshot, one-shot
//!   timers, tuning values)
//! - [`events`] – messages exchanged between systems (contacts, fired timers,
//!   lifecycle notifications)
//! - [`systems`] – the per-tick systems, in the order the schedule chains them
//! - [`controller`] – world setup, player spawn/teardown, and the tick driver
//!
//! # Driving a tick
//!
//! ```ignore
//! let mut world = World::new();
//! controller::init_controller_world(&mut world);
//! let player = controller::spawn_player(&mut world, 100.0, 100.0);
//! let mut schedule = controller::build_tick_schedule();
//!
//! // once per fixed step:
//! controller::tick(&mut world, &mut schedule, 1.0 / 60.0);
//! ```

pub mod components;
pub mod controller;
pub mod events;
pub mod resources;
pub mod systems;
