//! The per-tick systems, listed in the order the schedule chains them.
//!
//! Submodules overview:
//! - [`time`] – advance the simulation clock and drain expired timers
//! - [`movement`] – integrate forces into velocity and velocity into position
//! - [`collision`] – overlap detection with start/active/end contact phases
//! - [`contact`] – reset and rebuild the player's wall/ground flags
//! - [`locomotion`] – horizontal drive force, facing, and the speed clamp
//! - [`jump`] – single-shot jump gated by ground contact and a cooldown
//! - [`dash`] – timed velocity override with concurrent duration/cooldown
//! - [`grab`] – grab zone placement, capture bookkeeping, carry/release
//! - [`lifecycle`] – lethal contacts, fall-out detection, death and respawn

pub mod collision;
pub mod contact;
pub mod dash;
pub mod grab;
pub mod jump;
pub mod lifecycle;
pub mod locomotion;
pub mod movement;
pub mod time;
