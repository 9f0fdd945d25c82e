//! Messages exchanged between the tick systems.
//!
//! Submodules:
//! - [`contact`] – collision contacts emitted by the collision detector
//! - [`player`] – lifecycle commands and notifications (kill, respawn)
//! - [`timer`] – expired one-shot timers

pub mod contact;
pub mod player;
pub mod timer;
