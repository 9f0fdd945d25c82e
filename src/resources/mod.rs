//! Shared resources read and written by the tick systems.
//!
//! Submodules overview:
//! - [`input`] – per-tick snapshot of the logical buttons
//! - [`timers`] – cooperative one-shot timer queue with cancellable handles
//! - [`tuning`] – controller tuning values, loadable from an INI file
//! - [`worldtime`] – elapsed/delta simulation time

pub mod input;
pub mod timers;
pub mod tuning;
pub mod worldtime;
