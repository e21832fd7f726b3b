//! Ship handling for CORRIDOR.
//!
//! Implements the input-driven steering state machine, play-field
//! boundaries, model tilt and the weapon cooldown as pure functions
//! over plain data. No ECS dependency.

pub mod fsm;
pub mod handling;
pub mod weapon;

pub use corridor_core as core;

#[cfg(test)]
mod tests;
