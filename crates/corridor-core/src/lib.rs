//! Core types and definitions for the CORRIDOR simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector and hitbox math, components, commands, input snapshots,
//! state snapshots, events, and constants.
//! It has no dependency on the ECS or any rendering framework.

pub mod bounds;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
