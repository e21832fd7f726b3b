//! Simulation engine for CORRIDOR.
//!
//! Owns the hecs ECS world, runs systems once per rendered frame,
//! and produces GameStateSnapshots for the frontend.

pub mod config;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod scene;
pub mod stats;
pub mod systems;
pub mod world_setup;

pub use corridor_core as core;
pub use engine::CorridorEngine;
