//! CORRIDOR headless runner.
//!
//! This crate drives the simulation engine on a frame-loop thread, feeds it
//! scripted input, and reports how each run went.

pub mod autopilot;
pub mod game_loop;
pub mod state;
pub mod summary;

pub use corridor_core as core;
