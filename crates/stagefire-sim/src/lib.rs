//! Stage/combat controller for STAGEFIRE.
//!
//! Owns the hecs world mirroring the host engine's bodies, runs the
//! per-frame systems, resolves collisions, drives the stage/shop state
//! machine, and produces `GameStateSnapshot`s.

pub mod assets;
pub mod collision;
pub mod engine;
pub mod run_state;
pub mod shop;
pub mod systems;
pub mod timer;
pub mod world_setup;

pub use engine::StageController;
pub use stagefire_core as core;
