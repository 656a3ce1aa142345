//! Enemy AI for STAGEFIRE.
//!
//! Chase steering toward the player and the step-back-and-jump response
//! to obstacles. Pure functions over plain data; no ECS dependency.

pub mod steering;

pub use stagefire_core as core;
