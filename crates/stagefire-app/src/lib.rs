//! Stagefire host application.
//!
//! Runs the stage controller on its own thread at the frame rate and
//! bridges it to an external renderer/physics host over newline-delimited
//! JSON.

pub mod error;
pub mod game_loop;
pub mod host;
pub mod state;

pub use stagefire_core as core;
