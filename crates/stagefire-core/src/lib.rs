//! Core types and definitions for the STAGEFIRE controller.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, collision and game events, state snapshots,
//! configuration, and constants. It has no dependency on any game engine
//! or runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
