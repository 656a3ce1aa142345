//! Systems that operate on the controller world each frame.
//!
//! Systems are plain functions over `&mut World` plus whatever slice of
//! controller state they need. They do not own state.

pub mod cleanup;
pub mod combat;
pub mod enemy_ai;
pub mod player_control;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
