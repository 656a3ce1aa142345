//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, Facing};
use crate::types::Rect;

/// Dynamic physics body mirrored from the host engine.
///
/// The host owns `position` and the contact flags; the controller owns
/// `velocity` and `allow_gravity` and the host applies them each step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Bounding box size (full width/height).
    pub size: Vec2,
    pub allow_gravity: bool,
    pub touching_down: bool,
    pub blocked_left: bool,
    pub blocked_right: bool,
}

/// Marks the single player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Enemy combat and steering state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Remaining health. The enemy is removed once this reaches zero.
    pub health: u32,
    /// Chase speed fixed at spawn time (base speed × stage).
    pub speed: f32,
    pub facing: Facing,
    /// Frame time of the last obstacle jump. Starts at 0, so no enemy
    /// jumps before one cooldown has passed on the clock.
    pub last_jump_ms: u64,
}

/// Player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub direction: Facing,
}

/// Static level geometry (ground, barriers, platforms).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Solid {
    pub kind: EntityKind,
    pub bounds: Rect,
}
