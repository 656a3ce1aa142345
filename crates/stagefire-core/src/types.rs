//! Fundamental time, identity, and body types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// Frame-clock time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each frame).
    pub tick: u64,
    /// Elapsed time in milliseconds, derived from `tick`.
    pub elapsed_ms: u64,
}

impl SimTime {
    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms = self.tick * 1000 / TICK_RATE as u64;
    }
}

/// Stable entity handle exchanged with the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

/// Body state reported by the host physics engine after its step.
///
/// Positions are the body center in playfield pixels; +y is down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Resting on a surface.
    #[serde(default)]
    pub touching_down: bool,
    #[serde(default)]
    pub blocked_left: bool,
    #[serde(default)]
    pub blocked_right: bool,
}

/// Axis-aligned rectangle given by center and full size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }
}
