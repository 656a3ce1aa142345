//! Events crossing the controller boundary.
//!
//! `CollisionEvent`s come in from the host physics engine; `GameEvent`s go
//! out to the host for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{PurchaseOutcome, ShopItem};
use crate::types::EntityId;

/// Contact and overlap notifications reported by the host physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CollisionEvent {
    /// The player body touched an enemy body.
    PlayerEnemy { enemy: EntityId },
    /// A bullet overlapped an enemy.
    BulletEnemy { bullet: EntityId, enemy: EntityId },
    /// A bullet hit ground, a platform, or a barrier.
    BulletBlocked { bullet: EntityId, solid: EntityId },
}

/// Gameplay events for the host's audio and UI layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned { enemy: EntityId, health: u32 },
    EnemyKilled { enemy: EntityId },
    BulletFired { bullet: EntityId },
    PlayerHit { health: u32 },
    StageCleared { stage: u32 },
    StageStarted { stage: u32, kill_target: u32 },
    Purchase { item: ShopItem, outcome: PurchaseOutcome },
    Paused,
    Resumed,
    GameOver,
}
