//! Game state snapshot: the complete visible state handed to the host each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{EntityId, Rect, SimTime};

/// Complete controller state published after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Host must pause its physics step while this is set.
    pub physics_frozen: bool,
    pub run: RunView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    /// Static level geometry, so the host can name solids in collision
    /// queries and events.
    pub solids: Vec<SolidView>,
    pub hud: HudView,
    pub overlay: Option<OverlayView>,
    pub events: Vec<GameEvent>,
}

/// Stage progression and economy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunView {
    pub stage: u32,
    pub kills: u32,
    pub kill_target: u32,
    pub currency: u32,
}

/// Player body and stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: Option<EntityId>,
    pub position: Vec2,
    /// Velocity the host should apply this step.
    pub velocity: Vec2,
    pub facing: Facing,
    pub health: u32,
    pub max_health: u32,
    pub speed: u32,
    pub bullet_damage: u32,
    pub knocked_back: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Sprite should be mirrored when facing left.
    pub facing: Facing,
    pub health: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub id: EntityId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub allow_gravity: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub bounds: Rect,
}

/// HUD text lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    /// Health, currency, stage, and stats.
    pub status: String,
    /// Kill progress toward the stage target.
    pub kills: String,
}

/// Modal overlay drawn over the playfield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayView {
    pub kind: OverlayKind,
    pub text: String,
    /// `None` draws the text straight over the playfield.
    pub backdrop: Option<Backdrop>,
}

/// What to draw behind overlay text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Backdrop {
    /// Themed image by asset key.
    Image { key: String },
    /// Plain colored rectangle of the same footprint.
    Rect {
        width: f32,
        height: f32,
        color: u32,
        alpha: f32,
    },
}
