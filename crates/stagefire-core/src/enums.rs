//! Enumeration types used throughout the controller.

use serde::{Deserialize, Serialize};

/// Horizontal facing / travel direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for `Left`, 1.0 for `Right`.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Top-level controller state.
///
/// `GameOver` is terminal and takes precedence over everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Paused,
    ShopActive,
    GameOver,
}

impl GamePhase {
    /// Whether the host should freeze its physics simulation.
    pub fn physics_frozen(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// How enemy health grows with the stage number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthScaling {
    /// `base + stage - 1`
    #[default]
    Additive,
    /// `base * stage`
    Multiplicative,
}

impl HealthScaling {
    pub fn enemy_health(self, base: u32, stage: u32) -> u32 {
        let stage = stage.max(1);
        match self {
            HealthScaling::Additive => base + stage - 1,
            HealthScaling::Multiplicative => base * stage,
        }
    }
}

/// Which direction wins when both movement keys are held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveTieBreak {
    /// Left is evaluated first and wins.
    #[default]
    PreferLeft,
    /// Right is evaluated first and wins.
    PreferRight,
}

/// Items offered in the stage-clear shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopItem {
    /// Restore health, capped at max.
    Heal,
    /// +1 movement speed stat.
    Speed,
    /// +N bullet damage.
    Damage,
}

impl ShopItem {
    pub const ALL: [ShopItem; 3] = [ShopItem::Heal, ShopItem::Speed, ShopItem::Damage];
}

/// Result of a single shop key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseOutcome {
    Purchased,
    InsufficientFunds,
    /// Heal refused because health is already at max.
    AlreadyFull,
    /// Item was already consumed this stage, or the shop is closed.
    NotArmed,
}

/// Kind tag used by the collision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Bullet,
    Ground,
    Barrier,
    Platform,
}

/// Overlay currently shown over the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayKind {
    Pause,
    Shop,
    GameOver,
}
