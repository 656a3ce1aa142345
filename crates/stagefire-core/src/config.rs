//! Controller configuration.
//!
//! Every tuning number lives here and is fixed for the life of a session.
//! Two presets reproduce the shipped variants of the game; `Default` is the
//! arena preset.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{HealthScaling, MoveTieBreak};
use crate::error::ConfigError;

/// Complete controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for spawn-point selection. Same seed = same run.
    pub seed: u64,
    /// Playfield width; bullets are culled relative to `[0, width]`.
    pub playfield_width: f32,
    pub player: PlayerTuning,
    pub bullets: BulletTuning,
    pub enemies: EnemyTuning,
    pub combat: CombatTuning,
    pub stages: StageTuning,
    pub shop: ShopTuning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: u32,
    /// Horizontal speed at the baseline speed stat.
    pub base_move_speed: f32,
    pub baseline_speed_stat: u32,
    pub start_speed_stat: u32,
    pub start_bullet_damage: u32,
    /// Vertical velocity applied on jump (negative is up).
    pub jump_impulse: f32,
    pub tie_break: MoveTieBreak,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    pub speed: f32,
    pub spawn_offset: f32,
    pub bounds_margin: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub base_health: u32,
    /// Chase speed per stage.
    pub base_speed: f32,
    pub health_scaling: HealthScaling,
    /// Live-enemy cap; `None` means unlimited.
    pub cap: Option<EnemyCap>,
    /// Obstacle-avoidance jumping; `None` disables it.
    pub obstacle_jump: Option<ObstacleJump>,
    pub spawn_interval_ms: u64,
    pub spawn_points: Vec<Vec2>,
}

/// Live-enemy cap growing linearly with the stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyCap {
    pub base: u32,
    pub per_stage: u32,
}

impl EnemyCap {
    pub fn for_stage(&self, stage: u32) -> u32 {
        self.base + stage.saturating_sub(1) * self.per_stage
    }
}

/// Step-back-and-jump behavior when an enemy is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleJump {
    pub cooldown_ms: u64,
    pub step_back: f32,
    pub impulse: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub contact_damage: u32,
    pub hit_cooldown_ms: u64,
    pub knockback_duration_ms: u64,
    /// Horizontal magnitude is applied away from the enemy; y is used as-is.
    pub knockback_velocity: Vec2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageTuning {
    pub initial_kill_target: u32,
    pub kill_target_step: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopTuning {
    pub price: u32,
    pub heal_amount: u32,
    pub speed_step: u32,
    pub damage_step: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::arena()
    }
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            base_move_speed: PLAYER_BASE_MOVE_SPEED,
            baseline_speed_stat: BASELINE_SPEED_STAT,
            start_speed_stat: BASELINE_SPEED_STAT,
            start_bullet_damage: PLAYER_BASE_BULLET_DAMAGE,
            jump_impulse: JUMP_IMPULSE_ARENA,
            tie_break: MoveTieBreak::default(),
        }
    }
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: BULLET_SPEED,
            spawn_offset: BULLET_SPAWN_OFFSET,
            bounds_margin: BULLET_BOUNDS_MARGIN,
        }
    }
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            base_health: ENEMY_BASE_HEALTH,
            base_speed: ENEMY_BASE_SPEED,
            health_scaling: HealthScaling::Additive,
            cap: Some(EnemyCap {
                base: ENEMY_CAP_BASE,
                per_stage: ENEMY_CAP_PER_STAGE,
            }),
            obstacle_jump: Some(ObstacleJump {
                cooldown_ms: ENEMY_JUMP_COOLDOWN_MS,
                step_back: ENEMY_STEP_BACK,
                impulse: ENEMY_JUMP_IMPULSE,
            }),
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_points: SPAWN_POINTS.iter().map(|&p| Vec2::from(p)).collect(),
        }
    }
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            contact_damage: CONTACT_DAMAGE,
            hit_cooldown_ms: HIT_COOLDOWN_MS,
            knockback_duration_ms: KNOCKBACK_DURATION_MS,
            knockback_velocity: Vec2::new(KNOCKBACK_SPEED_X, KNOCKBACK_SPEED_Y),
        }
    }
}

impl Default for StageTuning {
    fn default() -> Self {
        Self {
            initial_kill_target: KILL_TARGET_ARENA,
            kill_target_step: KILL_TARGET_STEP_ARENA,
        }
    }
}

impl Default for ShopTuning {
    fn default() -> Self {
        Self {
            price: SHOP_PRICE,
            heal_amount: SHOP_HEAL_AMOUNT,
            speed_step: SHOP_SPEED_STEP,
            damage_step: SHOP_DAMAGE_STEP,
        }
    }
}

impl GameConfig {
    /// Capped, obstacle-jumping enemies; 7 kills to clear, +3 per stage.
    pub fn arena() -> Self {
        Self {
            seed: 42,
            playfield_width: PLAYFIELD_WIDTH,
            player: PlayerTuning::default(),
            bullets: BulletTuning::default(),
            enemies: EnemyTuning::default(),
            combat: CombatTuning::default(),
            stages: StageTuning::default(),
            shop: ShopTuning::default(),
        }
    }

    /// Uncapped, ground-bound enemies; 15 kills to clear, +5 per stage.
    pub fn classic() -> Self {
        let mut config = Self::arena();
        config.player.jump_impulse = JUMP_IMPULSE_CLASSIC;
        config.enemies.cap = None;
        config.enemies.obstacle_jump = None;
        config.stages = StageTuning {
            initial_kill_target: KILL_TARGET_CLASSIC,
            kill_target_step: KILL_TARGET_STEP_CLASSIC,
        };
        config
    }

    /// Parse and validate a JSON config. Missing fields take arena defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if self.playfield_width <= 0.0 {
            return invalid("playfield_width", "must be positive");
        }
        if self.player.max_health == 0 {
            return invalid("player.max_health", "must be at least 1");
        }
        if self.player.baseline_speed_stat == 0 {
            return invalid("player.baseline_speed_stat", "must be at least 1");
        }
        if self.player.base_move_speed <= 0.0 {
            return invalid("player.base_move_speed", "must be positive");
        }
        if self.bullets.speed <= 0.0 {
            return invalid("bullets.speed", "must be positive");
        }
        if self.enemies.base_health == 0 {
            return invalid("enemies.base_health", "must be at least 1");
        }
        if self.enemies.base_speed <= 0.0 {
            return invalid("enemies.base_speed", "must be positive");
        }
        if self.enemies.spawn_interval_ms == 0 {
            return invalid("enemies.spawn_interval_ms", "must be positive");
        }
        if self.enemies.spawn_points.is_empty() {
            return invalid("enemies.spawn_points", "needs at least one point");
        }
        if self.stages.initial_kill_target == 0 {
            return invalid("stages.initial_kill_target", "must be at least 1");
        }
        Ok(())
    }
}
