//! Run progression and player stats.
//!
//! Stored on `StageController` directly, NOT as ECS components. The player
//! body itself is an ECS entity; `PlayerState::entity` points at it.

use stagefire_core::config::{GameConfig, StageTuning};
use stagefire_core::enums::Facing;

/// Stage progression and economy for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    /// Starts at 1; increments on leaving the shop.
    pub stage: u32,
    /// Kills this stage. Reset to 0 when a new stage starts.
    pub kills: u32,
    pub kill_target: u32,
    pub currency: u32,
}

impl RunState {
    pub fn new(stages: &StageTuning) -> Self {
        Self {
            stage: 1,
            kills: 0,
            kill_target: stages.initial_kill_target,
            currency: 0,
        }
    }

    pub fn target_reached(&self) -> bool {
        self.kills >= self.kill_target
    }

    /// Begin the next stage with a raised kill target.
    pub fn advance_stage(&mut self, kill_target_step: u32) {
        self.kills = 0;
        self.stage += 1;
        self.kill_target += kill_target_step;
    }
}

/// Player health, upgradeable stats, and hit timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub entity: hecs::Entity,
    /// Never exceeds `max_health`. Zero ends the run.
    pub health: u32,
    pub max_health: u32,
    /// Movement speed stat; velocity scales with `speed / baseline`.
    pub speed: u32,
    pub bullet_damage: u32,
    pub facing: Facing,
    /// Knockback expiry. Input is ignored until the clock passes it.
    pub knockback_until: Option<u64>,
    pub last_hit_ms: Option<u64>,
}

impl PlayerState {
    pub fn new(entity: hecs::Entity, config: &GameConfig) -> Self {
        Self {
            entity,
            health: config.player.max_health,
            max_health: config.player.max_health,
            speed: config.player.start_speed_stat,
            bullet_damage: config.player.start_bullet_damage,
            facing: Facing::Right,
            knockback_until: None,
            last_hit_ms: None,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn knocked_back(&self) -> bool {
        self.knockback_until.is_some()
    }
}
