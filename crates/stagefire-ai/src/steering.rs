//! Enemy chase steering.
//!
//! Each frame an enemy turns toward the player's current x, runs at its
//! fixed chase speed, and, when obstacle jumping is enabled, hops back and
//! up if the host reports it blocked in its direction of travel.

use glam::Vec2;

use stagefire_core::config::ObstacleJump;
use stagefire_core::enums::Facing;

/// Input to the steering evaluation for a single enemy.
pub struct ChaseContext {
    pub position: Vec2,
    pub player_x: f32,
    /// Chase speed (base speed × stage).
    pub speed: f32,
    pub blocked_left: bool,
    pub blocked_right: bool,
    pub last_jump_ms: u64,
    pub now_ms: u64,
    pub obstacle_jump: Option<ObstacleJump>,
}

/// Output from the steering evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseUpdate {
    pub facing: Facing,
    pub velocity_x: f32,
    pub jump: Option<JumpAction>,
}

/// Obstacle hop: teleport back a little, then launch upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpAction {
    /// New x position after stepping back.
    pub position_x: f32,
    pub velocity_y: f32,
}

/// Direction from the enemy toward the player. Ties go left.
pub fn chase_direction(enemy_x: f32, player_x: f32) -> Facing {
    if enemy_x < player_x {
        Facing::Right
    } else {
        Facing::Left
    }
}

/// Evaluate steering for one enemy.
pub fn evaluate(ctx: &ChaseContext) -> ChaseUpdate {
    let facing = chase_direction(ctx.position.x, ctx.player_x);
    let jump = ctx
        .obstacle_jump
        .and_then(|params| evaluate_obstacle(ctx, facing, &params));

    ChaseUpdate {
        facing,
        velocity_x: ctx.speed * facing.sign(),
        jump,
    }
}

fn evaluate_obstacle(
    ctx: &ChaseContext,
    facing: Facing,
    params: &ObstacleJump,
) -> Option<JumpAction> {
    let blocked = match facing {
        Facing::Left => ctx.blocked_left,
        Facing::Right => ctx.blocked_right,
    };
    if !blocked {
        return None;
    }

    if ctx.now_ms.saturating_sub(ctx.last_jump_ms) <= params.cooldown_ms {
        return None;
    }

    Some(JumpAction {
        position_x: ctx.position.x - facing.sign() * params.step_back,
        velocity_y: params.impulse,
    })
}
