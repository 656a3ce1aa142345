//! Enemy AI system: steers every enemy toward the player each frame.
//!
//! Calls the steering evaluation from stagefire-ai, then writes the result
//! back into the ECS components.

use hecs::World;

use stagefire_core::components::{Body, Enemy};
use stagefire_core::config::ObstacleJump;

use stagefire_ai::steering::{evaluate, ChaseContext};

pub fn run(world: &mut World, player_x: f32, now_ms: u64, obstacle_jump: Option<ObstacleJump>) {
    for (_entity, (enemy, body)) in world.query_mut::<(&mut Enemy, &mut Body)>() {
        let ctx = ChaseContext {
            position: body.position,
            player_x,
            speed: enemy.speed,
            blocked_left: body.blocked_left,
            blocked_right: body.blocked_right,
            last_jump_ms: enemy.last_jump_ms,
            now_ms,
            obstacle_jump,
        };

        let update = evaluate(&ctx);
        enemy.facing = update.facing;
        body.velocity.x = update.velocity_x;

        if let Some(jump) = update.jump {
            body.position.x = jump.position_x;
            body.velocity.y = jump.velocity_y;
            enemy.last_jump_ms = now_ms;
        }
    }
}
