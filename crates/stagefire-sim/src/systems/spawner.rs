//! Enemy spawning, fired by the repeating spawn timer.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use stagefire_core::components::Enemy;
use stagefire_core::config::EnemyTuning;

use crate::run_state::RunState;
use crate::world_setup;

/// Number of live enemies.
pub fn live_enemies(world: &World) -> u32 {
    world.query::<&Enemy>().iter().count() as u32
}

/// Spawn one enemy at a random spawn point, unless the stage quota is met
/// or the live-enemy cap is reached.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    run: &RunState,
    tuning: &EnemyTuning,
) -> Option<Entity> {
    if run.target_reached() || tuning.spawn_points.is_empty() {
        return None;
    }
    if let Some(cap) = tuning.cap {
        if live_enemies(world) >= cap.for_stage(run.stage) {
            return None;
        }
    }

    let point = tuning.spawn_points[rng.gen_range(0..tuning.spawn_points.len())];
    let health = tuning
        .health_scaling
        .enemy_health(tuning.base_health, run.stage);
    let speed = tuning.base_speed * run.stage as f32;

    Some(world_setup::spawn_enemy(world, point, health, speed))
}
