//! Bullet firing and per-frame bullet maintenance.

use glam::Vec2;
use hecs::{Entity, World};

use stagefire_core::components::{Body, Bullet};
use stagefire_core::config::BulletTuning;

use crate::run_state::PlayerState;
use crate::world_setup;

/// Spawn a bullet just ahead of the player, travelling the way it faces.
pub fn fire(world: &mut World, player: &PlayerState, tuning: &BulletTuning) -> Option<Entity> {
    let origin = world.get::<&Body>(player.entity).ok()?.position;
    let position = origin + Vec2::new(player.facing.sign() * tuning.spawn_offset, 0.0);
    Some(world_setup::spawn_bullet(
        world,
        position,
        player.facing,
        tuning.speed,
    ))
}

/// Pin bullet velocity and gravity, and queue bullets that left the
/// playfield for despawn.
pub fn run(
    world: &mut World,
    tuning: &BulletTuning,
    playfield_width: f32,
    despawn_buffer: &mut Vec<Entity>,
) {
    for (entity, (bullet, body)) in world.query_mut::<(&Bullet, &mut Body)>() {
        body.velocity.x = tuning.speed * bullet.direction.sign();
        body.allow_gravity = false;

        let x = body.position.x;
        if x > playfield_width + tuning.bounds_margin || x < -tuning.bounds_margin {
            despawn_buffer.push(entity);
        }
    }
}
