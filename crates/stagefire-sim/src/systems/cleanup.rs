//! Cleanup system: removes entities queued for despawn.

use hecs::{Entity, World};

use stagefire_core::components::Enemy;

/// Despawn everything in the buffer.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Remove every live enemy. Returns how many were removed.
pub fn clear_enemies(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();
    for (entity, _enemy) in world.query_mut::<&Enemy>() {
        despawn_buffer.push(entity);
    }
    let removed = despawn_buffer.len();
    run(world, despawn_buffer);
    removed
}
