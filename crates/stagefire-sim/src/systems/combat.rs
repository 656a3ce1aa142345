//! Hit resolution for player–enemy contact and bullet–enemy overlap.

use glam::Vec2;
use hecs::{Entity, World};

use stagefire_core::components::{Body, Bullet, Enemy};
use stagefire_core::config::CombatTuning;

use crate::run_state::PlayerState;

/// Result of one bullet–enemy overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletHit {
    /// One of the two entities no longer exists.
    Ignored,
    Damaged { remaining: u32 },
    /// Enemy health reached zero and the enemy was despawned.
    Killed,
}

/// Apply contact damage and knockback, unless still inside the hit cooldown.
/// Returns whether the hit registered.
pub fn player_contact(
    world: &mut World,
    player: &mut PlayerState,
    enemy: Entity,
    tuning: &CombatTuning,
    now_ms: u64,
) -> bool {
    if let Some(last) = player.last_hit_ms {
        if now_ms.saturating_sub(last) <= tuning.hit_cooldown_ms {
            return false;
        }
    }

    let enemy_x = match world.query_one_mut::<(&Enemy, &Body)>(enemy) {
        Ok((_enemy, body)) => body.position.x,
        Err(_) => return false,
    };
    let Ok(body) = world.query_one_mut::<&mut Body>(player.entity) else {
        return false;
    };

    player.health = player.health.saturating_sub(tuning.contact_damage);

    // Push away from the enemy; ties push right.
    let away = if body.position.x < enemy_x { -1.0 } else { 1.0 };
    body.velocity = Vec2::new(
        away * tuning.knockback_velocity.x,
        tuning.knockback_velocity.y,
    );

    player.knockback_until = Some(now_ms + tuning.knockback_duration_ms);
    player.last_hit_ms = Some(now_ms);
    true
}

/// Destroy the bullet and damage the enemy by `damage`. The enemy is
/// despawned when its health reaches zero.
pub fn bullet_hit(world: &mut World, bullet: Entity, enemy: Entity, damage: u32) -> BulletHit {
    if !world.entity(bullet).is_ok_and(|e| e.has::<Bullet>()) {
        return BulletHit::Ignored;
    }
    let remaining = match world.query_one_mut::<&mut Enemy>(enemy) {
        Ok(enemy) => {
            enemy.health = enemy.health.saturating_sub(damage);
            enemy.health
        }
        Err(_) => return BulletHit::Ignored,
    };

    let _ = world.despawn(bullet);
    if remaining == 0 {
        let _ = world.despawn(enemy);
        BulletHit::Killed
    } else {
        BulletHit::Damaged { remaining }
    }
}
