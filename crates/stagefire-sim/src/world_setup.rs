//! Entity spawn factories for setting up the controller's world.
//!
//! Creates the static level geometry, the player, enemies, and bullets with
//! appropriate component bundles.

use glam::Vec2;
use hecs::{Entity, World};

use stagefire_core::components::*;
use stagefire_core::constants::*;
use stagefire_core::enums::{EntityKind, Facing};
use stagefire_core::types::{EntityId, Rect};

/// Host-facing id of an entity.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// Resolve a host-facing id. `None` for bit patterns hecs never produced.
pub fn entity_from_id(id: EntityId) -> Option<Entity> {
    Entity::from_bits(id.0)
}

/// Ground, side barriers, and one-way platforms.
pub fn setup_level(world: &mut World, playfield_width: f32) {
    world.spawn((Solid {
        kind: EntityKind::Ground,
        bounds: Rect::new(Vec2::from(GROUND_CENTER), Vec2::from(GROUND_SIZE)),
    },));

    let barrier_size = Vec2::new(BARRIER_WIDTH, PLAYFIELD_HEIGHT);
    for x in [0.0, playfield_width] {
        world.spawn((Solid {
            kind: EntityKind::Barrier,
            bounds: Rect::new(Vec2::new(x, PLAYFIELD_HEIGHT / 2.0), barrier_size),
        },));
    }

    for [x, y, w, h] in PLATFORMS {
        world.spawn((Solid {
            kind: EntityKind::Platform,
            bounds: Rect::new(Vec2::new(x, y), Vec2::new(w, h)),
        },));
    }
}

pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        Player,
        Body {
            position: Vec2::from(PLAYER_START),
            velocity: Vec2::ZERO,
            size: Vec2::from(PLAYER_SIZE),
            allow_gravity: true,
            touching_down: false,
            blocked_left: false,
            blocked_right: false,
        },
    ))
}

pub fn spawn_enemy(world: &mut World, position: Vec2, health: u32, speed: f32) -> Entity {
    world.spawn((
        Enemy {
            health,
            speed,
            facing: Facing::Left,
            last_jump_ms: 0,
        },
        Body {
            position,
            velocity: Vec2::ZERO,
            size: Vec2::from(ENEMY_SIZE),
            allow_gravity: true,
            touching_down: false,
            blocked_left: false,
            blocked_right: false,
        },
    ))
}

/// Spawn a gravity-free bullet travelling horizontally.
pub fn spawn_bullet(world: &mut World, position: Vec2, direction: Facing, speed: f32) -> Entity {
    world.spawn((
        Bullet { direction },
        Body {
            position,
            velocity: Vec2::new(speed * direction.sign(), 0.0),
            size: Vec2::from(BULLET_SIZE),
            allow_gravity: false,
            touching_down: false,
            blocked_left: false,
            blocked_right: false,
        },
    ))
}

/// Kind tag of an entity, for collision table lookups.
pub fn kind_of(world: &World, entity: Entity) -> Option<EntityKind> {
    let entity = world.entity(entity).ok()?;
    if entity.has::<Player>() {
        Some(EntityKind::Player)
    } else if entity.has::<Enemy>() {
        Some(EntityKind::Enemy)
    } else if entity.has::<Bullet>() {
        Some(EntityKind::Bullet)
    } else {
        entity.get::<&Solid>().map(|solid| solid.kind)
    }
}
