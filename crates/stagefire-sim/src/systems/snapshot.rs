//! Snapshot builder: assembles the `GameStateSnapshot` from world and
//! controller state, including HUD and overlay text.

use hecs::World;

use stagefire_core::components::{Body, Bullet, Enemy, Solid};
use stagefire_core::config::ShopTuning;
use stagefire_core::enums::{GamePhase, OverlayKind, ShopItem};
use stagefire_core::events::GameEvent;
use stagefire_core::state::*;
use stagefire_core::types::SimTime;

use crate::assets::{overlay_backdrop, AssetCatalog};
use crate::run_state::{PlayerState, RunState};
use crate::shop::ShopOffer;
use crate::world_setup::entity_id;

const PAUSE_TEXT: &str = "Press SPACE or ESC\nto Continue";
const GAME_OVER_TEXT: &str = "GAME OVER";

/// Build a complete snapshot of the current frame.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    run: &RunState,
    player: &PlayerState,
    overlay: Option<&OverlayView>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        physics_frozen: phase.physics_frozen(),
        run: RunView {
            stage: run.stage,
            kills: run.kills,
            kill_target: run.kill_target,
            currency: run.currency,
        },
        player: build_player_view(world, player),
        enemies: build_enemy_views(world),
        bullets: build_bullet_views(world),
        solids: build_solid_views(world),
        hud: hud(run, player),
        overlay: overlay.cloned(),
        events,
    }
}

fn build_player_view(world: &World, player: &PlayerState) -> PlayerView {
    let mut view = PlayerView {
        id: Some(entity_id(player.entity)),
        facing: player.facing,
        health: player.health,
        max_health: player.max_health,
        speed: player.speed,
        bullet_damage: player.bullet_damage,
        knocked_back: player.knocked_back(),
        ..Default::default()
    };
    if let Ok(body) = world.get::<&Body>(player.entity) {
        view.position = body.position;
        view.velocity = body.velocity;
    }
    view
}

fn build_enemy_views(world: &World) -> Vec<EnemyView> {
    let mut query = world.query::<(&Enemy, &Body)>();
    let mut views: Vec<EnemyView> = query
        .iter()
        .map(|(entity, (enemy, body))| EnemyView {
            id: entity_id(entity),
            position: body.position,
            velocity: body.velocity,
            facing: enemy.facing,
            health: enemy.health,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_bullet_views(world: &World) -> Vec<BulletView> {
    let mut query = world.query::<(&Bullet, &Body)>();
    let mut views: Vec<BulletView> = query
        .iter()
        .map(|(entity, (_bullet, body))| BulletView {
            id: entity_id(entity),
            position: body.position,
            velocity: body.velocity,
            allow_gravity: body.allow_gravity,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_solid_views(world: &World) -> Vec<SolidView> {
    let mut query = world.query::<&Solid>();
    let mut views: Vec<SolidView> = query
        .iter()
        .map(|(entity, solid)| SolidView {
            id: entity_id(entity),
            kind: solid.kind,
            bounds: solid.bounds,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

/// HUD text lines.
pub fn hud(run: &RunState, player: &PlayerState) -> HudView {
    HudView {
        status: format!(
            "HP: {}/{}  RP: {}  Stage: {}  Speed: {}  Damage: {}",
            player.health,
            player.max_health,
            run.currency,
            run.stage,
            player.speed,
            player.bullet_damage
        ),
        kills: format!("Enemies killed: {}/{}", run.kills, run.kill_target),
    }
}

pub fn pause_overlay(assets: &dyn AssetCatalog) -> OverlayView {
    OverlayView {
        kind: OverlayKind::Pause,
        text: PAUSE_TEXT.to_string(),
        backdrop: Some(overlay_backdrop(assets)),
    }
}

pub fn game_over_overlay() -> OverlayView {
    OverlayView {
        kind: OverlayKind::GameOver,
        text: GAME_OVER_TEXT.to_string(),
        backdrop: None,
    }
}

/// Stage summary and shop menu. Items already pressed this visit are
/// marked as gone.
pub fn shop_overlay(
    run: &RunState,
    offer: &ShopOffer,
    tuning: &ShopTuning,
    assets: &dyn AssetCatalog,
) -> OverlayView {
    let mut text = format!("Stage {} Cleared!\nRP: {}\n\n", run.stage, run.currency);
    for item in ShopItem::ALL {
        let (key, name, effect) = match item {
            ShopItem::Heal => ("A", "Apple", format!("Heals {} HP", tuning.heal_amount)),
            ShopItem::Speed => ("S", "Soda", format!("+{} Speed", tuning.speed_step)),
            ShopItem::Damage => ("F", "Fire", format!("+{} Bullet DMG", tuning.damage_step)),
        };
        let status = if offer.is_armed(item) { "" } else { " (gone)" };
        text.push_str(&format!(
            "[{key}] {name} ({} RP): {effect}{status}\n",
            tuning.price
        ));
    }
    text.push_str("\nPress SPACE or ESC to Start\nThe Next Stage");

    OverlayView {
        kind: OverlayKind::Shop,
        text,
        backdrop: Some(overlay_backdrop(assets)),
    }
}
