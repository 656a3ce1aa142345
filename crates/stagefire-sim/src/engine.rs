//! Stage controller: the core of the game.
//!
//! `StageController` owns the hecs world mirroring the host engine's bodies,
//! processes queued key presses and collision notifications, runs all
//! per-frame systems, drives the Playing / Paused / ShopActive / GameOver
//! state machine, and produces `GameStateSnapshot`s. Completely headless
//! (no engine dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stagefire_core::commands::{HeldKeys, PlayerCommand};
use stagefire_core::components::{Body, Bullet, Enemy, Solid};
use stagefire_core::config::GameConfig;
use stagefire_core::enums::{EntityKind, GamePhase, PurchaseOutcome, ShopItem};
use stagefire_core::error::ConfigError;
#[cfg(test)]
use stagefire_core::enums::Facing;
use stagefire_core::events::{CollisionEvent, GameEvent};
use stagefire_core::state::{GameStateSnapshot, OverlayView};
use stagefire_core::types::{BodyState, EntityId, SimTime};

use crate::assets::{AssetCatalog, StandardAssets};
use crate::collision::{CollisionTable, Notify};
use crate::run_state::{PlayerState, RunState};
use crate::shop::ShopOffer;
use crate::systems;
use crate::systems::combat::BulletHit;
use crate::timer::RepeatingTimer;
use crate::world_setup::{self, entity_from_id, entity_id};

/// The stage controller. Owns the ECS world and all session state.
pub struct StageController {
    config: GameConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    run: RunState,
    player: PlayerState,
    held_keys: HeldKeys,
    command_queue: VecDeque<PlayerCommand>,
    collision_queue: VecDeque<CollisionEvent>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    spawn_timer: RepeatingTimer,
    shop: ShopOffer,
    overlay: Option<OverlayView>,
    collisions: CollisionTable,
    assets: Box<dyn AssetCatalog>,
}

impl StageController {
    /// Create a controller with the stock asset pack.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_assets(config, Box::new(StandardAssets))
    }

    /// Scene setup: level geometry, the player, and an armed spawn timer.
    /// Rejects configs that fail validation.
    pub fn with_assets(
        config: GameConfig,
        assets: Box<dyn AssetCatalog>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        world_setup::setup_level(&mut world, config.playfield_width);
        let player_entity = world_setup::spawn_player(&mut world);
        let time = SimTime::default();

        Ok(Self {
            world,
            time,
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            run: RunState::new(&config.stages),
            player: PlayerState::new(player_entity, &config),
            held_keys: HeldKeys::default(),
            command_queue: VecDeque::new(),
            collision_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            spawn_timer: RepeatingTimer::new(config.enemies.spawn_interval_ms, time.elapsed_ms),
            shop: ShopOffer::default(),
            overlay: None,
            collisions: CollisionTable::standard(),
            assets,
            config,
        })
    }

    /// Queue a key press for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue a collision notification from the host physics step.
    pub fn queue_collision(&mut self, event: CollisionEvent) {
        self.collision_queue.push_back(event);
    }

    /// Replace the held-key state polled by the next frame.
    pub fn set_held_keys(&mut self, keys: HeldKeys) {
        self.held_keys = keys;
    }

    /// Mirror the host's post-step body state. Returns false for unknown ids.
    pub fn sync_body(&mut self, id: EntityId, state: BodyState) -> bool {
        let Some(entity) = entity_from_id(id) else {
            return false;
        };
        match self.world.query_one_mut::<&mut Body>(entity) {
            Ok(body) => {
                body.position = state.position;
                body.velocity = state.velocity;
                body.touching_down = state.touching_down;
                body.blocked_left = state.blocked_left;
                body.blocked_right = state.blocked_right;
                true
            }
            Err(_) => false,
        }
    }

    /// Collision filter callback: whether the host should separate a moving
    /// body from a static solid. Unknown ids never collide.
    pub fn should_collide(&self, mover: EntityId, solid: EntityId) -> bool {
        let (Some(mover), Some(solid)) = (entity_from_id(mover), entity_from_id(solid)) else {
            return false;
        };
        let (Some(mover_kind), Ok(body), Ok(solid)) = (
            world_setup::kind_of(&self.world, mover),
            self.world.get::<&Body>(mover),
            self.world.get::<&Solid>(solid),
        ) else {
            return false;
        };
        self.collisions
            .should_collide(mover_kind, &body, solid.kind, &solid.bounds)
    }

    /// Advance one frame and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        if self.phase == GamePhase::GameOver {
            self.command_queue.clear();
            self.collision_queue.clear();
        } else {
            self.process_commands();
            self.process_collisions();
            self.run_timers();
            self.update_frame();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.run,
            &self.player,
            self.overlay.as_ref(),
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn spawn_timer_armed(&self) -> bool {
        self.spawn_timer.is_armed()
    }

    /// Queue multiple key presses (for testing).
    #[cfg(test)]
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Spawn an enemy directly, bypassing the timer (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: glam::Vec2, health: u32) -> EntityId {
        let speed = self.config.enemies.base_speed * self.run.stage as f32;
        entity_id(world_setup::spawn_enemy(&mut self.world, position, health, speed))
    }

    /// Spawn a bullet directly (for testing).
    #[cfg(test)]
    pub fn spawn_test_bullet(&mut self, position: glam::Vec2) -> EntityId {
        entity_id(world_setup::spawn_bullet(
            &mut self.world,
            position,
            Facing::Right,
            self.config.bullets.speed,
        ))
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    #[cfg(test)]
    pub fn run_state_mut(&mut self) -> &mut RunState {
        &mut self.run
    }

    /// Process all queued key presses.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Playing && !self.player.is_dead() {
                    if let Some(bullet) = systems::projectiles::fire(
                        &mut self.world,
                        &self.player,
                        &self.config.bullets,
                    ) {
                        self.events.push(GameEvent::BulletFired {
                            bullet: entity_id(bullet),
                        });
                    }
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Playing => self.pause(),
                GamePhase::Paused => self.unpause(),
                GamePhase::ShopActive => self.leave_shop(),
                GamePhase::GameOver => {}
            },
            PlayerCommand::Resume => match self.phase {
                GamePhase::Paused => self.unpause(),
                GamePhase::ShopActive => self.leave_shop(),
                GamePhase::Playing | GamePhase::GameOver => {}
            },
            PlayerCommand::Purchase { item } => {
                if self.phase == GamePhase::ShopActive {
                    self.purchase(item);
                } else {
                    log::debug!("purchase {item:?} ignored outside the shop");
                }
            }
        }
    }

    /// Resolve queued collision notifications. Physics is frozen outside
    /// `Playing`, so anything left over is stale. Once a hit kills the
    /// player the rest of the frame's contacts are dropped.
    fn process_collisions(&mut self) {
        while let Some(event) = self.collision_queue.pop_front() {
            if self.phase != GamePhase::Playing {
                log::debug!("dropping {event:?} while {:?}", self.phase);
                continue;
            }
            if self.player.is_dead() {
                log::debug!("dropping {event:?} after lethal hit");
                continue;
            }
            self.handle_collision(event);
        }
    }

    /// Whether the collision table raises `expected` for a contact between
    /// `mover` and the entity `other`.
    fn routed(&self, mover: EntityKind, other: Entity, expected: Notify) -> bool {
        world_setup::kind_of(&self.world, other)
            .is_some_and(|kind| self.collisions.notify_for(mover, kind) == expected)
    }

    fn handle_collision(&mut self, event: CollisionEvent) {
        let now = self.time.elapsed_ms;
        match event {
            CollisionEvent::PlayerEnemy { enemy } => {
                let Some(enemy) = entity_from_id(enemy) else {
                    return;
                };
                if !self.routed(EntityKind::Player, enemy, Notify::PlayerEnemy) {
                    log::debug!("unrouted player contact with {enemy:?}");
                    return;
                }
                let hit = systems::combat::player_contact(
                    &mut self.world,
                    &mut self.player,
                    enemy,
                    &self.config.combat,
                    now,
                );
                if hit {
                    log::debug!("player hit, health {}", self.player.health);
                    self.events.push(GameEvent::PlayerHit {
                        health: self.player.health,
                    });
                }
            }
            CollisionEvent::BulletEnemy { bullet, enemy } => {
                let (Some(bullet), Some(enemy_entity)) =
                    (entity_from_id(bullet), entity_from_id(enemy))
                else {
                    return;
                };
                if !self.routed(EntityKind::Bullet, enemy_entity, Notify::BulletEnemy) {
                    log::debug!("unrouted bullet overlap with {enemy_entity:?}");
                    return;
                }
                let hit = systems::combat::bullet_hit(
                    &mut self.world,
                    bullet,
                    enemy_entity,
                    self.player.bullet_damage,
                );
                match hit {
                    BulletHit::Ignored => {
                        log::debug!("stale bullet overlap {bullet:?} / {enemy_entity:?}");
                    }
                    BulletHit::Damaged { .. } => {}
                    BulletHit::Killed => {
                        self.run.currency += 1;
                        self.run.kills += 1;
                        self.events.push(GameEvent::EnemyKilled { enemy });
                        log::debug!(
                            "enemy killed ({}/{})",
                            self.run.kills,
                            self.run.kill_target
                        );
                        if self.run.target_reached() {
                            self.enter_shop();
                        }
                    }
                }
            }
            CollisionEvent::BulletBlocked { bullet, solid } => {
                let (Some(bullet), Some(solid)) = (entity_from_id(bullet), entity_from_id(solid))
                else {
                    return;
                };
                if !self.routed(EntityKind::Bullet, solid, Notify::BulletBlocked) {
                    log::debug!("unrouted bullet contact with {solid:?}");
                    return;
                }
                if self.world.entity(bullet).is_ok_and(|e| e.has::<Bullet>()) {
                    let _ = self.world.despawn(bullet);
                }
            }
        }
    }

    /// Fire the spawn timer. Spawning is a no-op unless actively playing.
    fn run_timers(&mut self) {
        let fired = self.spawn_timer.poll(self.time.elapsed_ms);
        for _ in 0..fired {
            if self.phase != GamePhase::Playing {
                continue;
            }
            if let Some(enemy) = systems::spawner::spawn_enemy(
                &mut self.world,
                &mut self.rng,
                &self.run,
                &self.config.enemies,
            ) {
                let health = self
                    .world
                    .get::<&Enemy>(enemy)
                    .map(|e| e.health)
                    .unwrap_or_default();
                log::debug!("spawned enemy {enemy:?} with {health} hp");
                self.events.push(GameEvent::EnemySpawned {
                    enemy: entity_id(enemy),
                    health,
                });
            }
        }
    }

    /// Per-frame update: game-over check, then input, bullets, enemies.
    fn update_frame(&mut self) {
        if self.player.is_dead() {
            self.enter_game_over();
            return;
        }
        if self.phase != GamePhase::Playing {
            return;
        }

        let now = self.time.elapsed_ms;

        // 1. Player input (suppressed during knockback)
        systems::player_control::run(
            &mut self.world,
            &mut self.player,
            self.held_keys,
            &self.config.player,
            now,
        );
        // 2. Bullets
        systems::projectiles::run(
            &mut self.world,
            &self.config.bullets,
            self.config.playfield_width,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 3. Enemy steering
        let player_x = self
            .world
            .get::<&Body>(self.player.entity)
            .map(|b| b.position.x)
            .unwrap_or_default();
        systems::enemy_ai::run(
            &mut self.world,
            player_x,
            now,
            self.config.enemies.obstacle_jump,
        );
        // HUD is rebuilt from state in the snapshot.
    }

    fn pause(&mut self) {
        self.phase = GamePhase::Paused;
        self.overlay = Some(systems::snapshot::pause_overlay(self.assets.as_ref()));
        self.events.push(GameEvent::Paused);
        log::info!("paused");
    }

    fn unpause(&mut self) {
        self.phase = GamePhase::Playing;
        self.overlay = None;
        self.events.push(GameEvent::Resumed);
        log::info!("resumed");
    }

    /// Stage clear: clear enemies, halt spawning, open the shop.
    fn enter_shop(&mut self) {
        self.phase = GamePhase::ShopActive;
        let cleared = systems::cleanup::clear_enemies(&mut self.world, &mut self.despawn_buffer);
        self.spawn_timer.cancel();
        self.shop.arm_all();
        self.refresh_shop_overlay();
        self.events.push(GameEvent::StageCleared {
            stage: self.run.stage,
        });
        log::info!(
            "stage {} cleared ({} enemies removed, {} RP)",
            self.run.stage,
            cleared,
            self.run.currency
        );
    }

    /// Close the shop and start the next stage.
    fn leave_shop(&mut self) {
        self.shop.disarm_all();
        self.overlay = None;
        self.phase = GamePhase::Playing;
        self.run.advance_stage(self.config.stages.kill_target_step);
        self.spawn_timer.rearm(self.time.elapsed_ms);
        self.events.push(GameEvent::StageStarted {
            stage: self.run.stage,
            kill_target: self.run.kill_target,
        });
        log::info!(
            "stage {} started, kill target {}",
            self.run.stage,
            self.run.kill_target
        );
    }

    fn purchase(&mut self, item: ShopItem) {
        let outcome = self.shop.purchase(
            item,
            &self.config.shop,
            &mut self.run.currency,
            &mut self.player,
        );
        match outcome {
            PurchaseOutcome::Purchased => {
                log::info!("bought {item:?}, {} RP left", self.run.currency)
            }
            refused => log::info!("purchase of {item:?} refused: {refused:?}"),
        }
        self.events.push(GameEvent::Purchase { item, outcome });
        self.refresh_shop_overlay();
    }

    fn refresh_shop_overlay(&mut self) {
        self.overlay = Some(systems::snapshot::shop_overlay(
            &self.run,
            &self.shop,
            &self.config.shop,
            self.assets.as_ref(),
        ));
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.overlay = Some(systems::snapshot::game_over_overlay());
        self.spawn_timer.cancel();
        self.events.push(GameEvent::GameOver);
        log::info!(
            "game over on stage {} with {} RP",
            self.run.stage,
            self.run.currency
        );
    }
}
