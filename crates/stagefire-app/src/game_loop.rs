//! Game loop thread: runs the stage controller at 60Hz and emits snapshots.
//!
//! The controller is created inside this thread so it never crosses a
//! thread boundary. Host messages arrive via `mpsc` channel and are applied
//! at the next frame boundary. Snapshots and collision verdicts go to the
//! caller's `emit` sink; snapshots are also stored in shared state for
//! synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use stagefire_core::config::GameConfig;
use stagefire_core::constants::TICK_RATE;
use stagefire_core::state::GameStateSnapshot;
use stagefire_sim::StageController;

use crate::error::AppError;
use crate::state::{GameLoopCommand, HostMessage};

/// Nominal duration of one frame.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread. The config is validated first.
///
/// Returns the command sender for the host bridge to use.
pub fn spawn_game_loop<F>(
    config: GameConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    emit: F,
) -> Result<mpsc::Sender<GameLoopCommand>, AppError>
where
    F: FnMut(HostMessage<'_>) + Send + 'static,
{
    config.validate()?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("stagefire-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, emit);
        })?;

    Ok(cmd_tx)
}

/// Apply one host message. Returns false on shutdown.
fn apply<F>(engine: &mut StageController, command: GameLoopCommand, emit: &mut F) -> bool
where
    F: FnMut(HostMessage<'_>),
{
    match command {
        GameLoopCommand::Command { command } => engine.queue_command(command),
        GameLoopCommand::Collision { event } => engine.queue_collision(event),
        GameLoopCommand::SyncBody { id, body } => {
            if !engine.sync_body(id, body) {
                log::debug!("sync for unknown entity {id:?}");
            }
        }
        GameLoopCommand::SetHeldKeys { keys } => engine.set_held_keys(keys),
        GameLoopCommand::ShouldCollide { mover, solid } => {
            emit(HostMessage::CollisionVerdict {
                mover,
                solid,
                collide: engine.should_collide(mover, solid),
            });
        }
        GameLoopCommand::Shutdown => return false,
    }
    true
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<F>(
    config: GameConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    mut emit: F,
) where
    F: FnMut(HostMessage<'_>),
{
    log::info!("game loop started (seed {})", config.seed);
    let mut engine = match StageController::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("game loop not started: {err}");
            return;
        }
    };
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending host messages
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if !apply(&mut engine, command, &mut emit) {
                        log::info!("game loop shutting down");
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("host disconnected, stopping game loop");
                    return;
                }
            }
        }

        // 2. Advance one frame (controller handles phase semantics)
        let snapshot = engine.tick();

        // 3. Hand the snapshot to the host
        emit(HostMessage::Snapshot(&snapshot));

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next frame
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset instead of catching up
            log::warn!("game loop fell behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagefire_core::commands::{HeldKeys, PlayerCommand};
    use stagefire_core::enums::{EntityKind, GamePhase};
    use stagefire_core::types::EntityId;

    const WAIT: Duration = Duration::from_secs(5);

    fn spawn_with_channel() -> (
        mpsc::Sender<GameLoopCommand>,
        mpsc::Receiver<GameStateSnapshot>,
        Arc<Mutex<Option<GameStateSnapshot>>>,
    ) {
        let latest = Arc::new(Mutex::new(None));
        let (snap_tx, snap_rx) = mpsc::channel();
        let cmd_tx = spawn_game_loop(GameConfig::default(), latest.clone(), move |msg| {
            if let HostMessage::Snapshot(s) = msg {
                let _ = snap_tx.send(s.clone());
            }
        })
        .unwrap();
        (cmd_tx, snap_rx, latest)
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Command {
            command: PlayerCommand::Fire,
        })
        .unwrap();
        tx.send(GameLoopCommand::SetHeldKeys {
            keys: HeldKeys::default(),
        })
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_apply_routes_to_controller() {
        let mut engine = StageController::new(GameConfig::default()).unwrap();
        let mut ignore = |_: HostMessage<'_>| {};
        assert!(apply(
            &mut engine,
            GameLoopCommand::Command {
                command: PlayerCommand::TogglePause
            },
            &mut ignore
        ));
        assert_eq!(engine.tick().phase, GamePhase::Paused);
        assert!(!apply(&mut engine, GameLoopCommand::Shutdown, &mut ignore));
    }

    #[test]
    fn test_apply_answers_collision_query() {
        let mut engine = StageController::new(GameConfig::default()).unwrap();
        let snap = engine.tick();
        let player = snap.player.id.unwrap();
        let ground = snap
            .solids
            .iter()
            .find(|s| s.kind == EntityKind::Ground)
            .unwrap()
            .id;

        let mut verdicts = Vec::new();
        let mut record = |msg: HostMessage<'_>| {
            if let HostMessage::CollisionVerdict { collide, .. } = msg {
                verdicts.push(collide);
            }
        };
        let query = GameLoopCommand::ShouldCollide {
            mover: player,
            solid: ground,
        };
        assert!(apply(&mut engine, query.clone(), &mut record));
        let unknown = GameLoopCommand::ShouldCollide {
            mover: player,
            solid: EntityId(u64::MAX),
        };
        assert!(apply(&mut engine, unknown, &mut record));
        assert_eq!(verdicts, vec![true, false]);
    }

    #[test]
    fn test_invalid_config_never_spawns() {
        let mut config = GameConfig::default();
        config.player.baseline_speed_stat = 0;
        let result = spawn_game_loop(config, Arc::new(Mutex::new(None)), |_| {});
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_loop_emits_snapshots_and_applies_commands() {
        let (cmd_tx, snap_rx, latest) = spawn_with_channel();

        let first = snap_rx.recv_timeout(WAIT).unwrap();
        assert_eq!(first.phase, GamePhase::Playing);

        cmd_tx
            .send(GameLoopCommand::Command {
                command: PlayerCommand::TogglePause,
            })
            .unwrap();
        let deadline = Instant::now() + WAIT;
        loop {
            let snap = snap_rx.recv_timeout(WAIT).unwrap();
            if snap.phase == GamePhase::Paused {
                break;
            }
            assert!(Instant::now() < deadline, "pause never applied");
        }
        assert!(latest.lock().unwrap().is_some());

        cmd_tx.send(GameLoopCommand::Shutdown).unwrap();
        // The sink is dropped with the thread, closing the channel.
        while snap_rx.recv_timeout(WAIT).is_ok() {}
        assert!(cmd_tx.send(GameLoopCommand::Shutdown).is_err());
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = StageController::new(GameConfig::default()).unwrap();
        engine.set_held_keys(HeldKeys {
            right: true,
            ..Default::default()
        });
        for _ in 0..100 {
            engine.queue_command(PlayerCommand::Fire);
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
