//! Application state shared between the host bridge and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use stagefire_core::commands::{HeldKeys, PlayerCommand};
use stagefire_core::config::GameConfig;
use stagefire_core::events::CollisionEvent;
use stagefire_core::state::GameStateSnapshot;
use stagefire_core::types::{BodyState, EntityId};

use crate::error::AppError;
use crate::game_loop;

/// Messages sent from the host bridge to the game loop thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GameLoopCommand {
    /// A discrete key press.
    Command { command: PlayerCommand },
    /// A collision notification from the host physics step.
    Collision { event: CollisionEvent },
    /// Post-step body state for one entity.
    SyncBody { id: EntityId, body: BodyState },
    /// Current held-key state.
    SetHeldKeys { keys: HeldKeys },
    /// One-way platform filter query; answered with a `CollisionVerdict`.
    ShouldCollide { mover: EntityId, solid: EntityId },
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Messages sent from the game loop back to the host.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind")]
pub enum HostMessage<'a> {
    /// Published after every frame.
    Snapshot(&'a GameStateSnapshot),
    /// Answer to `ShouldCollide`, using body state synced so far.
    CollisionVerdict {
        mover: EntityId,
        solid: EntityId,
        collide: bool,
    },
}

/// Shared application state.
///
/// `mpsc::Sender` is not `Sync`, so it sits behind a `Mutex` to let the
/// state be shared across threads.
pub struct AppState {
    /// `None` until `start` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop. `emit` receives every message for the host.
    pub fn start<F>(&self, config: GameConfig, emit: F) -> Result<(), AppError>
    where
        F: FnMut(HostMessage<'_>) + Send + 'static,
    {
        let mut running = self.running.lock().map_err(|_| AppError::Poisoned)?;
        if *running {
            return Err(AppError::AlreadyRunning);
        }

        let cmd_tx = game_loop::spawn_game_loop(config, self.latest_snapshot.clone(), emit)?;

        *self.command_tx.lock().map_err(|_| AppError::Poisoned)? = Some(cmd_tx);
        *running = true;
        Ok(())
    }

    /// Forward a message to the game loop.
    pub fn send(&self, command: GameLoopCommand) -> Result<(), AppError> {
        let tx_lock = self.command_tx.lock().map_err(|_| AppError::Poisoned)?;
        match tx_lock.as_ref() {
            Some(tx) => tx.send(command).map_err(|_| AppError::Disconnected),
            None => Err(AppError::NotStarted),
        }
    }

    /// Most recent snapshot, if the loop has produced one.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, AppError> {
        let lock = self.latest_snapshot.lock().map_err(|_| AppError::Poisoned)?;
        Ok(lock.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagefire_core::enums::ShopItem;

    #[test]
    fn test_host_message_json_shape() {
        let verdict = HostMessage::CollisionVerdict {
            mover: EntityId(1),
            solid: EntityId(7),
            collide: true,
        };
        let json: serde_json::Value = serde_json::to_value(verdict).unwrap();
        assert_eq!(json["kind"], "CollisionVerdict");
        assert_eq!(json["collide"], true);

        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_value(HostMessage::Snapshot(&snapshot)).unwrap();
        assert_eq!(json["kind"], "Snapshot");
        assert_eq!(json["phase"], "Playing");
    }

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let err = state.send(GameLoopCommand::Shutdown).unwrap_err();
        assert!(matches!(err, AppError::NotStarted));
    }

    #[test]
    fn test_invalid_config_rejected_before_spawn() {
        let state = AppState::new();
        let mut config = GameConfig::default();
        config.enemies.spawn_interval_ms = 0;
        let err = state.start(config, |_| {}).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(!*state.running.lock().unwrap());
        assert!(matches!(
            state.send(GameLoopCommand::Shutdown),
            Err(AppError::NotStarted)
        ));
    }

    #[test]
    fn test_double_start_rejected() {
        let state = AppState::new();
        state.start(GameConfig::default(), |_| {}).unwrap();
        let err = state.start(GameConfig::default(), |_| {}).unwrap_err();
        assert!(matches!(err, AppError::AlreadyRunning));
        state.send(GameLoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_loop_command_json_shape() {
        let cmd: GameLoopCommand = serde_json::from_str(
            r#"{"kind":"Command","command":{"type":"Purchase","item":"Speed"}}"#,
        )
        .unwrap();
        assert_eq!(
            cmd,
            GameLoopCommand::Command {
                command: PlayerCommand::Purchase {
                    item: ShopItem::Speed
                }
            }
        );

        let cmd: GameLoopCommand =
            serde_json::from_str(r#"{"kind":"SetHeldKeys","keys":{"left":true}}"#).unwrap();
        assert_eq!(
            cmd,
            GameLoopCommand::SetHeldKeys {
                keys: HeldKeys {
                    left: true,
                    ..Default::default()
                }
            }
        );

        let cmd: GameLoopCommand = serde_json::from_str(r#"{"kind":"Shutdown"}"#).unwrap();
        assert_eq!(cmd, GameLoopCommand::Shutdown);

        let cmd: GameLoopCommand =
            serde_json::from_str(r#"{"kind":"ShouldCollide","mover":1,"solid":7}"#).unwrap();
        assert_eq!(
            cmd,
            GameLoopCommand::ShouldCollide {
                mover: EntityId(1),
                solid: EntityId(7)
            }
        );
    }
}
