use std::io;

use stagefire_app::error::AppError;
use stagefire_app::host;
use stagefire_app::state::AppState;
use stagefire_core::config::GameConfig;

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {path}");
            GameConfig::load(path)?
        }
        None => GameConfig::default(),
    };

    let state = AppState::new();
    state.start(config, |message| {
        let stdout = io::stdout();
        if let Err(err) = host::write_message(&mut stdout.lock(), message) {
            log::error!("failed to write message: {err}");
        }
    })?;

    host::pump(io::stdin().lock(), &state)?;
    if let Some(last) = state.snapshot()? {
        log::info!(
            "session ended on stage {} with {} RP",
            last.run.stage,
            last.run.currency
        );
    }
    Ok(())
}
