//! Newline-delimited JSON bridge to the host engine.
//!
//! Each input line is one `GameLoopCommand`. Blank lines are skipped and
//! malformed lines are logged and dropped. End of input shuts the loop down.
//! Output is one `HostMessage` per line.

use std::io::{BufRead, Write};

use crate::error::AppError;
use crate::state::{AppState, GameLoopCommand, HostMessage};

/// Parse one input line. `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<GameLoopCommand>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}

/// Forward host messages from `reader` until EOF or an explicit shutdown.
/// Returns the number of messages forwarded.
pub fn pump<R: BufRead>(reader: R, state: &AppState) -> Result<usize, AppError> {
    let mut forwarded = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                log::warn!("line {}: ignoring malformed message: {err}", index + 1);
                continue;
            }
        };
        let shutdown = command == GameLoopCommand::Shutdown;
        state.send(command)?;
        forwarded += 1;
        if shutdown {
            return Ok(forwarded);
        }
    }
    log::info!("input closed after {forwarded} messages");
    state.send(GameLoopCommand::Shutdown)?;
    Ok(forwarded)
}

/// Write one message as a JSON line.
pub fn write_message<W: Write>(out: &mut W, message: HostMessage<'_>) -> std::io::Result<()> {
    serde_json::to_writer(&mut *out, &message)?;
    out.write_all(b"\n")?;
    out.flush()
}
