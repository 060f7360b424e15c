//! Drives a [`Game`] through a script.

use crate::config::ReplayConfig;
use crate::report::{Rejection, Report};
use crate::script::ScriptLine;
use chess_engine::Game;
use tracing::{info, warn};

/// Plays each script line on `game` and summarizes what happened.
///
/// A refused move is recorded with its line number. Replay then stops or
/// carries on with the next line depending on
/// [`ReplayConfig::stop_on_illegal`].
pub fn replay(mut game: Game, lines: &[ScriptLine], config: &ReplayConfig) -> Report {
    let mut applied = Vec::new();
    let mut rejected = Vec::new();

    for line in lines {
        match game.make_move_uci(&line.text) {
            Ok(()) => {
                if let Some(m) = game.move_history().last() {
                    applied.push(m.to_uci());
                }
            }
            Err(e) => {
                warn!(line = line.line, text = %line.text, error = %e, "move refused");
                rejected.push(Rejection {
                    line: line.line,
                    text: line.text.clone(),
                    reason: e.to_string(),
                });
                if config.stop_on_illegal {
                    break;
                }
            }
        }
    }

    let result = game.result();
    info!(
        applied = applied.len(),
        rejected = rejected.len(),
        result = ?result,
        "replay finished"
    );

    Report {
        applied,
        rejected,
        turn: game.turn(),
        in_check: game.is_in_check(game.turn()),
        result,
        state: config.include_state.then_some(game),
    }
}
