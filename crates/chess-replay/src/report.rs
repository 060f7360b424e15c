//! JSON report of a replayed script.

use chess_core::Color;
use chess_engine::{Game, GameResult};
use serde::Serialize;
use std::path::Path;

/// A script line the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// 1-based line number in the script.
    pub line: usize,
    /// The move text as written.
    pub text: String,
    /// Why the move was refused.
    pub reason: String,
}

/// Summary of a replay.
///
/// Serialized as:
/// ```json
/// {
///   "applied": ["f2f3", "e7e5", "g2g4", "d8h4"],
///   "rejected": [],
///   "turn": "white",
///   "in_check": true,
///   "result": { "kind": "checkmate", "winner": "black" }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Moves that were played, in UCI form.
    pub applied: Vec<String>,
    /// Moves that were refused.
    pub rejected: Vec<Rejection>,
    /// Side to move after the last applied move.
    pub turn: Color,
    /// Whether the side to move is in check.
    pub in_check: bool,
    /// Final result, if the game ended.
    pub result: Option<GameResult>,
    /// The full game, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<Game>,
}

impl Report {
    /// Writes the report as pretty-printed JSON to `path`.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
