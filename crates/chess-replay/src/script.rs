//! Move scripts.
//!
//! A script holds one move per line in UCI long algebraic form (`e2e4`,
//! `e7e8q`). Blank lines are skipped and `#` starts a comment that runs to
//! the end of the line.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading a script.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One move taken from a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// 1-based line number in the source text.
    pub line: usize,
    /// The move text with comments and surrounding whitespace removed.
    pub text: String,
}

/// Splits script text into moves.
pub fn parse(content: &str) -> Vec<ScriptLine> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = raw.split('#').next().unwrap_or_default().trim();
            (!text.is_empty()).then(|| ScriptLine {
                line: i + 1,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Reads and parses the script at `path`.
pub fn load(path: &Path) -> Result<Vec<ScriptLine>, ScriptError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&content))
}
