//! Chess Replay - plays a move script through the rules engine.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration loading
//! - [`script`] - Move script parsing
//! - [`runner`] - Replays a script on a game
//! - [`report`] - JSON report of the outcome

pub mod config;
pub mod report;
pub mod runner;
pub mod script;

pub use config::{ConfigError, ReplayConfig};
pub use report::{Rejection, Report};
pub use runner::replay;
pub use script::{ScriptError, ScriptLine};
