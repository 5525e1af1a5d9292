//! Leaderboard storage backends
//!
//! - `JsonFileStore`: JSON list on disk, written through a temp file
//! - `MemoryStore`: process-local, for tests and throwaway sessions

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::fmt;

use crate::error::Result;
use crate::highscores::ScoreEntry;

/// Where leaderboard entries are kept between runs
pub trait ScoreStore: fmt::Debug {
    /// Read all stored entries. Absent storage is an empty list, not an error.
    fn load(&self) -> Result<Vec<ScoreEntry>>;

    /// Replace the stored entries with `entries`
    fn save(&mut self, entries: &[ScoreEntry]) -> Result<()>;
}
