//! In-process leaderboard store

use super::ScoreStore;
use crate::error::Result;
use crate::highscores::ScoreEntry;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<ScoreEntry>,
    saves: usize,
}

#[cfg(test)]
impl MemoryStore {
    /// Store pre-filled with entries
    pub fn with_entries(entries: Vec<ScoreEntry>) -> Self {
        Self { entries, saves: 0 }
    }

    /// Number of completed saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Result<Vec<ScoreEntry>> {
        Ok(self.entries.clone())
    }

    fn save(&mut self, entries: &[ScoreEntry]) -> Result<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }
}
