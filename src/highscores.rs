//! Best completion times leaderboard
//!
//! Tracks the 10 fastest runs, ascending by time. Storage goes through a
//! [`ScoreStore`]; the in-memory list stays authoritative when it fails.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::persistence::{MemoryStore, ScoreStore};

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Timestamp format stored with each entry
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    #[serde(rename = "name")]
    pub player_name: String,
    /// Completion time in seconds
    #[serde(rename = "time")]
    pub time_seconds: f64,
    /// Local time the run finished, `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "date", default)]
    pub recorded_at: String,
}

impl ScoreEntry {
    pub fn new(player_name: &str, time_seconds: f64, recorded_at: NaiveDateTime) -> Self {
        Self {
            player_name: player_name.to_string(),
            time_seconds,
            recorded_at: recorded_at.format(DATE_FORMAT).to_string(),
        }
    }

    /// Parsed timestamp, if the stored string is well formed
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.recorded_at, DATE_FORMAT).ok()
    }
}

/// Ranked list of entries, fastest first
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct HighScores {
    pub entries: Vec<ScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build from stored entries: drops non-finite times, stable-sorts
    /// ascending and keeps the best 10
    pub fn from_entries(mut entries: Vec<ScoreEntry>) -> Self {
        entries.retain(|e| e.time_seconds.is_finite());
        entries.sort_by(|a, b| a.time_seconds.total_cmp(&b.time_seconds));
        entries.truncate(MAX_HIGH_SCORES);
        Self { entries }
    }

    /// Check if a time would make the list
    pub fn qualifies(&self, time_seconds: f64) -> bool {
        if !time_seconds.is_finite() {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Ties lose to the entry already present
        self.entries
            .last()
            .map(|e| time_seconds < e.time_seconds)
            .unwrap_or(true)
    }

    /// Rank a time would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, time_seconds: f64) -> Option<usize> {
        if !self.qualifies(time_seconds) {
            return None;
        }
        Some(self.insertion_index(time_seconds) + 1)
    }

    /// First slot with a strictly slower time, so equal times keep insertion order
    fn insertion_index(&self, time_seconds: f64) -> usize {
        self.entries
            .iter()
            .position(|e| time_seconds < e.time_seconds)
            .unwrap_or(self.entries.len())
    }

    /// Insert an entry in rank order and trim to size.
    /// Returns the rank achieved (1-indexed) or None if it fell off the end.
    pub fn add_entry(&mut self, entry: ScoreEntry) -> Option<usize> {
        if !entry.time_seconds.is_finite() {
            return None;
        }
        let index = self.insertion_index(entry.time_seconds);
        self.entries.insert(index, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        (index < MAX_HIGH_SCORES).then_some(index + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fastest recorded time (if any)
    pub fn best_time(&self) -> Option<f64> {
        self.entries.first().map(|e| e.time_seconds)
    }
}

/// The leaderboard service: ranked list plus its storage
#[derive(Debug)]
pub struct Leaderboard {
    scores: HighScores,
    store: Box<dyn ScoreStore>,
}

impl Leaderboard {
    /// Load from a store. Missing or unreadable data gives an empty board.
    pub fn load(store: Box<dyn ScoreStore>) -> Self {
        let scores = match store.load() {
            Ok(entries) => {
                let scores = HighScores::from_entries(entries);
                log::info!("Loaded {} high scores", scores.len());
                scores
            }
            Err(e) => {
                log::warn!("Could not load high scores, starting fresh: {}", e);
                HighScores::new()
            }
        };
        Self { scores, store }
    }

    /// Board that lives only for this process
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStore::default()))
    }

    /// Record a finished run stamped with the current local time
    pub fn add_score(&mut self, player_name: &str, time_seconds: f64) -> Option<usize> {
        self.add_score_at(player_name, time_seconds, Local::now().naive_local())
    }

    /// Record a finished run and persist the whole list.
    /// A failed save is logged; the in-memory list still has the entry.
    pub fn add_score_at(
        &mut self,
        player_name: &str,
        time_seconds: f64,
        recorded_at: NaiveDateTime,
    ) -> Option<usize> {
        let rank = self
            .scores
            .add_entry(ScoreEntry::new(player_name, time_seconds, recorded_at));
        match rank {
            Some(rank) => log::info!(
                "{} placed #{} with {:.2}s",
                player_name,
                rank,
                time_seconds
            ),
            None => log::info!(
                "{} finished in {:.2}s, not in the top {}",
                player_name,
                time_seconds,
                MAX_HIGH_SCORES
            ),
        }
        self.persist();
        rank
    }

    fn persist(&mut self) {
        match self.store.save(&self.scores.entries) {
            Ok(()) => log::debug!("High scores saved ({} entries)", self.scores.len()),
            Err(e) => log::warn!("High scores not saved, keeping them in memory: {}", e),
        }
    }

    /// Rank a finished time would take if it were recorded now
    pub fn potential_rank(&self, time_seconds: f64) -> Option<usize> {
        self.scores.potential_rank(time_seconds)
    }

    pub fn top_scores(&self) -> &[ScoreEntry] {
        &self.scores.entries
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }
}

/// Format a completion time the way the leaderboard shows it
pub fn format_time(time_seconds: f64) -> String {
    let total = time_seconds.max(0.0);
    let minutes = (total / 60.0).floor() as u64;
    let seconds = total - minutes as f64 * 60.0;
    if minutes > 0 {
        format!("{}m {:04.1}s", minutes, seconds)
    } else {
        format!("{:.1}s", seconds)
    }
}
