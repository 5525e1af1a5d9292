//! JSON file leaderboard store
//!
//! File format: a JSON array of `{ "name", "time", "date" }` records.
//! Saves go to `<file>.tmp` first and are renamed over the target, so a crash
//! mid-write leaves the previous list intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ScoreStore;
use crate::error::{GameError, Result};
use crate::highscores::ScoreEntry;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Result<Vec<ScoreEntry>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No leaderboard at {}, starting fresh", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(GameError::persistence(&self.path, e)),
        };
        serde_json::from_str(&json).map_err(|e| GameError::corrupt(&self.path, e))
    }

    fn save(&mut self, entries: &[ScoreEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| GameError::persistence(parent, e))?;
        }
        let json =
            serde_json::to_string_pretty(entries).map_err(|e| GameError::corrupt(&self.path, e))?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| GameError::persistence(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(GameError::persistence(&self.path, e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::Leaderboard;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn entry(name: &str, time: f64) -> ScoreEntry {
        let at = NaiveDate::from_ymd_opt(2024, 10, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        ScoreEntry::new(name, time, at)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("leaderboard.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("leaderboard.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&[entry("Bob", 10.0), entry("Ann", 42.0)]).unwrap();
        assert!(path.exists());
        assert!(!store.tmp_path().exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].player_name, "Bob");
        assert_eq!(loaded[1].time_seconds, 42.0);
    }

    #[test]
    fn test_reads_plain_record_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");
        fs::write(
            &path,
            r#"[{"name": "Ann", "time": 42.7, "date": "2024-10-31 20:00:00"},
                {"name": "Bob", "time": 10}]"#,
        )
        .unwrap();

        let loaded = JsonFileStore::new(&path).load().unwrap();
        assert_eq!(loaded[0].player_name, "Ann");
        assert_eq!(loaded[1].time_seconds, 10.0);
        assert_eq!(loaded[1].recorded_at, "");
    }

    #[test]
    fn test_corrupt_file_is_error_but_board_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");
        fs::write(&path, "{ not json ]").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(GameError::Corrupt { .. })));

        let board = Leaderboard::load(Box::new(store));
        assert!(board.top_scores().is_empty());
    }

    #[test]
    fn test_leaderboard_persists_every_add() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");

        let mut board = Leaderboard::load(Box::new(JsonFileStore::new(&path)));
        board.add_score("Ann", 42.0);
        board.add_score("Bob", 10.0);
        board.add_score("Cid", 99.0);

        let reloaded = Leaderboard::load(Box::new(JsonFileStore::new(&path)));
        let names: Vec<&str> = reloaded
            .top_scores()
            .iter()
            .map(|e| e.player_name.as_str())
            .collect();
        assert_eq!(names, vec!["Bob", "Ann", "Cid"]);
        assert!(reloaded.top_scores().iter().all(|e| e.recorded_at().is_some()));
    }

    #[test]
    fn test_unwritable_target_keeps_memory() {
        let dir = tempdir().unwrap();
        // A directory where the file should be makes the rename fail
        let path = dir.path().join("leaderboard.json");
        fs::create_dir(&path).unwrap();

        let mut board = Leaderboard::load(Box::new(JsonFileStore::new(&path)));
        assert!(board.top_scores().is_empty());
        assert_eq!(board.add_score("Ann", 42.0), Some(1));
        assert_eq!(board.top_scores().len(), 1);
    }

    #[test]
    fn test_failed_rename_removes_tmp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");
        fs::create_dir(&path).unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(matches!(
            store.save(&[entry("Ann", 42.0)]),
            Err(GameError::Persistence { .. })
        ));
        assert!(!store.tmp_path().exists());
        assert!(path.is_dir());
    }
}
