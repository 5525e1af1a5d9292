//! Error types for Candyland Adventure
//!
//! Nothing here is fatal to a running session: callers recover every variant
//! locally (re-prompt, fall back to empty state, draw a placeholder).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the game core and its collaborators
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Persistence error at {}: {}", .path.display(), .source)]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt data in {}: {}", .path.display(), .source)]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Asset missing: {}", .0.display())]
    AssetMissing(PathBuf),
}

impl GameError {
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GameError::Persistence {
            path: path.into(),
            source,
        }
    }

    pub fn corrupt(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        GameError::Corrupt {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;
