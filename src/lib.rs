//! Candyland Adventure - a Halloween path game against the clock
//!
//! Core modules:
//! - `sim`: Deterministic game core (entities, generators, state machine)
//! - `highscores`: Top 10 completion times
//! - `persistence`: Leaderboard storage backends
//! - `settings`: Data-driven game configuration
//! - `platform`: Front end boundary (intents, assets)
//! - `renderer`: Terminal rendering of the current view

pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use highscores::{HighScores, Leaderboard, ScoreEntry};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (platform layout space)
    pub const PLAYFIELD_WIDTH: f32 = 600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    /// Platform rectangle size
    pub const PLATFORM_WIDTH: f32 = 60.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Platforms never spawn above this line (title area)
    pub const PLATFORM_MIN_Y: f32 = 100.0;
    /// Platforms per level, inclusive range
    pub const MIN_PLATFORMS: usize = 5;
    pub const MAX_PLATFORMS: usize = 8;

    /// Levels on the path
    pub const DEFAULT_LEVEL_COUNT: usize = 7;
    /// Selectable character skins (ids 1..=5)
    pub const CHARACTER_COUNT: u8 = 5;

    /// Player name rules
    pub const NAME_MIN_LEN: usize = 2;
    pub const NAME_MAX_LEN: usize = 15;
    /// Hard cap on the name edit buffer
    pub const NAME_BUFFER_CAP: usize = 32;

    /// Faces drawn for probability questions
    pub const DIE_MIN: u32 = 1;
    pub const DIE_MAX: u32 = 6;
    /// Default absolute tolerance when checking answers
    pub const ANSWER_TOLERANCE: f64 = 0.01;

    /// Chance of drawing a destiny card after a non-final level
    pub const DESTINY_CARD_CHANCE: f64 = 0.5;

    /// Target main loop cadence
    pub const TARGET_FPS: u32 = 60;
    /// Largest frame delta fed to the timer (stalls, suspended terminal)
    pub const MAX_FRAME_DT: f64 = 0.25;

    /// Asset thumbnail edge in pixels
    pub const THUMBNAIL_SIZE: u32 = 80;
}
