//! Front end boundary
//!
//! The game core only sees intents coming in and views going out. Anything
//! that can turn device input into [`Intent`]s and draw a [`View`] can drive it:
//! - `assets`: image lookup with placeholder fallback
//! - `input`: answer text parsing shared by front ends
//! - `terminal`: crossterm front end used by the binary

pub mod assets;
pub mod input;
pub mod terminal;

pub use assets::{Asset, AssetCatalog};
pub use input::parse_answer;
pub use terminal::TerminalFrontend;

use std::io;

use crate::highscores::ScoreEntry;
use crate::sim::{GamePhase, Intent, View};

/// A swappable presentation/input layer
pub trait Frontend {
    /// Collect this frame's intents without blocking
    fn poll_intents(&mut self, phase: GamePhase) -> io::Result<Vec<Intent>>;

    /// Draw the current view
    fn present(&mut self, view: &View<'_>, scores: &[ScoreEntry], assets: &AssetCatalog)
    -> io::Result<()>;
}
