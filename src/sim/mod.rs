//! Game core
//!
//! All gameplay rules live here. This module stays free of I/O and terminal
//! code:
//! - Seeded RNG only (`Pcg32` per session)
//! - Intents in, view snapshots out
//! - Storage only through the `Leaderboard` handed to `tick`

pub mod cards;
pub mod levels;
pub mod question;
pub mod state;
pub mod tick;
pub mod view;

pub use cards::{DestinyCard, draw_card};
pub use levels::{PlatformLayout, RandomLayout, generate_levels, monster_catalog};
pub use question::{ProbabilityQuestion, generate_question};
pub use state::{
    GameEvent, GamePhase, GameState, Level, Monster, Platform, Player, QuestionKind, Tuning,
    validate_name,
};
pub use tick::{Intent, apply_intent, tick};
pub use view::{NAME_RULES, View};
