//! Read-only snapshot of what the current phase should show

use super::cards::DestinyCard;
use super::question::ProbabilityQuestion;
use super::state::{GamePhase, GameState, Level, Player};
use crate::consts::CHARACTER_COUNT;

/// Name rules shown on the name entry screen
pub static NAME_RULES: [&str; 4] = [
    "Name Rules:",
    "- 2-15 characters",
    "- Letters and numbers only",
    "- Spaces allowed",
];

/// Per-phase view data handed to the front end
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Start,
    CharacterSelect {
        /// (character id, label)
        roster: Vec<(u8, String)>,
    },
    NameInput {
        player_id: u8,
        buffer: &'a str,
        rules: &'static [&'static str],
        rejected: bool,
    },
    Path {
        player: &'a Player,
        levels: &'a [Level],
        timer: f64,
    },
    Parkour {
        level: &'a Level,
        question: &'a ProbabilityQuestion,
        wrong_answers: u32,
        timer: f64,
    },
    DestinyCard {
        card: DestinyCard,
        timer: f64,
    },
    Leaderboard {
        /// Name of the run just recorded, for highlighting
        latest: Option<String>,
    },
    Win {
        name: String,
        time: f64,
        /// Leaderboard rank the time will take, None when it misses the board
        rank: Option<usize>,
    },
}

impl GameState {
    /// Snapshot for the current phase.
    ///
    /// A phase whose data is missing degrades to the nearest screen that can
    /// still be drawn (the path overview, or the cover).
    pub fn view(&self) -> View<'_> {
        match self.phase {
            GamePhase::Start => View::Start,
            GamePhase::CharacterSelect => View::CharacterSelect {
                roster: (1..=CHARACTER_COUNT)
                    .map(|id| (id, Player::new(id).label()))
                    .collect(),
            },
            GamePhase::NameInput => View::NameInput {
                player_id: self.player.as_ref().map(|p| p.id).unwrap_or(1),
                buffer: &self.name_buffer,
                rules: &NAME_RULES,
                rejected: self.name_rejected,
            },
            GamePhase::Parkour => match (self.active_level(), self.question.as_ref()) {
                (Some(level), Some(question)) => View::Parkour {
                    level,
                    question,
                    wrong_answers: self.wrong_answers,
                    timer: self.timer,
                },
                _ => self.path_view(),
            },
            GamePhase::DestinyCard => match self.destiny_card {
                Some(card) => View::DestinyCard {
                    card,
                    timer: self.timer,
                },
                None => self.path_view(),
            },
            GamePhase::Game => self.path_view(),
            GamePhase::Leaderboard => View::Leaderboard {
                latest: self.player.as_ref().map(|p| p.label()),
            },
            GamePhase::Win => View::Win {
                name: self.player.as_ref().map(|p| p.label()).unwrap_or_default(),
                time: self.timer,
                rank: self.expected_rank,
            },
        }
    }

    fn path_view(&self) -> View<'_> {
        match self.player.as_ref() {
            Some(player) => View::Path {
                player,
                levels: &self.levels,
                timer: self.timer,
            },
            None => View::Start,
        }
    }
}
