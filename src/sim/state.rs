//! Game state and core entity types
//!
//! Everything the state machine mutates lives here. Presentation reads it
//! through [`GameState::view`](crate::sim::view).

use std::collections::BTreeSet;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cards::DestinyCard;
use super::levels::{PlatformLayout, RandomLayout, generate_levels_with};
use super::question::ProbabilityQuestion;
use crate::consts::*;
use crate::error::{GameError, Result};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Cover screen, waiting for any input
    #[default]
    Start,
    /// Choosing one of the character skins
    CharacterSelect,
    /// Typing a display name
    NameInput,
    /// Path overview between levels
    Game,
    /// Inside a level, facing its monster
    Parkour,
    /// Showing a freshly drawn destiny card (clock paused)
    DestinyCard,
    /// Leaderboard after a recorded run
    Leaderboard,
    /// Path completed (clock stopped)
    Win,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "Start",
            GamePhase::CharacterSelect => "CharacterSelect",
            GamePhase::NameInput => "NameInput",
            GamePhase::Game => "Game",
            GamePhase::Parkour => "Parkour",
            GamePhase::DestinyCard => "DestinyCard",
            GamePhase::Leaderboard => "Leaderboard",
            GamePhase::Win => "Win",
        }
    }

    /// Whether the session clock may run in this phase
    pub fn clock_runs(&self) -> bool {
        !matches!(self, GamePhase::Win | GamePhase::DestinyCard)
    }
}

/// Check a display name against the naming rules.
///
/// A name is valid when it is 2 to 15 characters long (spaces included) and,
/// with spaces removed, is non-empty and entirely alphanumeric.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason| GameError::InvalidName {
        name: name.to_string(),
        reason,
    };

    let len = name.chars().count();
    if len < NAME_MIN_LEN {
        return Err(invalid("must be at least 2 characters"));
    }
    if len > NAME_MAX_LEN {
        return Err(invalid("must be at most 15 characters"));
    }

    let mut compact = name.chars().filter(|c| *c != ' ').peekable();
    if compact.peek().is_none() || !compact.all(char::is_alphanumeric) {
        return Err(invalid("only letters, numbers and spaces are allowed"));
    }
    Ok(())
}

/// The player walking the path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Character skin (1..=5)
    pub id: u8,
    /// Custom name, set once validated
    pub display_name: Option<String>,
    /// Next level to play on the path
    pub position: usize,
    /// Completion time in seconds, written when the path is finished
    pub elapsed_time: f64,
    /// Level most recently entered
    pub current_level: usize,
    pub completed_levels: BTreeSet<usize>,
}

impl Player {
    pub fn new(id: u8) -> Self {
        Self {
            id,
            display_name: None,
            position: 0,
            elapsed_time: 0.0,
            current_level: 0,
            completed_levels: BTreeSet::new(),
        }
    }

    /// Name to show: the custom one, or "Player N" before it is set
    pub fn label(&self) -> String {
        match &self.display_name {
            Some(name) => name.clone(),
            None => format!("Player {}", self.id),
        }
    }

    /// Set the display name; state is untouched when validation fails
    pub fn set_display_name(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;
        self.display_name = Some(name.to_string());
        Ok(())
    }

    /// Record a cleared level and move past it
    pub fn complete_level(&mut self, index: usize) {
        self.completed_levels.insert(index);
        self.position = self.position.max(index + 1);
    }
}

/// Kind of riddle a monster asks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    Probability,
}

/// A monster guarding a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    /// 1 (easy) to 3 (hard)
    pub difficulty_tier: u8,
    pub question_kind: QuestionKind,
    pub defeated: bool,
}

impl Monster {
    pub fn new(name: &str, difficulty_tier: u8, question_kind: QuestionKind) -> Self {
        Self {
            name: name.to_string(),
            difficulty_tier,
            question_kind,
            defeated: false,
        }
    }
}

/// Axis-aligned platform rectangle (layout only, no collision)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner in playfield pixels
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT),
        }
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// One stop on the path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub index: usize,
    pub platforms: Vec<Platform>,
    pub monster: Monster,
    pub completed: bool,
}

/// Something that happened during a tick, for the front end and logs
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Quit,
    NameRejected { reason: String },
    WrongAnswer { level: usize, given: f64 },
    MonsterDefeated { level: usize, monster: String },
    CardDrawn(DestinyCard),
    /// `rank` is where the time would land on the leaderboard
    Won { name: String, time: f64, rank: Option<usize> },
    ScoreRecorded { name: String, time: f64, rank: Option<usize> },
}

/// Rule knobs for a session, usually derived from [`Settings`](crate::Settings)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub level_count: usize,
    /// Probability (0..=1) of a destiny card after each non-final level
    pub destiny_card_chance: f64,
    /// Absolute tolerance when checking answers
    pub answer_tolerance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            level_count: DEFAULT_LEVEL_COUNT,
            destiny_card_chance: DESTINY_CARD_CHANCE,
            answer_tolerance: ANSWER_TOLERANCE,
        }
    }
}

impl Tuning {
    /// Clamp values into ranges the state machine can use
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let destiny_card_chance = if self.destiny_card_chance.is_finite() {
            self.destiny_card_chance.clamp(0.0, 1.0)
        } else {
            defaults.destiny_card_chance
        };
        let answer_tolerance =
            if self.answer_tolerance.is_finite() && self.answer_tolerance >= 0.0 {
                self.answer_tolerance
            } else {
                defaults.answer_tolerance
            };
        Self {
            level_count: self.level_count.max(1),
            destiny_card_chance,
            answer_tolerance,
        }
    }
}

/// Complete session state, owned by the main loop
#[derive(Debug)]
pub struct GameState {
    /// Seed the session RNG started from
    pub seed: u64,
    pub phase: GamePhase,
    tuning: Tuning,
    pub player: Option<Player>,
    /// Path levels, generated once per session
    pub levels: Vec<Level>,
    /// Level being played (Parkour)
    pub current_level: Option<usize>,
    /// Session clock in seconds
    pub timer: f64,
    /// Clock armed (name accepted, path not finished)
    pub game_started: bool,
    /// Name being typed in NameInput
    pub name_buffer: String,
    /// Last submitted name was rejected and has not been edited since
    pub name_rejected: bool,
    /// Active monster riddle (Parkour)
    pub question: Option<ProbabilityQuestion>,
    /// Wrong answers against the active riddle
    pub wrong_answers: u32,
    /// Card on display (DestinyCard)
    pub destiny_card: Option<DestinyCard>,
    /// Leaderboard rank the finished run would take (Win)
    pub expected_rank: Option<usize>,
    pub quit_requested: bool,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    layout: Box<dyn PlatformLayout>,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self::with_layout(seed, tuning, Box::new(RandomLayout))
    }

    /// Create a session with a custom platform layout strategy
    pub fn with_layout(seed: u64, tuning: Tuning, layout: Box<dyn PlatformLayout>) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Start,
            tuning: tuning.sanitized(),
            player: None,
            levels: Vec::new(),
            current_level: None,
            timer: 0.0,
            game_started: false,
            name_buffer: String::new(),
            name_rejected: false,
            question: None,
            wrong_answers: 0,
            destiny_card: None,
            expected_rank: None,
            quit_requested: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            layout,
        };
        state.generate_path();
        state
    }

    /// Throw away the session and lay out a fresh path.
    ///
    /// The RNG keeps its stream, so a seeded run stays reproducible across
    /// several sessions.
    pub fn reset_session(&mut self) {
        self.phase = GamePhase::Start;
        self.player = None;
        self.current_level = None;
        self.timer = 0.0;
        self.game_started = false;
        self.name_buffer.clear();
        self.name_rejected = false;
        self.question = None;
        self.wrong_answers = 0;
        self.destiny_card = None;
        self.expected_rank = None;
        self.generate_path();
    }

    fn generate_path(&mut self) {
        self.levels = generate_levels_with(
            self.tuning.level_count,
            self.layout.as_ref(),
            &mut self.rng,
        );
        log::debug!(
            "Generated path of {} levels: {:?}",
            self.levels.len(),
            self.levels
                .iter()
                .map(|l| l.monster.name.as_str())
                .collect::<Vec<_>>()
        );
    }

    /// Rule knobs, sanitized at construction
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Level currently being played
    pub fn active_level(&self) -> Option<&Level> {
        self.current_level.and_then(|i| self.levels.get(i))
    }

    /// Whether every level on the path is completed
    pub fn path_complete(&self) -> bool {
        !self.levels.is_empty() && self.levels.iter().all(|l| l.completed)
    }
}
