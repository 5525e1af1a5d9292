//! One iteration of the game loop
//!
//! Applies the frame's intents to the state machine, then advances the clock.
//! Unknown (phase, intent) pairs do nothing.

use rand::Rng;

use super::cards::draw_card;
use super::question::generate_question;
use super::state::{GameEvent, GamePhase, GameState, Player};
use crate::consts::{CHARACTER_COUNT, NAME_BUFFER_CAP};
use crate::highscores::Leaderboard;

/// A discrete user action
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Leave the program
    Quit,
    /// Any key press or click (advances screens)
    AnyKeyOrClick,
    /// Pick character skin 1..=5
    SelectCharacter(u8),
    /// Type one character of the name
    TextInput(char),
    Backspace,
    SubmitName,
    /// Enter level k from the path overview
    EnterLevel(usize),
    /// Answer the active monster riddle
    AnswerQuestion(f64),
}

/// Advance the game by one frame.
///
/// Intents are applied in order until one changes the phase; the rest of the
/// batch is dropped so at most one transition happens per tick. A `Quit` in the
/// dropped part still counts. The clock then runs for `dt` seconds if the
/// session is live and the phase allows it.
pub fn tick(state: &mut GameState, scores: &mut Leaderboard, intents: &[Intent], dt: f64) {
    let start_phase = state.phase;
    for (i, intent) in intents.iter().enumerate() {
        apply_intent(state, scores, intent);
        if state.phase != start_phase {
            log::debug!(
                "{} -> {} on {:?}",
                start_phase.as_str(),
                state.phase.as_str(),
                intent
            );
            if !state.quit_requested && intents[i + 1..].contains(&Intent::Quit) {
                apply_intent(state, scores, &Intent::Quit);
            }
            break;
        }
    }

    if state.game_started && state.phase.clock_runs() && dt > 0.0 {
        state.timer += dt;
    }
}

/// Apply a single intent to the state machine
pub fn apply_intent(state: &mut GameState, scores: &mut Leaderboard, intent: &Intent) {
    if *intent == Intent::Quit {
        state.quit_requested = true;
        state.push_event(GameEvent::Quit);
        return;
    }

    match (state.phase, intent) {
        (GamePhase::Start, Intent::AnyKeyOrClick) => {
            state.phase = GamePhase::CharacterSelect;
        }

        (GamePhase::CharacterSelect, Intent::SelectCharacter(id))
            if (1..=CHARACTER_COUNT).contains(id) =>
        {
            state.player = Some(Player::new(*id));
            state.name_buffer.clear();
            state.name_rejected = false;
            state.phase = GamePhase::NameInput;
        }

        (GamePhase::NameInput, Intent::TextInput(c)) => {
            if !c.is_control() && state.name_buffer.chars().count() < NAME_BUFFER_CAP {
                state.name_buffer.push(*c);
                state.name_rejected = false;
            }
        }
        (GamePhase::NameInput, Intent::Backspace) => {
            state.name_buffer.pop();
            state.name_rejected = false;
        }
        (GamePhase::NameInput, Intent::SubmitName) => submit_name(state),

        (GamePhase::Game, Intent::EnterLevel(k)) => enter_level(state, *k),
        (GamePhase::Game, Intent::AnyKeyOrClick) => {
            if let Some(position) = state.player.as_ref().map(|p| p.position) {
                enter_level(state, position);
            }
        }

        (GamePhase::Parkour, Intent::AnswerQuestion(value)) => {
            answer_question(state, scores, *value)
        }

        (GamePhase::DestinyCard, Intent::AnyKeyOrClick) => {
            state.destiny_card = None;
            state.phase = GamePhase::Game;
        }

        (GamePhase::Win, Intent::AnyKeyOrClick) => record_score(state, scores),

        (GamePhase::Leaderboard, Intent::AnyKeyOrClick) => state.reset_session(),

        (phase, intent) => {
            log::trace!("Ignoring {:?} in {}", intent, phase.as_str());
        }
    }
}

fn submit_name(state: &mut GameState) {
    let Some(player) = state.player.as_mut() else {
        return;
    };
    match player.set_display_name(&state.name_buffer) {
        Ok(()) => {
            log::info!("{} starts the path", state.name_buffer);
            state.name_rejected = false;
            state.timer = 0.0;
            state.game_started = true;
            state.phase = GamePhase::Game;
        }
        Err(e) => {
            log::debug!("{}", e);
            state.name_rejected = true;
            state.push_event(GameEvent::NameRejected {
                reason: e.to_string(),
            });
        }
    }
}

/// Only the next level on the path can be entered
fn enter_level(state: &mut GameState, index: usize) {
    if state.player.as_ref().map(|p| p.position) != Some(index) {
        return;
    }
    let Some(monster) = state.levels.get(index).map(|l| l.monster.clone()) else {
        return;
    };
    let question = generate_question(&monster, state.rng());
    log::debug!(
        "Level {}: {} asks \"{}\"",
        index + 1,
        monster.name,
        question.prompt
    );
    if let Some(player) = state.player.as_mut() {
        player.current_level = index;
    }
    state.current_level = Some(index);
    state.question = Some(question);
    state.wrong_answers = 0;
    state.phase = GamePhase::Parkour;
}

fn answer_question(state: &mut GameState, scores: &Leaderboard, value: f64) {
    let (Some(index), Some(question)) = (state.current_level, state.question.as_ref()) else {
        return;
    };

    if !question.is_correct(value, state.tuning().answer_tolerance) {
        state.wrong_answers += 1;
        state.push_event(GameEvent::WrongAnswer {
            level: index,
            given: value,
        });
        return;
    }

    let Some(level) = state.levels.get_mut(index) else {
        return;
    };
    level.monster.defeated = true;
    level.completed = true;
    let monster = level.monster.name.clone();
    if let Some(player) = state.player.as_mut() {
        player.complete_level(index);
    }
    state.question = None;
    state.current_level = None;
    state.push_event(GameEvent::MonsterDefeated {
        level: index,
        monster,
    });

    if state.path_complete() {
        finish_path(state, scores);
        return;
    }

    let chance = state.tuning().destiny_card_chance.clamp(0.0, 1.0);
    if state.rng().random_bool(chance) {
        let card = draw_card(state.rng());
        state.destiny_card = Some(card);
        state.push_event(GameEvent::CardDrawn(card));
        state.phase = GamePhase::DestinyCard;
    } else {
        state.phase = GamePhase::Game;
    }
}

/// Final level cleared: stop the clock and look up where the time would land
fn finish_path(state: &mut GameState, scores: &Leaderboard) {
    state.game_started = false;
    let time = state.timer;
    let rank = scores.potential_rank(time);
    let name = match state.player.as_mut() {
        Some(player) => {
            player.elapsed_time = time;
            player.label()
        }
        None => String::new(),
    };
    log::info!("{} finished the path in {:.2}s", name, time);
    state.expected_rank = rank;
    state.push_event(GameEvent::Won { name, time, rank });
    state.phase = GamePhase::Win;
}

fn record_score(state: &mut GameState, scores: &mut Leaderboard) {
    if let Some(player) = state.player.as_ref() {
        let name = player.label();
        let time = player.elapsed_time;
        let rank = scores.add_score(&name, time);
        state.push_event(GameEvent::ScoreRecorded { name, time, rank });
    }
    state.phase = GamePhase::Leaderboard;
}
