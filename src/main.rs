//! Candyland Adventure entry point
//!
//! Composition root: logging, settings, leaderboard, assets, then the fixed
//! rate loop (poll intents, tick, render, wait).

use std::io;
use std::thread;
use std::time::Instant;

use candyland_adventure::consts::MAX_FRAME_DT;
use candyland_adventure::persistence::JsonFileStore;
use candyland_adventure::platform::{AssetCatalog, Frontend, TerminalFrontend};
use candyland_adventure::sim::{GameEvent, GameState, tick};
use candyland_adventure::{Leaderboard, Settings};

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Quit => log::info!("Quit requested"),
        GameEvent::NameRejected { reason } => log::debug!("Name rejected: {}", reason),
        GameEvent::WrongAnswer { level, given } => {
            log::debug!("Wrong answer {} on level {}", given, level + 1)
        }
        GameEvent::MonsterDefeated { level, monster } => {
            log::info!("Level {} cleared, {} defeated", level + 1, monster)
        }
        GameEvent::CardDrawn(card) => log::info!("Destiny card: {}", card.text()),
        GameEvent::Won { name, time, rank } => {
            log::info!("{} won in {:.2}s (expected rank {:?})", name, time, rank)
        }
        GameEvent::ScoreRecorded { name, time, rank } => match rank {
            Some(rank) => log::info!("Recorded {} ({:.2}s) at #{}", name, time, rank),
            None => log::info!("Recorded {} ({:.2}s), off the board", name, time),
        },
    }
}

fn run(
    frontend: &mut impl Frontend,
    state: &mut GameState,
    scores: &mut Leaderboard,
    assets: &AssetCatalog,
    settings: &Settings,
) -> io::Result<()> {
    let frame = settings.frame_duration();
    let mut last = Instant::now();

    while !state.quit_requested {
        let frame_start = Instant::now();
        let dt = frame_start
            .duration_since(last)
            .as_secs_f64()
            .min(MAX_FRAME_DT);
        last = frame_start;

        let intents = frontend.poll_intents(state.phase)?;
        tick(state, scores, &intents, dt);
        for event in state.drain_events() {
            log_event(&event);
        }

        frontend.present(&state.view(), scores.top_scores(), assets)?;

        let spent = frame_start.elapsed();
        if spent < frame {
            thread::sleep(frame - spent);
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("Candyland Adventure starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Session seed {}", seed);

    let mut state = GameState::with_tuning(seed, settings.tuning());
    let store = JsonFileStore::new(&settings.leaderboard_path);
    log::info!("Leaderboard file {}", store.path().display());
    let mut scores = Leaderboard::load(Box::new(store));
    let assets = AssetCatalog::load(&settings.assets_dir);

    let mut frontend = TerminalFrontend::new()?;
    let result = run(&mut frontend, &mut state, &mut scores, &assets, &settings);
    drop(frontend);

    if let Err(e) = &result {
        log::error!("Terminal error: {}", e);
    }
    log::info!("Goodbye");
    result
}
