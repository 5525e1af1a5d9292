//! View to text lines
//!
//! Pure layout: no terminal calls, so every screen is unit-testable.

use crate::highscores::{ScoreEntry, format_time};
use crate::platform::{Asset, AssetCatalog};
use crate::sim::{Level, View};

/// Color role of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Normal,
    /// Completed levels, accepted input
    Good,
    /// Rejections, wrong answers
    Alert,
    /// Placeholders and hints
    Dim,
}

/// One rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    fn blank() -> Self {
        Self::new("", Tone::Normal)
    }
}

fn clock(timer: f64) -> Line {
    Line::new(format!("Time: {}s", timer as u64), Tone::Normal)
}

fn portrait(asset: &Asset) -> &'static str {
    match asset {
        Asset::Image { .. } => "[img]",
        Asset::Placeholder => "[###]",
    }
}

/// Path strip: one cell per level, `*` completed, `>` next
fn path_strip(levels: &[Level], position: usize) -> Line {
    let cells: Vec<String> = levels
        .iter()
        .map(|level| {
            let mark = if level.completed {
                '*'
            } else if level.index == position {
                '>'
            } else {
                ' '
            };
            format!("[{}{}]", mark, level.index + 1)
        })
        .collect();
    Line::new(cells.join("--"), Tone::Normal)
}

/// Lay out the lines for a view
pub fn render_lines(view: &View<'_>, scores: &[ScoreEntry], assets: &AssetCatalog) -> Vec<Line> {
    let mut lines = Vec::new();
    match view {
        View::Start => {
            lines.push(Line::new("Halloween Candyland Adventure", Tone::Title));
            if assets.cover.is_placeholder() {
                lines.push(Line::new("~ a spooky path of riddles ~", Tone::Dim));
            } else {
                lines.push(Line::new("[cover art]", Tone::Dim));
            }
            lines.push(Line::blank());
            lines.push(Line::new("Press any key to begin", Tone::Normal));
        }
        View::CharacterSelect { roster } => {
            lines.push(Line::new("Choose Your Character", Tone::Title));
            lines.push(Line::blank());
            for (id, label) in roster {
                lines.push(Line::new(
                    format!("{} {}  {}", id, portrait(assets.character(*id)), label),
                    Tone::Normal,
                ));
            }
            lines.push(Line::blank());
            lines.push(Line::new("Press 1-5 to pick", Tone::Dim));
        }
        View::NameInput {
            player_id,
            buffer,
            rules,
            rejected,
        } => {
            lines.push(Line::new("Enter Your Name", Tone::Title));
            lines.push(Line::new(
                format!("Player {} {}", player_id, portrait(assets.character(*player_id))),
                Tone::Dim,
            ));
            lines.push(Line::blank());
            for rule in rules.iter() {
                lines.push(Line::new(*rule, Tone::Normal));
            }
            lines.push(Line::blank());
            lines.push(Line::new(format!("> {}_", buffer), Tone::Good));
            if *rejected {
                lines.push(Line::new("That name doesn't follow the rules", Tone::Alert));
            }
        }
        View::Path {
            player,
            levels,
            timer,
        } => {
            lines.push(clock(*timer));
            lines.push(Line::new(
                format!("{} on the candy path", player.label()),
                Tone::Title,
            ));
            lines.push(Line::blank());
            lines.push(path_strip(levels, player.position));
            lines.push(Line::blank());
            if let Some(next) = levels.get(player.position) {
                lines.push(Line::new(
                    format!(
                        "Next: level {} guarded by {}",
                        next.index + 1,
                        next.monster.name
                    ),
                    Tone::Normal,
                ));
            }
            lines.push(Line::new("Press any key to enter", Tone::Dim));
        }
        View::Parkour {
            level,
            question,
            wrong_answers,
            timer,
        } => {
            lines.push(clock(*timer));
            lines.push(Line::new(
                format!("Level {}: {}", level.index + 1, level.monster.name),
                Tone::Title,
            ));
            lines.push(Line::new(
                format!(
                    "{} platforms, difficulty {}",
                    level.platforms.len(),
                    level.monster.difficulty_tier
                ),
                Tone::Dim,
            ));
            lines.push(Line::blank());
            lines.push(Line::new(question.prompt.clone(), Tone::Normal));
            if *wrong_answers > 0 {
                lines.push(Line::new(
                    format!("Wrong! Attempts: {}", wrong_answers),
                    Tone::Alert,
                ));
            }
        }
        View::DestinyCard { card, timer } => {
            lines.push(clock(*timer));
            lines.push(Line::new("Destiny Card", Tone::Title));
            lines.push(Line::blank());
            lines.push(Line::new(card.text(), Tone::Normal));
            lines.push(Line::blank());
            lines.push(Line::new("Press any key to continue", Tone::Dim));
        }
        View::Leaderboard { latest } => {
            lines.push(Line::new("Leaderboard", Tone::Title));
            lines.push(Line::blank());
            if scores.is_empty() {
                lines.push(Line::new("No runs yet", Tone::Dim));
            }
            for (i, score) in scores.iter().enumerate() {
                let tone = if latest.as_deref() == Some(score.player_name.as_str()) {
                    Tone::Good
                } else {
                    Tone::Normal
                };
                lines.push(Line::new(
                    format!(
                        "{:>2}. {} - {}  {}",
                        i + 1,
                        score.player_name,
                        format_time(score.time_seconds),
                        score.recorded_at
                    ),
                    tone,
                ));
            }
            lines.push(Line::blank());
            lines.push(Line::new("Press any key to play again", Tone::Dim));
        }
        View::Win { name, time, rank } => {
            lines.push(Line::new(
                format!("Victory! Time: {}s", *time as u64),
                Tone::Title,
            ));
            lines.push(Line::new(format!("Well played, {}", name), Tone::Normal));
            match rank {
                Some(rank) => lines.push(Line::new(
                    format!("That run takes #{} on the leaderboard", rank),
                    Tone::Good,
                )),
                None => lines.push(Line::new("Not fast enough for the top 10", Tone::Dim)),
            }
            lines.push(Line::blank());
            lines.push(Line::new("Press any key to record your time", Tone::Dim));
        }
    }
    lines
}
