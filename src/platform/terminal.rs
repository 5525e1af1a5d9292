//! Crossterm front end
//!
//! Raw-mode terminal on the alternate screen. Keys map to intents depending on
//! the phase; the typed answer in Parkour is kept here until Enter.

use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};

use super::input::{is_answer_char, parse_answer};
use super::{AssetCatalog, Frontend};
use crate::consts::CHARACTER_COUNT;
use crate::highscores::ScoreEntry;
use crate::renderer::{Tone, render_lines};
use crate::sim::{GamePhase, Intent, View};

/// Terminal state is restored on drop
pub struct TerminalFrontend {
    out: Stdout,
    answer: String,
    last_phase: GamePhase,
}

impl TerminalFrontend {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;
        Ok(Self {
            out,
            answer: String::new(),
            last_phase: GamePhase::Start,
        })
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        )?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalFrontend {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("Failed to restore terminal: {}", e);
        }
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Title => Color::Rgb {
            r: 255,
            g: 140,
            b: 0,
        },
        Tone::Normal => Color::White,
        Tone::Good => Color::Rgb {
            r: 60,
            g: 179,
            b: 113,
        },
        Tone::Alert => Color::Red,
        Tone::Dim => Color::Rgb {
            r: 147,
            g: 112,
            b: 219,
        },
    }
}

/// Map a key press to an intent for the given phase.
///
/// `answer` is the Parkour answer being typed; it is edited in place and
/// cleared when submitted.
pub fn map_key(phase: GamePhase, key: KeyEvent, answer: &mut String) -> Option<Intent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    if key.code == KeyCode::Esc || ctrl_c {
        return Some(Intent::Quit);
    }

    match phase {
        GamePhase::CharacterSelect => match key.code {
            KeyCode::Char(c) => c
                .to_digit(10)
                .map(|d| d as u8)
                .filter(|d| (1..=CHARACTER_COUNT).contains(d))
                .map(Intent::SelectCharacter),
            _ => None,
        },
        GamePhase::NameInput => match key.code {
            KeyCode::Enter => Some(Intent::SubmitName),
            KeyCode::Backspace => Some(Intent::Backspace),
            KeyCode::Char(c) => Some(Intent::TextInput(c)),
            _ => None,
        },
        GamePhase::Game => match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => c
                .to_digit(10)
                .map(|d| Intent::EnterLevel(d as usize - 1)),
            _ => Some(Intent::AnyKeyOrClick),
        },
        GamePhase::Parkour => match key.code {
            KeyCode::Enter => {
                let value = parse_answer(answer);
                answer.clear();
                value.map(Intent::AnswerQuestion)
            }
            KeyCode::Backspace => {
                answer.pop();
                None
            }
            KeyCode::Char(c) if is_answer_char(c) => {
                answer.push(c);
                None
            }
            _ => None,
        },
        GamePhase::Start | GamePhase::DestinyCard | GamePhase::Leaderboard | GamePhase::Win => {
            Some(Intent::AnyKeyOrClick)
        }
    }
}

impl Frontend for TerminalFrontend {
    fn poll_intents(&mut self, phase: GamePhase) -> io::Result<Vec<Intent>> {
        if phase != self.last_phase {
            self.answer.clear();
            self.last_phase = phase;
        }

        let mut intents = Vec::new();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(intent) = map_key(phase, key, &mut self.answer) {
                        intents.push(intent);
                    }
                }
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    if matches!(
                        phase,
                        GamePhase::Start
                            | GamePhase::Game
                            | GamePhase::DestinyCard
                            | GamePhase::Leaderboard
                            | GamePhase::Win
                    ) {
                        intents.push(Intent::AnyKeyOrClick);
                    }
                }
                _ => {}
            }
        }
        Ok(intents)
    }

    fn present(
        &mut self,
        view: &View<'_>,
        scores: &[ScoreEntry],
        assets: &AssetCatalog,
    ) -> io::Result<()> {
        let mut lines = render_lines(view, scores, assets);
        if matches!(view, View::Parkour { .. }) {
            lines.push(crate::renderer::Line::new(
                format!("Your answer: {}_", self.answer),
                Tone::Good,
            ));
        }

        queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(2, row as u16 + 1),
                SetForegroundColor(tone_color(line.tone)),
                Print(&line.text)
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut answer = String::new();
        assert_eq!(
            map_key(GamePhase::NameInput, press(KeyCode::Esc), &mut answer),
            Some(Intent::Quit)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            map_key(GamePhase::Parkour, ctrl_c, &mut answer),
            Some(Intent::Quit)
        );
    }

    #[test]
    fn test_character_keys() {
        let mut answer = String::new();
        assert_eq!(
            map_key(GamePhase::CharacterSelect, press(KeyCode::Char('3')), &mut answer),
            Some(Intent::SelectCharacter(3))
        );
        assert_eq!(
            map_key(GamePhase::CharacterSelect, press(KeyCode::Char('6')), &mut answer),
            None
        );
        assert_eq!(
            map_key(GamePhase::CharacterSelect, press(KeyCode::Char('x')), &mut answer),
            None
        );
    }

    #[test]
    fn test_name_keys() {
        let mut answer = String::new();
        assert_eq!(
            map_key(GamePhase::NameInput, press(KeyCode::Char(' ')), &mut answer),
            Some(Intent::TextInput(' '))
        );
        assert_eq!(
            map_key(GamePhase::NameInput, press(KeyCode::Enter), &mut answer),
            Some(Intent::SubmitName)
        );
    }

    #[test]
    fn test_path_keys() {
        let mut answer = String::new();
        assert_eq!(
            map_key(GamePhase::Game, press(KeyCode::Char('2')), &mut answer),
            Some(Intent::EnterLevel(1))
        );
        assert_eq!(
            map_key(GamePhase::Game, press(KeyCode::Enter), &mut answer),
            Some(Intent::AnyKeyOrClick)
        );
    }

    #[test]
    fn test_answer_typing() {
        let mut answer = String::new();
        for c in "1/2x".chars() {
            assert_eq!(
                map_key(GamePhase::Parkour, press(KeyCode::Char(c)), &mut answer),
                None
            );
        }
        assert_eq!(answer, "1/2");
        assert_eq!(
            map_key(GamePhase::Parkour, press(KeyCode::Enter), &mut answer),
            Some(Intent::AnswerQuestion(0.5))
        );
        assert!(answer.is_empty());

        // Unparseable input is discarded without an intent
        answer.push_str("/");
        assert_eq!(
            map_key(GamePhase::Parkour, press(KeyCode::Enter), &mut answer),
            None
        );
        assert!(answer.is_empty());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut answer = String::new();
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(GamePhase::Start, key, &mut answer), None);
    }
}
