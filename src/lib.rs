//! # spoon-baseline
//!
//! Estimate your maximum "spoon" capacity (spoon theory) with a short
//! terminal questionnaire, then adjust the result and see how many spoons
//! you have when stressed or burnt out.
//!
//! The scoring lives in [`BaselineEngine`], which has no terminal
//! dependencies and can be driven directly:
//!
//! ```rust
//! use spoon_baseline::{BaselineEngine, Status, builtin_catalog};
//!
//! let mut engine = BaselineEngine::new(builtin_catalog());
//! engine.start();
//! engine.answer("optimalEnergy", 4).unwrap();
//! engine.set_status(Status::Burnout);
//!
//! assert_eq!(engine.baseline(), 16);
//! assert_eq!(engine.current_capacity(), 10);
//! ```
//!
//! [`Calculator`] wraps the engine in an interactive terminal session:
//!
//! ```rust,no_run
//! use spoon_baseline::{Calculator, SpoonError};
//!
//! fn main() -> Result<(), SpoonError> {
//!     Calculator::with_builtin_questions().run()
//! }
//! ```

mod app;
pub mod data;
pub mod engine;
pub mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::info;

pub use app::App;
pub use data::{LoadError, builtin_catalog, load_catalog_from_json};
pub use engine::{BaselineEngine, EngineError, Snapshot};
pub use models::{AnswerOption, Catalog, Question, Screen, Status};

use terminal::{SessionTerminal, TerminalSession};

/// Redraw interval while idle, so the baseline pulse can fade.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Error type for calculator operations.
#[derive(Debug, Error)]
pub enum SpoonError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("invalid answer: {0}")]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// An interactive calculator session.
pub struct Calculator {
    app: App,
}

impl Calculator {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            app: App::new(catalog),
        }
    }

    pub fn with_builtin_questions() -> Self {
        Self::new(builtin_catalog())
    }

    /// Load a calculator whose questions come from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use spoon_baseline::Calculator;
    ///
    /// let calculator = Calculator::from_json("questions.json").expect("failed to load questions");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, SpoonError> {
        let catalog = load_catalog_from_json(path)?;
        Ok(Self::new(catalog))
    }

    /// Run the calculator in the terminal until the user quits.
    pub fn run(mut self) -> Result<(), SpoonError> {
        info!(questions = self.app.total_questions(), "session started");
        let mut session = TerminalSession::enter()?;
        let result = run_event_loop(session.terminal(), &mut self.app);
        session.restore()?;

        let engine = self.app.engine();
        info!(
            baseline = engine.baseline(),
            status = %engine.status(),
            capacity = engine.current_capacity(),
            "session ended"
        );
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut SessionTerminal, app: &mut App) -> Result<(), SpoonError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code)? {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the session should end.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, EngineError> {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return Ok(true);
    }

    match app.screen() {
        Screen::Intro => handle_intro_input(app, key),
        Screen::Question(_) => handle_question_input(app, key)?,
        Screen::Results => handle_results_input(app, key),
    }
    Ok(false)
}

fn handle_intro_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.start_quiz();
    }
}

fn handle_question_input(app: &mut App, key: KeyCode) -> Result<(), EngineError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer()?,
        KeyCode::Char(digit @ '1'..='9') => {
            let position = digit as usize - '1' as usize;
            app.answer_at(position)?;
        }
        KeyCode::Right | KeyCode::Char('s') => app.skip_question(),
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('b') => app.go_back(),
        _ => {}
    }
    Ok(())
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.adjust_spoons(1),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => app.adjust_spoons(-1),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_status(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_status(),
        KeyCode::Backspace | KeyCode::Char('b') => app.go_back(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, keys: &[KeyCode]) -> bool {
        keys.iter()
            .any(|key| handle_input(app, *key).unwrap())
    }

    #[test]
    fn test_keyboard_walkthrough() {
        let mut app = App::new(builtin_catalog());

        assert!(!press(
            &mut app,
            &[
                KeyCode::Enter,
                KeyCode::Char('2'),
                KeyCode::Char('3'),
                KeyCode::Down,
                KeyCode::Enter,
                KeyCode::Char('2'),
                KeyCode::Char('3'),
            ]
        ));

        let engine = app.engine();
        assert_eq!(engine.screen(), Screen::Results);
        assert_eq!(engine.baseline(), 16);
    }

    #[test]
    fn test_results_keys() {
        let mut app = App::new(builtin_catalog());
        press(&mut app, &[KeyCode::Enter]);
        for _ in 0..5 {
            press(&mut app, &[KeyCode::Char('s')]);
        }
        assert_eq!(app.screen(), Screen::Results);

        press(
            &mut app,
            &[KeyCode::Char('+'), KeyCode::Char('+'), KeyCode::Char('j'), KeyCode::Char('j')],
        );
        assert_eq!(app.engine().baseline(), 16);
        assert_eq!(app.engine().status(), Status::Burnout);
        assert_eq!(app.engine().current_capacity(), 10);

        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.screen(), Screen::Intro);
        assert_eq!(app.engine().baseline(), 14);
    }

    #[test]
    fn test_digit_keys_ignore_missing_options() {
        let mut app = App::new(builtin_catalog());
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('9')]);
        assert_eq!(app.screen(), Screen::Question(0));
        assert!(app.engine().answers().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(builtin_catalog());
        assert!(press(&mut app, &[KeyCode::Char('q')]));
        assert!(press(&mut app, &[KeyCode::Esc]));
    }

    #[test]
    fn test_back_from_first_question_returns_to_intro() {
        let mut app = App::new(builtin_catalog());
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('b')]);
        assert_eq!(app.screen(), Screen::Intro);
        press(&mut app, &[KeyCode::Char('b')]);
        assert_eq!(app.screen(), Screen::Intro);
    }
}
