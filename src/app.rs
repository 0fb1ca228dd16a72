use std::time::{Duration, Instant};

use crate::engine::{BaselineEngine, EngineError};
use crate::models::{Catalog, Screen, Status};

/// How long the baseline stays emphasized after it changes.
pub const PULSE_DURATION: Duration = Duration::from_millis(600);

/// Terminal session state: the engine plus what only the UI cares about.
pub struct App {
    engine: BaselineEngine,
    selected_option: usize,
    pulse_until: Option<Instant>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            engine: BaselineEngine::new(catalog),
            selected_option: 0,
            pulse_until: None,
        }
    }

    pub fn engine(&self) -> &BaselineEngine {
        &self.engine
    }

    pub fn screen(&self) -> Screen {
        self.engine.screen()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn current_question_number(&self) -> usize {
        self.engine.cursor().map_or(0, |index| index + 1)
    }

    pub fn total_questions(&self) -> usize {
        self.engine.catalog().len()
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn start_quiz(&mut self) {
        self.engine.start();
        self.sync_selection();
    }

    pub fn submit_answer(&mut self) -> Result<(), EngineError> {
        self.answer_at(self.selected_option)
    }

    /// Answer the current question with the option at `position`.
    /// Out-of-range positions are ignored.
    pub fn answer_at(&mut self, position: usize) -> Result<(), EngineError> {
        let Some((question_id, value)) = self.engine.current_question().and_then(|question| {
            question
                .options
                .get(position)
                .map(|option| (question.id.clone(), option.value))
        }) else {
            return Ok(());
        };

        self.engine.answer(&question_id, value)?;
        self.pulse();
        self.sync_selection();
        Ok(())
    }

    pub fn skip_question(&mut self) {
        self.engine.skip();
        self.sync_selection();
    }

    pub fn go_back(&mut self) {
        self.engine.back();
        self.sync_selection();
    }

    pub fn adjust_spoons(&mut self, delta: i32) {
        self.engine.adjust_baseline(delta);
        self.pulse();
    }

    pub fn select_next_status(&mut self) {
        self.engine.set_status(self.engine.status().next());
    }

    pub fn select_previous_status(&mut self) {
        self.engine.set_status(self.engine.status().previous());
    }

    pub fn set_status(&mut self, status: Status) {
        self.engine.set_status(status);
    }

    pub fn restart(&mut self) {
        self.engine.reset();
        self.selected_option = 0;
        self.pulse_until = None;
    }

    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.pulse_until.is_some_and(|until| now < until)
    }

    fn pulse(&mut self) {
        self.pulse_until = Some(Instant::now() + PULSE_DURATION);
    }

    fn option_count(&self) -> usize {
        self.engine
            .current_question()
            .map_or(0, |question| question.options.len())
    }

    /// Highlight the stored answer when revisiting a question.
    fn sync_selection(&mut self) {
        self.selected_option = self
            .engine
            .current_question()
            .and_then(|question| {
                self.engine
                    .answer_for(&question.id)
                    .and_then(|value| question.option_position(value))
            })
            .unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_catalog;

    fn app() -> App {
        App::new(builtin_catalog())
    }

    #[test]
    fn test_option_selection_wraps() {
        let mut app = app();
        app.start_quiz();
        app.select_previous_option();
        assert_eq!(app.selected_option(), 3);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }

    #[test]
    fn test_submit_answers_highlighted_option() {
        let mut app = app();
        app.start_quiz();
        app.select_next_option();
        app.select_next_option();
        app.submit_answer().unwrap();

        assert_eq!(app.engine().answer_for("optimalEnergy"), Some(3));
        assert_eq!(app.engine().baseline(), 15);
        assert_eq!(app.current_question_number(), 2);
        assert_eq!(app.selected_option(), 0);
        assert!(app.is_pulsing(Instant::now()));
    }

    #[test]
    fn test_revisiting_highlights_previous_answer() {
        let mut app = app();
        app.start_quiz();
        app.answer_at(3).unwrap();
        app.go_back();

        assert_eq!(app.screen(), Screen::Question(0));
        assert_eq!(app.selected_option(), 3);
    }

    #[test]
    fn test_answer_at_out_of_range_is_ignored() {
        let mut app = app();
        app.start_quiz();
        app.answer_at(7).unwrap();
        assert!(app.engine().answers().is_empty());
        assert_eq!(app.screen(), Screen::Question(0));
    }

    #[test]
    fn test_answer_on_intro_is_ignored() {
        let mut app = app();
        app.submit_answer().unwrap();
        assert_eq!(app.screen(), Screen::Intro);
    }

    #[test]
    fn test_status_cycling() {
        let mut app = app();
        app.select_next_status();
        assert_eq!(app.engine().status(), Status::Stressed);
        app.select_previous_status();
        app.select_previous_status();
        assert_eq!(app.engine().status(), Status::Burnout);
    }

    #[test]
    fn test_restart_clears_pulse() {
        let mut app = app();
        app.adjust_spoons(1);
        assert!(app.is_pulsing(Instant::now()));
        app.restart();
        assert!(!app.is_pulsing(Instant::now()));
        assert_eq!(app.engine().baseline(), 14);
    }

    #[test]
    fn test_pulse_expires() {
        let mut app = app();
        app.adjust_spoons(-1);
        assert!(!app.is_pulsing(Instant::now() + PULSE_DURATION));
    }
}
