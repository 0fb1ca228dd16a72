//! Baseline quiz engine.
//!
//! Owns the question catalog and all quiz state: the progress cursor,
//! the answers given so far, the baseline spoon count and the current
//! status. Every operation is a synchronous state transition; the
//! terminal front end only reads from the engine and forwards actions.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Catalog, Question, Screen, Status};

/// Baseline before any answer is given, and after a reset.
pub const DEFAULT_BASELINE: i32 = 14;
pub const MIN_BASELINE: i32 = 12;
pub const MAX_BASELINE: i32 = 20;
/// Current capacity never drops below this, whatever the status.
pub const CAPACITY_FLOOR: i32 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown question '{id}'")]
    UnknownQuestion { id: String },

    #[error("question '{question_id}' has no option with value {value}")]
    UnknownOption { question_id: String, value: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineEngine {
    catalog: Catalog,
    /// `None` while the intro is shown.
    cursor: Option<usize>,
    answers: BTreeMap<String, u32>,
    baseline: i32,
    showing_results: bool,
    status: Status,
}

/// Capacity under one status, as listed on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCapacity {
    pub status: Status,
    pub capacity: i32,
}

/// Serializable read-only view of the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub cursor: Option<usize>,
    pub showing_results: bool,
    pub answers: BTreeMap<String, u32>,
    pub baseline: i32,
    pub status: Status,
    pub status_description: &'static str,
    pub current_capacity: i32,
    pub capacities: Vec<StatusCapacity>,
    pub progress: f64,
}

impl BaselineEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cursor: None,
            answers: BTreeMap::new(),
            baseline: DEFAULT_BASELINE,
            showing_results: false,
            status: Status::default(),
        }
    }

    pub fn start(&mut self) {
        if self.cursor.is_some() {
            debug!(cursor = ?self.cursor, "start ignored, quiz already started");
            return;
        }
        self.cursor = Some(0);
        debug!("quiz started");
    }

    /// Record an answer, rebuild the baseline and move to the next question.
    ///
    /// Unknown question ids and option values are rejected and leave the
    /// engine untouched.
    pub fn answer(&mut self, question_id: &str, value: u32) -> Result<(), EngineError> {
        let question = self.catalog.find(question_id).ok_or_else(|| {
            warn!(question_id, "rejected answer for unknown question");
            EngineError::UnknownQuestion {
                id: question_id.to_string(),
            }
        })?;

        if question.option(value).is_none() {
            warn!(question_id, value, "rejected unknown option value");
            return Err(EngineError::UnknownOption {
                question_id: question_id.to_string(),
                value,
            });
        }

        self.answers.insert(question_id.to_string(), value);
        self.recompute_baseline();
        debug!(question_id, value, baseline = self.baseline, "answer recorded");

        self.advance();
        Ok(())
    }

    pub fn skip(&mut self) {
        debug!(cursor = ?self.cursor, "question skipped");
        self.advance();
    }

    pub fn back(&mut self) {
        match self.cursor {
            None => {}
            Some(0) => {
                self.cursor = None;
                self.showing_results = false;
            }
            Some(index) => {
                self.cursor = Some(index - 1);
                self.showing_results = false;
            }
        }
        debug!(cursor = ?self.cursor, "moved back");
    }

    /// Return to the intro with no answers and the default baseline.
    /// The current status is kept.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.answers.clear();
        self.showing_results = false;
        self.baseline = DEFAULT_BASELINE;
        debug!("quiz reset");
    }

    /// Manually shift the baseline. Holds until the next answer rebuilds it.
    pub fn adjust_baseline(&mut self, delta: i32) {
        self.baseline = clamp_baseline(self.baseline.saturating_add(delta));
        debug!(delta, baseline = self.baseline, "baseline adjusted");
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        debug!(%status, "status changed");
    }

    pub fn current_capacity(&self) -> i32 {
        self.capacity_for(self.status)
    }

    pub fn capacity_for(&self, status: Status) -> i32 {
        (self.baseline + status.spoon_adjustment()).max(CAPACITY_FLOOR)
    }

    pub fn progress_fraction(&self) -> f64 {
        match self.cursor {
            None => 0.0,
            Some(index) => (index + 1) as f64 / self.catalog.len() as f64,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.showing_results {
            return Screen::Results;
        }
        match self.cursor {
            None => Screen::Intro,
            Some(index) => Screen::Question(index),
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_showing_results(&self) -> bool {
        self.showing_results
    }

    pub fn answers(&self) -> &BTreeMap<String, u32> {
        &self.answers
    }

    pub fn answer_for(&self, question_id: &str) -> Option<u32> {
        self.answers.get(question_id).copied()
    }

    pub fn baseline(&self) -> i32 {
        self.baseline
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The question under the cursor, also while results are shown.
    pub fn current_question(&self) -> Option<&Question> {
        self.cursor.and_then(|index| self.catalog.get(index))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cursor: self.cursor,
            showing_results: self.showing_results,
            answers: self.answers.clone(),
            baseline: self.baseline,
            status: self.status,
            status_description: self.status.description(),
            current_capacity: self.current_capacity(),
            capacities: Status::ALL
                .into_iter()
                .map(|status| StatusCapacity {
                    status,
                    capacity: self.capacity_for(status),
                })
                .collect(),
            progress: self.progress_fraction(),
        }
    }

    fn advance(&mut self) {
        let next = self.cursor.map_or(0, |index| index + 1);
        if next <= self.catalog.last_index() {
            self.cursor = Some(next);
        } else {
            self.showing_results = true;
        }
    }

    fn recompute_baseline(&mut self) {
        let total: i32 = self
            .answers
            .iter()
            .filter_map(|(question_id, value)| {
                self.catalog
                    .find(question_id)
                    .and_then(|question| question.option(*value))
            })
            .map(|option| option.spoon_adjustment)
            .sum();

        self.baseline = clamp_baseline(DEFAULT_BASELINE + total);
    }
}

fn clamp_baseline(value: i32) -> i32 {
    value.clamp(MIN_BASELINE, MAX_BASELINE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_catalog;

    fn engine() -> BaselineEngine {
        BaselineEngine::new(builtin_catalog())
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        assert_eq!(engine.screen(), Screen::Intro);
        assert_eq!(engine.cursor(), None);
        assert_eq!(engine.baseline(), DEFAULT_BASELINE);
        assert_eq!(engine.status(), Status::Optimal);
        assert!(engine.answers().is_empty());
        assert_eq!(engine.progress_fraction(), 0.0);
        assert!(engine.current_question().is_none());
    }

    #[test]
    fn test_start_is_ignored_once_started() {
        let mut engine = engine();
        engine.start();
        engine.skip();
        engine.start();
        assert_eq!(engine.cursor(), Some(1));
    }

    #[test]
    fn test_answer_recomputes_and_advances() {
        let mut engine = engine();
        engine.start();
        engine.answer("optimalEnergy", 4).unwrap();

        assert_eq!(engine.baseline(), 16);
        assert_eq!(engine.cursor(), Some(1));
        assert_eq!(engine.answer_for("optimalEnergy"), Some(4));
        assert_eq!(engine.progress_fraction(), 2.0 / 5.0);
    }

    #[test]
    fn test_overwriting_an_answer_replaces_its_adjustment() {
        let mut engine = engine();
        engine.start();
        engine.answer("optimalEnergy", 4).unwrap();
        engine.back();
        engine.answer("optimalEnergy", 1).unwrap();

        assert_eq!(engine.answers().len(), 1);
        assert_eq!(engine.baseline(), 13);
    }

    #[test]
    fn test_rejects_unknown_question() {
        let mut engine = engine();
        engine.start();
        let before = engine.clone();

        let err = engine.answer("sleepQuality", 1).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownQuestion {
                id: "sleepQuality".into()
            }
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_rejects_unknown_option() {
        let mut engine = engine();
        engine.start();
        let before = engine.clone();

        let err = engine.answer("taskCapacity", 9).unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownOption {
                question_id: "taskCapacity".into(),
                value: 9
            }
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_manual_adjustment_holds_until_next_answer() {
        let mut engine = engine();
        engine.start();
        engine.answer("optimalEnergy", 2).unwrap();
        engine.adjust_baseline(3);
        assert_eq!(engine.baseline(), 17);

        engine.answer("taskCapacity", 2).unwrap();
        assert_eq!(engine.baseline(), 14);
    }

    #[test]
    fn test_adjust_saturates_on_extreme_deltas() {
        let mut engine = engine();
        engine.adjust_baseline(i32::MAX);
        assert_eq!(engine.baseline(), MAX_BASELINE);
        engine.adjust_baseline(i32::MIN);
        assert_eq!(engine.baseline(), MIN_BASELINE);
    }

    #[test]
    fn test_back_from_results() {
        let mut engine = engine();
        engine.start();
        for _ in 0..5 {
            engine.skip();
        }
        assert_eq!(engine.screen(), Screen::Results);
        assert_eq!(engine.cursor(), Some(4));

        engine.back();
        assert_eq!(engine.screen(), Screen::Question(3));
    }

    #[test]
    fn test_back_from_results_with_single_question_returns_to_intro() {
        let catalog = Catalog::new(vec![builtin_catalog().questions()[0].clone()]).unwrap();
        let mut engine = BaselineEngine::new(catalog);
        engine.start();
        engine.answer("optimalEnergy", 3).unwrap();
        assert_eq!(engine.screen(), Screen::Results);
        assert_eq!(engine.cursor(), Some(0));

        engine.back();
        assert_eq!(engine.screen(), Screen::Intro);
        assert!(!engine.is_showing_results());
    }

    #[test]
    fn test_skip_from_intro_enters_first_question() {
        let mut engine = engine();
        engine.skip();
        assert_eq!(engine.screen(), Screen::Question(0));
    }

    #[test]
    fn test_reset_keeps_status() {
        let mut engine = engine();
        engine.set_status(Status::Stressed);
        engine.start();
        engine.answer("optimalEnergy", 4).unwrap();
        engine.reset();

        assert_eq!(engine.status(), Status::Stressed);
        assert_eq!(engine.baseline(), DEFAULT_BASELINE);
        assert_eq!(engine.screen(), Screen::Intro);
    }

    #[test]
    fn test_capacity_for_each_status() {
        let mut engine = engine();
        engine.adjust_baseline(2);
        assert_eq!(engine.capacity_for(Status::Optimal), 16);
        assert_eq!(engine.capacity_for(Status::Stressed), 13);
        assert_eq!(engine.capacity_for(Status::Burnout), 10);
        assert_eq!(engine.current_capacity(), 16);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut engine = engine();
        engine.start();
        engine.answer("optimalEnergy", 3).unwrap();
        engine.set_status(Status::Burnout);

        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["baseline"], 15);
        assert_eq!(json["status"], "burnout");
        assert_eq!(json["current_capacity"], 9);
        assert_eq!(json["answers"]["optimalEnergy"], 3);
        assert_eq!(json["capacities"][1]["status"], "stressed");
        assert_eq!(json["capacities"][1]["capacity"], 12);
    }
}
