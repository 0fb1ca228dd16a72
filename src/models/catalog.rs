//! Validated, read-only question catalog.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

use super::{AnswerOption, Question};

pub const MIN_SPOON_ADJUSTMENT: i32 = -1;
pub const MAX_SPOON_ADJUSTMENT: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one question")]
    Empty,

    #[error("question id must not be empty (question #{index})")]
    BlankId { index: usize },

    #[error("duplicate question id '{id}'")]
    DuplicateQuestion { id: String },

    #[error("question '{id}' has no options")]
    NoOptions { id: String },

    #[error("question '{id}' has option value 0; values must be positive")]
    ZeroValue { id: String },

    #[error("question '{id}' repeats option value {value}")]
    DuplicateOption { id: String, value: u32 },

    #[error("question '{id}' option {value} adjusts by {adjustment}, outside [-1, 2]")]
    AdjustmentOutOfRange { id: String, value: u32, adjustment: i32 },
}

/// Ordered questions with unique ids and well-formed options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids = HashSet::with_capacity(questions.len());
        for (index, question) in questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(CatalogError::BlankId { index });
            }
            if !ids.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion {
                    id: question.id.clone(),
                });
            }
            validate_options(&question.id, &question.options)?;
        }

        Ok(Self { questions })
    }

    /// For compiled-in tables covered by tests; skips validation.
    pub(crate) fn from_trusted(questions: Vec<Question>) -> Self {
        debug_assert!(Self::new(questions.clone()).is_ok());
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}

fn validate_options(id: &str, options: &[AnswerOption]) -> Result<(), CatalogError> {
    if options.is_empty() {
        return Err(CatalogError::NoOptions { id: id.to_string() });
    }

    let mut values = HashSet::with_capacity(options.len());
    for option in options {
        if option.value == 0 {
            return Err(CatalogError::ZeroValue { id: id.to_string() });
        }
        if !values.insert(option.value) {
            return Err(CatalogError::DuplicateOption {
                id: id.to_string(),
                value: option.value,
            });
        }
        if !(MIN_SPOON_ADJUSTMENT..=MAX_SPOON_ADJUSTMENT).contains(&option.spoon_adjustment) {
            return Err(CatalogError::AdjustmentOutOfRange {
                id: id.to_string(),
                value: option.value,
                adjustment: option.spoon_adjustment,
            });
        }
    }

    Ok(())
}
