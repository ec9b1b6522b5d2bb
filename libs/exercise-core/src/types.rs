//! Core types for vocabulary exercises.

use serde::{Deserialize, Serialize};

/// Number of options shown for every exercise.
pub const OPTION_COUNT: usize = 5;

/// Number of incorrect options drawn from the category.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Slot order stored with every exercise.
pub const OPTION_ORDER: [i64; OPTION_COUNT] = [1, 2, 3, 4, 5];

/// Topical grouping of vocabulary items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub name: String,
}

/// One vocabulary term belonging to a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalItem {
    pub lexical_item_id: i64,
    pub category_id: i64,
    pub text: String,
}

/// One of the answer choices of an exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseOption {
    /// Slot id, 1..=5 and unique within the exercise.
    pub option_id: i64,
    pub text: String,
    pub is_correct: bool,
}

/// A generated multiple-choice exercise, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub category_id: i64,
    /// Id of the lexical item behind the correct option.
    pub lexical_item_id: i64,
    /// Always `OPTION_ORDER`; records slot cardinality, not the shuffle.
    pub option_order: Vec<i64>,
    pub options: Vec<ExerciseOption>,
}

impl Exercise {
    /// The option flagged as correct, if any.
    pub fn correct_option(&self) -> Option<&ExerciseOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

/// Result of checking a selected option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub correct: bool,
    pub correct_option_id: i64,
    pub score_delta: i32,
}
