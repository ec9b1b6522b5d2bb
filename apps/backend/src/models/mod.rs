//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from exercise-core
pub use exercise_core::types::{
    Category, Exercise, ExerciseOption, LexicalItem, ValidationOutcome,
};

// === Database Entity Types ===

/// Category stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCategory {
    pub category_id: i64,
    pub name: String,
}

impl DbCategory {
    pub fn to_core(&self) -> Category {
        Category {
            category_id: self.category_id,
            name: self.name.clone(),
        }
    }
}

/// Lexical item stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbLexicalItem {
    pub lexical_item_id: i64,
    pub category_id: i64,
    pub text: String,
}

impl DbLexicalItem {
    pub fn to_core(&self) -> LexicalItem {
        LexicalItem {
            lexical_item_id: self.lexical_item_id,
            category_id: self.category_id,
            text: self.text.clone(),
        }
    }
}

/// Exercise parent record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbExercise {
    pub exercise_id: i64,
    pub category_id: i64,
    pub lexical_item_id: i64,
    pub option_order: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

/// Exercise option keyed by (exercise_id, option_id)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbExerciseOption {
    pub exercise_id: i64,
    pub option_id: i32,
    pub text: String,
    pub is_correct: bool,
}

impl DbExerciseOption {
    pub fn to_core(&self) -> ExerciseOption {
        ExerciseOption {
            option_id: i64::from(self.option_id),
            text: self.text.clone(),
            is_correct: self.is_correct,
        }
    }
}

/// A persisted exercise together with its options
#[derive(Debug, Clone)]
pub struct StoredExercise {
    pub exercise: DbExercise,
    pub options: Vec<DbExerciseOption>,
}

impl StoredExercise {
    pub fn exercise_id(&self) -> i64 {
        self.exercise.exercise_id
    }

    pub fn core_options(&self) -> Vec<ExerciseOption> {
        self.options.iter().map(DbExerciseOption::to_core).collect()
    }

    /// Rebuild the generated exercise as it was before persisting.
    pub fn to_core(&self) -> Exercise {
        Exercise {
            category_id: self.exercise.category_id,
            lexical_item_id: self.exercise.lexical_item_id,
            option_order: self.exercise.option_order.iter().map(|&o| i64::from(o)).collect(),
            options: self.core_options(),
        }
    }
}

// === API Request/Response Types ===

// Content types
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LexicalItemListResponse {
    pub items: Vec<LexicalItem>,
}

// Exercise types
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateExerciseRequest {
    pub category_id: i64,
    #[serde(default)]
    pub previous_lexical_item_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseOptionResponse {
    pub option_id: i64,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateExerciseResponse {
    pub exercise_id: i64,
    pub prompt: String,
    pub options: Vec<ExerciseOptionResponse>,
}

impl GenerateExerciseResponse {
    /// Build the client view of a freshly stored exercise; correctness flags stay server-side.
    pub fn from_exercise(exercise_id: i64, exercise: &Exercise) -> Option<Self> {
        let prompt = exercise.correct_option()?.text.clone();
        Some(Self {
            exercise_id,
            prompt,
            options: exercise
                .options
                .iter()
                .map(|o| ExerciseOptionResponse {
                    option_id: o.option_id,
                    text: o.text.clone(),
                })
                .collect(),
        })
    }
}

// Validation types
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateExerciseRequest {
    pub exercise_id: i64,
    pub selected_option_id: i64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateExerciseResponse {
    pub correct: bool,
    pub correct_option_id: i64,
    pub score_delta: i32,
}

impl From<ValidationOutcome> for ValidateExerciseResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        Self {
            correct: outcome.correct,
            correct_option_id: outcome.correct_option_id,
            score_delta: outcome.score_delta,
        }
    }
}
