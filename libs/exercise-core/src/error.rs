//! Error types for exercise-core.

use thiserror::Error;

/// Result type alias using ExerciseError.
pub type Result<T> = std::result::Result<T, ExerciseError>;

/// Errors raised while generating or validating exercises.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseError {
    #[error("category {category_id} has no lexical items")]
    InsufficientItems { category_id: i64 },

    #[error("category {category_id} has {available} lexical items, at least 5 are required")]
    InsufficientDistractors { category_id: i64, available: usize },

    #[error("exercise {exercise_id} not found")]
    ExerciseNotFound { exercise_id: i64 },

    #[error("option {option_id} does not belong to the exercise")]
    InvalidOptionId { option_id: i64 },

    #[error("exercise has no option flagged as correct")]
    MissingCorrectOption,
}
