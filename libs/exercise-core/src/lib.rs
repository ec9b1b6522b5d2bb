//! Core exercise library for the Wintagma vocabulary drills.
//!
//! Provides:
//! - Shared types (LexicalItem, Category, Exercise, ExerciseOption)
//! - Repetition memory for "no immediate repetition" per category
//! - Multiple-choice exercise generation (1 correct item + 4 distractors)
//! - Answer validation against a stored exercise

pub mod error;
pub mod generator;
pub mod memory;
pub mod types;
pub mod validation;

pub use error::{ExerciseError, Result};
pub use generator::ExerciseGenerator;
pub use memory::{InMemoryRepetitionMemory, RepetitionMemory};
pub use types::{
    Category, Exercise, ExerciseOption, LexicalItem, ValidationOutcome, DISTRACTOR_COUNT,
    OPTION_COUNT, OPTION_ORDER,
};
pub use validation::validate;
