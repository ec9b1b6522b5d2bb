//! Checking a selected option against a stored exercise.

use crate::error::{ExerciseError, Result};
use crate::types::{ExerciseOption, ValidationOutcome};

/// Score awarded for a correct selection.
const SCORE_CORRECT: i32 = 1;

/// Validate `selected_option_id` against the options of one exercise.
///
/// Fails with `InvalidOptionId` when the selection is not one of the options
/// and with `MissingCorrectOption` when the stored options carry no correct flag.
pub fn validate(options: &[ExerciseOption], selected_option_id: i64) -> Result<ValidationOutcome> {
    if !options.iter().any(|o| o.option_id == selected_option_id) {
        return Err(ExerciseError::InvalidOptionId {
            option_id: selected_option_id,
        });
    }

    let correct_option = options
        .iter()
        .find(|o| o.is_correct)
        .ok_or(ExerciseError::MissingCorrectOption)?;

    let correct = selected_option_id == correct_option.option_id;
    Ok(ValidationOutcome {
        correct,
        correct_option_id: correct_option.option_id,
        score_delta: if correct { SCORE_CORRECT } else { 0 },
    })
}
