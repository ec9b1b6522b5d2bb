//! Exercise generation and validation endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /exercise/generate
pub async fn generate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateExerciseRequest>, JsonRejection>,
) -> Result<Json<GenerateExerciseResponse>> {
    let Json(payload) = payload?;
    let category_id = payload.category_id;
    if let Some(previous) = payload.previous_lexical_item_id {
        tracing::debug!(category_id, previous, "Client previous item ignored");
    }

    state
        .db
        .get_category(category_id)
        .await?
        .ok_or(ApiError::CategoryNotFound(category_id))?;

    let items: Vec<LexicalItem> = state
        .db
        .get_items_by_category(category_id)
        .await?
        .iter()
        .map(DbLexicalItem::to_core)
        .collect();

    let exercise = state
        .generator
        .generate(category_id, &items, &mut rand::thread_rng())?;

    let exercise_id = state.db.insert_exercise(&exercise).await?;

    tracing::info!(
        exercise_id,
        category_id,
        lexical_item_id = exercise.lexical_item_id,
        "Stored new exercise"
    );

    let response = GenerateExerciseResponse::from_exercise(exercise_id, &exercise)
        .ok_or_else(|| ApiError::Internal("Generated exercise has no correct option".to_string()))?;

    Ok(Json(response))
}

/// POST /exercise/validate
pub async fn validate(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ValidateExerciseRequest>, JsonRejection>,
) -> Result<Json<ValidateExerciseResponse>> {
    let Json(payload) = payload?;
    let stored = state
        .db
        .get_exercise(payload.exercise_id)
        .await?
        .ok_or(ApiError::ExerciseNotFound(payload.exercise_id))?;

    let outcome = exercise_core::validate(&stored.core_options(), payload.selected_option_id)?;

    tracing::debug!(
        exercise_id = stored.exercise_id(),
        correct = outcome.correct,
        "Validated exercise answer"
    );

    Ok(Json(outcome.into()))
}
