//! Content endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /content/categories
pub async fn categories(State(state): State<AppState>) -> Result<Json<CategoryListResponse>> {
    let categories = state.db.list_categories().await?;

    Ok(Json(CategoryListResponse {
        categories: categories.iter().map(DbCategory::to_core).collect(),
    }))
}

/// GET /content/items/:category_id
pub async fn items(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<LexicalItemListResponse>> {
    state
        .db
        .get_category(category_id)
        .await?
        .ok_or(ApiError::CategoryNotFound(category_id))?;

    let items = state.db.get_items_by_category(category_id).await?;
    if items.is_empty() {
        return Err(ApiError::InsufficientItems(format!(
            "category {} has no lexical items",
            category_id
        )));
    }

    Ok(Json(LexicalItemListResponse {
        items: items.iter().map(DbLexicalItem::to_core).collect(),
    }))
}
