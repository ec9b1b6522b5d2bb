//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// Seeded "Compras en supermercado" category (30 items).
pub const SEEDED_CATEGORY_ID: i64 = 1;

/// Category ID that never exists.
pub const MISSING_CATEGORY_ID: i64 = 999_999_999;

/// Generate a unique suffix to avoid collisions between test runs.
pub fn unique_suffix() -> String {
    format!("{:08x}", rand::random::<u32>())
}

/// Text of the `index`-th generated test item.
pub fn item_text(index: usize) -> String {
    format!("Testwort{}_{}", index + 1, unique_suffix())
}

/// Create a generate exercise request body.
pub fn generate_request(category_id: i64, previous_lexical_item_id: Option<i64>) -> serde_json::Value {
    match previous_lexical_item_id {
        Some(previous) => json!({
            "category_id": category_id,
            "previous_lexical_item_id": previous
        }),
        None => json!({ "category_id": category_id }),
    }
}

/// Create a validate exercise request body.
pub fn validate_request(exercise_id: i64, selected_option_id: i64) -> serde_json::Value {
    json!({
        "exercise_id": exercise_id,
        "selected_option_id": selected_option_id
    })
}
