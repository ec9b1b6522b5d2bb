//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating and removing test content
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use wintagma_backend::db::Database;
use wintagma_backend::{build_router, AppState};

/// Test context containing database connection and router.
///
/// Each context owns its own repetition memory, so tests do not see each
/// other's generation history.
pub struct TestContext {
    pub db: Arc<Database>,
    pub state: AppState,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url, 5)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(db);
        let app = build_router(state.clone());

        Self {
            db: state.db.clone(),
            state,
            app,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a category with `item_count` items and return its ID and item IDs.
    pub async fn create_category(&self, item_count: usize) -> (i64, Vec<i64>) {
        let name = format!("test_category_{}", fixtures::unique_suffix());
        let category_id: i64 =
            sqlx::query_scalar("INSERT INTO category (name) VALUES ($1) RETURNING category_id")
                .bind(&name)
                .fetch_one(self.db.pool())
                .await
                .expect("Failed to create test category");

        let mut item_ids = Vec::with_capacity(item_count);
        for i in 0..item_count {
            let item_id: i64 = sqlx::query_scalar(
                "INSERT INTO lexical_item (category_id, text) VALUES ($1, $2) RETURNING lexical_item_id",
            )
            .bind(category_id)
            .bind(fixtures::item_text(i))
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to create test item");
            item_ids.push(item_id);
        }

        (category_id, item_ids)
    }

    /// Clean up a test category with its items and exercises.
    pub async fn cleanup_category(&self, category_id: i64) {
        // Delete in order due to foreign keys; options cascade from exercise
        let _ = sqlx::query("DELETE FROM exercise WHERE category_id = $1")
            .bind(category_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM lexical_item WHERE category_id = $1")
            .bind(category_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM category WHERE category_id = $1")
            .bind(category_id)
            .execute(self.db.pool())
            .await;
    }

    /// Remove a single exercise created against seeded content.
    pub async fn cleanup_exercise(&self, exercise_id: i64) {
        let _ = sqlx::query("DELETE FROM exercise WHERE exercise_id = $1")
            .bind(exercise_id)
            .execute(self.db.pool())
            .await;
    }
}
