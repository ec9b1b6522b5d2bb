//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Content Repository ===

    /// Get all categories
    pub async fn list_categories(&self) -> Result<Vec<DbCategory>> {
        let categories = sqlx::query_as::<_, DbCategory>(
            r#"
            SELECT category_id, name
            FROM category
            ORDER BY category_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Get category by ID
    pub async fn get_category(&self, category_id: i64) -> Result<Option<DbCategory>> {
        let category = sqlx::query_as::<_, DbCategory>(
            r#"
            SELECT category_id, name
            FROM category
            WHERE category_id = $1
            "#,
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Get all lexical items of a category
    pub async fn get_items_by_category(&self, category_id: i64) -> Result<Vec<DbLexicalItem>> {
        let items = sqlx::query_as::<_, DbLexicalItem>(
            r#"
            SELECT lexical_item_id, category_id, text
            FROM lexical_item
            WHERE category_id = $1
            ORDER BY lexical_item_id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    // === Exercise Repository ===

    /// Persist a generated exercise and its options, returning the new exercise ID
    pub async fn insert_exercise(&self, exercise: &Exercise) -> Result<i64> {
        let option_order = exercise
            .option_order
            .iter()
            .map(|&o| to_int4(o))
            .collect::<Result<Vec<i32>>>()?;

        let mut tx = self.pool.begin().await?;

        let exercise_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO exercise (category_id, lexical_item_id, option_order)
            VALUES ($1, $2, $3)
            RETURNING exercise_id
            "#,
        )
        .bind(exercise.category_id)
        .bind(exercise.lexical_item_id)
        .bind(&option_order)
        .fetch_one(&mut *tx)
        .await?;

        for option in &exercise.options {
            sqlx::query(
                r#"
                INSERT INTO exercise_option (exercise_id, option_id, text, is_correct)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(exercise_id)
            .bind(to_int4(option.option_id)?)
            .bind(&option.text)
            .bind(option.is_correct)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(exercise_id)
    }

    /// Get an exercise and its options from one consistent snapshot
    pub async fn get_exercise(&self, exercise_id: i64) -> Result<Option<StoredExercise>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let exercise = sqlx::query_as::<_, DbExercise>(
            r#"
            SELECT exercise_id, category_id, lexical_item_id, option_order, created_at
            FROM exercise
            WHERE exercise_id = $1
            "#,
        )
        .bind(exercise_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(exercise) = exercise else {
            tx.rollback().await?;
            return Ok(None);
        };

        let options = sqlx::query_as::<_, DbExerciseOption>(
            r#"
            SELECT exercise_id, option_id, text, is_correct
            FROM exercise_option
            WHERE exercise_id = $1
            ORDER BY option_id
            "#,
        )
        .bind(exercise_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(StoredExercise { exercise, options }))
    }
}

fn to_int4(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| ApiError::Internal(format!("value out of INTEGER range: {}", value)))
}
