//! Schema definitions and migration utilities.
//!
//! Migrations are embedded SQL files. Every statement uses
//! `IF NOT EXISTS`, so running them repeatedly is safe.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Teachers and students tables (001_users.sql).
pub const USERS_MIGRATION: &str = include_str!("../../../migrations/001_users.sql");

/// Registration edge table (002_teacher_students.sql).
pub const RELATION_MIGRATION: &str = include_str!("../../../migrations/002_teacher_students.sql");

/// Student suspension flag (003_student_suspended.sql).
pub const SUSPENDED_MIGRATION: &str =
    include_str!("../../../migrations/003_student_suspended.sql");

/// Migrations in application order.
pub const MIGRATIONS: [(&str, &str); 3] = [
    ("001_users.sql", USERS_MIGRATION),
    ("002_teacher_students.sql", RELATION_MIGRATION),
    ("003_student_suspended.sql", SUSPENDED_MIGRATION),
];

/// Run all migrations against the database.
///
/// # Errors
///
/// Returns `StoreError::Migration` naming the file that failed.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    for (name, sql) in MIGRATIONS {
        tracing::debug!("Running migration {}...", name);
        sqlx::raw_sql(sql)
            .execute(pool)
            .await
            .map_err(|e| StoreError::Migration(format!("{} failed: {}", name, e)))?;
    }

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Get the current schema version by checking which objects exist.
///
/// Returns:
/// - 0: No tables exist
/// - 1: `teachers` and `students` exist
/// - 2: `teacher_students` exists
/// - 3: `students.suspended` exists
pub async fn get_schema_version(pool: &PgPool) -> StoreResult<u32> {
    if !table_exists(pool, "students").await? {
        return Ok(0);
    }

    if !table_exists(pool, "teacher_students").await? {
        return Ok(1);
    }

    let has_suspended: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.columns
            WHERE table_schema = 'public'
            AND table_name = 'students'
            AND column_name = 'suspended'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(if has_suspended.0 { 3 } else { 2 })
}

async fn table_exists(pool: &PgPool, table: &str) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = $1
        )
        "#,
    )
    .bind(table)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
