//! Startup schema migration for the `books` table.

use sqlx::PgPool;

/// Column definitions added to an existing table that predates them.
const COLUMNS: &[(&str, &str)] = &[
    ("author", "TEXT"),
    ("title", "TEXT"),
    ("publisher", "TEXT"),
    ("created_at", "TIMESTAMPTZ NOT NULL DEFAULT NOW()"),
    ("updated_at", "TIMESTAMPTZ NOT NULL DEFAULT NOW()"),
];

/// Create `books` if missing and add any column it lacks. Idempotent.
pub async fn migrate_books(pool: &PgPool) -> Result<(), sqlx::Error> {
    let ddl = r#"
        CREATE TABLE IF NOT EXISTS books (
            id BIGSERIAL PRIMARY KEY,
            author TEXT,
            title TEXT,
            publisher TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
    "#;
    sqlx::query(ddl).execute(pool).await?;

    for (name, def) in COLUMNS {
        let alter = format!("ALTER TABLE books ADD COLUMN IF NOT EXISTS {} {}", name, def);
        tracing::debug!(sql = %alter, "migration");
        sqlx::query(&alter).execute(pool).await?;
    }
    tracing::info!("books table migrated");
    Ok(())
}
