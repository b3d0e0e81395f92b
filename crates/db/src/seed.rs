//! Idempotent fixture population for the `posts` table.

use baseplate_core::fixtures::PostFixture;

use crate::repositories::PostRepo;
use crate::DbPool;

/// Result of a seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held rows; nothing was inserted.
    Skipped { existing: i64 },
    /// All fixtures were inserted in one transaction.
    Created { inserted: usize, total: i64 },
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to apply migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Ensure the schema exists, then insert `fixtures` unless posts already exist.
///
/// Inserts are all-or-nothing: the first failing insert rolls the
/// transaction back and its error is returned. No retry is attempted.
pub async fn seed_posts(pool: &DbPool, fixtures: &[PostFixture]) -> Result<SeedOutcome, SeedError> {
    crate::run_migrations(pool).await?;

    let existing = PostRepo::count(pool).await?;
    if existing > 0 {
        tracing::warn!(existing, "Posts already present, skipping seed");
        return Ok(SeedOutcome::Skipped { existing });
    }

    let mut tx = pool.begin().await?;
    for fixture in fixtures {
        if let Err(err) = PostRepo::insert(&mut tx, &fixture.title, &fixture.content).await {
            tracing::error!(error = %err, "Seed insert failed, rolling back");
            tx.rollback().await?;
            return Err(err.into());
        }
    }
    tx.commit().await?;

    let total = PostRepo::count(pool).await?;
    tracing::info!(inserted = fixtures.len(), total, "Seeded posts");

    Ok(SeedOutcome::Created {
        inserted: fixtures.len(),
        total,
    })
}
