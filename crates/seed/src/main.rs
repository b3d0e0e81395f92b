//! `baseplate-seed` -- populates the blog database with fixture posts.
//!
//! Run once by hand before starting the API. Running it again against a
//! populated database changes nothing.
//!
//! # Environment variables
//!
//! | Variable          | Required | Default            | Description              |
//! |-------------------|----------|--------------------|--------------------------|
//! | `DATABASE_URL`    | no       | `sqlite://blog.db` | SQLite database to seed  |
//! | `SEED_POST_COUNT` | no       | `100`              | Number of posts to write |

use baseplate_core::fixtures::fixture_posts;
use baseplate_db::seed::{seed_posts, SeedOutcome};
use baseplate_seed::config::SeedConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "baseplate_seed=info,baseplate_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "Invalid seed configuration");
            std::process::exit(1);
        }
    };

    let fixtures = match fixture_posts(config.post_count) {
        Ok(fixtures) => fixtures,
        Err(err) => {
            tracing::error!(error = %err, "Invalid seed configuration");
            std::process::exit(1);
        }
    };

    let pool = match baseplate_db::create_pool(
        &config.database_url,
        baseplate_db::DEFAULT_MAX_CONNECTIONS,
    )
    .await
    {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(
                error = %err,
                database_url = %config.database_url,
                "Failed to open database",
            );
            std::process::exit(1);
        }
    };

    let result = seed_posts(&pool, &fixtures).await;
    pool.close().await;

    match result {
        Ok(SeedOutcome::Skipped { existing }) => {
            tracing::info!(existing, "Database already seeded, nothing to do");
        }
        Ok(SeedOutcome::Created { inserted, total }) => {
            tracing::info!(inserted, total, "Seed complete");
        }
        Err(err) => {
            tracing::error!(error = %err, "Seeding failed");
            std::process::exit(1);
        }
    }
}
