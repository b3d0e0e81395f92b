//! Repository for the `posts` table.
//!
//! The two read paths return identical rows in identical order. The slow path
//! additionally re-reads every row by id and waits a fixed delay per row,
//! reproducing an N+1 lookup against an external dependency.

use baseplate_core::latency::RowDelay;
use baseplate_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::post::Post;
use crate::DbPool;

/// Column list for `posts` queries.
const COLUMNS: &str = "id, title, content";

/// Provides data access for blog posts.
pub struct PostRepo;

impl PostRepo {
    /// List every post in id order, with no per-row work.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Post>, sqlx::Error> {
        Self::scan(pool).await
    }

    /// List every post in id order, paying one extra lookup and `delay` per row.
    ///
    /// Latency grows linearly with the row count. Each query checks a
    /// connection out of the pool and returns it before the delay, so a slow
    /// listing never keeps a connection idle while it waits.
    pub async fn list_all_with_row_delay(
        pool: &DbPool,
        delay: RowDelay,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let scanned = Self::scan(pool).await?;

        let mut posts = Vec::with_capacity(scanned.len());
        for post in &scanned {
            let hydrated = Self::find_by_id(pool, post.id).await?;
            tokio::time::sleep(delay.per_row()).await;
            posts.push(hydrated);
        }

        Ok(posts)
    }

    /// Count all posts.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await
    }

    /// Insert one post on the given connection, returning the assigned id.
    ///
    /// Takes a connection rather than the pool so callers can batch inserts
    /// inside a transaction.
    pub async fn insert(
        conn: &mut SqliteConnection,
        title: &str,
        content: &str,
    ) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?)")
            .bind(title)
            .bind(content)
            .execute(conn)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn scan(pool: &DbPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY id");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Post, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = ?");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
