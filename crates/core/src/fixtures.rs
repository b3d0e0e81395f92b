//! Deterministic blog post fixtures used by the seed routine.
//!
//! Post `i` (1-based) always gets the same title and content, so a seeded
//! store is reproducible across runs and machines.

use crate::error::CoreError;

/// Number of posts in the reference fixture set.
pub const FIXTURE_POST_COUNT: usize = 100;

/// A post that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFixture {
    pub title: String,
    pub content: String,
}

impl PostFixture {
    /// Build the fixture for the 1-based position `index`.
    pub fn numbered(index: usize) -> Self {
        Self {
            title: format!("Blog post #{index}"),
            content: format!(
                "This is the content of blog post #{index}. \
                 Dummy data for the live-coding session."
            ),
        }
    }
}

/// Generate `count` fixtures numbered `1..=count`.
///
/// A zero count is rejected: seeding nothing would leave the demo without
/// data while still reporting success.
pub fn fixture_posts(count: usize) -> Result<Vec<PostFixture>, CoreError> {
    if count == 0 {
        return Err(CoreError::Validation(
            "seed post count must be at least 1".to_string(),
        ));
    }

    Ok((1..=count).map(PostFixture::numbered).collect())
}
