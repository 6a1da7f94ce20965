use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::UserProfile;

/// Repository for UserProfile database operations
pub struct UserProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserProfileRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a profile by user ID
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<UserProfile> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT user_id, display_name, bio, best_rank, total_posts,
                   total_contests_entered, created_at, updated_at
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(profile)
    }
}
