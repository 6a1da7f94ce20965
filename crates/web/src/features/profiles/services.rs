use sqlx::PgPool;
use storage::{
    error::Result, models::UserProfile, repository::user_profile::UserProfileRepository,
};

/// Get a user profile by user ID
pub async fn get_user_profile(pool: &PgPool, user_id: &str) -> Result<UserProfile> {
    let repo = UserProfileRepository::new(pool);
    repo.find_by_user_id(user_id).await
}
