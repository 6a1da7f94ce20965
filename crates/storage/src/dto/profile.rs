use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::UserProfile;

/// Public view of a user profile with its denormalized statistics.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileResponse {
    pub user_id: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub best_rank: Option<i32>,
    pub total_posts: i32,
    pub total_contests_entered: i32,
}

/// Response of a manual best-rank refresh trigger.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RefreshBestRanksResponse {
    pub contest_id: i64,
    pub updated_rows: u64,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            display_name: profile.display_name,
            bio: profile.bio,
            best_rank: profile.best_rank,
            total_posts: profile.total_posts,
            total_contests_entered: profile.total_contests_entered,
        }
    }
}
