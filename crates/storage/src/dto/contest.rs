use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Contest, ContestStatus};

/// Request payload for creating a new contest. New contests always start
/// in UPCOMING; the status sweep advances them from there.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContestRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Theme must be between 1 and 255 characters"
    ))]
    pub theme: String,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    /// Identity of the administrator creating the contest. Token exchange
    /// lives outside this service, so the keyed admin route passes the
    /// subject through explicitly.
    #[validate(length(min = 1, max = 255))]
    pub created_by_user_id: String,
}

impl CreateContestRequest {
    /// `end_date > start_date` cannot be expressed with field-level
    /// validator attributes, so it is checked separately.
    pub fn validate_dates(&self) -> Result<(), String> {
        if self.end_date <= self.start_date {
            return Err("end_date must be after start_date".to_string());
        }
        Ok(())
    }
}

/// Response containing contest details.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContestResponse {
    pub contest_id: i64,
    pub name: String,
    pub theme: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: ContestStatus,
    pub created_by_user_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<Contest> for ContestResponse {
    fn from(contest: Contest) -> Self {
        Self {
            contest_id: contest.contest_id,
            name: contest.name,
            theme: contest.theme,
            start_date: contest.start_date,
            end_date: contest.end_date,
            status: contest.status,
            created_by_user_id: contest.created_by_user_id,
            created_at: contest.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn request(start: DateTime<Utc>, end: DateTime<Utc>) -> CreateContestRequest {
        CreateContestRequest {
            name: "Autumn colors".to_string(),
            theme: "Foliage".to_string(),
            start_date: start,
            end_date: end,
            created_by_user_id: "admin".to_string(),
        }
    }

    #[test]
    fn test_end_date_must_be_after_start_date() {
        let start = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 10, 8, 0, 0, 0).unwrap();

        assert!(request(start, end).validate_dates().is_ok());
        assert!(request(end, start).validate_dates().is_err());
        assert!(request(start, start).validate_dates().is_err());
    }
}
