use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Lifecycle state of a contest.
///
/// The status only ever moves forward along
/// UPCOMING -> IN_PROGRESS -> CLOSED_VOTING -> ANNOUNCED; every write path
/// goes through [`ContestStatus::can_transition_to`] or a conditional UPDATE
/// that encodes the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "contest_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContestStatus {
    Upcoming,
    InProgress,
    ClosedVoting,
    Announced,
}

impl ContestStatus {
    /// The single legal successor state, if any.
    pub fn next(&self) -> Option<ContestStatus> {
        match self {
            Self::Upcoming => Some(Self::InProgress),
            Self::InProgress => Some(Self::ClosedVoting),
            Self::ClosedVoting => Some(Self::Announced),
            Self::Announced => None,
        }
    }

    /// Whether moving from `self` to `target` is a legal transition.
    pub fn can_transition_to(&self, target: ContestStatus) -> bool {
        self.next() == Some(target)
    }

    /// Whether `target` lies strictly ahead of `self` on the lifecycle
    /// chain. A status write is monotonic exactly when this holds, even if
    /// it jumps over intermediate states.
    pub fn precedes(&self, target: ContestStatus) -> bool {
        let mut cursor = *self;
        while let Some(next) = cursor.next() {
            if next == target {
                return true;
            }
            cursor = next;
        }
        false
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Announced)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "UPCOMING",
            Self::InProgress => "IN_PROGRESS",
            Self::ClosedVoting => "CLOSED_VOTING",
            Self::Announced => "ANNOUNCED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Contest {
    pub contest_id: i64,
    pub name: String,
    pub theme: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: ContestStatus,
    pub created_by_user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
    pub removed_by_user_id: Option<String>,
    pub removed_reason: Option<String>,
}

impl Contest {
    pub fn is_removed(&self) -> bool {
        self.removed_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_are_legal() {
        assert!(ContestStatus::Upcoming.can_transition_to(ContestStatus::InProgress));
        assert!(ContestStatus::InProgress.can_transition_to(ContestStatus::ClosedVoting));
        assert!(ContestStatus::ClosedVoting.can_transition_to(ContestStatus::Announced));
    }

    #[test]
    fn test_skipping_and_backward_transitions_are_rejected() {
        assert!(!ContestStatus::Upcoming.can_transition_to(ContestStatus::ClosedVoting));
        assert!(!ContestStatus::Upcoming.can_transition_to(ContestStatus::Announced));
        assert!(!ContestStatus::InProgress.can_transition_to(ContestStatus::Upcoming));
        assert!(!ContestStatus::ClosedVoting.can_transition_to(ContestStatus::InProgress));
        assert!(!ContestStatus::Announced.can_transition_to(ContestStatus::Upcoming));
    }

    #[test]
    fn test_precedes_walks_the_whole_chain() {
        assert!(ContestStatus::Upcoming.precedes(ContestStatus::Announced));
        assert!(ContestStatus::InProgress.precedes(ContestStatus::Announced));
        assert!(ContestStatus::ClosedVoting.precedes(ContestStatus::Announced));
        assert!(!ContestStatus::Announced.precedes(ContestStatus::Announced));
        assert!(!ContestStatus::Announced.precedes(ContestStatus::Upcoming));
        assert!(!ContestStatus::ClosedVoting.precedes(ContestStatus::InProgress));
    }

    #[test]
    fn test_announced_is_terminal() {
        assert_eq!(ContestStatus::Announced.next(), None);
        assert!(ContestStatus::Announced.is_terminal());
        assert!(!ContestStatus::ClosedVoting.is_terminal());
    }

    #[test]
    fn test_status_labels_match_database_values() {
        assert_eq!(ContestStatus::Upcoming.as_str(), "UPCOMING");
        assert_eq!(ContestStatus::InProgress.as_str(), "IN_PROGRESS");
        assert_eq!(ContestStatus::ClosedVoting.as_str(), "CLOSED_VOTING");
        assert_eq!(ContestStatus::Announced.as_str(), "ANNOUNCED");
    }
}
