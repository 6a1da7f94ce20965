use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of one contest inside a calculation run. Expected no-ops
/// (nothing eligible, already calculated) are values here, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationStatus {
    Success,
    NoContestsToCalculate,
    AlreadyCalculated,
}

/// Per-contest report returned by the calculation run. Used for
/// observability and the batch response only, not for correctness.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationOutcome {
    pub contest_id: Option<i64>,
    pub status: CalculationStatus,
    pub message: String,
    pub submissions_processed: i64,
}

impl CalculationOutcome {
    pub fn success(contest_id: i64, message: impl Into<String>, processed: i64) -> Self {
        Self {
            contest_id: Some(contest_id),
            status: CalculationStatus::Success,
            message: message.into(),
            submissions_processed: processed,
        }
    }

    pub fn already_calculated(contest_id: i64) -> Self {
        Self {
            contest_id: Some(contest_id),
            status: CalculationStatus::AlreadyCalculated,
            message: "Results already calculated.".to_string(),
            submissions_processed: 0,
        }
    }

    pub fn nothing_to_calculate() -> Self {
        Self {
            contest_id: None,
            status: CalculationStatus::NoContestsToCalculate,
            message: "No contests found that require calculation.".to_string(),
            submissions_processed: 0,
        }
    }
}

/// Row counts from the three passes of one status sweep invocation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
pub struct StatusSweepSummary {
    pub moved_to_in_progress: u64,
    pub moved_to_closed_voting: u64,
    pub moved_to_announced: u64,
}

impl StatusSweepSummary {
    pub fn total_moved(&self) -> u64 {
        self.moved_to_in_progress + self.moved_to_closed_voting + self.moved_to_announced
    }
}
