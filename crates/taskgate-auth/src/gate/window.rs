//! Date window containment.

use chrono::NaiveDate;

use taskgate_core::error::AppError;
use taskgate_core::result::AppResult;
use taskgate_entity::DateWindow;

/// Checks that a proposed date range lies inside a bounding range.
#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipWindowValidator;

impl MembershipWindowValidator {
    /// Fails with `InvalidDateRange` if `candidate_start < bound_start` or
    /// `candidate_end > bound_end`. Equal boundaries pass.
    pub fn check_within(
        candidate_start: NaiveDate,
        candidate_end: NaiveDate,
        bound_start: NaiveDate,
        bound_end: NaiveDate,
    ) -> AppResult<()> {
        if candidate_start < bound_start {
            return Err(AppError::invalid_date_range(format!(
                "Start {candidate_start} is before {bound_start}"
            )));
        }
        if candidate_end > bound_end {
            return Err(AppError::invalid_date_range(format!(
                "End {candidate_end} is after {bound_end}"
            )));
        }
        Ok(())
    }

    /// [`Self::check_within`] over two windows.
    pub fn check_window(candidate: &DateWindow, bound: &DateWindow) -> AppResult<()> {
        Self::check_within(candidate.start(), candidate.end(), bound.start(), bound.end())
    }
}
