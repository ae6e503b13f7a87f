//! Date window check command.

use chrono::NaiveDate;
use clap::Args;

use taskgate_auth::MembershipWindowValidator;
use taskgate_core::result::AppResult;

use crate::output;

/// Arguments for `check-window`
#[derive(Debug, Args)]
pub struct CheckWindowArgs {
    /// Proposed start (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,
    /// Proposed end (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,
    /// Bounding start (YYYY-MM-DD)
    #[arg(long)]
    pub bound_start: NaiveDate,
    /// Bounding end (YYYY-MM-DD)
    #[arg(long)]
    pub bound_end: NaiveDate,
}

/// Execute the window check
pub fn execute(args: &CheckWindowArgs) -> AppResult<()> {
    MembershipWindowValidator::check_within(args.start, args.end, args.bound_start, args.bound_end)?;
    output::print_success(&format!(
        "{}..={} lies within {}..={}",
        args.start, args.end, args.bound_start, args.bound_end
    ));
    Ok(())
}
