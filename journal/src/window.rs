//! Date window resolution
//!
//! Resolves the "last N days" style ranges the insight builders consume.
//! Each window kind carries its own bound convention, matching how the
//! journal queries records for it.

use chrono::{Duration, NaiveDate};

use crate::error::JournalError;

/// Default rolling-insight window length in days
pub const DEFAULT_ROLLING_DAYS: u32 = 7;

/// Default calorie-adjustment lookback in days
pub const DEFAULT_LOOKBACK_DAYS: u32 = 35;

/// Weekly window `[start, end)`: seven days from `start`
pub fn weekly_window(start: NaiveDate) -> (NaiveDate, NaiveDate) {
    (start, start + Duration::days(7))
}

/// Rolling window `[start, end]`: `days` back from `today`, both ends
/// inclusive
pub fn rolling_window(days: u32, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), JournalError> {
    check_days(days)?;
    Ok((today - Duration::days(i64::from(days)), today))
}

/// Adjustment lookback `(start, end]`: `days` back from `today`, open on
/// the left
pub fn lookback_window(days: u32, today: NaiveDate) -> Result<(NaiveDate, NaiveDate), JournalError> {
    check_days(days)?;
    Ok((today - Duration::days(i64::from(days)), today))
}

fn check_days(days: u32) -> Result<(), JournalError> {
    if days == 0 {
        return Err(JournalError::InvalidWindow(
            "window length must be at least 1 day".to_string(),
        ));
    }
    Ok(())
}
