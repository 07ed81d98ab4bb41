//! Mapping simulated months onto calendar months

use chrono::{Datelike, Months, NaiveDate};

use crate::error::PayoffError;

/// Parse a plan start month given as `YYYY-MM` or `YYYY-MM-DD`.
/// The result is always the first day of that month.
pub fn parse_start_month(s: &str) -> Result<NaiveDate, PayoffError> {
    let s = s.trim();
    let date = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| PayoffError::InvalidMonth(s.to_string()))?;
    first_of_month(date).ok_or_else(|| PayoffError::InvalidMonth(s.to_string()))
}

fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
}

/// Calendar month of simulated month `month`, where month 1 is `start`.
/// Month 0 (already paid before the plan) also maps to `start`.
pub fn month_date(start: NaiveDate, month: u32) -> Option<NaiveDate> {
    let start = first_of_month(start)?;
    start.checked_add_months(Months::new(month.saturating_sub(1)))
}
