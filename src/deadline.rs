//! Business-day deadline calculator
//!
//! Given a start date and a number of business days, computes the calendar
//! date that many business days later. Saturdays, Sundays and a fixed set of
//! recurring holidays do not count. The start date itself never counts, even
//! when it is a business day.
//!
//! The calculator is pure: no clock access, no timezone, no shared state.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{TermoError, TermoResult};

/// Recurring holidays as `(month, day)` pairs; the year is ignored.
///
/// The configuration wire format is `DD/MM` strings; they are parsed once
/// here so membership tests are integer comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    days: BTreeSet<(u32, u32)>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `DD/MM` entries (the config wire format).
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> TermoResult<Self> {
        let mut set = Self::new();
        for entry in entries {
            let entry = entry.as_ref();
            let (day, month) = entry
                .split_once('/')
                .ok_or_else(|| TermoError::invalid("holiday", entry, "expected DD/MM"))?;
            let day: u32 = day
                .trim()
                .parse()
                .map_err(|_| TermoError::invalid("holiday", entry, "day is not a number"))?;
            let month: u32 = month
                .trim()
                .parse()
                .map_err(|_| TermoError::invalid("holiday", entry, "month is not a number"))?;
            set.insert(month, day)?;
        }
        Ok(set)
    }

    /// Add a recurring `(month, day)` holiday.
    ///
    /// The pair must name a day that exists in at least one year, so 29/02
    /// is accepted but 30/02 is not.
    pub fn insert(&mut self, month: u32, day: u32) -> TermoResult<()> {
        // 2024 is a leap year, so every representable recurring day exists in it.
        if NaiveDate::from_ymd_opt(2024, month, day).is_none() {
            return Err(TermoError::invalid(
                "holiday",
                format!("{day:02}/{month:02}"),
                "not a valid calendar day",
            ));
        }
        self.days.insert((month, day));
        Ok(())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&(date.month(), date.day()))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entries in `DD/MM` form, sorted by (month, day).
    pub fn entries(&self) -> Vec<String> {
        self.days
            .iter()
            .map(|(month, day)| format!("{day:02}/{month:02}"))
            .collect()
    }
}

/// One deadline computation: a signature date and a business-day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRequest {
    pub start: NaiveDate,
    pub business_days: i64,
}

/// A day counts when it is neither a weekend day nor a configured holiday.
pub fn is_business_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(date)
}

/// Compute the delivery date: advance one calendar day at a time from
/// `request.start`, counting only business days, until `business_days` of
/// them have passed.
///
/// A request for 0 business days returns the start date unchanged. Negative
/// counts are rejected rather than silently producing a degenerate date.
pub fn compute_deadline(request: DeadlineRequest, holidays: &HolidaySet) -> TermoResult<NaiveDate> {
    if request.business_days < 0 {
        return Err(TermoError::invalid(
            "business_days",
            request.business_days,
            "day count cannot be negative",
        ));
    }

    let mut date = request.start;
    let mut counted = 0i64;
    while counted < request.business_days {
        date = date.succ_opt().ok_or_else(|| {
            TermoError::invalid("start", request.start, "date range exhausted")
        })?;
        if is_business_day(date, holidays) {
            counted += 1;
        }
    }
    Ok(date)
}

/// Parse a user-entered date, accepting ISO (`YYYY-MM-DD`) and the document
/// form (`DD/MM/YYYY`).
pub fn parse_date(field: &str, value: &str) -> TermoResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .map_err(|_| TermoError::invalid(field, value, "expected YYYY-MM-DD or DD/MM/YYYY"))
}

/// ISO form, used for machine output and persisted state.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Document form, used in the printed term.
pub fn format_document(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
