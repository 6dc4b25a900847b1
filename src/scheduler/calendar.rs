// ABOUTME: Calendar day scheduling mapping abstract week slots onto concrete dates
// ABOUTME: Handles even-stride spreading and preferred-weekday selection with warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Scheduled dates for one week, plus an optional diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledWeek {
    /// Chosen training dates in calendar order
    pub days: Vec<NaiveDate>,
    /// Present when fewer preferred days exist than requested
    pub warning: Option<String>,
}

/// All dates in the inclusive `start..=end` window.
#[must_use]
pub fn week_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(7);
    let mut cursor = start;
    while cursor <= end {
        dates.push(cursor);
        cursor = cursor + Days::new(1);
    }
    dates
}

/// Map `days_per_week` abstract slots onto the concrete dates of one week.
///
/// With `any_days` (or no preferred weekdays) the week is strided evenly.
/// Otherwise dates are walked in calendar order keeping preferred weekdays.
/// Whenever the window yields fewer training dates than requested, the
/// partial list is returned with a warning. Sessions are never scheduled on
/// non-preferred days.
#[must_use]
pub fn schedule_week_days(
    week_start: NaiveDate,
    week_end: NaiveDate,
    days_per_week: u32,
    preferred_days: &[Weekday],
    any_days: bool,
) -> ScheduledWeek {
    let dates = week_dates(week_start, week_end);
    let requested = days_per_week.max(1) as usize;

    if any_days || preferred_days.is_empty() {
        let step = (dates.len() / requested).max(1);
        let mut days: Vec<NaiveDate> = Vec::with_capacity(requested);
        for slot in 0..requested {
            let idx = (slot * step).min(dates.len() - 1);
            let date = dates[idx];
            if !days.contains(&date) {
                days.push(date);
            }
        }
        // A truncated final week can hold fewer dates than requested
        let warning = (days.len() < requested).then(shortfall_warning);
        return ScheduledWeek { days, warning };
    }

    let mut days: Vec<NaiveDate> = Vec::with_capacity(requested);
    for date in &dates {
        if preferred_days.contains(&date.weekday()) {
            days.push(*date);
        }
        if days.len() >= requested {
            break;
        }
    }

    let warning = (days.len() < requested).then(shortfall_warning);
    ScheduledWeek { days, warning }
}

fn shortfall_warning() -> String {
    "Not enough preferred days this week; some sessions may be skipped.".to_owned()
}

/// Weekdays the plan summary reports as the training days.
///
/// Preferred days come first; remaining slots fill from a fixed
/// well-spread order.
#[must_use]
pub fn pick_training_days(
    days_per_week: u32,
    preferred_days: &[Weekday],
    any_days: bool,
) -> Vec<Weekday> {
    const FALLBACK_ORDER: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Wed,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Tue,
        Weekday::Thu,
        Weekday::Sun,
    ];
    let requested = days_per_week as usize;
    let mut selection: Vec<Weekday> = Vec::with_capacity(requested);

    if !any_days {
        for day in preferred_days {
            if !selection.contains(day) {
                selection.push(*day);
            }
            if selection.len() >= requested {
                break;
            }
        }
    }
    for day in FALLBACK_ORDER {
        if selection.len() >= requested {
            break;
        }
        if !selection.contains(&day) {
            selection.push(day);
        }
    }
    selection.truncate(requested);
    selection
}
