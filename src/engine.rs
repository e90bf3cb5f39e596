//! Pregnancy date math: due date, gestational week, trimester.
//!
//! Everything in here is pure and works on whole calendar days. Missing
//! input comes back as `None`, never as an error.

use chrono::{Duration, NaiveDate};

/// Average pregnancy duration from first day of last period (40 weeks).
pub const LMP_TO_DUE_DAYS: i64 = 280;

/// Average time from conception to birth (38 weeks).
pub const CONCEPTION_TO_DUE_DAYS: i64 = 266;

/// Days from cycle start to ovulation in a textbook 28-day cycle.
pub const OVULATION_OFFSET_DAYS: i64 = 14;

/// Highest gestational week we report.
pub const MAX_WEEK: i64 = 42;

pub const DEFAULT_CYCLE_LENGTH: i64 = 28;

/// The raw pregnancy facts a profile can carry. At most one of the three
/// dates is authoritative at a time (see [`resolve_reference_date`]);
/// nothing derived is ever stored back.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceDates {
    pub lmp: Option<NaiveDate>,
    pub conception: Option<NaiveDate>,
    pub ultrasound_due_date: Option<NaiveDate>,
    pub cycle_length: i64,
}

impl Default for ReferenceDates {
    fn default() -> Self {
        ReferenceDates {
            lmp: None,
            conception: None,
            ultrasound_due_date: None,
            cycle_length: DEFAULT_CYCLE_LENGTH,
        }
    }
}

/// Snapshot of a pregnancy as of a given date. Computed on every read,
/// never persisted.
#[derive(Debug, Clone, Copy)]
pub struct DerivedStatus {
    pub due_date: NaiveDate,
    pub current_week: i64,
    pub current_day: i64,
    pub days_remaining: i64,
    pub trimester: i64,
}

/// Canonical start-of-pregnancy date (the "LMP equivalent") used for week
/// counting. Authority order: ultrasound due date, then conception, then
/// LMP, matching [`due_date`].
pub fn resolve_reference_date(dates: &ReferenceDates) -> Option<NaiveDate> {
    if let Some(due) = dates.ultrasound_due_date {
        Some(due - Duration::days(LMP_TO_DUE_DAYS))
    } else if let Some(conception) = dates.conception {
        Some(conception - Duration::days(OVULATION_OFFSET_DAYS))
    } else {
        dates.lmp
    }
}

/// Estimated due date. An ultrasound-confirmed date is returned as-is,
/// otherwise conception + 266 days, otherwise LMP + 280 days.
pub fn due_date(dates: &ReferenceDates) -> Option<NaiveDate> {
    if let Some(due) = dates.ultrasound_due_date {
        Some(due)
    } else if let Some(conception) = dates.conception {
        Some(conception + Duration::days(CONCEPTION_TO_DUE_DAYS))
    } else {
        dates.lmp.map(|lmp| lmp + Duration::days(LMP_TO_DUE_DAYS))
    }
}

/// Estimated conception date: LMP + (cycle length - 14) days. Cycle
/// lengths outside roughly 20-45 are the caller's problem to reject.
pub fn estimate_conception(lmp: NaiveDate, cycle_length: i64) -> NaiveDate {
    lmp + Duration::days(cycle_length - OVULATION_OFFSET_DAYS)
}

/// Gestational (week, day-of-week) as of a date. Week counting starts at
/// 1 on the reference date itself; before the reference date the sentinel
/// `(0, 0)` is returned. Unclamped; see [`clamp_week`].
pub fn week_and_day(reference: NaiveDate, as_of: NaiveDate) -> (i64, i64) {
    let diff_days = (as_of - reference).num_days();
    if diff_days < 0 {
        return (0, 0);
    }
    (diff_days / 7 + 1, diff_days % 7)
}

/// Clamp a raw week number into the displayable 1-42 range.
pub fn clamp_week(week: i64) -> i64 {
    week.clamp(1, MAX_WEEK)
}

/// Whole days until the due date, floored at zero (past due reads as
/// "0 days left", never negative).
pub fn days_remaining(due: NaiveDate, as_of: NaiveDate) -> i64 {
    (due - as_of).num_days().max(0)
}

/// Trimester for a gestational week: 1 below week 14, 2 below week 28,
/// 3 from week 28 on.
pub fn trimester(week: i64) -> i64 {
    if week < 14 {
        1
    } else if week < 28 {
        2
    } else {
        3
    }
}

/// Full status snapshot, or `None` when no reference fact is set.
pub fn derive_status(dates: &ReferenceDates, as_of: NaiveDate) -> Option<DerivedStatus> {
    let reference = resolve_reference_date(dates)?;
    let due = due_date(dates)?;
    let (week, day) = week_and_day(reference, as_of);

    Some(DerivedStatus {
        due_date: due,
        current_week: week,
        current_day: day,
        days_remaining: days_remaining(due, as_of),
        trimester: trimester(week),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn from_lmp(lmp: NaiveDate) -> ReferenceDates {
        ReferenceDates {
            lmp: Some(lmp),
            ..Default::default()
        }
    }

    #[test]
    fn test_due_date_from_lmp_adds_280_days() {
        let dates = from_lmp(d(2024, 1, 1));
        assert_eq!(due_date(&dates), Some(d(2024, 10, 7)));
    }

    #[test]
    fn test_due_date_from_conception_adds_266_days() {
        let dates = ReferenceDates {
            conception: Some(d(2024, 1, 15)),
            ..Default::default()
        };
        assert_eq!(due_date(&dates), Some(d(2024, 10, 7)));
    }

    #[test]
    fn test_ultrasound_due_date_is_identity() {
        let dates = ReferenceDates {
            ultrasound_due_date: Some(d(2024, 9, 30)),
            ..Default::default()
        };
        assert_eq!(due_date(&dates), Some(d(2024, 9, 30)));
    }

    #[test]
    fn test_due_date_authority_order() {
        // ultrasound wins over everything
        let dates = ReferenceDates {
            lmp: Some(d(2024, 1, 1)),
            conception: Some(d(2024, 1, 20)),
            ultrasound_due_date: Some(d(2024, 10, 1)),
            cycle_length: DEFAULT_CYCLE_LENGTH,
        };
        assert_eq!(due_date(&dates), Some(d(2024, 10, 1)));

        // conception wins over LMP
        let dates = ReferenceDates {
            lmp: Some(d(2024, 1, 1)),
            conception: Some(d(2024, 1, 20)),
            ..Default::default()
        };
        assert_eq!(due_date(&dates), Some(d(2024, 1, 20) + Duration::days(266)));
    }

    #[test]
    fn test_due_date_without_input_is_none() {
        assert_eq!(due_date(&ReferenceDates::default()), None);
    }

    #[test]
    fn test_reference_date_follows_same_authority_order() {
        let dates = ReferenceDates {
            lmp: Some(d(2024, 1, 1)),
            conception: Some(d(2024, 1, 20)),
            ultrasound_due_date: Some(d(2024, 10, 1)),
            cycle_length: DEFAULT_CYCLE_LENGTH,
        };
        // ultrasound due date back-dated 280 days
        assert_eq!(
            resolve_reference_date(&dates),
            Some(d(2024, 10, 1) - Duration::days(280))
        );

        let dates = ReferenceDates {
            lmp: Some(d(2024, 1, 1)),
            conception: Some(d(2024, 1, 20)),
            ..Default::default()
        };
        // conception back-dated 14 days beats raw LMP
        assert_eq!(resolve_reference_date(&dates), Some(d(2024, 1, 6)));

        assert_eq!(
            resolve_reference_date(&from_lmp(d(2024, 1, 1))),
            Some(d(2024, 1, 1))
        );
        assert_eq!(resolve_reference_date(&ReferenceDates::default()), None);
    }

    #[test]
    fn test_week_starts_at_one_on_reference_date() {
        assert_eq!(week_and_day(d(2024, 1, 1), d(2024, 1, 1)), (1, 0));
    }

    #[test]
    fn test_week_before_reference_is_zero_sentinel() {
        assert_eq!(week_and_day(d(2024, 1, 1), d(2023, 12, 25)), (0, 0));
    }

    #[test]
    fn test_week_and_day_two_weeks_in() {
        // 14 whole days -> week 3, day 0
        assert_eq!(week_and_day(d(2024, 1, 1), d(2024, 1, 15)), (3, 0));
        assert_eq!(week_and_day(d(2024, 1, 1), d(2024, 1, 19)), (3, 4));
    }

    #[test]
    fn test_clamp_week_bounds() {
        assert_eq!(clamp_week(0), 1);
        assert_eq!(clamp_week(20), 20);
        assert_eq!(clamp_week(42), 42);
        assert_eq!(clamp_week(45), 42);
    }

    #[test]
    fn test_days_remaining_never_negative() {
        assert_eq!(days_remaining(d(2024, 10, 7), d(2024, 10, 1)), 6);
        assert_eq!(days_remaining(d(2024, 10, 7), d(2024, 10, 7)), 0);
        assert_eq!(days_remaining(d(2024, 10, 7), d(2024, 10, 20)), 0);
    }

    #[test]
    fn test_trimester_boundaries() {
        assert_eq!(trimester(1), 1);
        assert_eq!(trimester(13), 1);
        assert_eq!(trimester(14), 2);
        // week 27 sits in trimester 2 under the week < 28 rule
        assert_eq!(trimester(27), 2);
        assert_eq!(trimester(28), 3);
        assert_eq!(trimester(42), 3);
    }

    #[test]
    fn test_conception_estimate_round_trips_to_lmp_due_date() {
        let lmp = d(2024, 1, 1);
        let conception = estimate_conception(lmp, 28);
        assert_eq!(conception, d(2024, 1, 15));
        // 14 + 266 = 280, so both paths agree exactly for a 28-day cycle
        let via_conception = conception + Duration::days(CONCEPTION_TO_DUE_DAYS);
        assert_eq!(via_conception, due_date(&from_lmp(lmp)).unwrap());
    }

    #[test]
    fn test_conception_estimate_shifts_with_cycle_length() {
        assert_eq!(estimate_conception(d(2024, 1, 1), 35), d(2024, 1, 22));
        assert_eq!(estimate_conception(d(2024, 1, 1), 21), d(2024, 1, 8));
    }

    #[test]
    fn test_derive_status_dashboard_scenario() {
        let status = derive_status(&from_lmp(d(2024, 1, 1)), d(2024, 1, 15)).unwrap();
        assert_eq!(status.due_date, d(2024, 10, 7));
        assert_eq!(status.current_week, 3);
        assert_eq!(status.current_day, 0);
        assert_eq!(status.days_remaining, 266);
        assert_eq!(status.trimester, 1);
    }

    #[test]
    fn test_derive_status_without_input_is_none() {
        assert!(derive_status(&ReferenceDates::default(), d(2024, 1, 1)).is_none());
    }

    #[test]
    fn test_derive_status_before_reference_date() {
        let status = derive_status(&from_lmp(d(2024, 3, 1)), d(2024, 2, 1)).unwrap();
        assert_eq!(status.current_week, 0);
        assert_eq!(status.current_day, 0);
        assert_eq!(status.trimester, 1);
    }
}
