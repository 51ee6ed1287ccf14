//! Feedback deadline calculator.
//!
//! A tutor owes feedback 7 business days after a tape is submitted,
//! due at 18:00 platform-local time. Weekends do not count toward the
//! 7 days; holidays are deliberately not consulted.
//!
//! All functions here operate on [`NaiveDateTime`] in platform-local
//! wall time. Callers holding stored UTC instants convert with the
//! configured platform offset before calling in, and convert the result
//! back for serialization.

use chrono::{Datelike, Days, NaiveDateTime, NaiveTime, Weekday};

/// Number of business days a tutor has to deliver feedback.
pub const FEEDBACK_BUSINESS_DAYS: u32 = 7;

/// Hour of the day (local) the deadline falls on.
pub const DEADLINE_HOUR: u32 = 18;

/// Countdown text shown once a deadline has been strictly exceeded.
pub const DEADLINE_EXPIRED_TEXT: &str = "Prazo Expirado";

/// Compute the feedback due instant for a submission created at
/// `created_at` (platform-local wall time).
///
/// Advances day-by-day from the submission date, skipping Saturdays and
/// Sundays, until [`FEEDBACK_BUSINESS_DAYS`] weekday increments have been
/// applied, then pins the time of day to 18:00:00.
///
/// The result always lands on a weekday.
pub fn feedback_deadline(created_at: NaiveDateTime) -> NaiveDateTime {
    let mut date = created_at.date();
    let mut remaining = FEEDBACK_BUSINESS_DAYS;

    while remaining > 0 {
        date = date + Days::new(1);
        if !is_weekend(date.weekday()) {
            remaining -= 1;
        }
    }

    let due_time =
        NaiveTime::from_hms_opt(DEADLINE_HOUR, 0, 0).expect("deadline hour is a valid time");
    date.and_time(due_time)
}

fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Sat | Weekday::Sun)
}

/// A point-in-time snapshot of the remaining time until a deadline.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Countdown {
    /// `"{D}D {HH}H {MM}M"` while pending, [`DEADLINE_EXPIRED_TEXT`] after.
    pub text: String,
    /// True only once `now` is strictly past the deadline.
    pub is_past: bool,
}

/// Format the remaining time until `deadline` as seen at `now`.
///
/// Days, hours, and minutes come from truncating division of the
/// millisecond difference; there is no seconds precision. At exactly
/// `deadline` the countdown still reads `0D 00H 00M` with
/// `is_past == false` -- the flip happens only when strictly exceeded.
pub fn countdown(deadline: NaiveDateTime, now: NaiveDateTime) -> Countdown {
    if now > deadline {
        return Countdown {
            text: DEADLINE_EXPIRED_TEXT.to_string(),
            is_past: true,
        };
    }

    let diff_ms = (deadline - now).num_milliseconds();
    let days = diff_ms / 86_400_000;
    let hours = (diff_ms / 3_600_000) % 24;
    let minutes = (diff_ms / 60_000) % 60;

    Countdown {
        text: format!("{days}D {hours:02}H {minutes:02}M"),
        is_past: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    // -----------------------------------------------------------------------
    // feedback_deadline
    // -----------------------------------------------------------------------

    #[test]
    fn monday_submission_resolves_seven_weekdays_later() {
        // 2024-07-01 is a Monday; 7 weekdays later is Wednesday 2024-07-10.
        let deadline = feedback_deadline(at(2024, 7, 1, 10, 0));
        assert_eq!(deadline, at(2024, 7, 10, 18, 0));
    }

    #[test]
    fn friday_submission_skips_both_weekend_days() {
        // 2024-07-05 is a Friday; the count runs Mon-Fri then Mon-Tue.
        let deadline = feedback_deadline(at(2024, 7, 5, 9, 30));
        assert_eq!(deadline, at(2024, 7, 16, 18, 0));
        assert_eq!(deadline.weekday(), Weekday::Tue);
    }

    #[test]
    fn weekend_submission_counts_from_next_weekdays() {
        // Saturday 2024-07-06: Sunday is skipped, Mon 8th is day 1.
        let deadline = feedback_deadline(at(2024, 7, 6, 23, 59));
        assert_eq!(deadline, at(2024, 7, 17, 18, 0));
    }

    #[test]
    fn deadline_always_lands_on_a_weekday_at_1800() {
        // Sweep a full month of start days at assorted times of day.
        for day in 1..=31 {
            let created = at(2024, 7, day, (day % 24) as u32, 17);
            let deadline = feedback_deadline(created);
            assert!(
                !is_weekend(deadline.weekday()),
                "deadline {deadline} for {created} fell on a weekend"
            );
            assert_eq!(deadline.time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        }
    }

    #[test]
    fn submission_time_of_day_does_not_shift_the_date() {
        let morning = feedback_deadline(at(2024, 7, 1, 0, 1));
        let night = feedback_deadline(at(2024, 7, 1, 23, 59));
        assert_eq!(morning, night);
    }

    #[test]
    fn year_boundary_is_handled() {
        // Tuesday 2024-12-31 -> 7 weekdays into January.
        let deadline = feedback_deadline(at(2024, 12, 31, 12, 0));
        assert_eq!(deadline, at(2025, 1, 9, 18, 0));
    }

    // -----------------------------------------------------------------------
    // countdown
    // -----------------------------------------------------------------------

    #[test]
    fn countdown_formats_days_hours_minutes() {
        let deadline = at(2024, 7, 10, 18, 0);
        let now = at(2024, 7, 8, 15, 30);
        let c = countdown(deadline, now);
        assert_eq!(c.text, "2D 02H 30M");
        assert!(!c.is_past);
    }

    #[test]
    fn countdown_zero_pads_hours_and_minutes() {
        let deadline = at(2024, 7, 10, 18, 0);
        let now = at(2024, 7, 10, 17, 55);
        let c = countdown(deadline, now);
        assert_eq!(c.text, "0D 00H 05M");
    }

    #[test]
    fn countdown_truncates_partial_minutes() {
        let deadline = at(2024, 7, 10, 18, 0);
        let now = deadline - Duration::seconds(90);
        // 90s truncates to 1 minute, not 2.
        assert_eq!(countdown(deadline, now).text, "0D 00H 01M");
    }

    #[test]
    fn not_past_one_millisecond_before_deadline() {
        let deadline = at(2024, 7, 10, 18, 0);
        let c = countdown(deadline, deadline - Duration::milliseconds(1));
        assert!(!c.is_past);
        assert_eq!(c.text, "0D 00H 00M");
    }

    #[test]
    fn not_past_exactly_at_deadline() {
        let deadline = at(2024, 7, 10, 18, 0);
        let c = countdown(deadline, deadline);
        assert!(!c.is_past);
    }

    #[test]
    fn past_one_millisecond_after_deadline() {
        let deadline = at(2024, 7, 10, 18, 0);
        let c = countdown(deadline, deadline + Duration::milliseconds(1));
        assert!(c.is_past);
        assert_eq!(c.text, DEADLINE_EXPIRED_TEXT);
    }
}
