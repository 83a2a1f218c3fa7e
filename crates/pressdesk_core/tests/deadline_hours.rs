use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use pressdesk_core::{upcoming_deadline, DeadlineCalculator, Rounding, DEADLINE_WEEKDAY};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("test date should be valid")
        .and_hms_opt(hour, minute, 0)
        .expect("test time should be valid")
}

#[test]
fn deadline_weekday_is_friday() {
    assert_eq!(DEADLINE_WEEKDAY, Weekday::Fri);
}

#[test]
fn exact_boundary_reports_zero() {
    let calculator = DeadlineCalculator::new();
    assert_eq!(calculator.hours_until_deadline(at(2026, 8, 7, 15, 0)), 0);
}

#[test]
fn one_hour_before_reports_one() {
    let calculator = DeadlineCalculator::new();
    assert_eq!(calculator.hours_until_deadline(at(2026, 8, 7, 14, 0)), 1);
}

#[test]
fn one_hour_past_reports_one() {
    // The count is clamped through an absolute value, so an overdue
    // deadline surfaces as remaining hours rather than zero.
    let calculator = DeadlineCalculator::new();
    assert_eq!(calculator.hours_until_deadline(at(2026, 8, 7, 16, 0)), 1);
}

#[test]
fn full_week_span_just_after_deadline_weekday() {
    // Saturday midnight -> next Friday 15:00 is 6 days 15 hours.
    let calculator = DeadlineCalculator::new();
    assert_eq!(calculator.hours_until_deadline(at(2026, 8, 8, 0, 0)), 159);
}

#[test]
fn every_weekday_resolves_to_a_friday_deadline() {
    for day in 1..=31 {
        let now = at(2026, 8, day, 11, 30);
        let deadline = upcoming_deadline(now);
        assert_eq!(deadline.weekday(), Weekday::Fri);
        assert!(deadline.date() >= now.date(), "deadline never resolves backward");
    }
}

#[test]
fn rounding_strategies_differ_only_on_half_hour_ties() {
    let away = DeadlineCalculator::with_rounding(Rounding::HalfAwayFromZero);
    let even = DeadlineCalculator::with_rounding(Rounding::HalfToEven);

    // Friday 12:15 -> 2.75 raw hours; both round to 3.
    assert_eq!(away.hours_until_deadline(at(2026, 8, 7, 12, 15)), 3);
    assert_eq!(even.hours_until_deadline(at(2026, 8, 7, 12, 15)), 3);

    // Friday 13:30 -> 1.5 raw hours; both round to 2.
    assert_eq!(away.hours_until_deadline(at(2026, 8, 7, 13, 30)), 2);
    assert_eq!(even.hours_until_deadline(at(2026, 8, 7, 13, 30)), 2);

    // Friday 14:30 -> 0.5 raw hours; the strategies split.
    assert_eq!(away.hours_until_deadline(at(2026, 8, 7, 14, 30)), 1);
    assert_eq!(even.hours_until_deadline(at(2026, 8, 7, 14, 30)), 0);
}
