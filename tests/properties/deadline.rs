//! Property tests for the business-day deadline calculator.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use termo::deadline::{compute_deadline, is_business_day, DeadlineRequest, HolidaySet};

/// Reference oracle: the same skip logic, written independently over raw
/// `(month, day)` pairs rather than a `HolidaySet`.
fn reference_deadline(start: NaiveDate, days: i64, holidays: &[(u32, u32)]) -> NaiveDate {
    let mut date = start;
    let mut counted = 0;
    while counted < days {
        date += Duration::days(1);
        let weekend = date.weekday() == Weekday::Sat || date.weekday() == Weekday::Sun;
        let holiday = holidays.contains(&(date.month(), date.day()));
        if !weekend && !holiday {
            counted += 1;
        }
    }
    date
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // Day capped at 28 so every (year, month, day) triple is a valid date.
    (1990i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_holiday_pairs() -> impl Strategy<Value = Vec<(u32, u32)>> {
    proptest::collection::vec((1u32..=12, 1u32..=28), 0..6)
}

fn holiday_set(pairs: &[(u32, u32)]) -> HolidaySet {
    let mut set = HolidaySet::new();
    for &(month, day) in pairs {
        set.insert(month, day).unwrap();
    }
    set
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Zero business days returns the start date unchanged.
    #[test]
    fn property_zero_days_is_identity(
        start in arb_date(),
        pairs in arb_holiday_pairs(),
    ) {
        let holidays = holiday_set(&pairs);
        let request = DeadlineRequest { start, business_days: 0 };
        prop_assert_eq!(compute_deadline(request, &holidays).unwrap(), start);
    }

    /// PROPERTY: The result is on or after the start, strictly after for n > 0.
    #[test]
    fn property_monotonic_non_decrease(
        start in arb_date(),
        days in 0i64..120,
        pairs in arb_holiday_pairs(),
    ) {
        let holidays = holiday_set(&pairs);
        let request = DeadlineRequest { start, business_days: days };
        let result = compute_deadline(request, &holidays).unwrap();
        prop_assert!(result >= start);
        if days > 0 {
            prop_assert!(result > start);
        }
    }

    /// PROPERTY: The result is never a Saturday, Sunday or configured holiday.
    #[test]
    fn property_result_is_business_day(
        start in arb_date(),
        days in 1i64..120,
        pairs in arb_holiday_pairs(),
    ) {
        let holidays = holiday_set(&pairs);
        let request = DeadlineRequest { start, business_days: days };
        let result = compute_deadline(request, &holidays).unwrap();
        prop_assert!(is_business_day(result, &holidays));
    }

    /// PROPERTY: Exactly n business days lie strictly after the start, up to
    /// and including the result.
    #[test]
    fn property_exact_business_day_count(
        start in arb_date(),
        days in 0i64..120,
        pairs in arb_holiday_pairs(),
    ) {
        let holidays = holiday_set(&pairs);
        let request = DeadlineRequest { start, business_days: days };
        let result = compute_deadline(request, &holidays).unwrap();

        let mut counted = 0;
        let mut date = start;
        while date < result {
            date += Duration::days(1);
            if is_business_day(date, &holidays) {
                counted += 1;
            }
        }
        prop_assert_eq!(counted, days);
    }

    /// PROPERTY: The calculator agrees with the reference oracle.
    #[test]
    fn property_matches_reference_oracle(
        start in arb_date(),
        days in 0i64..120,
        pairs in arb_holiday_pairs(),
    ) {
        let holidays = holiday_set(&pairs);
        let request = DeadlineRequest { start, business_days: days };
        prop_assert_eq!(
            compute_deadline(request, &holidays).unwrap(),
            reference_deadline(start, days, &pairs)
        );
    }

    /// PROPERTY: Negative day counts are always rejected.
    #[test]
    fn property_negative_days_rejected(
        start in arb_date(),
        days in i64::MIN..0,
        pairs in arb_holiday_pairs(),
    ) {
        let holidays = holiday_set(&pairs);
        let request = DeadlineRequest { start, business_days: days };
        prop_assert!(compute_deadline(request, &holidays).is_err());
    }
}

/// The 45-business-day scenario from the paper form, checked against the
/// oracle rather than a hand-picked date.
#[test]
fn test_default_contract_scenario_matches_oracle() {
    let pairs = vec![(1, 1), (1, 25)];
    let holidays = holiday_set(&pairs);
    let start = NaiveDate::from_ymd_opt(2024, 1, 24).unwrap();
    let request = DeadlineRequest {
        start,
        business_days: 45,
    };
    let result = compute_deadline(request, &holidays).unwrap();
    assert_eq!(result, reference_deadline(start, 45, &pairs));
    // Sanity: the contract lands in March 2024 and on a business day.
    assert_eq!((result.year(), result.month()), (2024, 3));
    assert!(is_business_day(result, &holidays));
}
