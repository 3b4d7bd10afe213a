//! Schedule calculator behavior: rotation parity, timezone handling,
//! collection-day selection, and the holiday shift policy.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Australia::Melbourne;
use wattle_core::model::{BinType, HolidaySet, ScheduleMode};
use wattle_core::schedule::{
    ScheduleConfig, ScheduleError, WeekStartDay, bin_type_for_week, compute_schedule, normalize,
    week_index,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// An instant whose Melbourne wall-clock time is the given civil time.
fn melbourne(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Melbourne
        .with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("unambiguous Melbourne local time")
        .with_timezone(&Utc)
}

fn holidays(dates: &[NaiveDate]) -> HolidaySet {
    dates.iter().copied().collect()
}

#[test]
fn bin_type_alternates_every_week() {
    for week in 0..20 {
        assert_ne!(
            bin_type_for_week(week),
            bin_type_for_week(week + 1),
            "weeks {week} and {} must not repeat a bin",
            week + 1
        );
        assert_eq!(
            bin_type_for_week(week),
            bin_type_for_week(week + 2),
            "weeks {week} and {} must share a bin",
            week + 2
        );
    }
}

#[test]
fn epoch_week_is_an_organic_week() {
    let config = ScheduleConfig::default();
    assert_eq!(week_index(config.epoch, config.epoch, config.week_start), 0);
    assert_eq!(bin_type_for_week(0), BinType::Organic);
}

#[test]
fn week_index_uses_monday_week_boundaries() {
    let epoch = date(2026, 1, 1);
    // Thursday epoch: its week runs 2025-12-29 ..= 2026-01-04.
    for day in 1..=4 {
        assert_eq!(
            week_index(date(2026, 1, day), epoch, WeekStartDay::Monday),
            0,
            "2026-01-0{day} is still in the epoch week"
        );
    }
    assert_eq!(week_index(date(2026, 1, 5), epoch, WeekStartDay::Monday), 1);
    assert_eq!(week_index(date(2026, 1, 11), epoch, WeekStartDay::Monday), 1);
    assert_eq!(week_index(date(2026, 1, 12), epoch, WeekStartDay::Monday), 2);
}

#[test]
fn week_index_is_monotone_over_advancing_dates() {
    let epoch = date(2026, 1, 1);
    let mut previous = week_index(date(2026, 1, 1), epoch, WeekStartDay::Monday);
    let mut day = date(2026, 1, 1);
    for _ in 0..60 {
        day += Duration::days(1);
        let index = week_index(day, epoch, WeekStartDay::Monday);
        assert!(index >= previous, "week index regressed at {day}");
        previous = index;
    }
}

#[test]
fn upcoming_schedule_for_the_documented_monday() {
    // 2026-01-05 is a Monday in rotation week 1.
    let result = compute_schedule(
        melbourne(2026, 1, 5, 9),
        &HolidaySet::new(),
        ScheduleMode::Upcoming,
        &ScheduleConfig::default(),
    )
    .expect("schedule computes");

    assert_eq!(result.bin_type, BinType::Recyclable);
    assert_eq!(result.collection_day, date(2026, 1, 7));
    assert!(!result.is_holiday_affected);
    assert_eq!(result.holiday_message, None);
}

#[test]
fn holiday_on_collection_day_shifts_by_one_day() {
    let result = compute_schedule(
        melbourne(2026, 1, 5, 9),
        &holidays(&[date(2026, 1, 7)]),
        ScheduleMode::Upcoming,
        &ScheduleConfig::default(),
    )
    .expect("schedule computes");

    assert_eq!(result.collection_day, date(2026, 1, 8));
    assert!(result.is_holiday_affected);
    assert!(
        result.holiday_message.is_some(),
        "a shifted schedule carries a message"
    );
}

#[test]
fn holiday_shift_is_single_step() {
    // Wednesday and Thursday both holidays: only one shift is applied.
    let result = compute_schedule(
        melbourne(2026, 1, 5, 9),
        &holidays(&[date(2026, 1, 7), date(2026, 1, 8)]),
        ScheduleMode::Upcoming,
        &ScheduleConfig::default(),
    )
    .expect("schedule computes");

    assert_eq!(result.collection_day, date(2026, 1, 8));
    assert!(result.is_holiday_affected);
}

#[test]
fn pre_epoch_dates_fall_back_to_organic() {
    // 2025-06-01 is a Sunday well before the rotation epoch.
    let result = compute_schedule(
        melbourne(2025, 6, 1, 9),
        &HolidaySet::new(),
        ScheduleMode::Upcoming,
        &ScheduleConfig::default(),
    )
    .expect("schedule computes");

    assert_eq!(result.bin_type, BinType::Organic);
    assert_eq!(result.collection_day, date(2025, 6, 4));
    assert!(!result.is_holiday_affected);
}

#[test]
fn pre_epoch_fallback_ignores_holidays() {
    let result = compute_schedule(
        melbourne(2025, 6, 1, 9),
        &holidays(&[date(2025, 6, 4)]),
        ScheduleMode::Upcoming,
        &ScheduleConfig::default(),
    )
    .expect("schedule computes");

    assert_eq!(result.collection_day, date(2025, 6, 4));
    assert!(!result.is_holiday_affected);
}

#[test]
fn upcoming_collection_day_is_strictly_future() {
    let config = ScheduleConfig::default();
    // Sweep a month of query days, including collection Wednesdays.
    for offset in 0..31 {
        let now = melbourne(2026, 1, 1, 12) + Duration::days(offset);
        let result = compute_schedule(now, &HolidaySet::new(), ScheduleMode::Upcoming, &config)
            .expect("schedule computes");
        let civil_now = normalize(now, &config).expect("normalizes").date();
        assert!(
            result.collection_day > civil_now,
            "collection {} not after query date {civil_now}",
            result.collection_day
        );
    }
}

#[test]
fn collection_day_on_a_wednesday_rolls_to_next_week() {
    // Query on the collection Wednesday itself.
    let result = compute_schedule(
        melbourne(2026, 1, 7, 9),
        &HolidaySet::new(),
        ScheduleMode::Upcoming,
        &ScheduleConfig::default(),
    )
    .expect("schedule computes");

    assert_eq!(result.collection_day, date(2026, 1, 14));
}

#[test]
fn current_week_mode_allows_a_past_collection_day() {
    // Friday 2026-01-09: this week's Wednesday already passed.
    let result = compute_schedule(
        melbourne(2026, 1, 9, 9),
        &HolidaySet::new(),
        ScheduleMode::CurrentWeek,
        &ScheduleConfig::default(),
    )
    .expect("schedule computes");

    assert_eq!(result.collection_day, date(2026, 1, 7));
}

#[test]
fn current_week_collection_day_stays_in_the_week() {
    let config = ScheduleConfig::default();
    for offset in 0..31 {
        let now = melbourne(2026, 1, 1, 12) + Duration::days(offset);
        let result = compute_schedule(now, &HolidaySet::new(), ScheduleMode::CurrentWeek, &config)
            .expect("schedule computes");
        let civil_now = normalize(now, &config).expect("normalizes").date();
        let week_start = civil_now
            - Duration::days(i64::from(civil_now.weekday().num_days_from_monday()));
        assert!(
            result.collection_day >= week_start
                && result.collection_day <= week_start + Duration::days(6),
            "collection {} outside week of {civil_now}",
            result.collection_day
        );
    }
}

#[test]
fn identical_inputs_yield_identical_results() {
    let now = melbourne(2026, 2, 3, 18);
    let set = holidays(&[date(2026, 2, 4)]);
    let config = ScheduleConfig::default();

    let first = compute_schedule(now, &set, ScheduleMode::Upcoming, &config).expect("computes");
    let second = compute_schedule(now, &set, ScheduleMode::Upcoming, &config).expect("computes");
    assert_eq!(first, second);
}

#[test]
fn normalization_crosses_the_date_line() {
    // 14:00 UTC on Tuesday 2026-01-06 is already 01:00 Wednesday in
    // Melbourne (AEDT, UTC+11), so the upcoming collection rolls a week.
    let now = Utc
        .with_ymd_and_hms(2026, 1, 6, 14, 0, 0)
        .single()
        .expect("valid UTC instant");
    let config = ScheduleConfig::default();

    let civil = normalize(now, &config).expect("normalizes");
    assert_eq!(civil.date(), date(2026, 1, 7));

    let result = compute_schedule(now, &HolidaySet::new(), ScheduleMode::Upcoming, &config)
        .expect("schedule computes");
    assert_eq!(result.collection_day, date(2026, 1, 14));
}

#[test]
fn unknown_timezone_is_fatal() {
    let config = ScheduleConfig {
        timezone: String::from("Mars/Olympus_Mons"),
        ..ScheduleConfig::default()
    };
    let result = compute_schedule(
        melbourne(2026, 1, 5, 9),
        &HolidaySet::new(),
        ScheduleMode::Upcoming,
        &config,
    );
    assert!(matches!(
        result,
        Err(ScheduleError::UnknownTimezone(name)) if name == "Mars/Olympus_Mons"
    ));
}

#[test]
fn collection_weekday_is_wednesday() {
    let config = ScheduleConfig::default();
    assert_eq!(config.collection_weekday, Weekday::Wed);
    assert_eq!(config.epoch.weekday(), Weekday::Thu);
}
