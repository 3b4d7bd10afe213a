//! Bin collection schedule calculation.
//!
//! Everything in this module is a pure function of its explicit inputs plus
//! the process-wide [`ScheduleConfig`] constants. The calculation pipeline is
//! timezone normalization → week indexing → rotation parity → collection-day
//! selection → holiday shift.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc, Weekday};
use chrono_tz::Tz;

use crate::model::{BinScheduleInfo, BinType, HolidaySet, ScheduleMode};

/// IANA timezone all civil dates are computed in.
pub const MELBOURNE_TZ: &str = "Australia/Melbourne";

/// Civil date of rotation week 0, a green-bin week. 2026-01-01 is a Thursday.
const ROTATION_EPOCH: (i32, u32, u32) = (2026, 1, 1);

/// Nominal collection day.
const COLLECTION_WEEKDAY: Weekday = Weekday::Wed;

/// Note attached to a schedule whose collection day collided with a holiday.
const HOLIDAY_SHIFT_MESSAGE: &str = "Collection day shifted by one day due to a public holiday";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which day begins a week for the rotation index.
pub enum WeekStartDay {
    /// ISO 8601 convention (Monday is day 0 of the week).
    #[default]
    Monday,
    /// US/AU calendar convention (Sunday is day 0 of the week).
    Sunday,
}

#[derive(Debug, Clone)]
/// Process-wide schedule constants.
///
/// The rotation convention is: weeks start on Monday, the week index is
/// zero-based from the week containing [`ROTATION_EPOCH`], and even indices
/// map to the organic bin. [`bin_type_for_week`] must stay consistent with
/// [`week_index`]'s counting.
pub struct ScheduleConfig {
    /// IANA name of the civil timezone.
    pub timezone: String,
    /// Civil date anchoring rotation week 0.
    pub epoch: NaiveDate,
    /// Weekday the bins are collected on.
    pub collection_weekday: Weekday,
    /// Week boundary convention for the rotation index.
    pub week_start: WeekStartDay,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let (year, month, day) = ROTATION_EPOCH;
        Self {
            timezone: MELBOURNE_TZ.to_owned(),
            epoch: NaiveDate::from_ymd_opt(year, month, day)
                .expect("rotation epoch is a valid calendar date"),
            collection_weekday: COLLECTION_WEEKDAY,
            week_start: WeekStartDay::Monday,
        }
    }
}

#[derive(thiserror::Error, Debug)]
/// Errors raised by the schedule calculation.
pub enum ScheduleError {
    /// The configured timezone name is not in the tz database. Fatal for the
    /// feature: callers must show "schedule unavailable" rather than guess.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Project an absolute instant into the configured zone's wall-clock time.
///
/// # Errors
///
/// Returns [`ScheduleError::UnknownTimezone`] when the configured zone name
/// cannot be resolved.
pub fn normalize(
    instant: DateTime<Utc>,
    config: &ScheduleConfig,
) -> Result<NaiveDateTime, ScheduleError> {
    let tz: Tz = config
        .timezone
        .parse()
        .map_err(|_| ScheduleError::UnknownTimezone(config.timezone.clone()))?;
    Ok(instant.with_timezone(&tz).naive_local())
}

/// How many days `weekday` is past the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> i64 {
    match week_start {
        WeekStartDay::Monday => i64::from(weekday.num_days_from_monday()),
        WeekStartDay::Sunday => i64::from(weekday.num_days_from_sunday()),
    }
}

/// Midnight-anchored start of the week containing `date`.
fn start_of_week(date: NaiveDate, week_start: WeekStartDay) -> NaiveDate {
    date - Duration::days(days_from_week_start(date.weekday(), week_start))
}

/// Number of whole weeks between the week containing `civil_epoch` and the
/// week containing `civil_now`, under the given week-start convention.
///
/// Floor-division semantics: dates before the epoch week produce negative
/// indices. [`compute_schedule`] short-circuits pre-epoch queries before
/// this is consulted for rotation.
#[must_use]
pub fn week_index(civil_now: NaiveDate, civil_epoch: NaiveDate, week_start: WeekStartDay) -> i64 {
    let days = (start_of_week(civil_now, week_start) - start_of_week(civil_epoch, week_start))
        .num_days();
    days.div_euclid(7)
}

/// Bin type for an epoch-aligned week index: even weeks are organic weeks.
#[must_use]
pub fn bin_type_for_week(week_index: i64) -> BinType {
    if week_index.rem_euclid(2) == 0 {
        BinType::Organic
    } else {
        BinType::Recyclable
    }
}

/// Next date strictly after `from` whose weekday equals `target`.
///
/// If `from` itself falls on `target`, the occurrence one week later is
/// returned.
fn next_occurrence(from: NaiveDate, target: Weekday) -> NaiveDate {
    let mut days_until =
        i64::from(target.num_days_from_monday()) - i64::from(from.weekday().num_days_from_monday());
    if days_until <= 0 {
        days_until += 7;
    }
    from + Duration::days(days_until)
}

/// The `target`-weekday date inside the week containing `of`, which may
/// already be in the past relative to `of`.
fn occurrence_in_week(of: NaiveDate, target: Weekday, week_start: WeekStartDay) -> NaiveDate {
    start_of_week(of, week_start) + Duration::days(days_from_week_start(target, week_start))
}

/// Shift a collection day that collides with a public holiday.
///
/// A single one-day shift only: if the shifted day is itself a holiday no
/// second shift is applied.
fn apply_holiday_shift(
    day: NaiveDate,
    holidays: &HolidaySet,
) -> (NaiveDate, bool, Option<String>) {
    if holidays.contains(&day) {
        (
            day + Duration::days(1),
            true,
            Some(HOLIDAY_SHIFT_MESSAGE.to_owned()),
        )
    } else {
        (day, false, None)
    }
}

/// Compute the bin schedule for an absolute instant.
///
/// Pure and deterministic: two calls with identical arguments yield
/// identical results. Dates before the rotation epoch fall back to the
/// organic bin on the next collection weekday, ignoring `holidays`.
///
/// # Errors
///
/// Returns [`ScheduleError::UnknownTimezone`] when the configured zone name
/// cannot be resolved; no other failure modes exist.
pub fn compute_schedule(
    now: DateTime<Utc>,
    holidays: &HolidaySet,
    mode: ScheduleMode,
    config: &ScheduleConfig,
) -> Result<BinScheduleInfo, ScheduleError> {
    let civil_now = normalize(now, config)?.date();

    if civil_now < config.epoch {
        return Ok(BinScheduleInfo {
            bin_type: BinType::Organic,
            collection_day: next_occurrence(civil_now, config.collection_weekday),
            is_holiday_affected: false,
            holiday_message: None,
        });
    }

    let index = week_index(civil_now, config.epoch, config.week_start);
    let bin_type = bin_type_for_week(index);

    let nominal = match mode {
        ScheduleMode::Upcoming => next_occurrence(civil_now, config.collection_weekday),
        ScheduleMode::CurrentWeek => {
            occurrence_in_week(civil_now, config.collection_weekday, config.week_start)
        }
    };

    let (collection_day, is_holiday_affected, holiday_message) =
        apply_holiday_shift(nominal, holidays);

    Ok(BinScheduleInfo {
        bin_type,
        collection_day,
        is_holiday_affected,
        holiday_message,
    })
}
