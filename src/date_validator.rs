use crate::{
    clock::Clock,
    error::{AvailabilityError, InvalidDate},
    types::ValidDate,
};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `YYYY`, `YYYY-M[M]` and `YYYY-M[M]-D[D]`
    static ref CALENDAR_DATE: Regex =
        Regex::new(r"^(\d{4})(?:-(\d{1,2})(?:-(\d{1,2}))?)?$").unwrap();
}

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Validates a caller supplied date against the `YYYY-MM-DD` format.
///
/// The past-date check runs on anything that reads as an instant before the
/// structural checks do, so a past date in a sloppy shape is reported as past.
pub fn validate<C: Clock>(input: Option<&str>, clock: &C) -> Result<ValidDate, AvailabilityError> {
    let input = match input {
        Some(input) if !input.is_empty() => input,
        _ => return Err(AvailabilityError::Missing),
    };

    if let Some(instant) = parse_instant(input) {
        if instant < clock.now() {
            return Err(AvailabilityError::PastDate);
        }
    }

    let date = check_structure(input)?;
    Ok(ValidDate::new(input, date))
}

/// Lenient instant parsing. Dates without a time are midnight UTC and days
/// past the end of the month roll over into the next one.
fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Some(datetime.and_utc());
        }
    }

    let captures = CALENDAR_DATE.captures(input)?;
    let year: i32 = captures[1].parse().ok()?;
    let month: u32 = captures.get(2).map_or(Some(1), |m| m.as_str().parse().ok())?;
    let day: u32 = captures.get(3).map_or(Some(1), |d| d.as_str().parse().ok())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day - 1)))?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

fn check_structure(input: &str) -> Result<NaiveDate, InvalidDate> {
    let mut segments = input.split('-');
    let (year, month, day) = match (segments.next(), segments.next(), segments.next()) {
        (Some(year), Some(month), Some(day))
            if !year.is_empty() && !month.is_empty() && !day.is_empty() =>
        {
            (year, month, day)
        }
        _ => return Err(InvalidDate::Incomplete),
    };

    let year = parse_digits(year, 4).ok_or(InvalidDate::Year)? as i32;
    let month = parse_digits(month, 2)
        .filter(|month| (1..=12).contains(month))
        .ok_or(InvalidDate::Month)?;
    let max = days_in_month(month, year);
    let day = parse_digits(day, 2)
        .filter(|day| (1..=max).contains(day))
        .ok_or(InvalidDate::Day { max })?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(InvalidDate::Format)?;
    if date.format("%Y-%m-%d").to_string() != input {
        return Err(InvalidDate::Format);
    }
    Ok(date)
}

fn parse_digits(segment: &str, width: usize) -> Option<u32> {
    if segment.len() != width || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
