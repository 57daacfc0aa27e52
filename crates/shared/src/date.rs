use time::{Date, Duration, Month, OffsetDateTime, macros::format_description};
use time_tz::{ToTimezone, timezones};

use crate::{Error, Result};

/// Current calendar date in the given IANA timezone
///
/// Unknown timezone names fall back to UTC.
pub fn today(tz: impl Into<String>) -> Date {
    let tz = tz.into();
    let mut now = OffsetDateTime::now_utc();

    if let Some(tz) = timezones::get_by_name(&tz) {
        now = now.to_timezone(tz);
    }

    now.date()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Ok(Date::parse(value.trim(), &format)?)
}

/// Parse a `YYYY-MM` month
pub fn parse_month(value: &str) -> Result<(i32, Month)> {
    let Some((year, month)) = value.trim().split_once('-') else {
        crate::invalid!("invalid month `{}`, expected YYYY-MM", value);
    };

    let year = year
        .parse::<i32>()
        .map_err(|_| Error::Validate(format!("invalid year in `{value}`")))?;
    let month = month
        .parse::<u8>()
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| Error::Validate(format!("invalid month in `{value}`")))?;

    Ok((year, month))
}

/// Whole days elapsed from `from` to `to`, negative when `from` is later
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).whole_days()
}

/// First and last day of a month
pub fn month_bounds(year: i32, month: Month) -> Result<(Date, Date)> {
    let first = Date::from_calendar_date(year, month, 1)
        .map_err(|e| Error::Validate(e.to_string()))?;
    let last = Date::from_calendar_date(year, month, time::util::days_in_year_month(year, month))
        .map_err(|e| Error::Validate(e.to_string()))?;

    Ok((first, last))
}

/// Date `days` before `date`, saturating at the minimum representable date
pub fn days_before(date: Date, days: u32) -> Date {
    date.checked_sub(Duration::days(days as i64))
        .unwrap_or(Date::MIN)
}
