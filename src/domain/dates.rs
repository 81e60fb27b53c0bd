/// Date helpers shared by the store's callers
///
/// The canonical stored date is `YYYY-MM-DD` with no time of day. "Today"
/// comes from the local clock at call time and is never cached.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone};

use crate::domain::DomainError;

/// strftime pattern for the canonical date form
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date on the local clock, formatted
///
/// Two calls straddling midnight return different values.
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

/// Parse a canonical `YYYY-MM-DD` string
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| DomainError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Whether two instants fall on the same calendar day in their timezone
pub fn is_same_day<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Whether a formatted date string is today's date
pub fn is_today(date: &str) -> bool {
    date == today()
}

/// The seven dates of the Sunday-first week containing `date`
pub fn days_in_week(date: NaiveDate) -> [String; 7] {
    days_in_week_starting(date, 0)
}

/// The seven dates of the week containing `date`, where the week begins on
/// `week_starts_on` (0 = Sunday ... 6 = Saturday, taken modulo 7)
pub fn days_in_week_starting(date: NaiveDate, week_starts_on: u8) -> [String; 7] {
    let start_day = u32::from(week_starts_on % 7);
    let offset = (date.weekday().num_days_from_sunday() + 7 - start_day) % 7;
    let start = date - Duration::days(i64::from(offset));

    std::array::from_fn(|i| format_date(start + Duration::days(i as i64)))
}

/// Split an `HH:MM` string into hour and minute
///
/// No range check is done. A missing or non-numeric segment comes back as
/// `None`.
pub fn parse_time(time: &str) -> (Option<u32>, Option<u32>) {
    let mut parts = time.split(':');
    let hour = parts.next().and_then(|p| p.trim().parse().ok());
    let minute = parts.next().and_then(|p| p.trim().parse().ok());
    (hour, minute)
}
