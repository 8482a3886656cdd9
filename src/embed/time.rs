use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;

/// Check-in date for a stay covering an event that starts at `date_from`.
///
/// A local start before noon needs the previous night's lodging, so the
/// check-in moves one day back.
pub fn check_in_date(date_from: DateTime<Utc>, tz: Tz) -> NaiveDate {
    let df = date_from.with_timezone(&tz);
    if df.hour() < 12 {
        (df - Duration::days(1)).date_naive()
    } else {
        df.date_naive()
    }
}

/// Check-out date for a stay ending with `latest_end`.
///
/// The stay covers at least the night after the start, and a local end
/// after noon adds one more night.
pub fn check_out_date(date_from: DateTime<Utc>, latest_end: DateTime<Utc>, tz: Tz) -> NaiveDate {
    let df = date_from.with_timezone(&tz);
    let end = (df + Duration::days(1)).max(latest_end.with_timezone(&tz));
    if end.hour() > 12 {
        (end + Duration::days(1)).date_naive()
    } else {
        end.date_naive()
    }
}
