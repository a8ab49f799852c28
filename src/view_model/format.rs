use chrono::{NaiveDate, TimeZone};

use crate::models::Timestamp;

/// `Tue, Oct 7`
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// `09:00 AM`
pub fn format_time_label<Tz: TimeZone>(ts: &Timestamp, tz: &Tz) -> String {
    ts.wall_clock(tz).format("%I:%M %p").to_string()
}

/// `Tue, Oct 7, 09:00 AM`
pub fn format_start_label<Tz: TimeZone>(ts: &Timestamp, tz: &Tz) -> String {
    ts.wall_clock(tz).format("%a, %b %-d, %I:%M %p").to_string()
}
