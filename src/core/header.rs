//! Line header rendering
//!
//! Writes the `<date> <time> <file>:<line>: ` annotations selected by
//! [`Flags`] into the line buffer ahead of the sink prefix.

use super::flags::Flags;
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;
use std::panic::Location;

/// Append the header for `flags` using the current clock
pub(crate) fn write_header(buf: &mut String, flags: Flags, location: &Location<'_>) {
    if flags.has_timestamp() {
        if flags.contains(Flags::UTC) {
            write_timestamp(buf, flags, &Utc::now());
        } else {
            write_timestamp(buf, flags, &Local::now());
        }
    }

    if flags.has_location() {
        write_location(buf, flags, location.file(), location.line());
    }
}

/// Append `YYYY/MM/DD ` and/or `HH:MM:SS[.uuuuuu] `
pub(crate) fn write_timestamp<Tz>(buf: &mut String, flags: Flags, now: &DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if flags.contains(Flags::DATE) {
        buf.push_str(&now.format("%Y/%m/%d ").to_string());
    }

    if flags.contains(Flags::MICROSECONDS) {
        buf.push_str(&now.format("%H:%M:%S%.6f ").to_string());
    } else if flags.contains(Flags::TIME) {
        buf.push_str(&now.format("%H:%M:%S ").to_string());
    }
}

/// Append `file:line: `, shortening the path when requested
pub(crate) fn write_location(buf: &mut String, flags: Flags, file: &str, line: u32) {
    let file = if flags.contains(Flags::SHORT_FILE) {
        short_file(file)
    } else {
        file
    };

    buf.push_str(file);
    buf.push(':');
    buf.push_str(&line.to_string());
    buf.push_str(": ");
}

fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
