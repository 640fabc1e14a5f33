//! Calendar and epoch time conversion, valid for 2000-2099.
//!
//! The DS3231 keeps its year as an offset from 2000, so every conversion
//! here works in that window. Leap years are every 4th year with no century
//! exception, which is exact between 2000 and 2099. All values are naive
//! wall-clock time: no timezone, no DST.

use crate::compat::fmt;

/// Seconds between 1970-01-01 00:00:00 and 2000-01-01 00:00:00.
pub const SECONDS_FROM_1970_TO_2000: u32 = 946_684_800;

/// Days in each month, January to November. December is omitted: the month
/// loops below stop before 12, so its length is never consulted.
const DAYS_IN_MONTH: [u8; 11] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30];

/// Weekday names indexed by [`CalendarTime::day_of_week`] (0 = Sunday).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A calendar date and time in the 2000-2099 window.
///
/// Matches the DS3231's register set: the year is stored as an offset from
/// 2000, month and day are 1-based, the time fields are 0-based. After any
/// conversion all fields are within those ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTime {
    /// Years since 2000, 0-99.
    pub years_since_2000: u8,
    /// Month, 1-12.
    pub month: u8,
    /// Day of month, 1-31.
    pub day: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl Default for CalendarTime {
    /// The earliest representable instant, 2000-01-01 00:00:00.
    fn default() -> Self {
        CalendarTime {
            years_since_2000: 0,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }
}

/// Number of days between 2000-01-01 and the given date (that day counts
/// as 1 is cancelled by the trailing `- 1`, so 2000-01-01 maps to 0).
fn days_since_2000(years_since_2000: u8, month: u8, day: u8) -> u16 {
    let mut days = day as u16;
    for m in 1..month {
        days += DAYS_IN_MONTH[(m - 1) as usize] as u16;
    }
    if month > 2 && years_since_2000 % 4 == 0 {
        days += 1; // leap day already passed this year
    }
    let y = years_since_2000 as u16;
    days + 365 * y + (y + 3) / 4 - 1
}

/// Collapse a day count plus time-of-day into total seconds.
fn days_to_seconds(days: u16, hour: u8, minute: u8, second: u8) -> u32 {
    ((days as u32 * 24 + hour as u32) * 60 + minute as u32) * 60 + second as u32
}

impl CalendarTime {
    /// Build a calendar time from Unix epoch seconds.
    ///
    /// The caller must pass a value of at least [`SECONDS_FROM_1970_TO_2000`]
    /// (i.e. a date on or after 2000-01-01); smaller values wrap silently
    /// and produce a nonsense date rather than an error.
    pub fn from_unix(unix_seconds: u32) -> CalendarTime {
        let mut t = unix_seconds.wrapping_sub(SECONDS_FROM_1970_TO_2000);

        let second = (t % 60) as u8;
        t /= 60;
        let minute = (t % 60) as u8;
        t /= 60;
        let hour = (t % 24) as u8;
        let mut days = (t / 24) as u16;

        // Walk forward a year at a time, peeling off 365 or 366 days.
        let mut years_since_2000: u8 = 0;
        let mut leap;
        loop {
            leap = years_since_2000 % 4 == 0;
            if days < 365 + leap as u16 {
                break;
            }
            days -= 365 + leap as u16;
            years_since_2000 += 1;
        }

        // Then a month at a time. December needs no table entry: if the
        // loop reaches month 12, whatever days remain belong to it.
        let mut month: u8 = 1;
        while month < 12 {
            let mut days_per_month = DAYS_IN_MONTH[(month - 1) as usize] as u16;
            if leap && month == 2 {
                days_per_month += 1;
            }
            if days < days_per_month {
                break;
            }
            days -= days_per_month;
            month += 1;
        }

        CalendarTime {
            years_since_2000,
            month,
            day: (days + 1) as u8,
            hour,
            minute,
            second,
        }
    }

    /// Seconds since 2000-01-01 00:00:00, the DS3231's native time base.
    pub fn seconds_since_2000(&self) -> u32 {
        let days = days_since_2000(self.years_since_2000, self.month, self.day);
        days_to_seconds(days, self.hour, self.minute, self.second)
    }

    /// Unix epoch seconds.
    pub fn to_unix(&self) -> u32 {
        self.seconds_since_2000() + SECONDS_FROM_1970_TO_2000
    }

    /// Day of the week, 0 (Sunday) through 6 (Saturday).
    ///
    /// 2000-01-01 was a Saturday, hence the fixed offset of 6.
    pub fn day_of_week(&self) -> u8 {
        let days = days_since_2000(self.years_since_2000, self.month, self.day);
        ((days + 6) % 7) as u8
    }

    /// English name for [`day_of_week`](Self::day_of_week).
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.day_of_week() as usize]
    }

    /// Absolute year, for display.
    pub fn year(&self) -> u16 {
        2000 + self.years_since_2000 as u16
    }

    /// Parse the compiler's `__DATE__` / `__TIME__` style build stamp,
    /// e.g. `"Jan  5 2024"` and `"09:08:07"` (day single-space padded).
    ///
    /// Both strings must be exactly in that fixed format. Digits are read
    /// positionally with no validation, so malformed input yields garbage
    /// numbers rather than an error.
    pub fn from_build_timestamp(date: &str, time: &str) -> CalendarTime {
        let d = date.as_bytes();
        let t = time.as_bytes();

        // Jan Feb Mar Apr May Jun Jul Aug Sep Oct Nov Dec -- the first
        // letter narrows it down, the second or third settles ties.
        let month = match d[0] {
            b'J' => {
                if d[1] == b'a' {
                    1
                } else if d[2] == b'n' {
                    6
                } else {
                    7
                }
            }
            b'F' => 2,
            b'A' => {
                if d[2] == b'r' {
                    4
                } else {
                    8
                }
            }
            b'M' => {
                if d[2] == b'r' {
                    3
                } else {
                    5
                }
            }
            b'S' => 9,
            b'O' => 10,
            b'N' => 11,
            b'D' => 12,
            _ => 0,
        };

        CalendarTime {
            years_since_2000: two_digits(&d[9..]),
            month,
            day: two_digits(&d[4..]),
            hour: two_digits(t),
            minute: two_digits(&t[3..]),
            second: two_digits(&t[6..]),
        }
    }
}

/// Fixed-width two-character decimal parse. A non-digit first character
/// counts as zero (handles the space-padded day in `__DATE__`); the second
/// character is assumed to be a digit.
fn two_digits(s: &[u8]) -> u8 {
    let tens = if s[0].is_ascii_digit() { s[0] - b'0' } else { 0 };
    (10 * tens).wrapping_add(s[1].wrapping_sub(b'0'))
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}
