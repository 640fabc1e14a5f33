// Platform-specific TimeSource implementation for Linux/desktop
// Uses chrono to provide local wall-clock time from the system clock

use crate::datetime::CalendarTime;
use crate::time_source::TimeSource;
use chrono::{Datelike, Local, Timelike};

/// Linux/desktop time source using the system clock.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        SystemClock
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> CalendarTime {
        let now = Local::now();

        // The calendar type only spans 2000-2099; clamp rather than wrap
        // if the system clock is wildly off.
        let years_since_2000 = (now.year() - 2000).clamp(0, 99) as u8;

        CalendarTime {
            years_since_2000,
            month: now.month() as u8,
            day: now.day() as u8,
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
        }
    }
}
