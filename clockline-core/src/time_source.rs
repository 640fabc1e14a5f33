//! Platform-agnostic time source abstraction.
//!
//! The `sync` command sets the DS3231 from an authoritative clock without
//! the core depending on any particular time library. Hosts implement this
//! with the system clock (see [`crate::hardware::linux`]); embedded targets
//! might use NTP or simply not inject one, in which case `sync` reports
//! that no source is available.

use crate::datetime::CalendarTime;

pub trait TimeSource {
    /// Current wall-clock time, already clamped into the 2000-2099 window
    /// the calendar type can represent.
    fn now(&self) -> CalendarTime;
}
