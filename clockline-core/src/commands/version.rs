//! `version`: report the firmware version and when it was built.
//!
//! The build stamp is the compiler-style `"Jan  5 2024"` / `"09:08:07"`
//! pair, so it doubles as a check of the calendar parsing path: the stamp
//! is decoded back into a calendar value to recover the build weekday.

use crate::compat::format;
use crate::console::Console;
use crate::datetime::CalendarTime;
use crate::error::ConsoleError;

pub fn run(console: &mut Console) -> Result<(), ConsoleError> {
    let build = console.build();
    let dt = CalendarTime::from_build_timestamp(build.date, build.time);
    let line = format!(
        "Ver {}, built {} {} ({})",
        build.version,
        build.date,
        build.time,
        dt.weekday_name()
    );
    console.println(&line);
    Ok(())
}
