//! `time`: read or set the RTC time of day.
//!
//! With no parameters, reads the chip and prints `HH:MM:SS`. With three,
//! sets hours/minutes/seconds while keeping the date the chip already
//! holds, so `time` and `date` can be issued in either order.

use crate::commands::parse_field;
use crate::compat::format;
use crate::console::Console;
use crate::error::ConsoleError;

pub fn run(console: &mut Console) -> Result<(), ConsoleError> {
    if console.argc() == 1 {
        let mut dt = console.last_time();
        console.rtc_read(&mut dt)?;
        console.set_last_time(dt);
        let line = format!("{:02}:{:02}:{:02}", dt.hour, dt.minute, dt.second);
        console.println(&line);
        return Ok(());
    }

    if console.argc() < 4 {
        return Err(ConsoleError::BadArgument(
            "usage: time <hh mm ss>".into(),
        ));
    }

    let hour = parse_field(console.arg(1), 0, 23, "hours")? as u8;
    let minute = parse_field(console.arg(2), 0, 59, "minutes")? as u8;
    let second = parse_field(console.arg(3), 0, 59, "seconds")? as u8;

    // Fetch the current date so the write does not clobber it.
    let mut dt = console.last_time();
    console.rtc_read(&mut dt)?;
    dt.hour = hour;
    dt.minute = minute;
    dt.second = second;
    console.rtc_write(&dt)?;
    console.set_last_time(dt);
    Ok(())
}
