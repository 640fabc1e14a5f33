//! `date`: read or set the RTC calendar date.
//!
//! With no parameters, reads the chip and prints the date plus weekday.
//! With three (`day month year`), sets the date while keeping the time of
//! day. Years are accepted either as two digits (0-99) or as full values
//! in the 2000-2099 window.

use crate::commands::parse_field;
use crate::compat::format;
use crate::console::Console;
use crate::error::ConsoleError;

pub fn run(console: &mut Console) -> Result<(), ConsoleError> {
    if console.argc() == 1 {
        let mut dt = console.last_time();
        console.rtc_read(&mut dt)?;
        console.set_last_time(dt);
        let line = format!(
            "{:04}-{:02}-{:02} ({})",
            dt.year(),
            dt.month,
            dt.day,
            dt.weekday_name()
        );
        console.println(&line);
        return Ok(());
    }

    if console.argc() < 4 {
        return Err(ConsoleError::BadArgument(
            "usage: date <day month year>".into(),
        ));
    }

    let day = parse_field(console.arg(1), 1, 31, "day")? as u8;
    let month = parse_field(console.arg(2), 1, 12, "month")? as u8;
    let year_raw = parse_field(console.arg(3), 0, 2099, "year")?;
    let years_since_2000 = match year_raw {
        0..=99 => year_raw as u8,
        2000..=2099 => (year_raw - 2000) as u8,
        _ => {
            return Err(ConsoleError::BadArgument(format!(
                "year {} out of range (0-99 or 2000-2099)",
                year_raw
            )))
        }
    };

    // Fetch the current time of day so the write does not clobber it.
    let mut dt = console.last_time();
    console.rtc_read(&mut dt)?;
    dt.day = day;
    dt.month = month;
    dt.years_since_2000 = years_since_2000;
    console.rtc_write(&dt)?;
    console.set_last_time(dt);
    Ok(())
}
