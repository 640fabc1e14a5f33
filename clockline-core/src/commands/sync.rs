//! `sync`: set the RTC from the platform time source.

use crate::compat::format;
use crate::console::Console;
use crate::error::ConsoleError;

pub fn run(console: &mut Console) -> Result<(), ConsoleError> {
    let now = console.time_source_now()?;
    console.rtc_write(&now)?;
    console.set_last_time(now);

    let line = format!("RTC set to {}", now);
    console.println(&line);
    Ok(())
}
