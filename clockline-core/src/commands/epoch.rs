//! `epoch`: read the RTC and print the time as seconds.

use crate::compat::format;
use crate::console::Console;
use crate::error::ConsoleError;

pub fn run(console: &mut Console) -> Result<(), ConsoleError> {
    let mut dt = console.last_time();
    console.rtc_read(&mut dt)?;
    console.set_last_time(dt);

    let line = format!(
        "unix: {}  (since 2000: {})",
        dt.to_unix(),
        dt.seconds_since_2000()
    );
    console.println(&line);
    Ok(())
}
