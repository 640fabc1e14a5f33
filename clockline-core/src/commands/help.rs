//! `help` / `?`: list every command with its usage text.

use crate::compat::Vec;
use crate::console::Console;
use crate::error::ConsoleError;

/// Column the usage text starts in; short names are padded out to here so
/// the listing lines up.
const COMMENT_START_COL: usize = 12;

pub fn run(console: &mut Console) -> Result<(), ConsoleError> {
    // Copy the name/description pairs out first; printing needs the
    // console mutably.
    let rows: Vec<(&'static str, &'static str)> = console
        .commands()
        .iter()
        .map(|e| (e.name, e.description))
        .collect();

    for (name, description) in rows {
        console.print(name);
        let pad = COMMENT_START_COL.saturating_sub(name.len()).max(1);
        for _ in 0..pad {
            console.print(" ");
        }
        console.println(description);
    }
    Ok(())
}
