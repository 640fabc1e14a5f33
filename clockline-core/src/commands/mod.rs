//! Command table and shared argument parsing.
//!
//! Each command lives in its own module with a single `run` entry point.
//! `register_all` builds the table the dispatcher searches; first match
//! wins, so the two help spellings simply appear as two entries sharing
//! one handler.

pub mod add;
pub mod date;
pub mod epoch;
pub mod help;
pub mod i2cscan;
pub mod reset;
pub mod sync;
pub mod time;
pub mod version;

use crate::compat::{format, Vec};
use crate::console::Console;
use crate::error::ConsoleError;

/// A command handler. Arguments come from the console's current line via
/// `arg()`/`argc()`; anything the handler prints goes through the console's
/// output sink.
pub type CommandFn = fn(&mut Console) -> Result<(), ConsoleError>;

#[derive(Clone, Copy)]
pub struct CommandEntry {
    pub name: &'static str,
    /// One-line usage text shown by `help`.
    pub description: &'static str,
    /// Minimum word count for the line, command word included.
    pub min_args: usize,
    pub handler: CommandFn,
}

/// Build the full command table.
pub fn register_all() -> Vec<CommandEntry> {
    let mut table = Vec::new();

    table.push(CommandEntry {
        name: "?",
        description: "display available commands",
        min_args: 1,
        handler: help::run,
    });
    table.push(CommandEntry {
        name: "help",
        description: "display available commands",
        min_args: 1,
        handler: help::run,
    });
    table.push(CommandEntry {
        name: "add",
        description: "add <number> <number>",
        min_args: 3,
        handler: add::run,
    });
    table.push(CommandEntry {
        name: "version",
        description: "display firmware version",
        min_args: 1,
        handler: version::run,
    });
    table.push(CommandEntry {
        name: "time",
        description: "time <hh mm ss> to set, no params to read",
        min_args: 1,
        handler: time::run,
    });
    table.push(CommandEntry {
        name: "date",
        description: "date <day month year> to set, no params to read",
        min_args: 1,
        handler: date::run,
    });
    table.push(CommandEntry {
        name: "epoch",
        description: "display the RTC time as epoch seconds",
        min_args: 1,
        handler: epoch::run,
    });
    table.push(CommandEntry {
        name: "sync",
        description: "set the RTC from the platform clock",
        min_args: 1,
        handler: sync::run,
    });
    table.push(CommandEntry {
        name: "i2cscan",
        description: "scan the I2C bus for devices",
        min_args: 1,
        handler: i2cscan::run,
    });
    table.push(CommandEntry {
        name: "reset",
        description: "restart the processor",
        min_args: 1,
        handler: reset::run,
    });

    table
}

/// Parse a decimal field and range-check it. `what` names the field in the
/// error message.
pub(crate) fn parse_field(
    s: &str,
    min: u32,
    max: u32,
    what: &str,
) -> Result<u32, ConsoleError> {
    let value: u32 = s
        .parse()
        .map_err(|_| ConsoleError::BadArgument(format!("{} \"{}\" is not a number", what, s)))?;
    if value < min || value > max {
        return Err(ConsoleError::BadArgument(format!(
            "{} {} out of range ({}-{})",
            what, value, min, max
        )));
    }
    Ok(value)
}
