//! Console session: line accumulation, dispatch, and collaborator handles.
//!
//! One [`Console`] owns everything the C-era firmware kept in globals: the
//! line buffer, the argument list, the command table and the handles to the
//! bus, time source and reset hook. Input consumption and command execution
//! run strictly sequentially on one thread, so none of this needs locking.

use core::mem;

use crate::commands::{self, CommandEntry};
use crate::compat::{format, Box, String, Vec};
use crate::datetime::CalendarTime;
use crate::ds3231;
use crate::error::ConsoleError;
use crate::output::ConsoleOutput;
use crate::time_source::TimeSource;
use crate::tokenizer::tokenize;
use crate::transport::I2cTransport;

/// Longest accepted input line, including the terminator.
pub const MAX_LINE_LEN: usize = 256;
/// Most words a line can carry; anything beyond is dropped silently.
pub const MAX_WORDS: usize = 10;

const BS: u8 = 0x08;

/// Non-blocking byte intake from the serial link.
pub trait ConsoleInput {
    /// Next pending byte, or `None` when the link is idle.
    fn read_byte(&mut self) -> Option<u8>;
}

/// Processor reset hook.
///
/// `reset` never returns: on hardware it pulls the reset line, on a host it
/// ends the process. From the dispatcher's point of view this is a terminal
/// state - the `reset` command enters `Executing` and the session is over.
pub trait SystemControl {
    fn reset(&mut self) -> !;
}

/// Version and build-stamp strings baked in by the embedding binary.
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Compiler-style date stamp, e.g. `"Jan  5 2024"`.
    pub date: &'static str,
    /// Compiler-style time stamp, e.g. `"09:08:07"`.
    pub time: &'static str,
}

/// Dispatcher state. `Executing` only ever lasts for the synchronous run of
/// one handler; every `process_line` call starts and ends in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Executing,
}

pub struct Console {
    line: String,
    argv: Vec<String>,
    state: SessionState,
    commands: Vec<CommandEntry>,
    output: Box<dyn ConsoleOutput>,
    bus: Option<Box<dyn I2cTransport>>,
    time_source: Option<Box<dyn TimeSource>>,
    system: Option<Box<dyn SystemControl>>,
    build: BuildInfo,
    /// Most recent calendar value read from the RTC. Kept across calls so a
    /// failed read leaves the previous (stale) values visible, matching the
    /// chip adapter's contract.
    last_time: CalendarTime,
}

impl Console {
    /// Build a session with its command table. Collaborators other than the
    /// output are attached separately; commands that need a missing one
    /// report it as a runtime error instead.
    pub fn new(output: Box<dyn ConsoleOutput>, build: BuildInfo) -> Self {
        Console {
            line: String::with_capacity(MAX_LINE_LEN),
            argv: Vec::new(),
            state: SessionState::Idle,
            commands: commands::register_all(),
            output,
            bus: None,
            time_source: None,
            system: None,
            build,
            last_time: CalendarTime::default(),
        }
    }

    pub fn attach_bus(&mut self, bus: Box<dyn I2cTransport>) {
        self.bus = Some(bus);
    }

    pub fn set_time_source(&mut self, source: Box<dyn TimeSource>) {
        self.time_source = Some(source);
    }

    pub fn set_system_control(&mut self, system: Box<dyn SystemControl>) {
        self.system = Some(system);
    }

    /// Startup banner plus the first prompt.
    pub fn greet(&mut self) {
        let banner = format!(
            "clockline {}, {}\nEnter \"help\" or \"?\" for list of commands\n> ",
            self.build.version, self.build.date
        );
        self.print(&banner);
    }

    /// Drain pending input bytes, echoing as we go. Printable characters
    /// accumulate (up to the line capacity - overflow is dropped, not an
    /// error), backspace edits, CR or LF terminates the line and runs it.
    /// Returns as soon as the input has no byte ready.
    pub fn pump(&mut self, input: &mut dyn ConsoleInput) {
        while let Some(c) = input.read_byte() {
            match c {
                b'\r' | b'\n' => {
                    self.print("\n");
                    if !self.line.is_empty() {
                        let line = mem::take(&mut self.line);
                        self.process_line(&line);
                    }
                    self.print("> ");
                }
                BS => {
                    if !self.line.is_empty() {
                        self.line.pop();
                        self.print("\x08 \x08");
                    }
                }
                0x20..=0x7E => {
                    if self.line.len() < MAX_LINE_LEN - 1 {
                        self.line.push(c as char);
                        let _ = self.output.write(&[c]);
                    }
                }
                _ => {} // everything else is ignored
            }
        }
    }

    /// Tokenize and dispatch one complete line.
    ///
    /// Unknown commands and short argument lists are reported on the console
    /// and are not fatal; a handler error is printed as `Error: ...`. An
    /// empty or all-whitespace line does nothing.
    pub fn process_line(&mut self, line: &str) {
        let words = tokenize(line, MAX_WORDS);
        if words.is_empty() {
            return;
        }

        // The argument list is rebuilt fresh for every line; handlers reach
        // it through arg()/argc().
        self.argv.clear();
        for w in &words {
            self.argv.push(String::from(*w));
        }

        let found = self
            .commands
            .iter()
            .find(|e| e.name == self.argv[0])
            .copied();

        let entry = match found {
            Some(entry) => entry,
            None => {
                let msg = format!("Command \"{}\" not found\n", self.argv[0]);
                self.print(&msg);
                return;
            }
        };

        // min_args counts the command word itself.
        if self.argv.len() < entry.min_args {
            let msg = format!(
                "Invalid arg count: {}, expected {}\n",
                self.argv.len() - 1,
                entry.min_args - 1
            );
            self.print(&msg);
            return;
        }

        self.state = SessionState::Executing;
        let result = (entry.handler)(self);
        self.state = SessionState::Idle;

        if let Err(e) = result {
            let msg = format!("Error: {}\n", e);
            self.print(&msg);
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    // ---- helpers for command handlers -------------------------------

    /// Number of words on the current line, command included.
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    /// Word `i` of the current line; index 0 is the command itself.
    /// Dispatch has already enforced `min_args`, so indexes below that are
    /// always present.
    pub fn arg(&self, i: usize) -> &str {
        &self.argv[i]
    }

    pub fn commands(&self) -> &[CommandEntry] {
        &self.commands
    }

    pub fn build(&self) -> BuildInfo {
        self.build
    }

    pub fn last_time(&self) -> CalendarTime {
        self.last_time
    }

    pub fn set_last_time(&mut self, dt: CalendarTime) {
        self.last_time = dt;
    }

    /// Write text to the console; output failures are swallowed (there is
    /// nowhere else to report them).
    pub fn print(&mut self, s: &str) {
        let _ = self.output.write(s.as_bytes());
        let _ = self.output.flush();
    }

    pub fn println(&mut self, s: &str) {
        self.print(s);
        self.print("\n");
    }

    /// Read the RTC time/date registers into `dt`. On failure `dt` keeps
    /// whatever it held before.
    pub fn rtc_read(&mut self, dt: &mut CalendarTime) -> Result<(), ConsoleError> {
        let bus = self.bus.as_mut().ok_or(ConsoleError::NoRtc)?;
        ds3231::read_time(bus.as_mut(), dt)?;
        Ok(())
    }

    /// Write `dt` to the RTC time/date registers.
    pub fn rtc_write(&mut self, dt: &CalendarTime) -> Result<(), ConsoleError> {
        let bus = self.bus.as_mut().ok_or(ConsoleError::NoRtc)?;
        ds3231::write_time(bus.as_mut(), dt)?;
        Ok(())
    }

    /// Probe the bus for a device at `addr`.
    pub fn probe_device(&mut self, addr: u8) -> Result<bool, ConsoleError> {
        let bus = self.bus.as_mut().ok_or(ConsoleError::NoRtc)?;
        Ok(bus.probe(addr))
    }

    /// Current time from the platform time source.
    pub fn time_source_now(&self) -> Result<CalendarTime, ConsoleError> {
        Ok(self
            .time_source
            .as_ref()
            .ok_or(ConsoleError::NoTimeSource)?
            .now())
    }

    /// Hand control to the reset hook. Only returns (with an error) when no
    /// hook is attached; otherwise this is the end of the session.
    pub fn system_reset(&mut self) -> Result<(), ConsoleError> {
        match self.system.as_mut() {
            Some(system) => system.reset(),
            None => Err(ConsoleError::NoSystemControl),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullOutput;

    impl ConsoleOutput for NullOutput {
        fn write(&mut self, _data: &[u8]) -> Result<(), ()> {
            Ok(())
        }
        fn flush(&mut self) -> Result<(), ()> {
            Ok(())
        }
    }

    fn test_console() -> Console {
        Console::new(
            Box::new(NullOutput),
            BuildInfo {
                version: "0.0.0",
                date: "Jan  1 2030",
                time: "00:00:00",
            },
        )
    }

    #[test]
    fn test_table_is_registered_once_at_startup() {
        let console = test_console();
        let names: Vec<&str> = console.commands().iter().map(|e| e.name).collect();
        assert!(names.contains(&"?"));
        assert!(names.contains(&"help"));
        assert!(names.contains(&"time"));
        assert!(names.contains(&"date"));
        assert!(names.contains(&"reset"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut console = test_console();
        // "HELP" must not match "help"; nothing to assert on output here,
        // but the session must come back idle without panicking.
        console.process_line("HELP");
        assert_eq!(console.state(), SessionState::Idle);
    }

    #[test]
    fn test_empty_line_is_a_no_op() {
        let mut console = test_console();
        console.process_line("   \t ");
        assert_eq!(console.argc(), 0);
        assert_eq!(console.state(), SessionState::Idle);
    }
}
