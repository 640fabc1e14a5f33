//! End-to-end tests driving the console the way a serial user would:
//! bytes in, text out, with a fake DS3231 on a fake bus.

use std::cell::RefCell;
use std::rc::Rc;

use clockline_core::{
    BuildInfo, CalendarTime, Console, ConsoleInput, ConsoleOutput, I2cTransport, SessionState,
    TimeSource, TransportError,
};

/// Output sink the test can read back after the fact.
#[derive(Clone, Default)]
struct SharedOutput(Rc<RefCell<String>>);

impl SharedOutput {
    fn take(&self) -> String {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

impl ConsoleOutput for SharedOutput {
    fn write(&mut self, data: &[u8]) -> Result<(), ()> {
        self.0
            .borrow_mut()
            .push_str(&String::from_utf8_lossy(data));
        Ok(())
    }
    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

/// Register-file fake of the DS3231: a write sets the register pointer and
/// any following bytes, a read streams from the pointer. It does not tick.
struct FakeBus {
    regs: [u8; 0x13],
    pointer: u8,
    fail: bool,
}

impl FakeBus {
    fn new() -> Self {
        FakeBus {
            regs: [0; 0x13],
            pointer: 0,
            fail: false,
        }
    }
}

impl I2cTransport for FakeBus {
    fn transact(&mut self, addr: u8, write: &[u8], read: &mut [u8]) -> Result<(), TransportError> {
        if self.fail {
            return Err(TransportError::Write);
        }
        if addr != 0x68 {
            return Err(TransportError::Write);
        }
        if let Some((&reg, data)) = write.split_first() {
            self.pointer = reg;
            for (i, &b) in data.iter().enumerate() {
                self.regs[self.pointer as usize + i] = b;
            }
        }
        for (i, slot) in read.iter_mut().enumerate() {
            *slot = self.regs[self.pointer as usize + i];
        }
        Ok(())
    }

    fn probe(&mut self, addr: u8) -> bool {
        !self.fail && addr == 0x68
    }
}

struct FixedClock(CalendarTime);

impl TimeSource for FixedClock {
    fn now(&self) -> CalendarTime {
        self.0
    }
}

/// Byte feeder for pump tests.
struct VecInput(Vec<u8>);

impl VecInput {
    fn new(s: &str) -> Self {
        let mut bytes = s.as_bytes().to_vec();
        bytes.reverse();
        VecInput(bytes)
    }
}

impl ConsoleInput for VecInput {
    fn read_byte(&mut self) -> Option<u8> {
        self.0.pop()
    }
}

fn build_info() -> BuildInfo {
    BuildInfo {
        version: "1.2.3",
        date: "Jan  5 2024",
        time: "09:08:07",
    }
}

fn console_with_rtc() -> (Console, SharedOutput) {
    let out = SharedOutput::default();
    let mut console = Console::new(Box::new(out.clone()), build_info());
    console.attach_bus(Box::new(FakeBus::new()));
    (console, out)
}

#[test]
fn test_help_lists_every_command() {
    let (mut console, out) = console_with_rtc();
    console.process_line("help");
    let text = out.take();
    for name in [
        "?", "help", "add", "version", "time", "date", "epoch", "sync", "i2cscan", "reset",
    ] {
        assert!(text.contains(name), "help output missing {:?}:\n{}", name, text);
    }
}

#[test]
fn test_question_mark_is_an_alias_for_help() {
    let (mut console, out) = console_with_rtc();
    console.process_line("help");
    let help_text = out.take();
    console.process_line("?");
    assert_eq!(out.take(), help_text);
}

#[test]
fn test_unknown_command_message() {
    let (mut console, out) = console_with_rtc();
    console.process_line("bogus 1 2");
    assert_eq!(out.take(), "Command \"bogus\" not found\n");
}

#[test]
fn test_short_arg_list_is_rejected_before_the_handler_runs() {
    let (mut console, out) = console_with_rtc();
    console.process_line("add 5");
    let text = out.take();
    assert_eq!(text, "Invalid arg count: 1, expected 2\n");
}

#[test]
fn test_add_decimal_and_hex() {
    let (mut console, out) = console_with_rtc();
    console.process_line("add 2 3");
    assert_eq!(out.take(), "2 + 3 = 5\n");

    console.process_line("add 0x10 4");
    assert_eq!(out.take(), "16 + 4 = 20\n");

    console.process_line("add -2 7");
    assert_eq!(out.take(), "-2 + 7 = 5\n");
}

#[test]
fn test_add_reports_bad_number() {
    let (mut console, out) = console_with_rtc();
    console.process_line("add two 3");
    let text = out.take();
    assert!(text.starts_with("Error: invalid argument:"), "{}", text);
    assert!(text.contains("two"));
}

#[test]
fn test_version_prints_build_weekday() {
    let (mut console, out) = console_with_rtc();
    console.process_line("version");
    let text = out.take();
    // 2024-01-05 was a Friday.
    assert_eq!(text, "Ver 1.2.3, built Jan  5 2024 09:08:07 (Friday)\n");
}

#[test]
fn test_time_set_then_read_round_trips() {
    let (mut console, out) = console_with_rtc();
    console.process_line("time 13 45 9");
    assert_eq!(out.take(), "");

    console.process_line("time");
    assert_eq!(out.take(), "13:45:09\n");
}

#[test]
fn test_time_rejects_out_of_range_fields() {
    let (mut console, out) = console_with_rtc();
    console.process_line("time 24 0 0");
    let text = out.take();
    assert!(text.contains("hours 24 out of range"), "{}", text);

    console.process_line("time 12 60 0");
    let text = out.take();
    assert!(text.contains("minutes 60 out of range"), "{}", text);
}

#[test]
fn test_date_set_then_read_round_trips() {
    let (mut console, out) = console_with_rtc();
    console.process_line("date 5 1 2024");
    assert_eq!(out.take(), "");

    console.process_line("date");
    assert_eq!(out.take(), "2024-01-05 (Friday)\n");
}

#[test]
fn test_date_accepts_two_digit_years() {
    let (mut console, out) = console_with_rtc();
    console.process_line("date 29 2 24");
    assert_eq!(out.take(), "");
    console.process_line("date");
    assert_eq!(out.take(), "2024-02-29 (Thursday)\n");
}

#[test]
fn test_date_rejects_years_outside_the_window() {
    let (mut console, out) = console_with_rtc();
    console.process_line("date 1 1 1999");
    let text = out.take();
    assert!(text.starts_with("Error: invalid argument:"), "{}", text);
}

#[test]
fn test_time_set_preserves_date_and_vice_versa() {
    let (mut console, out) = console_with_rtc();
    console.process_line("date 31 12 2025");
    console.process_line("time 23 59 58");
    out.take();

    console.process_line("date");
    assert_eq!(out.take(), "2025-12-31 (Wednesday)\n");
    console.process_line("time");
    assert_eq!(out.take(), "23:59:58\n");
}

#[test]
fn test_epoch_at_the_century_origin() {
    let (mut console, out) = console_with_rtc();
    console.process_line("date 1 1 2000");
    console.process_line("time 0 0 0");
    out.take();

    console.process_line("epoch");
    assert_eq!(out.take(), "unix: 946684800  (since 2000: 0)\n");
}

#[test]
fn test_quoted_argument_reaches_the_handler_intact() {
    let (mut console, out) = console_with_rtc();
    // Quotes group; "12 34" is one word, so add sees a non-number.
    console.process_line("add \"12 34\" 1");
    let text = out.take();
    assert!(text.contains("12 34"), "{}", text);
}

#[test]
fn test_session_returns_to_idle_after_each_line() {
    let (mut console, _out) = console_with_rtc();
    console.process_line("add 1 1");
    assert_eq!(console.state(), SessionState::Idle);
    console.process_line("nope");
    assert_eq!(console.state(), SessionState::Idle);
}

#[test]
fn test_pump_echoes_and_executes_on_newline() {
    let (mut console, out) = console_with_rtc();
    let mut input = VecInput::new("add 1 2\r");
    console.pump(&mut input);
    let text = out.take();
    assert!(text.contains("add 1 2"), "echo missing: {}", text);
    assert!(text.contains("1 + 2 = 3"), "result missing: {}", text);
    assert!(text.ends_with("> "), "prompt missing: {}", text);
}

#[test]
fn test_pump_backspace_edits_the_line() {
    let (mut console, out) = console_with_rtc();
    let mut input = VecInput::new("add 1 3\x082\n");
    console.pump(&mut input);
    let text = out.take();
    assert!(text.contains("\x08 \x08"), "rubout sequence missing: {}", text);
    assert!(text.contains("1 + 2 = 3"), "{}", text);
}

#[test]
fn test_pump_blank_line_just_reprompts() {
    let (mut console, out) = console_with_rtc();
    let mut input = VecInput::new("\r\n");
    console.pump(&mut input);
    assert_eq!(out.take(), "\n> \n> ");
}

#[test]
fn test_sync_writes_the_platform_time_to_the_rtc() {
    let (mut console, out) = console_with_rtc();
    let fixed = CalendarTime {
        years_since_2000: 24,
        month: 1,
        day: 5,
        hour: 9,
        minute: 8,
        second: 7,
    };
    console.set_time_source(Box::new(FixedClock(fixed)));

    console.process_line("sync");
    assert_eq!(out.take(), "RTC set to 2024-01-05 09:08:07\n");

    console.process_line("epoch");
    assert_eq!(out.take(), "unix: 1704445687  (since 2000: 757760887)\n");
}

#[test]
fn test_sync_without_a_time_source_reports_it() {
    let (mut console, out) = console_with_rtc();
    console.process_line("sync");
    assert_eq!(out.take(), "Error: no time source available\n");
}

#[test]
fn test_rtc_commands_without_a_bus_report_no_rtc() {
    let out = SharedOutput::default();
    let mut console = Console::new(Box::new(out.clone()), build_info());
    console.process_line("time");
    assert_eq!(out.take(), "Error: no RTC attached\n");
    console.process_line("i2cscan");
    assert_eq!(out.take(), "Error: no RTC attached\n");
}

#[test]
fn test_i2cscan_marks_only_the_rtc_address() {
    let (mut console, out) = console_with_rtc();
    console.process_line("i2cscan");
    let text = out.take();
    assert!(text.contains("68"), "{}", text);
    // 0x67 and 0x69 do not respond.
    assert!(!text.contains("67 "), "{}", text);
    let grid_rows = text.lines().filter(|l| l.contains("--")).count();
    assert_eq!(grid_rows, 8, "{}", text);
}

#[test]
fn test_reset_without_a_hook_reports_it() {
    let (mut console, out) = console_with_rtc();
    console.process_line("reset");
    let text = out.take();
    assert!(text.contains("Resetting..."), "{}", text);
    assert!(text.contains("Error: reset not supported on this platform"), "{}", text);
}

#[test]
fn test_failed_read_leaves_the_previous_time_visible() {
    let out = SharedOutput::default();
    let mut console = Console::new(Box::new(out.clone()), build_info());
    console.attach_bus(Box::new(FakeBus::new()));
    console.process_line("time 6 30 0");
    out.take();

    // Swap in a bus that always fails; the read errors but last_time
    // still holds the old value.
    console.attach_bus(Box::new(FakeBus {
        regs: [0; 0x13],
        pointer: 0,
        fail: true,
    }));
    console.process_line("time");
    assert_eq!(out.take(), "Error: I2C write failed\n");
    let stale = console.last_time();
    assert_eq!((stale.hour, stale.minute, stale.second), (6, 30, 0));
}
