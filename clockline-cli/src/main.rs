//! Clockline CLI - interactive clock console on the desktop
//!
//! This is a thin wrapper around clockline-core that builds the executable.
//! The DS3231 is simulated by a ticking register file, so every command
//! behaves the way it does on hardware; firmware builds swap in a real bus
//! transport and keep the core unchanged.

mod sim_rtc;
mod stdout_output;

use editline::{terminals::StdioTerminal, LineEditor};
use std::io::Write;

use clockline_core::hardware::linux::SystemClock;
use clockline_core::{ds3231, BuildInfo, Console, SystemControl, TimeSource};
use sim_rtc::SimBus;
use stdout_output::StdoutOutput;

/// On the desktop "reset" just ends the process.
struct HostReset;

impl SystemControl for HostReset {
    fn reset(&mut self) -> ! {
        std::process::exit(0)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!(
        "clockline v{}, built {} {}",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_DATE"),
        env!("BUILD_TIME")
    );
    println!("Simulated DS3231 at 0x68; type `help` or `?` for commands");
    println!("Press Ctrl-D to exit");

    // Seed the simulated chip from the system clock and run the same
    // power-on init the firmware does.
    let clock = SystemClock::new();
    let mut bus = SimBus::new(clock.now());
    ds3231::init(&mut bus)?;

    let mut console = Console::new(
        Box::new(StdoutOutput::new()),
        BuildInfo {
            version: env!("CARGO_PKG_VERSION"),
            date: env!("BUILD_DATE"),
            time: env!("BUILD_TIME"),
        },
    );
    console.attach_bus(Box::new(bus));
    console.set_time_source(Box::new(clock));
    console.set_system_control(Box::new(HostReset));

    // Line editing comes from editline rather than the byte pump; the
    // console only sees complete lines.
    let mut editor = LineEditor::new(256, 50);
    let mut terminal = StdioTerminal::new();

    loop {
        print!("\n> ");
        std::io::stdout().flush()?;

        match editor.read_line(&mut terminal) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                console.process_line(trimmed);
            }
            Err(editline::Error::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(editline::Error::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
