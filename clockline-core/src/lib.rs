//! # Clockline Core
//!
//! Console and timekeeping library for a DS3231-based clock.
//!
//! The firmware's interactive surface is a line-based command console: bytes
//! arrive over a serial link, accumulate into a line, and on CR/LF the line
//! is tokenized and dispatched against a command table. Commands talk to the
//! DS3231 real-time clock through a narrow write-then-read bus seam, and all
//! register encodings go through the calendar/BCD conversion routines in
//! [`datetime`] and [`bcd`].
//!
//! Everything hardware-specific sits behind a trait:
//!
//! - [`transport::I2cTransport`] - the two-wire bus
//! - [`output::ConsoleOutput`] / [`console::ConsoleInput`] - serial character I/O
//! - [`time_source::TimeSource`] - an authoritative wall clock (host only)
//! - [`console::SystemControl`] - processor reset
//!
//! ## Example
//!
//! ```ignore
//! use clockline_core::{BuildInfo, Console};
//!
//! let mut console = Console::new(Box::new(output), BuildInfo {
//!     version: env!("CARGO_PKG_VERSION"),
//!     date: env!("BUILD_DATE"),
//!     time: env!("BUILD_TIME"),
//! });
//! console.attach_bus(Box::new(bus));
//! console.greet();
//! loop {
//!     console.pump(&mut serial);
//! }
//! ```

#![cfg_attr(target_os = "none", no_std)]

#[cfg(target_os = "none")]
extern crate alloc;

// Public modules
pub mod bcd;
pub mod commands;
pub mod console;
pub mod datetime;
pub mod ds3231;
pub mod error;
pub mod hardware;
pub mod output;
pub mod time_source;
pub mod tokenizer;
pub mod transport;

// Internal module
mod compat;

// Re-exports for convenience
pub use commands::CommandEntry;
pub use console::{BuildInfo, Console, ConsoleInput, SessionState, SystemControl};
pub use datetime::CalendarTime;
pub use error::ConsoleError;
pub use output::ConsoleOutput;
pub use time_source::TimeSource;
pub use transport::{I2cTransport, TransportError};
