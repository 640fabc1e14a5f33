// Stdout wrapper implementing ConsoleOutput

use clockline_core::ConsoleOutput;
use std::io::{self, Write};

pub struct StdoutOutput;

impl StdoutOutput {
    pub fn new() -> Self {
        StdoutOutput
    }
}

impl ConsoleOutput for StdoutOutput {
    fn write(&mut self, data: &[u8]) -> Result<(), ()> {
        io::stdout().write_all(data).map_err(|_| ())
    }

    fn flush(&mut self) -> Result<(), ()> {
        io::stdout().flush().map_err(|_| ())
    }
}
