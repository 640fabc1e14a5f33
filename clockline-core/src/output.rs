//! Console output trait.
//!
//! The console writes all of its text - prompts, echoes, command output,
//! error reports - through this seam. The surrounding firmware decides where
//! the bytes go: a UART, a USB CDC endpoint, or stdout on the host.

/// Byte-oriented console output.
///
/// `write` either takes the whole buffer or fails; there is no partial
/// write. Failures are deliberately unit errors: if the console cannot
/// print, there is nobody to print the error to.
pub trait ConsoleOutput {
    /// Write bytes to the output.
    fn write(&mut self, data: &[u8]) -> Result<(), ()>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), ()>;
}
