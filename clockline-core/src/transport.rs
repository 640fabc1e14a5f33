//! Two-wire bus seam.
//!
//! The console core never touches an I2C peripheral directly; it goes
//! through [`I2cTransport`], a single write-then-read transaction plus a
//! presence probe for the bus scanner. Platforms supply the implementation:
//! a real peripheral behind the `embedded-hal` feature, or a simulated
//! register file on the host.

use crate::compat::fmt;

/// Which phase of a transaction failed. The two phases are reported
/// separately so diagnostics can tell an unacknowledged address write from
/// a failed read-back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The write phase failed (device did not acknowledge, or bus error).
    Write,
    /// The read phase failed.
    Read,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Write => write!(f, "I2C write failed"),
            TransportError::Read => write!(f, "I2C read failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransportError {}

/// A write-then-read primitive against a 7-bit device address.
pub trait I2cTransport {
    /// Perform an optional write immediately followed by an optional read.
    ///
    /// An empty `write` skips the write phase; an empty `read` skips the
    /// read phase. The read phase only runs if the write phase succeeded.
    fn transact(
        &mut self,
        addr: u8,
        write: &[u8],
        read: &mut [u8],
    ) -> Result<(), TransportError>;

    /// True if a device acknowledges at `addr`. Used by the bus scan.
    fn probe(&mut self, addr: u8) -> bool;
}

/// Adapter giving any [`embedded_hal::i2c::I2c`] bus the
/// [`I2cTransport`] shape.
#[cfg(feature = "embedded-hal")]
pub struct HalBus<I2C> {
    i2c: I2C,
}

#[cfg(feature = "embedded-hal")]
impl<I2C: embedded_hal::i2c::I2c> HalBus<I2C> {
    pub fn new(i2c: I2C) -> Self {
        HalBus { i2c }
    }
}

#[cfg(feature = "embedded-hal")]
impl<I2C: embedded_hal::i2c::I2c> I2cTransport for HalBus<I2C> {
    fn transact(
        &mut self,
        addr: u8,
        write: &[u8],
        read: &mut [u8],
    ) -> Result<(), TransportError> {
        if !write.is_empty() {
            self.i2c
                .write(addr, write)
                .map_err(|_| TransportError::Write)?;
        }
        if !read.is_empty() {
            self.i2c
                .read(addr, read)
                .map_err(|_| TransportError::Read)?;
        }
        Ok(())
    }

    fn probe(&mut self, addr: u8) -> bool {
        // A zero-length write is the cheapest "are you there?" the bus allows.
        self.i2c.write(addr, &[]).is_ok()
    }
}
