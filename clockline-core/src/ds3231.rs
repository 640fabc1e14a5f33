//! DS3231 register adapter.
//!
//! Beside normal timekeeping the DS3231 offers battery backup, a
//! temperature-compensated oscillator, two alarms and a 32KHz output; this
//! adapter only drives the time/date registers at index 0x00-0x06 plus the
//! control/status pair at 0x0E-0x0F. All fields are BCD on the wire.

use crate::bcd::{bcd_to_bin, bin_to_bcd};
use crate::datetime::CalendarTime;
use crate::transport::{I2cTransport, TransportError};

/// Fixed 7-bit bus address of the DS3231.
pub const DS3231_ADDRESS: u8 = 0x68;

/// First time/date register (seconds).
const REG_TIME: u8 = 0x00;
/// Control register; status follows at 0x0F.
const REG_CONTROL: u8 = 0x0E;

/// Clear the control and status registers so the oscillator runs and the
/// stop flag (OSF) is reset. Call once at power-on.
pub fn init(bus: &mut dyn I2cTransport) -> Result<(), TransportError> {
    bus.transact(DS3231_ADDRESS, &[REG_CONTROL, 0x00, 0x00], &mut [])
}

/// Read registers 0x00-0x06 into `dt`.
///
/// On a transport failure `dt` is left untouched, so it may still hold
/// values from an earlier read - callers that care must check the result
/// before trusting the struct.
pub fn read_time(
    bus: &mut dyn I2cTransport,
    dt: &mut CalendarTime,
) -> Result<(), TransportError> {
    let mut regs = [0u8; 7];
    bus.transact(DS3231_ADDRESS, &[REG_TIME], &mut regs)?;

    dt.second = bcd_to_bin(regs[0]);
    dt.minute = bcd_to_bin(regs[1]);
    dt.hour = bcd_to_bin(regs[2]); // bit 6 (12/24h select) expected low
    // regs[3] is the chip's day-of-week counter; recomputed instead
    dt.day = bcd_to_bin(regs[4]);
    dt.month = bcd_to_bin(regs[5] & 0x1F); // drop the century bit
    dt.years_since_2000 = bcd_to_bin(regs[6]);
    Ok(())
}

/// Write `dt` to registers 0x00-0x06 in one burst.
pub fn write_time(
    bus: &mut dyn I2cTransport,
    dt: &CalendarTime,
) -> Result<(), TransportError> {
    let regs = [
        REG_TIME, // start index
        bin_to_bcd(dt.second),
        bin_to_bcd(dt.minute),
        bin_to_bcd(dt.hour),
        0, // day of week: don't care, recomputed on read
        bin_to_bcd(dt.day),
        bin_to_bcd(dt.month),
        bin_to_bcd(dt.years_since_2000),
    ];
    bus.transact(DS3231_ADDRESS, &regs, &mut [])
}
