//! `i2cscan`: probe the bus and print a 16-wide address grid.
//!
//! Addresses 0x00-0x02 and 0x78-0x7F are reserved on an I2C bus and are
//! shown blank; every other cell is either the responding address or `--`.

use crate::compat::{format, String};
use crate::console::Console;
use crate::error::ConsoleError;

const FIRST_ADDR: u8 = 0x03;
const LAST_ADDR: u8 = 0x77;

pub fn run(console: &mut Console) -> Result<(), ConsoleError> {
    console.println("     0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f");

    for row in 0..8u8 {
        let mut line = format!("{:02x}: ", row << 4);
        for col in 0..16u8 {
            let addr = (row << 4) | col;
            if addr < FIRST_ADDR || addr > LAST_ADDR {
                line.push_str("   ");
                continue;
            }
            let cell: String = if console.probe_device(addr)? {
                format!("{:02x} ", addr)
            } else {
                String::from("-- ")
            };
            line.push_str(&cell);
        }
        console.println(line.trim_end());
    }
    Ok(())
}
