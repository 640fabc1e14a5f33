// Simulated DS3231 for desktop runs: a register file behind the I2C
// transport trait that keeps real time between accesses.

use std::time::{Duration, Instant};

use clockline_core::{CalendarTime, I2cTransport, TransportError};
use clockline_core::bcd::{bcd_to_bin, bin_to_bcd};

const RTC_ADDR: u8 = 0x68;
const REG_COUNT: usize = 0x13;

pub struct SimBus {
    regs: [u8; REG_COUNT],
    pointer: u8,
    /// Wall-clock moment the time registers were last accurate.
    synced: Instant,
}

impl SimBus {
    /// Start the simulated chip at `start`.
    pub fn new(start: CalendarTime) -> Self {
        let mut bus = SimBus {
            regs: [0; REG_COUNT],
            pointer: 0,
            synced: Instant::now(),
        };
        bus.store_time(&start);
        bus
    }

    fn store_time(&mut self, dt: &CalendarTime) {
        self.regs[0] = bin_to_bcd(dt.second);
        self.regs[1] = bin_to_bcd(dt.minute);
        self.regs[2] = bin_to_bcd(dt.hour);
        self.regs[3] = 0;
        self.regs[4] = bin_to_bcd(dt.day);
        self.regs[5] = bin_to_bcd(dt.month);
        self.regs[6] = bin_to_bcd(dt.years_since_2000);
    }

    fn load_time(&self) -> CalendarTime {
        CalendarTime {
            second: bcd_to_bin(self.regs[0]),
            minute: bcd_to_bin(self.regs[1]),
            hour: bcd_to_bin(self.regs[2]),
            day: bcd_to_bin(self.regs[4]),
            month: bcd_to_bin(self.regs[5] & 0x1F),
            years_since_2000: bcd_to_bin(self.regs[6]),
        }
    }

    /// Roll the time registers forward by however many whole seconds have
    /// passed since they were last accurate. Sub-second remainder stays
    /// pending, like a real oscillator.
    fn tick(&mut self) {
        let elapsed = self.synced.elapsed().as_secs();
        if elapsed == 0 {
            return;
        }
        let dt = self.load_time();
        let advanced = CalendarTime::from_unix(dt.to_unix().wrapping_add(elapsed as u32));
        self.store_time(&advanced);
        self.synced += Duration::from_secs(elapsed);
    }
}

impl I2cTransport for SimBus {
    fn transact(&mut self, addr: u8, write: &[u8], read: &mut [u8]) -> Result<(), TransportError> {
        if addr != RTC_ADDR {
            return Err(TransportError::Write);
        }

        if let Some((&reg, data)) = write.split_first() {
            if reg as usize >= REG_COUNT || reg as usize + data.len() > REG_COUNT {
                return Err(TransportError::Write);
            }
            self.pointer = reg;
            if !data.is_empty() {
                // A write into the timekeeping registers defines a new
                // "now"; anything pending before it is discarded.
                if reg <= 6 {
                    self.synced = Instant::now();
                }
                self.regs[reg as usize..reg as usize + data.len()].copy_from_slice(data);
            }
        }

        if !read.is_empty() {
            if self.pointer <= 6 {
                self.tick();
            }
            let start = self.pointer as usize;
            if start + read.len() > REG_COUNT {
                return Err(TransportError::Read);
            }
            read.copy_from_slice(&self.regs[start..start + read.len()]);
        }

        Ok(())
    }

    fn probe(&mut self, addr: u8) -> bool {
        addr == RTC_ADDR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clockline_core::ds3231;

    fn start() -> CalendarTime {
        CalendarTime {
            years_since_2000: 24,
            month: 1,
            day: 5,
            hour: 9,
            minute: 8,
            second: 7,
        }
    }

    #[test]
    fn test_sim_bus_round_trips_through_the_driver() {
        let mut bus = SimBus::new(start());
        let mut dt = CalendarTime::default();
        ds3231::read_time(&mut bus, &mut dt).unwrap();
        assert_eq!(dt.to_unix(), start().to_unix());
    }

    #[test]
    fn test_sim_bus_only_answers_the_rtc_address() {
        let mut bus = SimBus::new(start());
        assert!(bus.probe(0x68));
        assert!(!bus.probe(0x48));
        let mut buf = [0u8; 1];
        assert!(bus.transact(0x48, &[0], &mut buf).is_err());
    }

    #[test]
    fn test_write_then_read_preserves_the_written_time() {
        let mut bus = SimBus::new(start());
        let set = CalendarTime {
            years_since_2000: 30,
            month: 6,
            day: 15,
            hour: 12,
            minute: 0,
            second: 0,
        };
        ds3231::write_time(&mut bus, &set).unwrap();
        let mut dt = CalendarTime::default();
        ds3231::read_time(&mut bus, &mut dt).unwrap();
        // Less than a second elapses between write and read.
        assert_eq!(dt.to_unix(), set.to_unix());
    }
}
