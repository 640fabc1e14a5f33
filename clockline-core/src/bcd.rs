//! Binary-coded decimal conversion.
//!
//! The DS3231 stores every time/date field as BCD: each decimal digit in its
//! own 4-bit nibble. Both routines assume the value fits in two digits
//! (0-99); out-of-range input produces wrong numbers, not an error, so
//! callers validate first.

/// Convert a binary value in 0-99 to its BCD encoding.
pub fn bin_to_bcd(val: u8) -> u8 {
    val + 6 * (val / 10)
}

/// Convert a BCD byte back to binary.
pub fn bcd_to_bin(val: u8) -> u8 {
    val.wrapping_sub(6 * (val >> 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_two_digit_values() {
        for v in 0..=99u8 {
            assert_eq!(bcd_to_bin(bin_to_bcd(v)), v, "round trip failed for {}", v);
        }
    }

    #[test]
    fn test_known_encodings() {
        assert_eq!(bin_to_bcd(0), 0x00);
        assert_eq!(bin_to_bcd(9), 0x09);
        assert_eq!(bin_to_bcd(10), 0x10);
        assert_eq!(bin_to_bcd(59), 0x59);
        assert_eq!(bin_to_bcd(99), 0x99);

        assert_eq!(bcd_to_bin(0x45), 45);
        assert_eq!(bcd_to_bin(0x30), 30);
    }
}
