//! Integer-to-text conversion
//!
//! Renders a `u32` as exactly four ASCII decimal digits for the score
//! display. Only the low-order four digits survive: `12345` becomes
//! `"2345"`.

use core::fmt;

use heapless::String;

/// Number of digits in a decimal token
pub const DECIMAL_DIGITS: usize = 4;

/// Fixed-width decimal rendering of a `u32`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalToken([u8; DECIMAL_DIGITS]);

impl DecimalToken {
    /// Digits as ASCII bytes, most significant first
    pub const fn as_bytes(&self) -> &[u8; DECIMAL_DIGITS] {
        &self.0
    }

    /// Digits as a string slice
    pub fn as_str(&self) -> &str {
        // Every byte is in b'0'..=b'9'
        core::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Digits followed by a NUL terminator
    pub fn to_c_bytes(&self) -> [u8; DECIMAL_DIGITS + 1] {
        let mut out = [0u8; DECIMAL_DIGITS + 1];
        out[..DECIMAL_DIGITS].copy_from_slice(&self.0);
        out
    }

    /// Copy the digits into a heapless string
    pub fn to_heapless(&self) -> String<DECIMAL_DIGITS> {
        let mut s = String::new();
        // Capacity matches the token length exactly
        let pushed = s.push_str(self.as_str());
        debug_assert!(pushed.is_ok());
        s
    }
}

impl fmt::Display for DecimalToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DecimalToken {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str());
    }
}

/// Render the low four decimal digits of `value`, zero padded
///
/// Fills positions right to left, dividing by ten exactly four times;
/// higher digits are dropped without error.
pub fn int_to_text(value: u32) -> DecimalToken {
    let mut digits = [b'0'; DECIMAL_DIGITS];
    let mut rest = value;

    for slot in digits.iter_mut().rev() {
        *slot = b'0' + (rest % 10) as u8;
        rest /= 10;
    }

    DecimalToken(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_padded() {
        assert_eq!(int_to_text(0).as_str(), "0000");
        assert_eq!(int_to_text(7).as_str(), "0007");
        assert_eq!(int_to_text(42).as_str(), "0042");
        assert_eq!(int_to_text(305).as_str(), "0305");
    }

    #[test]
    fn test_four_digit_values() {
        assert_eq!(int_to_text(1000).as_str(), "1000");
        assert_eq!(int_to_text(9999).as_str(), "9999");
    }

    #[test]
    fn test_truncates_to_low_digits() {
        assert_eq!(int_to_text(10000).as_str(), "0000");
        assert_eq!(int_to_text(12345).as_str(), "2345");
        assert_eq!(int_to_text(u32::MAX).as_str(), "7295"); // 4294967295
    }

    #[test]
    fn test_c_bytes_terminated() {
        assert_eq!(&int_to_text(7).to_c_bytes(), b"0007\0");
    }

    #[test]
    fn test_heapless_copy() {
        let s = int_to_text(2024).to_heapless();
        assert_eq!(s.as_str(), "2024");
        assert_eq!(s.len(), DECIMAL_DIGITS);
    }

    proptest! {
        #[test]
        fn prop_matches_low_digits(value in any::<u32>()) {
            let token = int_to_text(value);
            prop_assert!(token.as_bytes().iter().all(u8::is_ascii_digit));

            let parsed: u32 = token.as_str().parse().unwrap();
            prop_assert_eq!(parsed, value % 10_000);
        }

        #[test]
        fn prop_heapless_copy_is_complete(value in any::<u32>()) {
            let token = int_to_text(value);
            let copy = token.to_heapless();
            prop_assert_eq!(copy.as_str(), token.as_str());
        }
    }
}
