//! Word codecs
//!
//! Translate between in-memory values and the 32-bit cell layout of the
//! EEPROM. Everything here works on fixed-size arrays; nothing allocates.

pub mod decimal;
pub mod name;
pub mod record;

pub use decimal::{int_to_text, DecimalToken, DECIMAL_DIGITS};
pub use name::{Name, BLANK_NAME, NAME_BYTES, NAME_PAD, NAME_SENTINEL, NAME_WORDS};
pub use record::{check_alignment, read_record, read_record_into, write_record};
