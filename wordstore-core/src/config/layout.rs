//! Default address layout
//!
//! The flat EEPROM address space is managed by the application. These
//! constants describe the layout used by the reaction-game firmware this
//! storage layer was written for: a table of score records and two
//! player-name slots.

use crate::codec::name::NAME_BYTES;

/// Number of score records kept per game
pub const RECORDS_STORED: u32 = 10;

/// Address of the button-game player name
pub const BUTTON_NAME_ADDR: u32 = 0;

/// Address of the shake-game player name
pub const SHAKE_NAME_ADDR: u32 = 4 * RECORDS_STORED;

/// Check whether two name slots share any byte
pub const fn name_slots_overlap(a: u32, b: u32) -> bool {
    let len = NAME_BYTES as u32;
    a < b.saturating_add(len) && b < a.saturating_add(len)
}
