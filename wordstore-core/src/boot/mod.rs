//! Boot gate for the storage peripheral
//!
//! Bringing the EEPROM up is an explicit, finite state machine. A failed
//! backend initialization is a terminal state; nothing leaves it.

pub mod events;
pub mod machine;

pub use events::BootEvent;
pub use machine::{halt, run_boot_sequence, BootState};
