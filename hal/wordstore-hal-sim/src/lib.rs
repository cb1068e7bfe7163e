//! Simulated EEPROM backend
//!
//! This crate provides an in-memory implementation of the
//! `wordstore-hal` backend trait, used for host-side tests and
//! for exercising the codecs without target hardware:
//!
//! - Word-granular storage with the erased value of real parts
//! - Delayed peripheral readiness after clock enable
//! - Fault injection for init, program and read operations
//! - Operation counters for asserting what reached the medium

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;

pub use eeprom::{Fault, SimEeprom, ERASED_WORD};

// Re-export shared types from wordstore-hal
pub use wordstore_hal::{BackendError, EepromBackend, InitStatus};
