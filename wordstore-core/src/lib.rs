//! Board-agnostic persistence core for word-addressable EEPROM
//!
//! This crate contains everything between the application and the raw
//! EEPROM driver:
//!
//! - Record codec (word-aligned pass-through with an alignment guard)
//! - Name codec (8 ASCII bytes packed into two big-endian words)
//! - Integer-to-text conversion (fixed 4-digit decimal tokens)
//! - Boot gate state machine for bringing the peripheral up
//! - Storage configuration and the default address layout
//!
//! The [`Storage`] facade ties these together over any
//! [`EepromBackend`](wordstore_hal::EepromBackend).

#![no_std]
#![deny(unsafe_code)]

mod fmt;

pub mod boot;
pub mod codec;
pub mod config;
pub mod error;
pub mod storage;

pub use codec::{int_to_text, DecimalToken, Name};
pub use config::StorageConfig;
pub use error::{InitError, StorageError};
pub use storage::Storage;
