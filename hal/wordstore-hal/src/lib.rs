//! Wordstore Hardware Abstraction Layer
//!
//! This crate defines the backend trait that chip-specific EEPROM drivers
//! implement. The codecs in `wordstore-core` only ever talk to storage
//! through this trait, so the same name/record layout works on any part
//! with a word-programmable non-volatile memory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (boot code, score tables)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wordstore-core (codecs, boot gate)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wordstore-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  on-chip      │       │ wordstore-    │
//! │  EEPROM driver│       │   hal-sim     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`eeprom::EepromBackend`] - Word-addressable persistent storage

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;

// Re-export key types at crate root for convenience
pub use eeprom::{is_word_aligned, BackendError, EepromBackend, InitStatus, WORD_SIZE};
