//! Storage configuration
//!
//! Holds the blank-name sentinel and the name slot addresses. The struct
//! can be persisted with postcard when the `serde` feature is enabled.

pub mod layout;

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use wordstore_hal::is_word_aligned;

use crate::codec::name::NAME_SENTINEL;
use layout::{name_slots_overlap, BUTTON_NAME_ADDR, SHAKE_NAME_ADDR};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sentinel byte is not a printable, non-space ASCII character
    SentinelNotPrintable(u8),
    /// A name slot address is not word aligned
    MisalignedNameSlot(u32),
    /// The two name slots share storage
    OverlappingNameSlots,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SentinelNotPrintable(b) => {
                write!(f, "sentinel byte {:#04x} is not printable", b)
            }
            ConfigError::MisalignedNameSlot(address) => {
                write!(f, "name slot {:#x} is not word aligned", address)
            }
            ConfigError::OverlappingNameSlots => f.write_str("name slots overlap"),
        }
    }
}

/// Storage layer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StorageConfig {
    /// Byte substituted for every position of a blank name on read
    pub sentinel: u8,
    /// Address of the button-game name slot
    pub button_name_addr: u32,
    /// Address of the shake-game name slot
    pub shake_name_addr: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageConfig {
    /// Create the default configuration
    pub const fn new() -> Self {
        Self {
            sentinel: NAME_SENTINEL,
            button_name_addr: BUTTON_NAME_ADDR,
            shake_name_addr: SHAKE_NAME_ADDR,
        }
    }

    /// Use a different blank-name sentinel
    pub const fn with_sentinel(mut self, sentinel: u8) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Graphic excludes space, which would read back as a padded name
        if !self.sentinel.is_ascii_graphic() {
            return Err(ConfigError::SentinelNotPrintable(self.sentinel));
        }

        for address in [self.button_name_addr, self.shake_name_addr] {
            if !is_word_aligned(address) {
                return Err(ConfigError::MisalignedNameSlot(address));
            }
        }

        if name_slots_overlap(self.button_name_addr, self.shake_name_addr) {
            return Err(ConfigError::OverlappingNameSlots);
        }

        Ok(())
    }
}
