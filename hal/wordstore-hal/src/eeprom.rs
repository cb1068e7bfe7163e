//! EEPROM storage abstractions
//!
//! Provides the trait for word-addressable, byte-programmable non-volatile
//! memory. Implementations block until the medium accepts each operation.

use core::fmt;

/// Size of one storage word in bytes
pub const WORD_SIZE: u32 = 4;

/// Check whether a byte address sits on a word boundary
pub const fn is_word_aligned(address: u32) -> bool {
    address % WORD_SIZE == 0
}

/// Result of the one-shot backend initialization
///
/// The numeric values follow the vendor EEPROM driver, where only
/// `0` lets the boot sequence continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum InitStatus {
    /// Controller came up and the medium is usable
    Ok = 0,
    /// Controller reported an error during its power-on recovery
    Error = 2,
}

impl InitStatus {
    /// Get the status as its raw driver code
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Create a status from a raw driver code
    ///
    /// Any code other than the success value is treated as an error.
    pub fn from_u32(value: u32) -> Self {
        match value {
            0 => InitStatus::Ok,
            _ => InitStatus::Error,
        }
    }

    /// Check if this status allows the boot sequence to proceed
    pub fn is_ok(self) -> bool {
        matches!(self, InitStatus::Ok)
    }
}

/// Errors from raw EEPROM operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackendError {
    /// Address range extends past the end of the medium
    OutOfBounds,
    /// Programming the medium failed
    Program,
    /// Reading the medium failed
    Read,
    /// Peripheral has not been brought up
    NotReady,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::OutOfBounds => f.write_str("address range out of bounds"),
            BackendError::Program => f.write_str("program operation failed"),
            BackendError::Read => f.write_str("read operation failed"),
            BackendError::NotReady => f.write_str("peripheral not ready"),
        }
    }
}

/// Word-addressable EEPROM backend
///
/// Implementations wrap a chip's EEPROM controller (or a simulation of
/// one). Addresses are byte offsets into a flat space; the word
/// operations expect word-aligned addresses and callers in
/// `wordstore-core` guarantee that before calling in.
pub trait EepromBackend {
    /// Enable the clock domain of the storage peripheral
    fn peripheral_enable(&mut self);

    /// Check whether the peripheral finished coming out of reset
    fn peripheral_ready(&self) -> bool;

    /// Run the controller's one-shot initialization
    fn init(&mut self) -> InitStatus;

    /// Program `words` starting at byte `address`
    ///
    /// The programmed byte length is `words.len() * WORD_SIZE`.
    fn write_words(&mut self, address: u32, words: &[u32]) -> Result<(), BackendError>;

    /// Read `buffer.len()` words starting at byte `address`
    fn read_words(&mut self, address: u32, buffer: &mut [u32]) -> Result<(), BackendError>;

    /// Total capacity of the medium in bytes
    fn size_bytes(&self) -> u32;
}
