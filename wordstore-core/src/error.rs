//! Error types for storage operations

use core::fmt;

use wordstore_hal::{BackendError, InitStatus};

use crate::config::ConfigError;

/// Errors from record and name operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Address is not a multiple of the word size
    MisalignedAddress(u32),
    /// Backend rejected the operation
    Backend(BackendError),
}

impl From<BackendError> for StorageError {
    fn from(e: BackendError) -> Self {
        StorageError::Backend(e)
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::MisalignedAddress(address) => {
                write!(f, "address {:#x} is not word aligned", address)
            }
            StorageError::Backend(e) => write!(f, "backend error: {}", e),
        }
    }
}

/// Errors from bringing the storage peripheral up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Configuration failed validation
    Config(ConfigError),
    /// Backend initialization did not report success
    Backend(InitStatus),
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError::Config(e)
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Config(e) => write!(f, "invalid configuration: {}", e),
            InitError::Backend(status) => {
                write!(f, "backend init failed with status {}", status.as_u32())
            }
        }
    }
}
