//! Record codec
//!
//! Records are opaque word sequences stored verbatim. The only rule
//! enforced here is alignment: nothing reaches the backend unless the
//! address sits on a word boundary.

use wordstore_hal::{is_word_aligned, EepromBackend};

use crate::error::StorageError;
use crate::fmt::{debug, warn};

/// Reject addresses that are not word aligned
pub fn check_alignment(address: u32) -> Result<(), StorageError> {
    if is_word_aligned(address) {
        Ok(())
    } else {
        warn!("Rejecting misaligned address {=u32:#x}", address);
        Err(StorageError::MisalignedAddress(address))
    }
}

/// Program `words` starting at `address`
///
/// Words are forwarded unmodified. A backend failure is returned as-is;
/// whatever part of the range the medium accepted stays written.
pub fn write_record<B: EepromBackend>(
    backend: &mut B,
    address: u32,
    words: &[u32],
) -> Result<(), StorageError> {
    check_alignment(address)?;

    debug!("Writing {} word(s) at {=u32:#x}", words.len(), address);
    backend.write_words(address, words).map_err(|e| {
        warn!("Record write at {=u32:#x} failed: {:?}", address, e);
        StorageError::Backend(e)
    })
}

/// Read the single word stored at `address`
pub fn read_record<B: EepromBackend>(backend: &mut B, address: u32) -> Result<u32, StorageError> {
    let mut word = [0u32; 1];
    read_record_into(backend, address, &mut word)?;
    Ok(word[0])
}

/// Fill `buffer` with the words stored from `address` onwards
pub fn read_record_into<B: EepromBackend>(
    backend: &mut B,
    address: u32,
    buffer: &mut [u32],
) -> Result<(), StorageError> {
    check_alignment(address)?;
    backend.read_words(address, buffer)?;
    Ok(())
}
