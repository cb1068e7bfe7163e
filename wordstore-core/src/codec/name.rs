//! Name codec
//!
//! A name is exactly eight ASCII bytes stored as two big-endian words:
//!
//! ```text
//!   address        address + 4
//! ┌─────────────┐ ┌─────────────┐
//! │ b0 b1 b2 b3 │ │ b4 b5 b6 b7 │
//! └─────────────┘ └─────────────┘
//!      word0           word1
//! ```
//!
//! Shorter inputs are padded with spaces. A slot holding eight spaces
//! decodes as the unset name (eight sentinel bytes) so callers can tell an
//! unprogrammed slot apart without a separate flag.

use core::fmt;

use wordstore_hal::{BackendError, EepromBackend, WORD_SIZE};

use super::record::check_alignment;
use crate::error::StorageError;
use crate::fmt::{debug, warn};

/// Length of a name in bytes
pub const NAME_BYTES: usize = 8;

/// Number of storage words one name occupies
pub const NAME_WORDS: usize = 2;

/// Byte used to pad short names
pub const NAME_PAD: u8 = b' ';

/// Raw content of a slot that holds no name
pub const BLANK_NAME: [u8; NAME_BYTES] = [NAME_PAD; NAME_BYTES];

/// Default sentinel substituted for a blank name on read
pub const NAME_SENTINEL: u8 = b'-';

/// An 8-byte player name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name([u8; NAME_BYTES]);

impl Name {
    /// Build a name from caller bytes, padding with spaces
    ///
    /// Only the first eight bytes are used.
    pub fn new(bytes: &[u8]) -> Self {
        Self(pad_name(bytes))
    }

    /// Wrap eight raw bytes
    pub const fn from_bytes(bytes: [u8; NAME_BYTES]) -> Self {
        Self(bytes)
    }

    /// The name reported for a blank slot
    pub const fn unset(sentinel: u8) -> Self {
        Self([sentinel; NAME_BYTES])
    }

    /// Check whether this is the unset name for `sentinel`
    pub fn is_unset(&self, sentinel: u8) -> bool {
        self.0.iter().all(|&b| b == sentinel)
    }

    /// Raw bytes of the name
    pub const fn as_bytes(&self) -> &[u8; NAME_BYTES] {
        &self.0
    }

    /// The name as text, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }

    /// The name as a NUL-terminated byte string
    ///
    /// For the unset name the terminator position carries the sentinel
    /// too, so the whole nine-byte buffer is sentinel. A name written as
    /// eight sentinel bytes is indistinguishable and gets the same buffer.
    pub fn to_c_bytes(&self, sentinel: u8) -> [u8; NAME_BYTES + 1] {
        if self.is_unset(sentinel) {
            return [sentinel; NAME_BYTES + 1];
        }
        let mut out = [0u8; NAME_BYTES + 1];
        out[..NAME_BYTES].copy_from_slice(&self.0);
        out
    }

    /// Pack into the two storage words
    pub fn to_words(&self) -> [u32; NAME_WORDS] {
        pack_name(&self.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            let c = if b.is_ascii() { b as char } else { '?' };
            fmt::Write::write_char(f, c)?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Name {
    fn format(&self, f: defmt::Formatter) {
        match self.as_str() {
            Some(s) => defmt::write!(f, "{=str}", s),
            None => defmt::write!(f, "{=[u8]:a}", &self.0[..]),
        }
    }
}

/// Copy up to eight bytes and pad the remainder with spaces
pub fn pad_name(bytes: &[u8]) -> [u8; NAME_BYTES] {
    let mut out = BLANK_NAME;
    let len = bytes.len().min(NAME_BYTES);
    out[..len].copy_from_slice(&bytes[..len]);
    out
}

/// Pack eight bytes into two big-endian words
pub fn pack_name(bytes: &[u8; NAME_BYTES]) -> [u32; NAME_WORDS] {
    [
        u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
    ]
}

/// Unpack two big-endian words into eight bytes
pub fn unpack_name(words: [u32; NAME_WORDS]) -> [u8; NAME_BYTES] {
    let mut out = [0u8; NAME_BYTES];
    out[..4].copy_from_slice(&words[0].to_be_bytes());
    out[4..].copy_from_slice(&words[1].to_be_bytes());
    out
}

/// Decode stored words, substituting the unset name for a blank slot
pub fn decode_name(words: [u32; NAME_WORDS], sentinel: u8) -> Name {
    let bytes = unpack_name(words);
    if bytes == BLANK_NAME {
        debug!("Blank name slot, reporting sentinel");
        Name::unset(sentinel)
    } else {
        Name(bytes)
    }
}

/// Store a name at `address`
///
/// The two words go out as separate single-word writes; a failure on the
/// first skips the second. A reset between the two can leave the slot
/// half updated. A slot whose second word would lie past the end of the
/// 32-bit address space fails with `OutOfBounds` after the first write.
pub fn write_name<B: EepromBackend>(
    backend: &mut B,
    address: u32,
    bytes: &[u8],
) -> Result<(), StorageError> {
    check_alignment(address)?;

    let name = Name::new(bytes);
    let [word0, word1] = name.to_words();

    write_name_word(backend, address, word0)?;
    let second = address
        .checked_add(WORD_SIZE)
        .ok_or(StorageError::Backend(BackendError::OutOfBounds))?;
    write_name_word(backend, second, word1)?;

    debug!("Stored name {} at {=u32:#x}", name, address);
    Ok(())
}

/// Program one word of a name slot
fn write_name_word<B: EepromBackend>(
    backend: &mut B,
    address: u32,
    word: u32,
) -> Result<(), StorageError> {
    backend.write_words(address, &[word]).map_err(|e| {
        warn!("Name write at {=u32:#x} failed: {:?}", address, e);
        StorageError::Backend(e)
    })
}

/// Load the name stored at `address`
pub fn read_name<B: EepromBackend>(
    backend: &mut B,
    address: u32,
    sentinel: u8,
) -> Result<Name, StorageError> {
    check_alignment(address)?;

    let mut words = [0u32; NAME_WORDS];
    backend.read_words(address, &mut words)?;
    Ok(decode_name(words, sentinel))
}
