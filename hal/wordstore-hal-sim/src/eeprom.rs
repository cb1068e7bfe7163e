//! In-memory EEPROM driver
//!
//! Models a word-addressable EEPROM with `WORDS` 32-bit cells.
//! Implements the `EepromBackend` trait from `wordstore-hal`.

use core::cell::Cell;
use core::ops::Range;

use wordstore_hal::{is_word_aligned, BackendError, EepromBackend, InitStatus, WORD_SIZE};

/// Value of a cell that has never been programmed
pub const ERASED_WORD: u32 = 0xFFFF_FFFF;

/// Injected failure modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Every operation succeeds
    None,
    /// Program operations fail once `after` writes have succeeded
    Program { after: usize },
    /// Every read operation fails
    Read,
}

/// Simulated EEPROM
///
/// Readiness is reported only after `ready_delay` polls following
/// [`EepromBackend::peripheral_enable`], like a peripheral still in reset.
pub struct SimEeprom<const WORDS: usize> {
    cells: [u32; WORDS],
    clock_enabled: bool,
    ready_delay: u32,
    polls: Cell<u32>,
    init_status: InitStatus,
    initialized: bool,
    fault: Fault,
    writes_ok: usize,
    write_calls: usize,
    read_calls: usize,
}

impl<const WORDS: usize> Default for SimEeprom<WORDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WORDS: usize> SimEeprom<WORDS> {
    /// Create an erased EEPROM that becomes ready on the first poll
    pub const fn new() -> Self {
        Self {
            cells: [ERASED_WORD; WORDS],
            clock_enabled: false,
            ready_delay: 0,
            polls: Cell::new(0),
            init_status: InitStatus::Ok,
            initialized: false,
            fault: Fault::None,
            writes_ok: 0,
            write_calls: 0,
            read_calls: 0,
        }
    }

    /// Create an EEPROM that already passed its boot sequence
    pub fn ready() -> Self {
        let mut sim = Self::new();
        sim.clock_enabled = true;
        sim.initialized = true;
        sim
    }

    /// Require `polls` readiness polls before reporting ready
    pub fn with_ready_delay(mut self, polls: u32) -> Self {
        self.ready_delay = polls;
        self
    }

    /// Make [`EepromBackend::init`] report `status`
    pub fn with_init_status(mut self, status: InitStatus) -> Self {
        self.init_status = status;
        self
    }

    /// Inject a failure mode
    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.fault = fault;
        self
    }

    /// Change the injected failure mode
    pub fn set_fault(&mut self, fault: Fault) {
        self.fault = fault;
    }

    /// Restore every cell to the erased value
    pub fn erase_all(&mut self) {
        self.cells = [ERASED_WORD; WORDS];
    }

    /// Raw view of the cells, indexed by word
    pub fn cells(&self) -> &[u32; WORDS] {
        &self.cells
    }

    /// Word stored at a byte address, bypassing fault injection
    pub fn peek(&self, address: u32) -> Option<u32> {
        if !is_word_aligned(address) {
            return None;
        }
        self.cells.get((address / WORD_SIZE) as usize).copied()
    }

    /// Number of readiness polls seen since clock enable
    pub fn ready_polls(&self) -> u32 {
        self.polls.get()
    }

    /// Number of `write_words` calls, including rejected ones
    pub fn write_calls(&self) -> usize {
        self.write_calls
    }

    /// Number of `read_words` calls, including rejected ones
    pub fn read_calls(&self) -> usize {
        self.read_calls
    }

    /// Map a byte address and word count onto a cell range
    fn cell_range(&self, address: u32, words: usize) -> Result<Range<usize>, BackendError> {
        if !self.initialized {
            return Err(BackendError::NotReady);
        }
        // The vendor driver leaves misaligned access undefined; reject it here
        if !is_word_aligned(address) {
            return Err(BackendError::OutOfBounds);
        }
        let start = (address / WORD_SIZE) as usize;
        let end = start.checked_add(words).ok_or(BackendError::OutOfBounds)?;
        if end > WORDS {
            return Err(BackendError::OutOfBounds);
        }
        Ok(start..end)
    }
}

impl<const WORDS: usize> EepromBackend for SimEeprom<WORDS> {
    fn peripheral_enable(&mut self) {
        self.clock_enabled = true;
        self.polls.set(0);
    }

    fn peripheral_ready(&self) -> bool {
        if !self.clock_enabled {
            return false;
        }
        let polls = self.polls.get().saturating_add(1);
        self.polls.set(polls);
        polls > self.ready_delay
    }

    fn init(&mut self) -> InitStatus {
        self.initialized = self.clock_enabled && self.init_status.is_ok();
        if self.clock_enabled {
            self.init_status
        } else {
            InitStatus::Error
        }
    }

    fn write_words(&mut self, address: u32, words: &[u32]) -> Result<(), BackendError> {
        self.write_calls += 1;
        let range = self.cell_range(address, words.len())?;
        if let Fault::Program { after } = self.fault {
            if self.writes_ok >= after {
                return Err(BackendError::Program);
            }
        }
        self.cells[range].copy_from_slice(words);
        self.writes_ok += 1;
        Ok(())
    }

    fn read_words(&mut self, address: u32, buffer: &mut [u32]) -> Result<(), BackendError> {
        self.read_calls += 1;
        let range = self.cell_range(address, buffer.len())?;
        if self.fault == Fault::Read {
            return Err(BackendError::Read);
        }
        buffer.copy_from_slice(&self.cells[range]);
        Ok(())
    }

    fn size_bytes(&self) -> u32 {
        (WORDS as u32) * WORD_SIZE
    }
}
