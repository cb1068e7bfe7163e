//! Storage facade
//!
//! Owns a booted backend and the configuration, and exposes the record
//! and name operations. Every access takes `&mut self`; there is exactly
//! one caller at a time.

use wordstore_hal::{EepromBackend, InitStatus};

use crate::boot::{halt, run_boot_sequence, BootState};
use crate::codec::{name, record, Name};
use crate::config::StorageConfig;
use crate::error::{InitError, StorageError};
use crate::fmt::error;

/// EEPROM persistence for names and records
pub struct Storage<B> {
    backend: B,
    config: StorageConfig,
}

impl<B: EepromBackend> Storage<B> {
    /// Bring the backend up and wrap it
    ///
    /// Validates the configuration before touching the hardware.
    pub fn init(mut backend: B, config: StorageConfig) -> Result<Self, InitError> {
        config.validate()?;

        match run_boot_sequence(&mut backend) {
            BootState::Ready => Ok(Self { backend, config }),
            BootState::Failed(status) => Err(InitError::Backend(status)),
            // run_boot_sequence only returns terminal states
            _ => Err(InitError::Backend(InitStatus::Error)),
        }
    }

    /// Bring the backend up, parking the core forever on failure
    ///
    /// Boot-time gate for firmware that cannot run without storage.
    pub fn init_or_halt(backend: B, config: StorageConfig) -> Self {
        match Self::init(backend, config) {
            Ok(storage) => storage,
            Err(e) => {
                error!("Storage unavailable, halting: {:?}", e);
                halt()
            }
        }
    }

    /// Wrap a backend that has already been brought up
    pub fn from_ready(backend: B, config: StorageConfig) -> Self {
        Self { backend, config }
    }

    /// Active configuration
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Borrow the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Borrow the backend mutably
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Release the backend
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Program a record at a word-aligned address
    pub fn write_record(&mut self, address: u32, words: &[u32]) -> Result<(), StorageError> {
        record::write_record(&mut self.backend, address, words)
    }

    /// Read the single word at a word-aligned address
    pub fn read_record(&mut self, address: u32) -> Result<u32, StorageError> {
        record::read_record(&mut self.backend, address)
    }

    /// Read consecutive words from a word-aligned address
    pub fn read_record_into(
        &mut self,
        address: u32,
        buffer: &mut [u32],
    ) -> Result<(), StorageError> {
        record::read_record_into(&mut self.backend, address, buffer)
    }

    /// Store a name, padded or cut to eight bytes
    pub fn write_name(&mut self, address: u32, bytes: &[u8]) -> Result<(), StorageError> {
        name::write_name(&mut self.backend, address, bytes)
    }

    /// Load a name, reporting blank slots with the configured sentinel
    pub fn read_name(&mut self, address: u32) -> Result<Name, StorageError> {
        name::read_name(&mut self.backend, address, self.config.sentinel)
    }

    /// Store the button-game player name
    pub fn write_button_name(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        self.write_name(self.config.button_name_addr, bytes)
    }

    /// Load the button-game player name
    pub fn read_button_name(&mut self) -> Result<Name, StorageError> {
        self.read_name(self.config.button_name_addr)
    }

    /// Store the shake-game player name
    pub fn write_shake_name(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        self.write_name(self.config.shake_name_addr, bytes)
    }

    /// Load the shake-game player name
    pub fn read_shake_name(&mut self) -> Result<Name, StorageError> {
        self.read_name(self.config.shake_name_addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::int_to_text;
    use wordstore_hal::BackendError;
    use wordstore_hal_sim::{Fault, SimEeprom};

    type Sim = SimEeprom<64>;

    fn storage() -> Storage<Sim> {
        Storage::init(Sim::new().with_ready_delay(2), StorageConfig::default()).unwrap()
    }

    #[test]
    fn test_init_success() {
        let storage = storage();
        assert_eq!(storage.config(), &StorageConfig::default());
        assert_eq!(storage.backend().ready_polls(), 3);
    }

    #[test]
    fn test_init_or_halt_success() {
        let sim = Sim::new().with_ready_delay(1);
        let mut storage = Storage::init_or_halt(sim, StorageConfig::default());
        assert_eq!(storage.backend().ready_polls(), 2);

        storage.write_record(8, &[42]).unwrap();
        assert_eq!(storage.read_record(8), Ok(42));
    }

    #[test]
    fn test_init_backend_failure() {
        let sim = Sim::new().with_init_status(InitStatus::Error);
        let result = Storage::init(sim, StorageConfig::default());
        assert!(matches!(result, Err(InitError::Backend(InitStatus::Error))));
    }

    #[test]
    fn test_init_rejects_bad_config_before_boot() {
        let config = StorageConfig::new().with_sentinel(b' ');
        let result = Storage::init(Sim::new(), config);
        assert!(matches!(
            result,
            Err(InitError::Config(ConfigError::SentinelNotPrintable(b' ')))
        ));
    }

    #[test]
    fn test_records_and_names_share_address_space() {
        let mut storage = storage();

        storage.write_record(48, &[1234]).unwrap();
        storage.write_button_name(b"ALICE").unwrap();
        storage.write_shake_name(b"BOBBYTABLES").unwrap();

        assert_eq!(storage.read_record(48), Ok(1234));
        assert_eq!(storage.read_button_name().unwrap().as_str(), Some("ALICE   "));
        assert_eq!(storage.read_shake_name().unwrap().as_str(), Some("BOBBYTAB"));
    }

    #[test]
    fn test_unset_name_uses_configured_sentinel() {
        let sim = Sim::new();
        let config = StorageConfig::new().with_sentinel(b'?');
        let mut storage = Storage::init(sim, config).unwrap();

        storage.write_button_name(b"").unwrap();
        let name = storage.read_button_name().unwrap();
        assert_eq!(name.as_str(), Some("????????"));
        assert!(name.is_unset(b'?'));
    }

    #[test]
    fn test_score_rendering() {
        let mut storage = storage();
        storage.write_record(52, &[12345]).unwrap();

        let score = storage.read_record(52).unwrap();
        assert_eq!(int_to_text(score).as_str(), "2345");
    }

    #[test]
    fn test_errors_surface_through_facade() {
        let mut storage = storage();
        assert_eq!(
            storage.write_record(3, &[1]),
            Err(StorageError::MisalignedAddress(3))
        );

        storage.backend_mut().set_fault(Fault::Read);
        assert_eq!(
            storage.read_name(0),
            Err(StorageError::Backend(BackendError::Read))
        );
    }

    #[test]
    fn test_from_ready_and_release() {
        let mut storage = Storage::from_ready(Sim::ready(), StorageConfig::default());
        storage.write_record(0, &[7, 8]).unwrap();

        let mut words = [0u32; 2];
        storage.read_record_into(0, &mut words).unwrap();
        assert_eq!(words, [7, 8]);

        let sim = storage.into_backend();
        assert_eq!(sim.peek(4), Some(8));
    }
}
