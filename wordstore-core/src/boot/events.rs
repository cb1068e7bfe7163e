//! Boot gate events

use wordstore_hal::InitStatus;

/// Events observed while bringing the peripheral up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootEvent {
    /// Peripheral clock domain enabled
    ClockEnabled,
    /// Peripheral reported ready after reset
    PeripheralReady,
    /// Backend initialization returned the success status
    InitSucceeded,
    /// Backend initialization returned any other status
    InitFailed(InitStatus),
}

impl BootEvent {
    /// Map a backend init status onto the matching event
    pub fn from_init_status(status: InitStatus) -> Self {
        if status.is_ok() {
            BootEvent::InitSucceeded
        } else {
            BootEvent::InitFailed(status)
        }
    }
}
