//! Boot gate state machine
//!
//! The storage layer is usable only once this machine reaches `Ready`.

use wordstore_hal::{EepromBackend, InitStatus};

use super::events::BootEvent;
use crate::fmt::{debug, error, info};

/// Peripheral bring-up states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootState {
    /// Power-on, clock domain still gated
    Uninitialized,
    /// Clock enabled, peripheral still in reset
    ClockEnabled,
    /// Peripheral out of reset, backend not yet initialized
    PeripheralReady,
    /// Backend initialized; storage may be used
    Ready,
    /// Backend initialization failed; storage must not be used
    Failed(InitStatus),
}

impl BootState {
    /// Check if storage may be accessed in this state
    pub fn is_ready(&self) -> bool {
        matches!(self, BootState::Ready)
    }

    /// Check if this is the failure state
    pub fn is_failed(&self) -> bool {
        matches!(self, BootState::Failed(_))
    }

    /// Check if no further event changes this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, BootState::Ready | BootState::Failed(_))
    }

    /// Process an event and return the next state
    pub fn transition(self, event: BootEvent) -> Self {
        match (self, event) {
            (BootState::Uninitialized, BootEvent::ClockEnabled) => BootState::ClockEnabled,
            (BootState::ClockEnabled, BootEvent::PeripheralReady) => BootState::PeripheralReady,
            (BootState::PeripheralReady, BootEvent::InitSucceeded) => BootState::Ready,
            (BootState::PeripheralReady, BootEvent::InitFailed(status)) => {
                BootState::Failed(status)
            }

            // Default: stay in current state
            _ => self,
        }
    }
}

/// Drive a backend through the boot sequence
///
/// Enables the clock, spins until the peripheral reports ready, then runs
/// the backend's one-shot initialization. There is no timeout and no
/// retry; the returned state is always terminal.
pub fn run_boot_sequence<B: EepromBackend>(backend: &mut B) -> BootState {
    let mut state = BootState::Uninitialized;

    backend.peripheral_enable();
    state = state.transition(BootEvent::ClockEnabled);
    debug!("EEPROM clock enabled");

    while !backend.peripheral_ready() {
        core::hint::spin_loop();
    }
    state = state.transition(BootEvent::PeripheralReady);

    let status = backend.init();
    state = state.transition(BootEvent::from_init_status(status));

    match state {
        BootState::Ready => info!("EEPROM ready ({} bytes)", backend.size_bytes()),
        _ => error!("EEPROM init failed with status {}", status.as_u32()),
    }

    state
}

/// Park the core forever
///
/// Used when storage failed to come up and the controller cannot
/// proceed safely.
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordstore_hal_sim::SimEeprom;

    type Sim = SimEeprom<16>;

    #[test]
    fn test_happy_path() {
        let state = BootState::Uninitialized
            .transition(BootEvent::ClockEnabled)
            .transition(BootEvent::PeripheralReady)
            .transition(BootEvent::InitSucceeded);
        assert_eq!(state, BootState::Ready);
        assert!(state.is_ready());
        assert!(state.is_terminal());
    }

    #[test]
    fn test_init_failure_is_terminal() {
        let failed = BootState::PeripheralReady
            .transition(BootEvent::InitFailed(InitStatus::Error));
        assert_eq!(failed, BootState::Failed(InitStatus::Error));
        assert!(failed.is_failed());

        let events = [
            BootEvent::ClockEnabled,
            BootEvent::PeripheralReady,
            BootEvent::InitSucceeded,
        ];
        for event in events {
            assert_eq!(failed.transition(event), failed);
        }
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        assert_eq!(
            BootState::Uninitialized.transition(BootEvent::InitSucceeded),
            BootState::Uninitialized
        );
        assert_eq!(
            BootState::ClockEnabled.transition(BootEvent::InitSucceeded),
            BootState::ClockEnabled
        );
        assert_eq!(
            BootState::Ready.transition(BootEvent::InitFailed(InitStatus::Error)),
            BootState::Ready
        );
    }

    #[test]
    fn test_init_status_mapping() {
        assert_eq!(
            BootEvent::from_init_status(InitStatus::Ok),
            BootEvent::InitSucceeded
        );
        assert_eq!(
            BootEvent::from_init_status(InitStatus::Error),
            BootEvent::InitFailed(InitStatus::Error)
        );
    }

    #[test]
    fn test_sequence_waits_for_ready() {
        let mut sim = Sim::new().with_ready_delay(5);
        assert_eq!(run_boot_sequence(&mut sim), BootState::Ready);
        assert_eq!(sim.ready_polls(), 6);
    }

    #[test]
    fn test_sequence_reports_failure() {
        let mut sim = Sim::new().with_init_status(InitStatus::Error);
        assert_eq!(
            run_boot_sequence(&mut sim),
            BootState::Failed(InitStatus::Error)
        );
    }
}
