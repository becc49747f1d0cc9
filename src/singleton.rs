//! Singleton Pattern: one race control for the whole process.
//!
//! [`RaceControl::instance`] initializes lazily through a [`OnceLock`], so
//! concurrent first calls still agree on a single instance. The status itself
//! sits behind a [`Mutex`] and every read and write goes through it.
//!
//! There is no public constructor:
//!
//! ```compile_fail
//! use f1_creational_patterns::singleton::RaceControl;
//!
//! let rogue = RaceControl::new();
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use itertools::Itertools;
use log::{info, warn};

use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RaceStatus {
    #[default]
    Green,
    Yellow,
    Red,
    SafetyCar,
}

impl RaceStatus {
    pub const ALL: [RaceStatus; 4] = [
        RaceStatus::Green,
        RaceStatus::Yellow,
        RaceStatus::Red,
        RaceStatus::SafetyCar,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RaceStatus::Green => "GREEN",
            RaceStatus::Yellow => "YELLOW",
            RaceStatus::Red => "RED",
            RaceStatus::SafetyCar => "SAFETY_CAR",
        }
    }

    /// Comma separated list of accepted flag names.
    pub fn allowed() -> String {
        Self::ALL.iter().map(|status| status.as_str()).join(", ")
    }
}

impl fmt::Display for RaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RaceStatus {
    type Err = PatternError;

    // Flag names are exact; "green" is not a flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| PatternError::InvalidStatus(s.to_string()))
    }
}

#[derive(Debug)]
pub struct RaceControl {
    status: Mutex<RaceStatus>,
}

impl RaceControl {
    fn new() -> Self {
        Self {
            status: Mutex::new(RaceStatus::Green),
        }
    }

    pub fn instance() -> &'static RaceControl {
        static INSTANCE: OnceLock<RaceControl> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            info!("race control online, track is {}", RaceStatus::Green);
            RaceControl::new()
        })
    }

    fn lock(&self) -> MutexGuard<'_, RaceStatus> {
        self.status.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("race control status lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    pub fn status(&self) -> RaceStatus {
        *self.lock()
    }

    pub fn set_status(&self, status: RaceStatus) {
        let mut current = self.lock();
        if *current != status {
            info!("race control: {} -> {}", *current, status);
        }
        *current = status;
    }

    /// Set the status from its flag name, rejecting anything that is not a flag.
    pub fn update_status(&self, status: &str) -> Result<(), PatternError> {
        let status = status.parse::<RaceStatus>()?;
        self.set_status(status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_singleton_identity() {
        let a = RaceControl::instance();
        let b = RaceControl::instance();
        assert!(std::ptr::eq(a, b));
    }

    // The only test that mutates the global instance.
    #[test]
    fn test_state_consistency() {
        let a = RaceControl::instance();
        let b = RaceControl::instance();
        assert_eq!(a.status(), RaceStatus::Green);

        a.update_status("YELLOW").unwrap();
        assert_eq!(b.status(), RaceStatus::Yellow);

        a.update_status("GREEN").unwrap();
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(RaceControl::new().status(), RaceStatus::Green);
    }

    #[test]
    fn test_thread_safety() {
        let handles: Vec<_> = (0..50)
            .map(|_| thread::spawn(|| RaceControl::instance() as *const RaceControl as usize))
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let first = addresses[0];
        assert!(addresses.iter().all(|&addr| addr == first));
        assert_eq!(first, RaceControl::instance() as *const RaceControl as usize);
    }

    #[test]
    fn test_invalid_status_raises_error() {
        let control = RaceControl::new();
        let err = control.update_status("PURPLE").unwrap_err();

        assert!(err.to_string().contains("Status must be one of"));
        assert_eq!(control.status(), RaceStatus::Green);
    }

    #[test]
    fn test_status_names_round_trip() {
        for status in RaceStatus::ALL {
            assert_eq!(status.to_string().parse::<RaceStatus>(), Ok(status));
        }
        assert!("green".parse::<RaceStatus>().is_err());
        assert_eq!(RaceStatus::allowed(), "GREEN, YELLOW, RED, SAFETY_CAR");
    }

    #[test]
    fn test_recovers_from_poisoned_lock() {
        let control = RaceControl::new();
        let _ = thread::scope(|s| {
            s.spawn(|| {
                let _held = control.status.lock().unwrap();
                panic!("marshal post on fire");
            })
            .join()
        });

        assert!(control.status.is_poisoned());
        control.set_status(RaceStatus::Red);
        assert_eq!(control.status(), RaceStatus::Red);
    }
}
