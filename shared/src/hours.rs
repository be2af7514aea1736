//! ==============================================================================
//! hours.rs - operating hours and the clock
//! ==============================================================================
//!
//! the open/closed decision is a closed interval: both the opening hour and
//! the closing hour count as open. hours are local wall-clock hours, 0-23,
//! with no timezone normalisation.
//!
//! ==============================================================================

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

const DEFAULT_OPEN_HOUR: u8 = 10;
const DEFAULT_CLOSE_HOUR: u8 = 22;

// ==============================================================================
// operating hours
// ==============================================================================

/// when the restaurant takes visitors
///
/// open_hour < close_hour is assumed, never checked. an inverted pair simply
/// means the restaurant is never open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    pub open_hour: u8,
    pub close_hour: u8,
}

impl OperatingHours {
    pub const fn new(open_hour: u8, close_hour: u8) -> Self {
        Self { open_hour, close_hour }
    }

    /// open from the first minute of open_hour to the last minute of close_hour
    pub fn is_open(&self, hour: u8) -> bool {
        hour >= self.open_hour && hour <= self.close_hour
    }

    pub(crate) fn check_range(&self) -> Result<(), CatalogError> {
        for (field, value) in [("open_hour", self.open_hour), ("close_hour", self.close_hour)] {
            if value > 23 {
                return Err(CatalogError::HourOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_HOUR, DEFAULT_CLOSE_HOUR)
    }
}

// ==============================================================================
// clocks
// ==============================================================================

/// source of the current local hour (0-23)
pub trait Clock {
    fn current_hour(&self) -> u8;
}

/// local time of the host the code runs on, for native builds.
/// the wasm storefront brings its own browser clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn current_hour(&self) -> u8 {
        chrono::Local::now().hour() as u8
    }
}

/// always reports the same hour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u8);

impl Clock for FixedClock {
    fn current_hour(&self) -> u8 {
        self.0
    }
}

// ==============================================================================
// tests
// ==============================================================================
