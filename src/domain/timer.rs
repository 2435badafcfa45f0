use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::error::ConfigurationError;

/// Purpose of a scheduled task. At most one task per id is live at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TimerId {
    /// Elapsed-time counter refresh on the calendar view
    ElapsedTick,
    /// Deferred reaction to a completed passcode (success or mismatch)
    PasscodeFeedback,
    /// Letter modal shown after the envelope opens
    EnvelopeReveal,
    /// Slideshow advance on the memories view
    MemoriesAdvance,
    HeartSpawn,
    WallClock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    /// Fire once after the delay
    After(Duration),
    /// Fire every period, first firing one period from now
    Every(Duration),
}

impl Schedule {
    pub fn after_ms(ms: u64) -> Self {
        Schedule::After(Duration::from_millis(ms))
    }

    pub fn every_ms(ms: u64) -> Self {
        Schedule::Every(Duration::from_millis(ms))
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Schedule::Every(_))
    }
}

/// A repeating period read from configuration. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub struct IntervalMs(u64);

impl IntervalMs {
    pub fn new(ms: u64) -> Result<Self, ConfigurationError> {
        if ms == 0 {
            return Err(ConfigurationError::ZeroInterval);
        }
        Ok(Self(ms))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for IntervalMs {
    type Error = ConfigurationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

pub const PASSCODE_SUCCESS_DELAY_MS: u64 = 300;
pub const PASSCODE_MISMATCH_DELAY_MS: u64 = 1_000;
pub const ELAPSED_TICK_MS: u64 = 1_000;
pub const ENVELOPE_REVEAL_DELAY_MS: u64 = 1_000;
pub const HEART_SPAWN_MS: u64 = 500;
pub const WALL_CLOCK_MS: u64 = 1_000;
pub const MEMORIES_ADVANCE_DEFAULT: IntervalMs = IntervalMs(4_000);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn interval_rejects_zero() {
        assert_eq!(IntervalMs::new(0), Err(ConfigurationError::ZeroInterval));
        assert_eq!(IntervalMs::new(4_000).map(IntervalMs::get), Ok(4_000));
    }
}
