//! Degraded-input diagnostics
//!
//! Skipped transitions never stop the polling task. They are counted here
//! so the application can report unreliable wiring or a polling rate that
//! is too slow for the way the knob is being turned.

use crate::decoder::Transition;

/// Consecutive skipped transitions before the input is reported unstable
pub const MAX_CONSECUTIVE_SKIPS: u8 = 3;

/// Input health status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputHealth {
    /// Transitions decode normally
    Ok,
    /// Several skipped transitions in a row
    Unstable,
}

/// Transition counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodeStats {
    /// Ticks recorded
    ticks: u32,
    /// Clockwise steps decoded
    clockwise: u32,
    /// Counter-clockwise steps decoded
    counter_clockwise: u32,
    /// Skipped (diagonal) transitions
    skipped: u32,
    /// Skipped transitions since the last non-skipped one
    consecutive_skipped: u8,
}

impl DecodeStats {
    /// Create empty counters
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            clockwise: 0,
            counter_clockwise: 0,
            skipped: 0,
            consecutive_skipped: 0,
        }
    }

    /// Record one decoded transition
    pub fn record(&mut self, transition: Transition) {
        self.ticks = self.ticks.saturating_add(1);

        match transition {
            Transition::Hold => {}
            Transition::Clockwise => self.clockwise = self.clockwise.saturating_add(1),
            Transition::CounterClockwise => {
                self.counter_clockwise = self.counter_clockwise.saturating_add(1)
            }
            Transition::Skipped => {
                self.skipped = self.skipped.saturating_add(1);
                self.consecutive_skipped = self.consecutive_skipped.saturating_add(1);
                return;
            }
        }

        self.consecutive_skipped = 0;
    }

    /// Check input health
    pub fn health(&self) -> InputHealth {
        if self.consecutive_skipped >= MAX_CONSECUTIVE_SKIPS {
            InputHealth::Unstable
        } else {
            InputHealth::Ok
        }
    }

    /// Clear all counters
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Clear the totals, keeping the current run of skipped transitions
    ///
    /// Used after a periodic report so an ongoing bounce stays `Unstable`.
    pub fn reset_totals(&mut self) {
        *self = Self {
            consecutive_skipped: self.consecutive_skipped,
            ..Self::new()
        };
    }

    /// Ticks recorded
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Clockwise steps decoded
    pub fn clockwise(&self) -> u32 {
        self.clockwise
    }

    /// Counter-clockwise steps decoded
    pub fn counter_clockwise(&self) -> u32 {
        self.counter_clockwise
    }

    /// Skipped (diagonal) transitions
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    /// Skipped transitions since the last non-skipped one
    pub fn consecutive_skipped(&self) -> u8 {
        self.consecutive_skipped
    }
}
