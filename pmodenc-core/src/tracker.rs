//! Per-tick encoder state
//!
//! [`EncoderTracker`] is the state the polling task owns between ticks: the
//! previous sample, the running position, the latched button press and the
//! transition counters. Each call to [`EncoderTracker::tick`] decodes one
//! new sample against the stored one and reports what happened.

use crate::config::EncoderConfig;
use crate::decoder::{classify, RotationDelta, Transition};
use crate::diagnostics::DecodeStats;
use crate::events::EncoderEvent;
use crate::sample::PinSample;

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Transition kind between the previous and current quadrature states,
    /// before direction inversion
    pub transition: Transition,
    /// Rotation after direction inversion
    pub delta: RotationDelta,
    /// Button level in this sample
    pub button_pressed: bool,
    /// Switch level in this sample
    pub switch_on: bool,
    /// Button changed level since the previous sample
    pub button_changed: bool,
    /// Switch changed level since the previous sample
    pub switch_changed: bool,
}

impl TickReport {
    /// Returns true if this tick saw a skipped transition
    pub fn is_degraded(&self) -> bool {
        self.transition.is_skipped()
    }

    /// Events produced by this tick, in rotation, button, switch order
    pub fn events(&self) -> impl Iterator<Item = EncoderEvent> {
        let rotation = self
            .delta
            .is_rotation()
            .then_some(EncoderEvent::Rotated(self.delta));

        let button = self.button_changed.then_some(if self.button_pressed {
            EncoderEvent::ButtonPressed
        } else {
            EncoderEvent::ButtonReleased
        });

        let switch = self
            .switch_changed
            .then_some(EncoderEvent::SwitchChanged(self.switch_on));

        [rotation, button, switch].into_iter().flatten()
    }
}

/// Encoder state owned by the polling task
#[derive(Debug, Clone)]
pub struct EncoderTracker {
    /// Sample from the previous tick
    previous: PinSample,
    /// Swap CW/CCW
    invert_direction: bool,
    /// Running position (+1 per clockwise step)
    position: i32,
    /// Set when the button reads pressed, cleared by the consumer
    button_latched: bool,
    stats: DecodeStats,
}

impl EncoderTracker {
    /// Create a tracker seeded with the first sample
    ///
    /// Seeding avoids decoding a spurious step on the first tick.
    pub fn new(initial: PinSample) -> Self {
        Self::with_config(initial, &EncoderConfig::default())
    }

    /// Create a tracker using the direction setting from `config`
    pub fn with_config(initial: PinSample, config: &EncoderConfig) -> Self {
        Self {
            previous: initial,
            invert_direction: config.invert_direction,
            position: 0,
            button_latched: false,
            stats: DecodeStats::new(),
        }
    }

    /// Process one sample
    ///
    /// Constant-time; never fails. A skipped transition leaves the position
    /// untouched and is counted in [`DecodeStats`].
    pub fn tick(&mut self, sample: PinSample) -> TickReport {
        let previous = self.previous;
        let transition = classify(sample.quadrature(), previous.quadrature());

        let applied = if self.invert_direction {
            transition.reversed()
        } else {
            transition
        };
        let delta = applied.delta();

        self.position = self.position.wrapping_add(i32::from(delta));

        if sample.button {
            self.button_latched = true;
        }

        self.stats.record(applied);
        self.previous = sample;

        TickReport {
            transition,
            delta,
            button_pressed: sample.button,
            switch_on: sample.switch,
            button_changed: sample.button != previous.button,
            switch_changed: sample.switch != previous.switch,
        }
    }

    /// Running position
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Overwrite the running position (e.g. when a new menu is opened)
    pub fn set_position(&mut self, position: i32) {
        self.position = position;
    }

    /// Consume a latched button press
    ///
    /// Returns true once per press latch; the latch is set again on the
    /// next tick that reads the button as pressed.
    pub fn take_button_press(&mut self) -> bool {
        core::mem::take(&mut self.button_latched)
    }

    /// Check for a latched button press without consuming it
    pub fn button_latched(&self) -> bool {
        self.button_latched
    }

    /// Switch level from the last sample
    pub fn switch_on(&self) -> bool {
        self.previous.switch
    }

    /// Sample stored from the last tick
    pub fn previous(&self) -> PinSample {
        self.previous
    }

    /// Transition counters
    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    /// Mutable transition counters (for resetting after a report)
    pub fn stats_mut(&mut self) -> &mut DecodeStats {
        &mut self.stats
    }
}
