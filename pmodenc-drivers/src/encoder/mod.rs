//! PMOD ENC rotary encoder driver
//!
//! [`PmodEnc`] pairs a sampler with the encoder state. The owner calls
//! [`PmodEnc::poll`] once per tick (every 1 ms); each call samples the lines
//! once and decodes against the previous sample. The driver never blocks
//! and has no timer of its own, so any periodic context can drive it.

pub mod pins;
pub mod port;

pub use pins::PmodEncPins;
pub use port::PmodEncPort;

use pmodenc_core::{EncoderConfig, EncoderSampler, EncoderTracker, PinSample, TickReport};

/// Polled PMOD ENC driver
pub struct PmodEnc<S> {
    sampler: S,
    tracker: EncoderTracker,
}

impl<S: EncoderSampler> PmodEnc<S> {
    /// Create a driver with the default configuration
    ///
    /// Takes one sample immediately to seed the previous state.
    pub fn new(sampler: S) -> Self {
        Self::with_config(sampler, &EncoderConfig::default())
    }

    /// Create a driver with an explicit configuration
    pub fn with_config(mut sampler: S, config: &EncoderConfig) -> Self {
        let initial = sampler.sample();
        Self {
            sampler,
            tracker: EncoderTracker::with_config(initial, config),
        }
    }

    /// Run one sample-and-decode cycle
    pub fn poll(&mut self) -> TickReport {
        let sample = self.sampler.sample();
        self.tracker.tick(sample)
    }

    /// Read the lines without advancing the encoder state
    pub fn peek(&mut self) -> PinSample {
        self.sampler.sample()
    }

    /// Encoder state (position, button latch, counters)
    pub fn tracker(&self) -> &EncoderTracker {
        &self.tracker
    }

    /// Mutable encoder state
    pub fn tracker_mut(&mut self) -> &mut EncoderTracker {
        &mut self.tracker
    }

    /// Release the sampler
    pub fn release(self) -> S {
        self.sampler
    }
}
