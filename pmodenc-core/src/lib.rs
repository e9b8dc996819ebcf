//! Board-agnostic core logic for the PMOD ENC rotary encoder
//!
//! This crate contains everything that does not touch hardware:
//!
//! - Pin sample model (packing/unpacking of the 4-bit status value)
//! - Quadrature transition decoding
//! - Per-tick encoder state owned by the polling task
//! - Encoder events for the menu consumer
//! - Degraded-input diagnostics
//! - Configuration type definitions
//! - The sampler trait implemented by the drivers
//!
//! # Tick cycle
//!
//! ```text
//! sampler ──PinSample──▶ EncoderTracker::tick ──TickReport──▶ consumer
//!                            │        ▲
//!                            ▼        │
//!                         decoder   previous sample
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod decoder;
pub mod diagnostics;
pub mod events;
pub mod sample;
pub mod tracker;
pub mod traits;

pub use config::{ConfigError, EncoderConfig, InputPull};
pub use decoder::{button_pressed, classify, decode, switch_on, RotationDelta, Transition};
pub use diagnostics::{DecodeStats, InputHealth};
pub use events::EncoderEvent;
pub use sample::{PinSample, QuadratureState};
pub use tracker::{EncoderTracker, TickReport};
pub use traits::EncoderSampler;
