//! PMOD ENC Hardware Abstraction Layer
//!
//! This crate defines the input traits the encoder samplers are written
//! against. Chip support comes either from a direct implementation of these
//! traits or through [`gpio::EhInput`], which adapts any infallible
//! `embedded-hal` 1.0 digital input.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (pmodenc-firmware, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pmodenc-drivers (pin / port samplers)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pmodenc-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Single digital input line
//! - [`gpio::InputPort`] - Whole input port data register

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{EhInput, InputPin, InputPort};
