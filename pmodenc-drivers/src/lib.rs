//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the sampler trait
//! defined in pmodenc-core for the PMOD ENC module:
//!
//! - Four-pin sampler (one digital input per line)
//! - Port sampler (one data register read, masked)
//! - Polling driver tying a sampler to the encoder state

#![no_std]
#![deny(unsafe_code)]

pub mod encoder;

pub use encoder::{PmodEnc, PmodEncPins, PmodEncPort};
