//! Hardware abstraction traits
//!
//! These traits define the interface between the decoding logic and the
//! hardware-specific samplers in `pmodenc-drivers`.

pub mod sampler;

pub use sampler::EncoderSampler;
