//! Compiled-in encoder configuration
//!
//! `ENCODER_CONFIG` is generated by build.rs from encoder.toml, which has
//! already been validated at build time.

use embassy_rp::gpio::Pull;
use pmodenc_core::InputPull;

include!(concat!(env!("OUT_DIR"), "/encoder_config.rs"));

/// Map the configured pull to the RP2040 pad setting
pub fn pull(pull: InputPull) -> Pull {
    match pull {
        InputPull::None => Pull::None,
        InputPull::Up => Pull::Up,
        InputPull::Down => Pull::Down,
    }
}
