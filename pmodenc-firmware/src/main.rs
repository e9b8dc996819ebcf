//! PMOD ENC Firmware
//!
//! Polls a Digilent PMOD ENC (rotary encoder, push-button, slide switch)
//! every millisecond and hands the decoded events to an input task.
//!
//! Wiring:
//!  - PMOD ENC pin 1 (A)    - GPIO2
//!  - PMOD ENC pin 2 (B)    - GPIO3
//!  - PMOD ENC pin 3 (BTN)  - GPIO4
//!  - PMOD ENC pin 4 (SWT)  - GPIO5
//!  - PMOD ENC pin 5 (GND)  - GND
//!  - PMOD ENC pin 6 (VCC)  - 3V3

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::Input;
use {defmt_rtt as _, panic_probe as _};

use pmodenc_drivers::{PmodEnc, PmodEncPins};

mod channels;
mod config;
mod tasks;

use crate::config::ENCODER_CONFIG;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("PMOD ENC firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Configure the four encoder lines as inputs
    let pull = config::pull(ENCODER_CONFIG.pull);
    let pins = PmodEncPins::from_embedded_hal(
        Input::new(p.PIN_2, pull),
        Input::new(p.PIN_3, pull),
        Input::new(p.PIN_4, pull),
        Input::new(p.PIN_5, pull),
    );

    let encoder = PmodEnc::with_config(pins, &ENCODER_CONFIG);
    let initial = encoder.tracker().previous();
    info!(
        "Encoder initialized (state={}, button={}, switch={})",
        initial.quadrature(),
        initial.button,
        initial.switch
    );

    spawner.spawn(tasks::input_task()).unwrap();
    spawner
        .spawn(tasks::encoder_task(encoder, ENCODER_CONFIG))
        .unwrap();

    info!("All tasks spawned");
}
