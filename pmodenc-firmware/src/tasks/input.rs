//! Input consumer task
//!
//! Receives encoder events and keeps the selection index the menu would
//! use. Rendering and menu actions live elsewhere; this task only tracks
//! and logs the user's input.

use defmt::*;

use pmodenc_core::EncoderEvent;

use crate::channels::INPUT_CHANNEL;

/// Input consumer task
#[embassy_executor::task]
pub async fn input_task() {
    info!("Input task started");

    let mut selection: i32 = 0;

    loop {
        match INPUT_CHANNEL.receive().await {
            EncoderEvent::Rotated(delta) => {
                selection = selection.wrapping_add(i32::from(delta));
                debug!("Selection: {}", selection);
            }
            EncoderEvent::ButtonPressed => {
                info!("Select item {}", selection);
            }
            EncoderEvent::ButtonReleased => {
                trace!("Button released");
            }
            EncoderEvent::SwitchChanged(on) => {
                info!("Switch: {}", if on { "on" } else { "off" });
            }
        }
    }
}
