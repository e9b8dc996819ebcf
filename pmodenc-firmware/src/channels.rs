//! Inter-task communication channels
//!
//! The encoder task only ever uses non-blocking sends so a slow consumer
//! cannot stretch the 1 ms tick.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use pmodenc_core::EncoderEvent;

/// Channel capacity for encoder events
const INPUT_CHANNEL_SIZE: usize = 16;

/// Encoder events (rotation, button edges, switch changes)
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, EncoderEvent, INPUT_CHANNEL_SIZE> =
    Channel::new();
