//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod encoder;
pub mod input;

pub use encoder::{encoder_task, BoardEncoder};
pub use input::input_task;
