//! Encoder polling task
//!
//! Samples the PMOD ENC lines on a fixed ticker and forwards the decoded
//! events to the input task. One `poll()` per tick; the task owns the
//! encoder state, so nothing else touches the previous sample.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use pmodenc_core::{EncoderConfig, InputHealth};
use pmodenc_drivers::{PmodEnc, PmodEncPins};
use pmodenc_hal::EhInput;

use crate::channels::INPUT_CHANNEL;

/// Ticks between diagnostics reports
const REPORT_INTERVAL_TICKS: u32 = 10_000;

type Line = EhInput<Input<'static>>;

/// PMOD ENC wired to four RP2040 inputs
pub type BoardEncoder = PmodEnc<PmodEncPins<Line, Line, Line, Line>>;

/// Encoder polling task
#[embassy_executor::task]
pub async fn encoder_task(mut encoder: BoardEncoder, config: EncoderConfig) {
    info!(
        "Encoder task started ({}ms tick, inverted={})",
        config.tick_interval_ms, config.invert_direction
    );

    let mut ticker = Ticker::every(Duration::from_millis(config.tick_interval_ms as u64));
    let mut last_health = InputHealth::Ok;

    loop {
        ticker.next().await;

        let report = encoder.poll();

        if report.is_degraded() {
            trace!("Skipped transition");
        }

        for event in report.events() {
            if INPUT_CHANNEL.try_send(event).is_err() {
                warn!("Input channel full, dropping {:?}", event);
            }
        }

        let stats = encoder.tracker().stats();

        let health = stats.health();
        if health != last_health {
            match health {
                InputHealth::Unstable => warn!(
                    "Encoder input unstable: {} skipped transitions in a row",
                    stats.consecutive_skipped()
                ),
                InputHealth::Ok => info!("Encoder input stable again"),
            }
            last_health = health;
        }

        if stats.ticks() >= REPORT_INTERVAL_TICKS {
            if stats.skipped() > 0 {
                debug!(
                    "Encoder stats: cw={} ccw={} skipped={}",
                    stats.clockwise(),
                    stats.counter_clockwise(),
                    stats.skipped()
                );
            }
            encoder.tracker_mut().stats_mut().reset_totals();
        }
    }
}
