//! Encoder configuration types

/// Shortest supported polling interval
pub const MIN_TICK_INTERVAL_MS: u32 = 1;

/// Longest supported polling interval
///
/// Above this, a brisk turn moves more than one quarter-step between
/// samples and most transitions decode as skipped.
pub const MAX_TICK_INTERVAL_MS: u32 = 5;

/// Pull resistor applied to the encoder input lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputPull {
    /// No internal pull (the PMOD ENC board has its own resistors)
    #[default]
    None,
    /// Internal pull-up
    Up,
    /// Internal pull-down
    Down,
}

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Polling interval is shorter than [`MIN_TICK_INTERVAL_MS`]
    TickIntervalTooShort,
    /// Polling interval is longer than [`MAX_TICK_INTERVAL_MS`]
    TickIntervalTooLong,
}

/// Encoder polling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Sampling period in milliseconds
    pub tick_interval_ms: u32,
    /// Swap clockwise and counter-clockwise (module mounted reversed)
    pub invert_direction: bool,
    /// Pull resistor for all four lines
    pub pull: InputPull,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1,
            invert_direction: false,
            pull: InputPull::None,
        }
    }
}

impl EncoderConfig {
    /// Check the configuration for values the driver cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms < MIN_TICK_INTERVAL_MS {
            return Err(ConfigError::TickIntervalTooShort);
        }
        if self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(ConfigError::TickIntervalTooLong);
        }
        Ok(())
    }
}
