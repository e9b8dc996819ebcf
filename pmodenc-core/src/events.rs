//! Input events for the menu consumer

use crate::decoder::RotationDelta;

/// Event derived from one encoder tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncoderEvent {
    /// Encoder moved one step
    Rotated(RotationDelta),
    /// Button went from released to pressed
    ButtonPressed,
    /// Button went from pressed to released
    ButtonReleased,
    /// Slide switch changed position (true = on)
    SwitchChanged(bool),
}

impl EncoderEvent {
    /// Returns true if this is a rotation event
    pub fn is_rotation(&self) -> bool {
        matches!(self, EncoderEvent::Rotated(_))
    }

    /// Returns true if this is a button event
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            EncoderEvent::ButtonPressed | EncoderEvent::ButtonReleased
        )
    }

    /// Returns the rotation direction as a signed delta (-1, 0, or +1)
    pub fn rotation_delta(&self) -> i8 {
        match self {
            EncoderEvent::Rotated(delta) => delta.as_i8(),
            _ => 0,
        }
    }
}
