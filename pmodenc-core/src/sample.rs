//! Pin sample model
//!
//! The four encoder lines are read as one 4-bit status value:
//!
//! ```text
//! bit:   3      2      1   0
//!      ┌──────┬──────┬───┬───┐
//!      │ SWT  │ BTN  │ B │ A │
//!      └──────┴──────┴───┴───┘
//! ```
//!
//! Packing and unpacking happen only here. Everything downstream works on
//! the named fields of [`PinSample`] and on [`QuadratureState`].

/// Encoder channel A
pub const PIN_A_MASK: u8 = 0x01;
/// Encoder channel B
pub const PIN_B_MASK: u8 = 0x02;
/// Push-button
pub const BUTTON_MASK: u8 = 0x04;
/// Slide switch
pub const SWITCH_MASK: u8 = 0x08;
/// All four encoder lines
pub const ALL_PINS_MASK: u8 = 0x0F;

/// Combined level of the two quadrature channels
///
/// Discriminants are the 2-bit value `BA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum QuadratureState {
    /// A=0, B=0
    BothLow = 0b00,
    /// A=1, B=0
    AHigh = 0b01,
    /// A=0, B=1
    BHigh = 0b10,
    /// A=1, B=1
    BothHigh = 0b11,
}

impl QuadratureState {
    /// All four states in clockwise order, starting from `BothLow`
    pub const CLOCKWISE_CYCLE: [QuadratureState; 4] = [
        QuadratureState::BothLow,
        QuadratureState::AHigh,
        QuadratureState::BothHigh,
        QuadratureState::BHigh,
    ];

    /// Build a state from the channel levels
    pub const fn from_levels(a: bool, b: bool) -> Self {
        match (a, b) {
            (false, false) => QuadratureState::BothLow,
            (true, false) => QuadratureState::AHigh,
            (false, true) => QuadratureState::BHigh,
            (true, true) => QuadratureState::BothHigh,
        }
    }

    /// Build a state from the low two bits of `bits` (higher bits are ignored)
    pub const fn from_bits(bits: u8) -> Self {
        Self::from_levels(bits & PIN_A_MASK != 0, bits & PIN_B_MASK != 0)
    }

    /// The 2-bit value `BA`
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Level of channel A
    pub const fn a(self) -> bool {
        self.bits() & PIN_A_MASK != 0
    }

    /// Level of channel B
    pub const fn b(self) -> bool {
        self.bits() & PIN_B_MASK != 0
    }
}

/// One reading of the four encoder lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinSample {
    /// Encoder channel A
    pub a: bool,
    /// Encoder channel B
    pub b: bool,
    /// Push-button (true = pressed)
    pub button: bool,
    /// Slide switch (true = on)
    pub switch: bool,
}

impl PinSample {
    /// Unpack a raw status value; bits above bit 3 are masked off
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            a: bits & PIN_A_MASK != 0,
            b: bits & PIN_B_MASK != 0,
            button: bits & BUTTON_MASK != 0,
            switch: bits & SWITCH_MASK != 0,
        }
    }

    /// Pack into the raw 4-bit status value
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.a {
            bits |= PIN_A_MASK;
        }
        if self.b {
            bits |= PIN_B_MASK;
        }
        if self.button {
            bits |= BUTTON_MASK;
        }
        if self.switch {
            bits |= SWITCH_MASK;
        }
        bits
    }

    /// The quadrature subfield of this sample
    pub const fn quadrature(self) -> QuadratureState {
        QuadratureState::from_levels(self.a, self.b)
    }
}

impl From<u8> for PinSample {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

impl From<PinSample> for u8 {
    fn from(sample: PinSample) -> Self {
        sample.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unpack_named_fields() {
        let sample = PinSample::from_bits(0b1101);
        assert!(sample.a);
        assert!(!sample.b);
        assert!(sample.button);
        assert!(sample.switch);
    }

    #[test]
    fn test_upper_bits_masked() {
        assert_eq!(PinSample::from_bits(0xF5), PinSample::from_bits(0x05));
        assert_eq!(PinSample::from_bits(0xF0).bits(), 0);
    }

    #[test]
    fn test_quadrature_subfield() {
        assert_eq!(PinSample::from_bits(0b0000).quadrature(), QuadratureState::BothLow);
        assert_eq!(PinSample::from_bits(0b1101).quadrature(), QuadratureState::AHigh);
        assert_eq!(PinSample::from_bits(0b0110).quadrature(), QuadratureState::BHigh);
        assert_eq!(PinSample::from_bits(0b1011).quadrature(), QuadratureState::BothHigh);
    }

    #[test]
    fn test_state_levels() {
        assert!(QuadratureState::AHigh.a());
        assert!(!QuadratureState::AHigh.b());
        assert!(!QuadratureState::BHigh.a());
        assert!(QuadratureState::BHigh.b());
        assert_eq!(QuadratureState::from_bits(0b0111), QuadratureState::BothHigh);
    }

    #[test]
    fn test_clockwise_cycle_is_gray_code() {
        let cycle = QuadratureState::CLOCKWISE_CYCLE;
        for i in 0..cycle.len() {
            let next = cycle[(i + 1) % cycle.len()];
            let changed = cycle[i].bits() ^ next.bits();
            assert_eq!(changed.count_ones(), 1);
        }
    }

    proptest! {
        #[test]
        fn prop_bits_survive_unpacking(bits in 0u8..=0x0F) {
            prop_assert_eq!(PinSample::from_bits(bits).bits(), bits);
        }

        #[test]
        fn prop_quadrature_matches_low_bits(bits in any::<u8>()) {
            let sample = PinSample::from(bits);
            prop_assert_eq!(sample.quadrature().bits(), bits & 0b11);
        }
    }
}
