//! Quadrature transition decoding
//!
//! The two channels are 90° out of phase, so turning the shaft walks the
//! 2-bit state `BA` around a Gray-code cycle:
//!
//! ```text
//! CW:   00 → 01 → 11 → 10 → 00
//! CCW:  00 → 10 → 11 → 01 → 00
//! ```
//!
//! Every (previous, current) pair is one of four kinds: no change, one
//! clockwise step, one counter-clockwise step, or a diagonal jump where both
//! channels changed between two samples. A diagonal cannot come from real
//! rotation at the polling rate; it means a sample was missed or a contact
//! bounced, so it decodes as no movement and is reported as skipped.

use crate::sample::{PinSample, QuadratureState};

/// Rotation decoded from one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationDelta {
    /// One step clockwise (+1)
    Clockwise,
    /// One step counter-clockwise (-1)
    CounterClockwise,
    /// No movement (0)
    NoChange,
}

impl RotationDelta {
    /// Signed step value (-1, 0, or +1)
    pub const fn as_i8(self) -> i8 {
        match self {
            RotationDelta::Clockwise => 1,
            RotationDelta::CounterClockwise => -1,
            RotationDelta::NoChange => 0,
        }
    }

    /// The same movement seen from the other side of the shaft
    pub const fn reversed(self) -> Self {
        match self {
            RotationDelta::Clockwise => RotationDelta::CounterClockwise,
            RotationDelta::CounterClockwise => RotationDelta::Clockwise,
            RotationDelta::NoChange => RotationDelta::NoChange,
        }
    }

    /// Returns true for `Clockwise` and `CounterClockwise`
    pub const fn is_rotation(self) -> bool {
        !matches!(self, RotationDelta::NoChange)
    }
}

impl From<RotationDelta> for i8 {
    fn from(delta: RotationDelta) -> Self {
        delta.as_i8()
    }
}

impl From<RotationDelta> for i32 {
    fn from(delta: RotationDelta) -> Self {
        delta.as_i8() as i32
    }
}

/// Kind of transition between two quadrature states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Same state as the previous sample
    Hold,
    /// Adjacent step along the clockwise cycle
    Clockwise,
    /// Adjacent step along the counter-clockwise cycle
    CounterClockwise,
    /// Both channels changed at once (missed sample or bounce)
    Skipped,
}

impl Transition {
    /// Rotation for this transition; `Skipped` resolves to no movement
    pub const fn delta(self) -> RotationDelta {
        match self {
            Transition::Clockwise => RotationDelta::Clockwise,
            Transition::CounterClockwise => RotationDelta::CounterClockwise,
            Transition::Hold | Transition::Skipped => RotationDelta::NoChange,
        }
    }

    /// The same transition seen from the other side of the shaft
    pub const fn reversed(self) -> Self {
        match self {
            Transition::Clockwise => Transition::CounterClockwise,
            Transition::CounterClockwise => Transition::Clockwise,
            other => other,
        }
    }

    /// Returns true if the transition came from degraded input
    pub const fn is_skipped(self) -> bool {
        matches!(self, Transition::Skipped)
    }
}

/// Classify the transition from `previous` to `current`
pub const fn classify(current: QuadratureState, previous: QuadratureState) -> Transition {
    use crate::sample::QuadratureState::*;

    match (previous, current) {
        (BothLow, BothLow) => Transition::Hold,
        (BothLow, AHigh) => Transition::Clockwise,
        (BothLow, BHigh) => Transition::CounterClockwise,
        (BothLow, BothHigh) => Transition::Skipped,

        (AHigh, BothLow) => Transition::CounterClockwise,
        (AHigh, AHigh) => Transition::Hold,
        (AHigh, BHigh) => Transition::Skipped,
        (AHigh, BothHigh) => Transition::Clockwise,

        (BHigh, BothLow) => Transition::Clockwise,
        (BHigh, AHigh) => Transition::Skipped,
        (BHigh, BHigh) => Transition::Hold,
        (BHigh, BothHigh) => Transition::CounterClockwise,

        (BothHigh, BothLow) => Transition::Skipped,
        (BothHigh, AHigh) => Transition::CounterClockwise,
        (BothHigh, BHigh) => Transition::Clockwise,
        (BothHigh, BothHigh) => Transition::Hold,
    }
}

/// Decode the rotation between two consecutive quadrature states
///
/// Pure and constant-time. Diagonal jumps decode as
/// [`RotationDelta::NoChange`]; use [`classify`] to tell them apart from a
/// genuine hold.
pub const fn decode(current: QuadratureState, previous: QuadratureState) -> RotationDelta {
    classify(current, previous).delta()
}

/// Returns true if the sample reads the button as pressed
pub const fn button_pressed(sample: PinSample) -> bool {
    sample.button
}

/// Returns true if the sample reads the slide switch as on
pub const fn switch_on(sample: PinSample) -> bool {
    sample.switch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::QuadratureState::*;
    use proptest::prelude::*;

    const ALL_STATES: [QuadratureState; 4] = [BothLow, AHigh, BHigh, BothHigh];

    fn state(bits: u8) -> QuadratureState {
        QuadratureState::from_bits(bits)
    }

    #[test]
    fn test_full_transition_table() {
        use crate::decoder::RotationDelta::{Clockwise as Cw, CounterClockwise as Ccw, NoChange as No};

        // rows: previous, columns: current (00, 01, 10, 11)
        let expected = [
            [No, Cw, Ccw, No],
            [Ccw, No, No, Cw],
            [Cw, No, No, Ccw],
            [No, Ccw, Cw, No],
        ];

        for prev in 0..4u8 {
            for cur in 0..4u8 {
                assert_eq!(
                    decode(state(cur), state(prev)),
                    expected[prev as usize][cur as usize],
                    "prev={:02b} cur={:02b}",
                    prev,
                    cur
                );
            }
        }
    }

    #[test]
    fn test_transition_kinds_balanced() {
        let mut counts = [0usize; 4];
        for &prev in &ALL_STATES {
            for &cur in &ALL_STATES {
                let idx = match classify(cur, prev) {
                    Transition::Hold => 0,
                    Transition::Clockwise => 1,
                    Transition::CounterClockwise => 2,
                    Transition::Skipped => 3,
                };
                counts[idx] += 1;
            }
        }
        assert_eq!(counts, [4, 4, 4, 4]);
    }

    #[test]
    fn test_same_state_is_no_change() {
        for &s in &ALL_STATES {
            assert_eq!(decode(s, s), RotationDelta::NoChange);
            assert_eq!(classify(s, s), Transition::Hold);
        }
    }

    #[test]
    fn test_clockwise_cycle() {
        let cycle = [BothLow, AHigh, BothHigh, BHigh, BothLow];
        for pair in cycle.windows(2) {
            assert_eq!(decode(pair[1], pair[0]), RotationDelta::Clockwise);
        }
    }

    #[test]
    fn test_counter_clockwise_cycle() {
        let cycle = [BothLow, BHigh, BothHigh, AHigh, BothLow];
        for pair in cycle.windows(2) {
            assert_eq!(decode(pair[1], pair[0]), RotationDelta::CounterClockwise);
        }
    }

    #[test]
    fn test_diagonals_are_skipped() {
        let diagonals = [
            (BothLow, BothHigh),
            (BothHigh, BothLow),
            (AHigh, BHigh),
            (BHigh, AHigh),
        ];
        for (prev, cur) in diagonals {
            assert_eq!(classify(cur, prev), Transition::Skipped);
            assert_eq!(decode(cur, prev), RotationDelta::NoChange);
        }
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(decode(state(0b01), state(0b00)), RotationDelta::Clockwise);
        assert_eq!(decode(state(0b11), state(0b01)), RotationDelta::Clockwise);
        assert_eq!(decode(state(0b01), state(0b11)), RotationDelta::CounterClockwise);

        let current = PinSample::from_bits(BUTTON_BITS);
        let previous = PinSample::from_bits(0b0000);
        assert_eq!(
            decode(current.quadrature(), previous.quadrature()),
            RotationDelta::NoChange
        );
        assert!(button_pressed(current));

        let jump = classify(state(0b11), state(0b00));
        assert_eq!(jump.delta(), RotationDelta::NoChange);
        assert!(jump.is_skipped());
    }

    const BUTTON_BITS: u8 = crate::sample::BUTTON_MASK;
    const NOT_BUTTON: &[u8] = &[0x01, 0x02, 0x08, 0x0B];
    const NOT_SWITCH: &[u8] = &[0x01, 0x02, 0x04, 0x07];

    #[test]
    fn test_delta_values() {
        assert_eq!(RotationDelta::Clockwise.as_i8(), 1);
        assert_eq!(RotationDelta::CounterClockwise.as_i8(), -1);
        assert_eq!(RotationDelta::NoChange.as_i8(), 0);
        assert_eq!(i32::from(RotationDelta::CounterClockwise), -1);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(RotationDelta::Clockwise.reversed(), RotationDelta::CounterClockwise);
        assert_eq!(RotationDelta::CounterClockwise.reversed(), RotationDelta::Clockwise);
        assert_eq!(RotationDelta::NoChange.reversed(), RotationDelta::NoChange);
        assert!(!RotationDelta::NoChange.is_rotation());

        assert_eq!(Transition::Clockwise.reversed(), Transition::CounterClockwise);
        assert_eq!(Transition::Skipped.reversed(), Transition::Skipped);
        assert_eq!(Transition::Hold.reversed(), Transition::Hold);
    }

    proptest! {
        #[test]
        fn prop_reverse_step_undoes_step(prev in 0u8..4, cur in 0u8..4) {
            let forward = decode(state(cur), state(prev));
            let backward = decode(state(prev), state(cur));
            prop_assert_eq!(forward.as_i8(), -backward.as_i8());
        }

        #[test]
        fn prop_decode_ignores_button_and_switch(prev in any::<u8>(), cur in any::<u8>(), noise in 0u8..4) {
            let prev_sample = PinSample::from_bits(prev);
            let cur_sample = PinSample::from_bits(cur);
            let noisy = PinSample::from_bits(cur ^ (noise << 2));
            prop_assert_eq!(
                decode(cur_sample.quadrature(), prev_sample.quadrature()),
                decode(noisy.quadrature(), prev_sample.quadrature())
            );
        }

        #[test]
        fn prop_button_ignores_other_bits(bits in 0u8..16, flip in prop::sample::select(NOT_BUTTON)) {
            let sample = PinSample::from_bits(bits);
            let flipped = PinSample::from_bits(bits ^ flip);
            prop_assert_eq!(button_pressed(sample), button_pressed(flipped));
        }

        #[test]
        fn prop_switch_ignores_other_bits(bits in 0u8..16, flip in prop::sample::select(NOT_SWITCH)) {
            let sample = PinSample::from_bits(bits);
            let flipped = PinSample::from_bits(bits ^ flip);
            prop_assert_eq!(switch_on(sample), switch_on(flipped));
        }
    }
}
