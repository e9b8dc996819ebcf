//! Port sampler
//!
//! Reads all four lines with a single port data register access. The lines
//! must be wired to four consecutive port bits in A, B, BTN, SWT order
//! (e.g. PD0..PD3 with offset 0).

use pmodenc_core::sample::ALL_PINS_MASK;
use pmodenc_core::{EncoderSampler, PinSample};
use pmodenc_hal::InputPort;

/// Highest usable offset for a 32-bit port register
pub const MAX_PORT_OFFSET: u8 = 28;

/// PMOD ENC sampler over one input port
pub struct PmodEncPort<P> {
    port: P,
    /// Port bit holding channel A
    offset: u8,
}

impl<P: InputPort> PmodEncPort<P> {
    /// Create a sampler for lines starting at `offset`
    ///
    /// Returns `None` if the four lines would not fit in the register.
    pub fn new(port: P, offset: u8) -> Option<Self> {
        if offset > MAX_PORT_OFFSET {
            return None;
        }
        Some(Self { port, offset })
    }

    /// Port bit holding channel A
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Release the port
    pub fn release(self) -> P {
        self.port
    }
}

impl<P: InputPort> EncoderSampler for PmodEncPort<P> {
    fn sample(&mut self) -> PinSample {
        let raw = self.port.read() >> self.offset;
        PinSample::from_bits((raw as u8) & ALL_PINS_MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockPort<'a>(&'a Cell<u32>);

    impl InputPort for MockPort<'_> {
        fn read(&mut self) -> u32 {
            self.0.get()
        }
    }

    #[test]
    fn test_low_nibble() {
        let reg = Cell::new(0xFFFF_FFF5);
        let mut enc = PmodEncPort::new(MockPort(&reg), 0).unwrap();

        let sample = enc.sample();
        assert_eq!(sample.bits(), 0b0101);
        assert!(sample.a);
        assert!(sample.button);

        reg.set(0x0000_0000);
        assert_eq!(enc.sample().bits(), 0);
    }

    #[test]
    fn test_offset() {
        let reg = Cell::new(0b1011 << 4 | 0b0100);
        let mut enc = PmodEncPort::new(MockPort(&reg), 4).unwrap();
        assert_eq!(enc.offset(), 4);
        assert_eq!(enc.sample().bits(), 0b1011);
    }

    #[test]
    fn test_top_offset() {
        let reg = Cell::new(0b1001 << MAX_PORT_OFFSET);
        let mut enc = PmodEncPort::new(MockPort(&reg), MAX_PORT_OFFSET).unwrap();
        assert_eq!(enc.sample().bits(), 0b1001);
    }

    #[test]
    fn test_offset_out_of_range() {
        let reg = Cell::new(0);
        assert!(PmodEncPort::new(MockPort(&reg), MAX_PORT_OFFSET + 1).is_none());
    }
}
