//! GPIO input abstractions
//!
//! Provides traits for digital inputs that can be implemented by
//! chip-specific code. Reads are infallible at this level: a digital input
//! that has been configured once at startup always yields a level.

use core::convert::Infallible;

use embedded_hal::digital;

/// Digital input pin
///
/// Takes `&mut self` so that `embedded-hal` 1.0 inputs can be adapted
/// without interior mutability.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Digital input port
///
/// A port read returns every line of the port in one access, bit `n`
/// holding the level of line `n`.
pub trait InputPort {
    /// Read the port data register
    fn read(&mut self) -> u32;
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }
}

impl<T: InputPort + ?Sized> InputPort for &mut T {
    fn read(&mut self) -> u32 {
        (**self).read()
    }
}

/// Adapter from an infallible `embedded-hal` digital input
///
/// Most chip HALs (embassy-rp, embassy-stm32, rp2040-hal) report
/// `Infallible` as their input error type, so the read can never fail.
#[derive(Debug)]
pub struct EhInput<P>(pub P);

impl<P> EhInput<P> {
    /// Wrap an `embedded-hal` input pin
    pub fn new(pin: P) -> Self {
        Self(pin)
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> InputPin for EhInput<P>
where
    P: digital::InputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        match self.0.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        }
    }

    fn is_low(&mut self) -> bool {
        match self.0.is_low() {
            Ok(low) => low,
            Err(never) => match never {},
        }
    }
}
