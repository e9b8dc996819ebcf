//! Four-pin sampler
//!
//! Reads A, B, BTN and SWT from four independent digital inputs.

use core::convert::Infallible;

use embedded_hal::digital;
use pmodenc_core::{EncoderSampler, PinSample};
use pmodenc_hal::{EhInput, InputPin};

/// PMOD ENC sampler over four input pins
pub struct PmodEncPins<A, B, BTN, SWT> {
    a: A,
    b: B,
    button: BTN,
    switch: SWT,
}

impl<A, B, BTN, SWT> PmodEncPins<A, B, BTN, SWT>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
    SWT: InputPin,
{
    /// Create a sampler from pins already configured as inputs
    pub fn new(a: A, b: B, button: BTN, switch: SWT) -> Self {
        Self { a, b, button, switch }
    }

    /// Release the pins
    pub fn release(self) -> (A, B, BTN, SWT) {
        (self.a, self.b, self.button, self.switch)
    }
}

impl<A, B, BTN, SWT> PmodEncPins<EhInput<A>, EhInput<B>, EhInput<BTN>, EhInput<SWT>>
where
    A: digital::InputPin<Error = Infallible>,
    B: digital::InputPin<Error = Infallible>,
    BTN: digital::InputPin<Error = Infallible>,
    SWT: digital::InputPin<Error = Infallible>,
{
    /// Create a sampler from `embedded-hal` input pins
    pub fn from_embedded_hal(a: A, b: B, button: BTN, switch: SWT) -> Self {
        Self::new(
            EhInput::new(a),
            EhInput::new(b),
            EhInput::new(button),
            EhInput::new(switch),
        )
    }
}

impl<A, B, BTN, SWT> EncoderSampler for PmodEncPins<A, B, BTN, SWT>
where
    A: InputPin,
    B: InputPin,
    BTN: InputPin,
    SWT: InputPin,
{
    fn sample(&mut self) -> PinSample {
        PinSample {
            a: self.a.is_high(),
            b: self.b.is_high(),
            button: self.button.is_high(),
            switch: self.switch.is_high(),
        }
    }
}
