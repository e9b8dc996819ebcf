//! Encoder sampler trait

use crate::sample::PinSample;

/// Source of encoder pin samples
///
/// Implementations read the four encoder lines once per call. A call must
/// not block or loop over variable-length data: it runs inside the 1 ms
/// polling tick.
pub trait EncoderSampler {
    /// Read the current level of all four lines
    fn sample(&mut self) -> PinSample;
}

impl<T: EncoderSampler + ?Sized> EncoderSampler for &mut T {
    fn sample(&mut self) -> PinSample {
        (**self).sample()
    }
}
