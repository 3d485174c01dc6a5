//! Stock pixel converters
//!
//! Ready-made [`PixelConverter`] implementations for tone mapping. Any
//! `Fn(Pixel<T>) -> Pixel<T>` closure also satisfies the converter
//! capability; these cover the common cases.

use testcard_core::{Channel, Error, Pixel, PixelConverter, Result};

/// Channel complement: every channel maps to `MAX - value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invert;

impl<T: Channel> PixelConverter<T> for Invert {
    fn convert(&self, pixel: Pixel<T>) -> Pixel<T> {
        Pixel::WHITE.wrapping_sub(pixel)
    }
}

/// Power-law transfer on the normalized channel value.
///
/// Maps each channel through `MAX * (value / MAX) ^ (1 / gamma)`, so a
/// gamma above 1 brightens midtones and a gamma below 1 darkens them.
#[derive(Debug, Clone, Copy)]
pub struct Gamma {
    exponent: f64,
}

impl Gamma {
    /// Gamma transfer with the given factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless `gamma` is positive.
    pub fn new(gamma: f64) -> Result<Self> {
        if gamma <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "gamma must be > 0, got {gamma}"
            )));
        }
        Ok(Gamma {
            exponent: 1.0 / gamma,
        })
    }
}

impl<T: Channel> PixelConverter<T> for Gamma {
    fn convert(&self, pixel: Pixel<T>) -> Pixel<T> {
        let max = T::MAX.to_f64();
        let map = |c: T| T::from_f64(max * (c.to_f64() / max).powf(self.exponent));
        Pixel::rgb(map(pixel.r()), map(pixel.g()), map(pixel.b()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_is_involution() {
        let px = Pixel::<u16>::rgb(0x1234, 0x0000, 0xffff);
        let inverted: Pixel<u16> = Invert.convert(px);
        assert_eq!(inverted, Pixel::rgb(0xedcb, 0xffff, 0x0000));
        assert_eq!(Invert.convert(inverted), px);
    }

    #[test]
    fn test_gamma_fixes_endpoints() {
        let gamma = Gamma::new(2.2).unwrap();
        assert_eq!(
            PixelConverter::<u16>::convert(&gamma, Pixel::BLACK),
            Pixel::BLACK
        );
        assert_eq!(
            PixelConverter::<u16>::convert(&gamma, Pixel::WHITE),
            Pixel::WHITE
        );
    }

    #[test]
    fn test_gamma_above_one_brightens() {
        let gamma = Gamma::new(2.0).unwrap();
        let mid = Pixel::<u16>::rgb(0x4000, 0x4000, 0x4000);
        let out: Pixel<u16> = gamma.convert(mid);
        assert!(out.r() > mid.r());
        // (1/4) ^ (1/2) = 1/2 of full scale
        assert_eq!(out.r(), 0x8000);
    }

    #[test]
    fn test_gamma_rejects_non_positive() {
        assert!(Gamma::new(0.0).is_err());
        assert!(Gamma::new(-1.0).is_err());
    }
}
