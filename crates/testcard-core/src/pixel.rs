//! Pixel model
//!
//! A three-channel fixed-width color value. Internal storage is always
//! linear RGB; color-space inputs (YCbCr, HSV, XYZ) are transformed at
//! construction time, and color-space views of the current RGB state are
//! computed on demand by the accessor methods.
//!
//! The arithmetic and bitwise operations are bit-manipulation primitives
//! for test-pattern generation: overflow wraps per the underlying integer
//! width, matching hardware bit-level semantics. They are not perceptual
//! blending operators.

use crate::error::{Error, Result};
use std::fmt;

/// A fixed-width unsigned pixel channel.
///
/// Implemented for `u8`, `u16` and `u32`. `MAX` and the cross-width
/// conversion factor derive from the channel width; nothing in the crate
/// hardcodes 16 bits.
pub trait Channel:
    Copy + Ord + Eq + std::hash::Hash + Default + fmt::Debug + fmt::Display + fmt::LowerHex + Send + Sync + 'static
{
    /// Channel width in bits.
    const BITS: u32;
    /// Channel width in bytes.
    const BYTES: usize;
    /// All-zero channel value.
    const ZERO: Self;
    /// All-ones channel value.
    const MAX: Self;

    /// Widen to `f64` without loss.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`, rounding to nearest and clamping to `[0, MAX]`.
    fn from_f64(v: f64) -> Self;

    /// Widen to `u32` without loss (channels are at most 32 bits).
    fn to_u32(self) -> u32;

    /// Narrow from `u32` by truncation.
    fn from_u32_lossy(v: u32) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_div(self, rhs: Self) -> Self;
    fn bit_and(self, rhs: Self) -> Self;
    fn bit_or(self, rhs: Self) -> Self;

    /// Left shift; the shift amount is taken modulo the channel width.
    fn shl(self, bits: u32) -> Self;

    /// Right shift; the shift amount is taken modulo the channel width.
    fn shr(self, bits: u32) -> Self;

    /// Encode as big-endian bytes into the start of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`Channel::BYTES`].
    fn write_be(self, out: &mut [u8]);

    /// Decode from big-endian bytes at the start of `buf`.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than [`Channel::BYTES`].
    fn read_be(buf: &[u8]) -> Self;
}

macro_rules! impl_channel {
    ($($ty:ty),*) => {$(
        impl Channel for $ty {
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = std::mem::size_of::<$ty>();
            const ZERO: Self = 0;
            const MAX: Self = <$ty>::MAX;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v.round().clamp(0.0, <$ty>::MAX as f64) as $ty
            }

            #[inline]
            fn to_u32(self) -> u32 {
                self as u32
            }

            #[inline]
            fn from_u32_lossy(v: u32) -> Self {
                v as $ty
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$ty>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn wrapping_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline]
            fn bit_and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline]
            fn bit_or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline]
            fn shl(self, bits: u32) -> Self {
                self.wrapping_shl(bits)
            }

            #[inline]
            fn shr(self, bits: u32) -> Self {
                self.wrapping_shr(bits)
            }

            #[inline]
            fn write_be(self, out: &mut [u8]) {
                out[..Self::BYTES].copy_from_slice(&self.to_be_bytes());
            }

            #[inline]
            fn read_be(buf: &[u8]) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                bytes.copy_from_slice(&buf[..Self::BYTES]);
                <$ty>::from_be_bytes(bytes)
            }
        }
    )*};
}

impl_channel!(u8, u16, u32);

/// Color space tag for the generic constructor.
///
/// YCbCr variants select the matrix standard; HSV interprets the first
/// scalar as the hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Linear RGB, stored as given
    Rgb,
    /// YCbCr per ITU-R BT.601
    YcbcrBt601,
    /// YCbCr per ITU-R BT.709
    YcbcrBt709,
    /// YCbCr per ITU-R BT.2020
    YcbcrBt2020,
    /// Hue (degrees) / saturation / value
    Hsv,
    /// CIE XYZ tristimulus
    Xyz,
}

/// YCbCr matrix standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YcbcrStandard {
    Bt601,
    Bt709,
    Bt2020,
}

impl YcbcrStandard {
    /// Expansion coefficients `(r_cr, g_cb, g_cr, b_cb)` of the
    /// YCbCr-to-RGB matrix for this standard.
    fn expansion(self) -> (f64, f64, f64, f64) {
        match self {
            YcbcrStandard::Bt601 => (1.402, 0.344, 0.714, 1.772),
            YcbcrStandard::Bt709 => (1.5748, 0.1873, 0.4681, 1.8556),
            YcbcrStandard::Bt2020 => (1.4746, 0.1645, 0.5713, 1.8814),
        }
    }

    /// Luma coefficients `(kr, kg, kb)` of the RGB-to-YCbCr matrix.
    fn luma(self) -> (f64, f64, f64) {
        match self {
            YcbcrStandard::Bt601 => (0.2990, 0.5870, 0.1140),
            YcbcrStandard::Bt709 => (0.2126, 0.7152, 0.0722),
            YcbcrStandard::Bt2020 => (0.2627, 0.6780, 0.0593),
        }
    }

    /// Cb row `(kr, kg, kb)` of the RGB-to-YCbCr matrix.
    fn cb(self) -> (f64, f64, f64) {
        match self {
            YcbcrStandard::Bt601 => (-0.1687, -0.3312, 0.5000),
            YcbcrStandard::Bt709 => (-0.1146, -0.3854, 0.5000),
            YcbcrStandard::Bt2020 => (-0.1396, -0.3603, 0.5000),
        }
    }

    /// Cr row `(kr, kg, kb)` of the RGB-to-YCbCr matrix.
    fn cr(self) -> (f64, f64, f64) {
        match self {
            YcbcrStandard::Bt601 => (0.5000, -0.4186, -0.0813),
            YcbcrStandard::Bt709 => (0.5000, -0.4542, -0.0458),
            YcbcrStandard::Bt2020 => (0.5000, -0.4597, -0.0402),
        }
    }
}

/// Three-channel fixed-width color value, stored as linear RGB.
///
/// # Examples
///
/// ```
/// use testcard_core::Pixel;
///
/// let p: Pixel<u16> = Pixel::rgb(0x8000, 0x4000, 0x0000);
/// assert_eq!(p.r(), 0x8000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel<T: Channel = u16> {
    r: T,
    g: T,
    b: T,
}

impl<T: Channel> Pixel<T> {
    pub const BLACK: Self = Pixel { r: T::ZERO, g: T::ZERO, b: T::ZERO };
    pub const WHITE: Self = Pixel { r: T::MAX, g: T::MAX, b: T::MAX };
    pub const RED: Self = Pixel { r: T::MAX, g: T::ZERO, b: T::ZERO };
    pub const GREEN: Self = Pixel { r: T::ZERO, g: T::MAX, b: T::ZERO };
    pub const BLUE: Self = Pixel { r: T::ZERO, g: T::ZERO, b: T::MAX };
    pub const CYAN: Self = Pixel { r: T::ZERO, g: T::MAX, b: T::MAX };
    pub const MAGENTA: Self = Pixel { r: T::MAX, g: T::ZERO, b: T::MAX };
    pub const YELLOW: Self = Pixel { r: T::MAX, g: T::MAX, b: T::ZERO };

    /// Construct from linear RGB channel values.
    #[inline]
    pub const fn rgb(r: T, g: T, b: T) -> Self {
        Pixel { r, g, b }
    }

    /// Construct from three scalars interpreted in the given color space.
    ///
    /// For [`ColorSpace::Hsv`], `c0` is the hue in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOutOfRange`] for YCbCr inputs outside the
    /// studio-swing range and [`Error::HueOutOfRange`] for a hue outside
    /// `[0, 360]` degrees.
    pub fn new(c0: T, c1: T, c2: T, cs: ColorSpace) -> Result<Self> {
        match cs {
            ColorSpace::Rgb => Ok(Self::rgb(c0, c1, c2)),
            ColorSpace::YcbcrBt601 => Self::from_ycbcr(YcbcrStandard::Bt601, c0, c1, c2),
            ColorSpace::YcbcrBt709 => Self::from_ycbcr(YcbcrStandard::Bt709, c0, c1, c2),
            ColorSpace::YcbcrBt2020 => Self::from_ycbcr(YcbcrStandard::Bt2020, c0, c1, c2),
            ColorSpace::Hsv => Self::from_hsv(c0.to_f64(), c1, c2),
            ColorSpace::Xyz => Ok(Self::from_xyz(c0, c1, c2)),
        }
    }

    /// Construct from studio-swing YCbCr channel values.
    ///
    /// Luma must lie in `[16·max/255, 235·max/255]` and chroma in
    /// `[16·max/255, 240·max/255]` (both inclusive). After the swing
    /// expansion the RGB result is clamped to the channel range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOutOfRange`] if any input violates its
    /// valid range.
    pub fn from_ycbcr(standard: YcbcrStandard, y: T, cb: T, cr: T) -> Result<Self> {
        let max = T::MAX.to_f64();
        let lo = 16.0 * max / 255.0;
        let luma_hi = 235.0 * max / 255.0;
        let chroma_hi = 240.0 * max / 255.0;

        let yf = y.to_f64();
        let cbf = cb.to_f64();
        let crf = cr.to_f64();
        if yf < lo || luma_hi < yf {
            return Err(Error::ChannelOutOfRange {
                channel: "luma",
                value: yf,
                min: lo,
                max: luma_hi,
            });
        }
        if cbf < lo || chroma_hi < cbf {
            return Err(Error::ChannelOutOfRange {
                channel: "Cb chroma",
                value: cbf,
                min: lo,
                max: chroma_hi,
            });
        }
        if crf < lo || chroma_hi < crf {
            return Err(Error::ChannelOutOfRange {
                channel: "Cr chroma",
                value: crf,
                min: lo,
                max: chroma_hi,
            });
        }

        let yt = (yf - lo) * 255.0 / 219.0;
        let cbt = (cbf - 128.0 * max / 255.0) * 255.0 / 224.0;
        let crt = (crf - 128.0 * max / 255.0) * 255.0 / 224.0;
        let (r_cr, g_cb, g_cr, b_cb) = standard.expansion();

        Ok(Self::rgb(
            T::from_f64(yt + r_cr * crt),
            T::from_f64(yt - g_cb * cbt - g_cr * crt),
            T::from_f64(yt + b_cb * cbt),
        ))
    }

    /// Construct from hue (degrees), saturation and value.
    ///
    /// The hue selects one of six 60-degree sectors; saturation and value
    /// are channel-range scalars.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HueOutOfRange`] if `hue` is outside `[0, 360]`.
    pub fn from_hsv(hue: f64, saturation: T, value: T) -> Result<Self> {
        if !(0.0..=360.0).contains(&hue) {
            return Err(Error::HueOutOfRange(hue));
        }
        let max = T::MAX.to_f64();
        let v = value.to_f64();
        let min = v - saturation.to_f64() * v / max;
        let chroma = v - min;

        let (r, g, b) = match (hue / 60.0) as u32 {
            0 => (v, (hue / 60.0) * chroma + min, min),
            1 => (((120.0 - hue) / 60.0) * chroma + min, v, min),
            2 => (min, v, ((hue - 120.0) / 60.0) * chroma + min),
            3 => (min, ((240.0 - hue) / 60.0) * chroma + min, v),
            4 => (((hue - 240.0) / 60.0) * chroma + min, min, v),
            5 | 6 => (v, min, ((360.0 - hue) / 60.0) * chroma + min),
            _ => unreachable!(),
        };

        Ok(Self::rgb(T::from_f64(r), T::from_f64(g), T::from_f64(b)))
    }

    /// Construct from CIE XYZ tristimulus values.
    ///
    /// Out-of-gamut results are clamped to the channel range.
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        let (xf, yf, zf) = (x.to_f64(), y.to_f64(), z.to_f64());
        Self::rgb(
            T::from_f64(0.418452 * xf - 0.158652 * yf - 0.0828342 * zf),
            T::from_f64(-0.0911642 * xf + 0.252424 * yf + 0.0157058 * zf),
            T::from_f64(0.000920718 * xf - 0.00254938 * yf + 0.178595 * zf),
        )
    }

    /// Red channel value.
    #[inline]
    pub fn r(&self) -> T {
        self.r
    }

    /// Green channel value.
    #[inline]
    pub fn g(&self) -> T {
        self.g
    }

    /// Blue channel value.
    #[inline]
    pub fn b(&self) -> T {
        self.b
    }

    /// Set the red channel.
    pub fn set_r(&mut self, r: T) {
        self.r = r;
    }

    /// Set the green channel.
    pub fn set_g(&mut self, g: T) {
        self.g = g;
    }

    /// Set the blue channel.
    pub fn set_b(&mut self, b: T) {
        self.b = b;
    }

    fn weighted(&self, k: (f64, f64, f64)) -> f64 {
        k.0 * self.r.to_f64() + k.1 * self.g.to_f64() + k.2 * self.b.to_f64()
    }

    fn luma_of(&self, standard: YcbcrStandard) -> T {
        let max = T::MAX.to_f64();
        T::from_f64(self.weighted(standard.luma()) * 219.0 / 255.0 + 16.0 * max / 255.0)
    }

    fn cb_of(&self, standard: YcbcrStandard) -> T {
        let max = T::MAX.to_f64();
        T::from_f64(self.weighted(standard.cb()) * 224.0 / 255.0 + 128.0 * max / 255.0)
    }

    fn cr_of(&self, standard: YcbcrStandard) -> T {
        let max = T::MAX.to_f64();
        T::from_f64(self.weighted(standard.cr()) * 224.0 / 255.0 + 128.0 * max / 255.0)
    }

    /// BT.601 luma of the current RGB state.
    pub fn y601(&self) -> T {
        self.luma_of(YcbcrStandard::Bt601)
    }

    /// BT.601 Cb chroma.
    pub fn cb601(&self) -> T {
        self.cb_of(YcbcrStandard::Bt601)
    }

    /// BT.601 Cr chroma.
    pub fn cr601(&self) -> T {
        self.cr_of(YcbcrStandard::Bt601)
    }

    /// BT.709 luma.
    pub fn y709(&self) -> T {
        self.luma_of(YcbcrStandard::Bt709)
    }

    /// BT.709 Cb chroma.
    pub fn cb709(&self) -> T {
        self.cb_of(YcbcrStandard::Bt709)
    }

    /// BT.709 Cr chroma.
    pub fn cr709(&self) -> T {
        self.cr_of(YcbcrStandard::Bt709)
    }

    /// BT.2020 luma.
    pub fn y2020(&self) -> T {
        self.luma_of(YcbcrStandard::Bt2020)
    }

    /// BT.2020 Cb chroma.
    pub fn cb2020(&self) -> T {
        self.cb_of(YcbcrStandard::Bt2020)
    }

    /// BT.2020 Cr chroma.
    pub fn cr2020(&self) -> T {
        self.cr_of(YcbcrStandard::Bt2020)
    }

    /// Hue of the current RGB state, in degrees `[0, 360)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedHue`] for achromatic pixels (max channel
    /// equals min channel).
    pub fn hue(&self) -> Result<f64> {
        let maxv = self.r.max(self.g).max(self.b);
        let minv = self.r.min(self.g).min(self.b);
        if minv == maxv {
            return Err(Error::UndefinedHue);
        }
        let diff = maxv.to_f64() - minv.to_f64();
        let (r, g, b) = (self.r.to_f64(), self.g.to_f64(), self.b.to_f64());
        if minv == self.b {
            Ok(60.0 * (g - r) / diff + 60.0)
        } else if minv == self.r {
            Ok(60.0 * (b - g) / diff + 180.0)
        } else {
            Ok(60.0 * (r - b) / diff + 300.0)
        }
    }

    /// Saturation as a fraction of the full channel scale, in `[0, 1]`.
    pub fn saturation(&self) -> f64 {
        let maxv = self.r.max(self.g).max(self.b);
        let minv = self.r.min(self.g).min(self.b);
        (maxv.to_f64() - minv.to_f64()) / T::MAX.to_f64()
    }

    /// Value (brightness) as a fraction of the full channel scale.
    pub fn value(&self) -> f64 {
        self.r.max(self.g).max(self.b).to_f64() / T::MAX.to_f64()
    }

    /// CIE X tristimulus of the current RGB state, clamped to channel range.
    pub fn x(&self) -> T {
        T::from_f64(self.weighted((2.7689, 1.7517, 1.1302)))
    }

    /// CIE Y tristimulus, clamped to channel range.
    pub fn y(&self) -> T {
        T::from_f64(self.weighted((1.0000, 4.5907, 0.0601)))
    }

    /// CIE Z tristimulus, clamped to channel range.
    pub fn z(&self) -> T {
        T::from_f64(self.weighted((0.0000, 0.0565, 5.5943)))
    }

    /// Channel-wise wrapping addition.
    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::rgb(
            self.r.wrapping_add(rhs.r),
            self.g.wrapping_add(rhs.g),
            self.b.wrapping_add(rhs.b),
        )
    }

    /// Channel-wise wrapping subtraction.
    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self::rgb(
            self.r.wrapping_sub(rhs.r),
            self.g.wrapping_sub(rhs.g),
            self.b.wrapping_sub(rhs.b),
        )
    }

    /// Channel-wise bitwise AND.
    #[inline]
    pub fn bit_and(self, rhs: Self) -> Self {
        Self::rgb(
            self.r.bit_and(rhs.r),
            self.g.bit_and(rhs.g),
            self.b.bit_and(rhs.b),
        )
    }

    /// Channel-wise bitwise OR.
    #[inline]
    pub fn bit_or(self, rhs: Self) -> Self {
        Self::rgb(
            self.r.bit_or(rhs.r),
            self.g.bit_or(rhs.g),
            self.b.bit_or(rhs.b),
        )
    }

    /// Wrapping multiplication of every channel by a scalar.
    #[inline]
    pub fn wrapping_mul_scalar(self, k: T) -> Self {
        Self::rgb(
            self.r.wrapping_mul(k),
            self.g.wrapping_mul(k),
            self.b.wrapping_mul(k),
        )
    }

    /// Division of every channel by a scalar.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero.
    #[inline]
    pub fn div_scalar(self, k: T) -> Self {
        Self::rgb(
            self.r.wrapping_div(k),
            self.g.wrapping_div(k),
            self.b.wrapping_div(k),
        )
    }

    /// Left shift of every channel; the amount is taken modulo the
    /// channel width.
    #[inline]
    pub fn shift_left(self, bits: u32) -> Self {
        Self::rgb(self.r.shl(bits), self.g.shl(bits), self.b.shl(bits))
    }

    /// Right shift of every channel; the amount is taken modulo the
    /// channel width.
    #[inline]
    pub fn shift_right(self, bits: u32) -> Self {
        Self::rgb(self.r.shr(bits), self.g.shr(bits), self.b.shr(bits))
    }

    /// Convert to another channel width.
    ///
    /// Each channel is rescaled by `U::MAX / T::MAX`, which replicates
    /// rather than zero-fills for power-of-two width ratios (8-bit `0xab`
    /// widens to 16-bit `0xabab`).
    pub fn convert<U: Channel>(self) -> Pixel<U> {
        let scale = U::MAX.to_f64() / T::MAX.to_f64();
        Pixel::rgb(
            U::from_f64(self.r.to_f64() * scale),
            U::from_f64(self.g.to_f64() * scale),
            U::from_f64(self.b.to_f64() * scale),
        )
    }
}

impl<T: Channel> fmt::Display for Pixel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = T::BYTES * 2;
        write!(
            f,
            "R={}(0x{:0w$x}), G={}(0x{:0w$x}), B={}(0x{:0w$x})",
            self.r, self.r, self.g, self.g, self.b, self.b
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_construction() {
        let p: Pixel<u16> = Pixel::rgb(0x1234, 0x5678, 0x9abc);
        assert_eq!(p.r(), 0x1234);
        assert_eq!(p.g(), 0x5678);
        assert_eq!(p.b(), 0x9abc);
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Pixel::<u16>::WHITE, Pixel::rgb(0xffff, 0xffff, 0xffff));
        assert_eq!(Pixel::<u16>::YELLOW, Pixel::rgb(0xffff, 0xffff, 0x0000));
        assert_eq!(Pixel::<u8>::CYAN, Pixel::rgb(0, 255, 255));
    }

    #[test]
    fn test_ycbcr_luma_below_range_fails() {
        // 16 * 65535 / 255 = 4112 is the lowest legal luma at 16 bits
        let err = Pixel::<u16>::from_ycbcr(YcbcrStandard::Bt601, 4111, 0x8000, 0x8000);
        assert!(matches!(err, Err(Error::ChannelOutOfRange { channel: "luma", .. })));
        assert!(Pixel::<u16>::from_ycbcr(YcbcrStandard::Bt601, 4112, 0x8000, 0x8000).is_ok());
    }

    #[test]
    fn test_ycbcr_chroma_above_range_fails() {
        // 240 * 65535 / 255 = 61680 is the highest legal chroma
        assert!(Pixel::<u16>::from_ycbcr(YcbcrStandard::Bt601, 0x8000, 61680, 0x8000).is_ok());
        let err = Pixel::<u16>::from_ycbcr(YcbcrStandard::Bt601, 0x8000, 61681, 0x8000);
        assert!(matches!(err, Err(Error::ChannelOutOfRange { .. })));
    }

    #[test]
    fn test_tagged_constructor_matches_named() {
        let a = Pixel::<u16>::new(0x4000, 0x8000, 0x8000, ColorSpace::YcbcrBt709).unwrap();
        let b = Pixel::<u16>::from_ycbcr(YcbcrStandard::Bt709, 0x4000, 0x8000, 0x8000).unwrap();
        assert_eq!(a, b);

        let c = Pixel::<u16>::new(0x0102, 0x0304, 0x0506, ColorSpace::Rgb).unwrap();
        assert_eq!(c, Pixel::rgb(0x0102, 0x0304, 0x0506));
    }

    fn assert_close_u8(p: Pixel<u8>, q: Pixel<u8>, tol: i32) {
        for (a, b) in [(p.r(), q.r()), (p.g(), q.g()), (p.b(), q.b())] {
            assert!(
                (a as i32 - b as i32).abs() <= tol,
                "channels differ beyond {tol}: {p} vs {q}"
            );
        }
    }

    #[test]
    fn test_bt601_roundtrip_8bit() {
        // RGB -> Y/Cb/Cr accessors -> RGB should land within one unit
        for (r, g, b) in [(128u8, 128, 128), (200, 100, 50), (16, 32, 64)] {
            let p = Pixel::<u8>::rgb(r, g, b);
            let back =
                Pixel::<u8>::from_ycbcr(YcbcrStandard::Bt601, p.y601(), p.cb601(), p.cr601())
                    .unwrap();
            assert_close_u8(p, back, 1);
        }
    }

    #[test]
    fn test_bt601_roundtrip_16bit() {
        // The matrix coefficients carry four decimal places, so the
        // residual at 16-bit scale stays below 1e-4 * 65535.
        let p = Pixel::<u16>::rgb(0x8000, 0x8000, 0x8000);
        let back =
            Pixel::<u16>::from_ycbcr(YcbcrStandard::Bt601, p.y601(), p.cb601(), p.cr601()).unwrap();
        for (a, b) in [(p.r(), back.r()), (p.g(), back.g()), (p.b(), back.b())] {
            assert!((a as i64 - b as i64).abs() <= 8, "{a} vs {b}");
        }
    }

    #[test]
    fn test_hsv_primaries() {
        let red = Pixel::<u16>::from_hsv(0.0, u16::MAX, u16::MAX).unwrap();
        assert_eq!(red, Pixel::<u16>::RED);
        let green = Pixel::<u16>::from_hsv(120.0, u16::MAX, u16::MAX).unwrap();
        assert_eq!(green, Pixel::<u16>::GREEN);
        let blue = Pixel::<u16>::from_hsv(240.0, u16::MAX, u16::MAX).unwrap();
        assert_eq!(blue, Pixel::<u16>::BLUE);
        // Hue 360 falls in the trailing sector and wraps back to red
        let wrapped = Pixel::<u16>::from_hsv(360.0, u16::MAX, u16::MAX).unwrap();
        assert_eq!(wrapped, Pixel::<u16>::RED);
    }

    #[test]
    fn test_hsv_zero_saturation_is_gray() {
        let p = Pixel::<u16>::from_hsv(90.0, 0, 0x8000).unwrap();
        assert_eq!(p.r(), p.g());
        assert_eq!(p.g(), p.b());
        assert_eq!(p.r(), 0x8000);
    }

    #[test]
    fn test_hsv_out_of_range_hue_fails() {
        assert!(matches!(
            Pixel::<u16>::from_hsv(360.5, u16::MAX, u16::MAX),
            Err(Error::HueOutOfRange(_))
        ));
        assert!(matches!(
            Pixel::<u16>::from_hsv(-1.0, u16::MAX, u16::MAX),
            Err(Error::HueOutOfRange(_))
        ));
    }

    #[test]
    fn test_hue_accessor() {
        assert_eq!(Pixel::<u16>::RED.hue().unwrap(), 0.0);
        assert_eq!(Pixel::<u16>::GREEN.hue().unwrap(), 120.0);
        assert_eq!(Pixel::<u16>::BLUE.hue().unwrap(), 240.0);
        assert_eq!(Pixel::<u16>::YELLOW.hue().unwrap(), 60.0);
        assert_eq!(Pixel::<u16>::CYAN.hue().unwrap(), 180.0);
        assert_eq!(Pixel::<u16>::MAGENTA.hue().unwrap(), 300.0);
    }

    #[test]
    fn test_hue_undefined_for_achromatic() {
        assert!(matches!(Pixel::<u16>::WHITE.hue(), Err(Error::UndefinedHue)));
        assert!(matches!(
            Pixel::<u16>::rgb(0x1000, 0x1000, 0x1000).hue(),
            Err(Error::UndefinedHue)
        ));
    }

    #[test]
    fn test_saturation_and_value() {
        assert_eq!(Pixel::<u16>::RED.saturation(), 1.0);
        assert_eq!(Pixel::<u16>::RED.value(), 1.0);
        assert_eq!(Pixel::<u16>::BLACK.saturation(), 0.0);
        let half = Pixel::<u16>::rgb(0x8000, 0x8000, 0x8000);
        assert!((half.value() - 0x8000 as f64 / 65535.0).abs() < 1e-9);
    }

    #[test]
    fn test_xyz_roundtrip() {
        // Forward through the accessors, back through the constructor
        let p = Pixel::<u16>::rgb(1000, 0, 0);
        assert_eq!(p.x(), 2769);
        assert_eq!(p.y(), 1000);
        assert_eq!(p.z(), 0);
        let back = Pixel::<u16>::from_xyz(p.x(), p.y(), p.z());
        assert_eq!(back.r(), 1000);
        assert_eq!(back.g(), 0);
        assert_eq!(back.b(), 0);
    }

    #[test]
    fn test_wrapping_arithmetic() {
        let p = Pixel::<u16>::rgb(0xffff, 0x0001, 0x8000);
        let q = p.wrapping_add(Pixel::rgb(0x0001, 0xffff, 0x8000));
        assert_eq!(q, Pixel::rgb(0x0000, 0x0000, 0x0000));

        let d = Pixel::<u16>::BLACK.wrapping_sub(Pixel::rgb(1, 1, 1));
        assert_eq!(d, Pixel::rgb(0xffff, 0xffff, 0xffff));
    }

    #[test]
    fn test_bitwise_and_shift() {
        let p = Pixel::<u16>::rgb(0xf0f0, 0x0ff0, 0xffff);
        assert_eq!(
            p.bit_and(Pixel::rgb(0xff00, 0xff00, 0xff00)),
            Pixel::rgb(0xf000, 0x0f00, 0xff00)
        );
        assert_eq!(
            p.bit_or(Pixel::rgb(0x000f, 0x000f, 0x0000)),
            Pixel::rgb(0xf0ff, 0x0fff, 0xffff)
        );
        assert_eq!(p.shift_left(4), Pixel::rgb(0x0f00, 0xff00, 0xfff0));
        assert_eq!(p.shift_right(4), Pixel::rgb(0x0f0f, 0x00ff, 0x0fff));
    }

    #[test]
    fn test_scalar_mul_div() {
        let p = Pixel::<u16>::rgb(0x0100, 0x0010, 0x0001);
        assert_eq!(p.wrapping_mul_scalar(0x10), Pixel::rgb(0x1000, 0x0100, 0x0010));
        assert_eq!(p.div_scalar(0x10), Pixel::rgb(0x0010, 0x0001, 0x0000));
        // Multiplication wraps at the channel width
        let q = Pixel::<u16>::rgb(0x8000, 0, 0).wrapping_mul_scalar(2);
        assert_eq!(q.r(), 0);
    }

    #[test]
    fn test_width_conversion_widens_by_replication() {
        let p = Pixel::<u8>::rgb(0xff, 0x80, 0x00);
        let wide: Pixel<u16> = p.convert();
        // 8 -> 16 bit is value * 257, not a zero-filled shift
        assert_eq!(wide, Pixel::rgb(0xffff, 0x8080, 0x0000));

        let narrow: Pixel<u8> = wide.convert();
        assert_eq!(narrow, p);
    }

    #[test]
    fn test_display_format() {
        let p = Pixel::<u16>::rgb(0x00ff, 0, 0);
        let s = p.to_string();
        assert!(s.contains("R=255(0x00ff)"), "{s}");
    }
}
