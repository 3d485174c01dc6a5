//! Positional calibration patterns
//!
//! Painters that derive their output from the raster position. The fill
//! order is fixed (row-major, left to right), so tracking a call counter
//! is enough to recover the coordinates.

use testcard_core::{Channel, Painter, Pixel};

/// Seven vertical color bars at 75% amplitude.
///
/// Bar order is white, yellow, cyan, green, magenta, red, blue; the last
/// bar absorbs the remainder when the width is not divisible by seven.
#[derive(Debug, Clone)]
pub struct ColorBars<T: Channel = u16> {
    width: u32,
    index: u64,
    bars: [Pixel<T>; 7],
}

impl<T: Channel> ColorBars<T> {
    /// Bars for an image `width` pixels wide.
    pub fn new(width: u32) -> Self {
        let amp = T::from_f64(0.75 * T::MAX.to_f64());
        let z = T::ZERO;
        ColorBars {
            width,
            index: 0,
            bars: [
                Pixel::rgb(amp, amp, amp),
                Pixel::rgb(amp, amp, z),
                Pixel::rgb(z, amp, amp),
                Pixel::rgb(z, amp, z),
                Pixel::rgb(amp, z, amp),
                Pixel::rgb(amp, z, z),
                Pixel::rgb(z, z, amp),
            ],
        }
    }
}

impl<T: Channel> Painter<T> for ColorBars<T> {
    fn next(&mut self) -> Pixel<T> {
        let x = (self.index % u64::from(self.width)) as u32;
        self.index += 1;
        let bar = (x as u64 * 7 / u64::from(self.width)) as usize;
        self.bars[bar.min(6)]
    }
}

/// Two-color checkerboard with square cells.
#[derive(Debug, Clone)]
pub struct Checkerboard<T: Channel = u16> {
    width: u32,
    cell: u32,
    index: u64,
    even: Pixel<T>,
    odd: Pixel<T>,
}

impl<T: Channel> Checkerboard<T> {
    /// Checkerboard for an image `width` pixels wide with `cell`-pixel
    /// squares, alternating between `even` and `odd`.
    ///
    /// A zero cell size is treated as one pixel.
    pub fn new(width: u32, cell: u32, even: Pixel<T>, odd: Pixel<T>) -> Self {
        Checkerboard {
            width,
            cell: cell.max(1),
            index: 0,
            even,
            odd,
        }
    }
}

impl<T: Channel> Painter<T> for Checkerboard<T> {
    fn next(&mut self) -> Pixel<T> {
        let x = (self.index % u64::from(self.width)) as u32;
        let y = (self.index / u64::from(self.width)) as u32;
        self.index += 1;
        if (x / self.cell + y / self.cell) % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}
