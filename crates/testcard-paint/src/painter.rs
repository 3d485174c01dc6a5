//! Solid, gradient and random painters

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use std::marker::PhantomData;
use testcard_core::{Channel, Painter, Pixel};

/// Stateless painter producing the same color on every call.
#[derive(Debug, Clone, Copy)]
pub struct UniColor<T: Channel = u16> {
    pixel: Pixel<T>,
}

impl<T: Channel> UniColor<T> {
    /// Paint every pixel with `pixel`.
    pub fn new(pixel: Pixel<T>) -> Self {
        UniColor { pixel }
    }
}

impl<T: Channel> Painter<T> for UniColor<T> {
    fn next(&mut self) -> Pixel<T> {
        self.pixel
    }
}

/// Linear gradient painter.
///
/// Holds a current value and a per-call step. Each invocation returns the
/// pre-update state, then advances by `step` (wrapping), subtracting
/// instead of adding when constructed inverted.
#[derive(Debug, Clone, Copy)]
pub struct Gradator<T: Channel = u16> {
    step: Pixel<T>,
    state: Pixel<T>,
    invert: bool,
}

impl<T: Channel> Gradator<T> {
    /// Ascending gradient from black.
    pub fn new(step: Pixel<T>) -> Self {
        Self::with_initial(step, Pixel::BLACK, false)
    }

    /// Gradient from `initial`, descending when `invert` is set.
    pub fn with_initial(step: Pixel<T>, initial: Pixel<T>, invert: bool) -> Self {
        Gradator {
            step,
            state: initial,
            invert,
        }
    }
}

impl<T: Channel> Painter<T> for Gradator<T> {
    fn next(&mut self) -> Pixel<T> {
        let current = self.state;
        self.state = if self.invert {
            self.state.wrapping_sub(self.step)
        } else {
            self.state.wrapping_add(self.step)
        };
        current
    }
}

/// Uniform-random painter.
///
/// Draws three independent channel values over the full channel range per
/// call. The generator is seeded at construction, so a given seed always
/// reproduces the same raster; [`RandomColor::new`] uses a fixed default
/// seed.
#[derive(Debug)]
pub struct RandomColor<T: Channel = u16> {
    rng: StdRng,
    _channel: PhantomData<T>,
}

impl<T: Channel> RandomColor<T> {
    const DEFAULT_SEED: u64 = 0x7e57_ca5d;

    /// Deterministic painter with the default seed.
    pub fn new() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }

    /// Deterministic painter with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomColor {
            rng: StdRng::seed_from_u64(seed),
            _channel: PhantomData,
        }
    }

    fn draw(&mut self) -> T {
        // MAX is all ones, so masking keeps the draw uniform over [0, MAX]
        T::from_u32_lossy(self.rng.random::<u32>() & T::MAX.to_u32())
    }
}

impl<T: Channel> Default for RandomColor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Channel> Painter<T> for RandomColor<T> {
    fn next(&mut self) -> Pixel<T> {
        let r = self.draw();
        let g = self.draw();
        let b = self.draw();
        Pixel::rgb(r, g, b)
    }
}
