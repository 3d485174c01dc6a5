//! Painter capability
//!
//! A painter produces one pixel value per invocation and is consumed by
//! [`Image::fill_with`](crate::Image::fill_with) in row-major order,
//! exactly once per output pixel. There is no rollback: a fill abandoned
//! partway leaves a partially painted buffer, which is acceptable because
//! fills target freshly allocated buffers.

use crate::pixel::{Channel, Pixel};

/// Stateful pixel-value generator.
///
/// Implementations may be stateless (a solid color), linearly stateful
/// (a gradient stepping once per call) or randomized. Because the fill
/// order is fixed, positional patterns can be expressed by tracking the
/// raster position internally.
pub trait Painter<T: Channel = u16> {
    /// Produce the next pixel value.
    fn next(&mut self) -> Pixel<T>;
}
