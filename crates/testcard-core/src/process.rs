//! Process and converter capabilities
//!
//! An [`ImageProcess`] transforms one pixel buffer into another, taking
//! ownership of the input; a [`PixelConverter`] is a per-pixel mapping
//! applied uniformly across a buffer. Implementations live in the
//! process crate; the capability traits live here so that the image
//! algebra can dispatch over them.

use crate::error::Result;
use crate::image::Image;
use crate::pixel::{Channel, Pixel};

/// Transform from one pixel buffer to another (same or different size).
///
/// The process takes ownership of the buffer and returns a possibly new
/// one; it has no side effects outside that buffer. Errors are raised at
/// the point of detection and never retried.
pub trait ImageProcess<T: Channel = u16> {
    /// Run the process over `image`.
    fn process(&self, image: Image<T>) -> Result<Image<T>>;
}

/// Per-pixel mapping function applied uniformly across a buffer.
pub trait PixelConverter<T: Channel = u16> {
    /// Map a single pixel value.
    fn convert(&self, pixel: Pixel<T>) -> Pixel<T>;
}

/// Any pure function over pixel values is a converter.
impl<T: Channel, F> PixelConverter<T> for F
where
    F: Fn(Pixel<T>) -> Pixel<T>,
{
    fn convert(&self, pixel: Pixel<T>) -> Pixel<T> {
        self(pixel)
    }
}
