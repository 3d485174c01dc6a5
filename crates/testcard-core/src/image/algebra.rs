//! Whole-image composition operators
//!
//! Value-semantic operators over the pixel buffer: per-channel shifts,
//! constant masks, element-wise combination of two images, directional
//! concatenation, painter fills and process/converter application.
//!
//! Every binary operator is pure and allocates a fresh buffer; the
//! `*_assign` forms replace the receiver's buffer with the newly computed
//! one. Rust's borrow rules make it impossible to alias the receiver with
//! an operand, so the replace-after-compute guarantee holds by
//! construction.

use super::Image;
use crate::error::{Error, Result};
use crate::painter::Painter;
use crate::pixel::{Channel, Pixel};
use crate::process::{ImageProcess, PixelConverter};

/// Direction for concatenating two images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Side by side; requires equal heights
    Horizontal,
    /// Stacked; requires equal widths
    Vertical,
    /// Stack vertically when widths match, otherwise place horizontally
    /// when heights match
    Auto,
}

impl<T: Channel> Image<T> {
    /// Shift every channel of every pixel left by `bits`.
    pub fn shift_left(&self, bits: u32) -> Image<T> {
        let mut out = self.clone();
        out.transform(|px| px.shift_left(bits));
        out
    }

    /// In-place form of [`Image::shift_left`].
    pub fn shift_left_assign(&mut self, bits: u32) {
        self.transform(|px| px.shift_left(bits));
    }

    /// Shift every channel of every pixel right by `bits`.
    pub fn shift_right(&self, bits: u32) -> Image<T> {
        let mut out = self.clone();
        out.transform(|px| px.shift_right(bits));
        out
    }

    /// In-place form of [`Image::shift_right`].
    pub fn shift_right_assign(&mut self, bits: u32) {
        self.transform(|px| px.shift_right(bits));
    }

    /// AND every pixel against a constant mask.
    pub fn mask_and(&self, mask: Pixel<T>) -> Image<T> {
        let mut out = self.clone();
        out.transform(|px| px.bit_and(mask));
        out
    }

    /// In-place form of [`Image::mask_and`].
    pub fn mask_and_assign(&mut self, mask: Pixel<T>) {
        self.transform(|px| px.bit_and(mask));
    }

    /// OR every pixel against a constant mask.
    pub fn mask_or(&self, mask: Pixel<T>) -> Image<T> {
        let mut out = self.clone();
        out.transform(|px| px.bit_or(mask));
        out
    }

    /// In-place form of [`Image::mask_or`].
    pub fn mask_or_assign(&mut self, mask: Pixel<T>) {
        self.transform(|px| px.bit_or(mask));
    }

    fn zip_with(&self, other: &Image<T>, f: impl Fn(Pixel<T>, Pixel<T>) -> Pixel<T>) -> Result<Image<T>> {
        if self.pixel_count() != other.pixel_count() {
            return Err(Error::SizeMismatch(
                self.width(),
                self.height(),
                other.width(),
                other.height(),
            ));
        }
        let mut out = self.clone();
        for (chunk, px) in out
            .data_mut()
            .chunks_exact_mut(Self::STRIDE)
            .zip(other.pixels())
        {
            let combined = f(super::decode(chunk), px);
            super::encode(combined, chunk);
        }
        Ok(out)
    }

    /// Element-wise AND between two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the images do not hold the same
    /// number of pixels.
    pub fn and(&self, other: &Image<T>) -> Result<Image<T>> {
        self.zip_with(other, Pixel::bit_and)
    }

    /// Element-wise OR between two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if the images do not hold the same
    /// number of pixels.
    pub fn or(&self, other: &Image<T>) -> Result<Image<T>> {
        self.zip_with(other, Pixel::bit_or)
    }

    /// Concatenate two images in the given orientation.
    ///
    /// Horizontal concatenation requires equal heights and produces a
    /// `(w1 + w2) x h` image; vertical requires equal widths and produces
    /// `w x (h1 + h2)`. [`Orientation::Auto`] stacks vertically when the
    /// widths match, else places horizontally when the heights match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrientationMismatch`] when the required dimension
    /// does not match (or, for `Auto`, when neither does).
    pub fn concat(&self, other: &Image<T>, orientation: Orientation) -> Result<Image<T>> {
        let mismatch = || {
            Error::OrientationMismatch(self.width(), self.height(), other.width(), other.height())
        };
        match orientation {
            Orientation::Horizontal => {
                if self.height() != other.height() {
                    return Err(mismatch());
                }
                let mut data =
                    Vec::with_capacity(self.data_size() + other.data_size());
                for (left, right) in self.rows().zip(other.rows()) {
                    data.extend_from_slice(left.bytes());
                    data.extend_from_slice(right.bytes());
                }
                Image::from_raw(self.width() + other.width(), self.height(), data)
            }
            Orientation::Vertical => {
                if self.width() != other.width() {
                    return Err(mismatch());
                }
                let mut data = Vec::with_capacity(self.data_size() + other.data_size());
                data.extend_from_slice(self.data());
                data.extend_from_slice(other.data());
                Image::from_raw(self.width(), self.height() + other.height(), data)
            }
            Orientation::Auto => {
                if self.width() == other.width() {
                    self.concat(other, Orientation::Vertical)
                } else if self.height() == other.height() {
                    self.concat(other, Orientation::Horizontal)
                } else {
                    Err(mismatch())
                }
            }
        }
    }

    /// Fill the image by invoking `painter` once per pixel in row-major
    /// order (row 0 first, left to right), so stateful painters vary
    /// monotonically across the whole raster rather than per row.
    pub fn fill_with(&mut self, painter: &mut dyn Painter<T>) {
        for chunk in self.data.chunks_exact_mut(Self::STRIDE) {
            super::encode(painter.next(), chunk);
        }
    }

    /// Allocate a `width x height` image and fill it from `painter`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn generate(width: u32, height: u32, painter: &mut dyn Painter<T>) -> Result<Image<T>> {
        let mut image = Image::new(width, height)?;
        image.fill_with(painter);
        Ok(image)
    }

    /// Run the image through a process, consuming the buffer per the
    /// process contract.
    ///
    /// # Errors
    ///
    /// Propagates the process error (for example an out-of-bounds area).
    pub fn apply(self, process: &dyn ImageProcess<T>) -> Result<Image<T>> {
        process.process(self)
    }

    /// Apply a per-pixel conversion across the buffer, returning a new
    /// image.
    pub fn map(&self, converter: &dyn PixelConverter<T>) -> Image<T> {
        let mut out = self.clone();
        out.transform(|px| converter.convert(px));
        out
    }

    /// In-place form of [`Image::map`].
    pub fn map_assign(&mut self, converter: &dyn PixelConverter<T>) {
        self.transform(|px| converter.convert(px));
    }

    /// Convert every pixel to another channel width.
    pub fn convert<U: Channel>(&self) -> Image<U> {
        let mut data = Vec::with_capacity(self.pixel_count() * Image::<U>::STRIDE);
        let mut scratch = [0u8; 16];
        for px in self.pixels() {
            let wide: Pixel<U> = px.convert();
            super::encode(wide, &mut scratch[..Image::<U>::STRIDE]);
            data.extend_from_slice(&scratch[..Image::<U>::STRIDE]);
        }
        Image {
            width: self.width,
            height: self.height,
            data,
            _channel: std::marker::PhantomData,
        }
    }
}
