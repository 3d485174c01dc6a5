//! Testcard Paint - Pattern painters
//!
//! Painter implementations consumed by
//! [`Image::fill_with`](testcard_core::Image::fill_with):
//!
//! - [`UniColor`] - Stateless solid color
//! - [`Gradator`] - Linear gradient stepping once per pixel
//! - [`RandomColor`] - Seeded uniform-random channels
//! - [`ColorBars`] / [`Checkerboard`] - Positional calibration patterns
//!
//! # Examples
//!
//! ```
//! use testcard_core::{Image, Pixel};
//! use testcard_paint::Gradator;
//!
//! let mut ramp = Gradator::new(Pixel::<u16>::rgb(0x0010, 0, 0));
//! let image = Image::generate(256, 1, &mut ramp).unwrap();
//! assert_eq!(image.pixel(2, 0).r(), 0x0020);
//! ```

mod painter;
mod patterns;

pub use painter::{Gradator, RandomColor, UniColor};
pub use patterns::{Checkerboard, ColorBars};
