//! Testcard Process - Area-restricted transforms and filters
//!
//! Implementations of the
//! [`ImageProcess`](testcard_core::ImageProcess) capability:
//!
//! - [`Tone`] - Per-pixel conversion inside an [`Area`]
//! - [`Normalize`] - Hue-preserving linear contrast stretch
//! - [`Crop`] - Area extraction into a smaller image
//! - [`Filter`] - 2D convolution with a [`Kernel`]
//!
//! plus the stock [`PixelConverter`](testcard_core::PixelConverter)s
//! [`Invert`] and [`Gamma`].
//!
//! # Examples
//!
//! ```
//! use testcard_core::{Image, Pixel};
//! use testcard_process::{Area, Crop};
//!
//! let image: Image<u16> = Image::new(20, 20).unwrap();
//! let cropped = image.apply(&Crop::new(Area::new(10, 10, 5, 5))).unwrap();
//! assert_eq!((cropped.width(), cropped.height()), (10, 10));
//! ```

mod area;
mod converters;
mod crop;
mod filter;
mod kernel;
mod normalize;
mod tone;

pub use area::Area;
pub use converters::{Gamma, Invert};
pub use crop::Crop;
pub use filter::Filter;
pub use kernel::Kernel;
pub use normalize::Normalize;
pub use tone::Tone;
