//! Testcard Core - Pixel model, buffer addressing and image algebra
//!
//! This crate provides the fundamental data structures for generating
//! and transforming high-bit-depth raster test images:
//!
//! - [`Pixel`] - Three-channel fixed-width color value with
//!   color-space-aware construction
//! - [`Channel`] - The channel-width abstraction (`u8`, `u16`, `u32`)
//! - [`Image`] - Owning raster container with row addressing and
//!   composition operators
//! - [`Row`] / [`RowMut`] - Non-owning scanline views
//! - [`Painter`] / [`ImageProcess`] / [`PixelConverter`] - Capability
//!   traits for pattern generation and buffer transforms
//!
//! # Examples
//!
//! ```
//! use testcard_core::{Image, Pixel};
//!
//! let mut image: Image<u16> = Image::new(1920, 1080).unwrap();
//! image.fill(Pixel::rgb(0x8000, 0x8000, 0x8000));
//! let brighter = image.shift_left(1);
//! assert_eq!(brighter.pixel(0, 0).r(), 0x0000); // wrapped, not saturated
//! ```

pub mod error;
pub mod image;
pub mod painter;
pub mod pixel;
pub mod process;

pub use error::{Error, Result};
pub use image::{Image, Orientation, Row, RowMut};
pub use painter::Painter;
pub use pixel::{Channel, ColorSpace, Pixel, YcbcrStandard};
pub use process::{ImageProcess, PixelConverter};
