//! Testcard - High-bit-depth raster test image toolkit
//!
//! Generates and transforms 16-bit-per-component raster test images for
//! display and codec calibration.
//!
//! # Overview
//!
//! - Pixel model with color-space-aware construction (RGB, YCbCr
//!   BT.601/709/2020, HSV, XYZ) and bit-level channel operators
//! - Image algebra: shifts, masks, element-wise AND/OR, directional
//!   concatenation
//! - Painters: solid color, gradients, seeded random fills, calibration
//!   bar patterns
//! - Processes: area-restricted tone mapping, contrast normalization,
//!   crop, 2D convolution
//! - PNG and TIFF I/O at the fixed 16-bit RGB pixel layout
//!
//! # Example
//!
//! ```
//! use testcard::{Image, Pixel};
//! use testcard::paint::Gradator;
//! use testcard::process::{Area, Crop};
//!
//! // A horizontal ramp, cropped to its center
//! let mut ramp = Gradator::new(Pixel::<u16>::rgb(0x0020, 0x0020, 0x0020));
//! let image = Image::generate(256, 64, &mut ramp).unwrap();
//! let center = image.apply(&Crop::new(Area::new(64, 16, 96, 24))).unwrap();
//! assert_eq!((center.width(), center.height()), (64, 16));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use testcard_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use testcard_io as io;
pub use testcard_paint as paint;
pub use testcard_process as process;
