//! Error types for testcard-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Testcard core error type
#[derive(Error, Debug)]
pub enum Error {
    /// A channel input violates the valid range of its declared color space
    #[error("{channel} value {value} outside valid range [{min}, {max}]")]
    ChannelOutOfRange {
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Hue input outside the six 60-degree sectors
    #[error("hue {0} degrees outside [0, 360]")]
    HueOutOfRange(f64),

    /// Hue queried on an achromatic pixel (max channel == min channel)
    #[error("hue undefined for achromatic pixel")]
    UndefinedHue,

    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw buffer length does not match the declared dimensions
    #[error("buffer length {actual} does not match {width}x{height} ({expected} bytes)")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Pixel coordinates outside the image
    #[error("pixel ({x}, {y}) outside image bounds {width}x{height}")]
    IndexOutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    /// Row range outside the image
    #[error("row range {start}..{end} outside image height {height}")]
    InvalidRowRange { start: u32, end: u32, height: u32 },

    /// Binary image operation on images of incompatible size
    #[error("incompatible image sizes: {0}x{1} vs {2}x{3}")]
    SizeMismatch(u32, u32, u32, u32),

    /// No concatenation orientation fits the two images
    #[error("no concatenation orientation fits images {0}x{1} and {2}x{3}")]
    OrientationMismatch(u32, u32, u32, u32),

    /// Area exceeds the target image
    #[error("area {aw}x{ah} at ({ax}, {ay}) exceeds image bounds {width}x{height}")]
    AreaOutOfBounds {
        aw: u32,
        ah: u32,
        ax: u32,
        ay: u32,
        width: u32,
        height: u32,
    },

    /// Invalid convolution kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for testcard operations
pub type Result<T> = std::result::Result<T, Error>;
