//! Testcard IO - Raster file I/O
//!
//! The codec collaborator for the core image types: loads PNG and TIFF
//! files into the fixed 16-bit RGB buffer layout and persists images
//! back out, with the container chosen by magic number on read and by
//! explicit format or file extension on write.
//!
//! Timestamps and text chunks embedded in the output are produced here
//! and are opaque to the core.
//!
//! # Examples
//!
//! ```no_run
//! use testcard_core::Image;
//! use testcard_io::{read_image, write_image};
//!
//! let image = read_image("input.png").unwrap();
//! write_image("output.tif", &image, None).unwrap();
//! ```

mod error;
mod format;
mod metadata;
mod png;
mod tiff;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use png::{read_png, write_png};
pub use tiff::{read_tiff, write_tiff};

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use testcard_core::Image;

/// Read a raster file into a 16-bit RGB image.
///
/// The container format is detected from the file's magic number, so
/// the extension does not have to match the contents.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unrecognized containers
/// and [`IoError::DecodeError`] for corrupt files; decoder errors are
/// surfaced unchanged.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image<u16>> {
    let format = detect_format(&path)?;
    let reader = BufReader::new(File::open(&path)?);
    match format {
        ImageFormat::Png => read_png(reader),
        ImageFormat::Tiff => read_tiff(reader),
    }
}

/// Write an image to a raster file.
///
/// When `format` is `None` it is inferred from the file extension
/// (`.png`, `.tif`, `.tiff`).
///
/// # Errors
///
/// Returns [`IoError::UnknownExtension`] when no format is given and
/// the extension is not recognized.
pub fn write_image<P: AsRef<Path>>(
    path: P,
    image: &Image<u16>,
    format: Option<ImageFormat>,
) -> IoResult<()> {
    let format = match format.or_else(|| ImageFormat::from_extension(&path)) {
        Some(format) => format,
        None => {
            return Err(IoError::UnknownExtension(
                path.as_ref().display().to_string(),
            ));
        }
    };
    let writer = BufWriter::new(File::create(&path)?);
    match format {
        ImageFormat::Png => write_png(image, writer),
        ImageFormat::Tiff => write_tiff(image, writer),
    }
}
