//! TIFF image format support
//!
//! Reads RGB and grayscale TIFFs at 8 or 16 bits per sample into the
//! fixed 16-bit RGB buffer and writes RGB16 with a `DateTime` tag.

use crate::{IoError, IoResult};
use ::tiff::decoder::{Decoder, DecodingResult};
use ::tiff::encoder::{TiffEncoder, colortype};
use ::tiff::tags::Tag;
use ::tiff::ColorType;
use std::io::{Read, Seek, Write};
use testcard_core::Image;

fn widen(sample: u8) -> u16 {
    u16::from(sample) * 257
}

/// Read a TIFF image into a 16-bit RGB buffer.
pub fn read_tiff<R: Read + Seek>(reader: R) -> IoResult<Image<u16>> {
    let mut decoder =
        Decoder::new(reader).map_err(|e| IoError::DecodeError(format!("TIFF decode error: {e}")))?;
    let (width, height) = decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("TIFF dimensions: {e}")))?;
    let color_type = decoder
        .colortype()
        .map_err(|e| IoError::DecodeError(format!("TIFF colortype: {e}")))?;
    let result = decoder
        .read_image()
        .map_err(|e| IoError::DecodeError(format!("TIFF read error: {e}")))?;

    let pixel_count = width as usize * height as usize;
    let samples: Vec<u16> = match (color_type, result) {
        (ColorType::RGB(16), DecodingResult::U16(data)) => data,
        (ColorType::RGB(8), DecodingResult::U8(data)) => {
            data.into_iter().map(widen).collect()
        }
        (ColorType::RGBA(16), DecodingResult::U16(data)) => data
            .chunks_exact(4)
            .flat_map(|px| px[..3].to_vec())
            .collect(),
        (ColorType::RGBA(8), DecodingResult::U8(data)) => data
            .chunks_exact(4)
            .flat_map(|px| px[..3].iter().map(|&s| widen(s)).collect::<Vec<_>>())
            .collect(),
        (ColorType::Gray(16), DecodingResult::U16(data)) => {
            data.into_iter().flat_map(|s| [s, s, s]).collect()
        }
        (ColorType::Gray(8), DecodingResult::U8(data)) => {
            data.into_iter().flat_map(|s| [widen(s); 3]).collect()
        }
        (other, _) => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported TIFF layout: {other:?}"
            )));
        }
    };
    if samples.len() != pixel_count * 3 {
        return Err(IoError::InvalidData(format!(
            "TIFF sample count {} does not cover {width}x{height}",
            samples.len()
        )));
    }

    let mut data = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        data.extend_from_slice(&sample.to_be_bytes());
    }
    Image::from_raw(width, height, data).map_err(IoError::Core)
}

/// Write an image as RGB16 TIFF with a `DateTime` tag.
pub fn write_tiff<W: Write + Seek>(image: &Image<u16>, writer: W) -> IoResult<()> {
    let samples: Vec<u16> = image
        .data()
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();

    let mut encoder = TiffEncoder::new(writer)
        .map_err(|e| IoError::EncodeError(format!("TIFF encoder error: {e}")))?;
    let mut tiff_image = encoder
        .new_image::<colortype::RGB16>(image.width(), image.height())
        .map_err(|e| IoError::EncodeError(format!("TIFF image error: {e}")))?;
    tiff_image
        .encoder()
        .write_tag(Tag::DateTime, crate::metadata::tiff_datetime().as_str())
        .map_err(|e| IoError::EncodeError(format!("TIFF tag error: {e}")))?;
    tiff_image
        .write_data(&samples)
        .map_err(|e| IoError::EncodeError(format!("TIFF write error: {e}")))?;
    Ok(())
}
