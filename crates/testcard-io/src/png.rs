//! PNG image format support
//!
//! Reads common PNG layouts into the fixed 16-bit RGB buffer (8-bit
//! sources widen by sample replication, alpha is dropped) and writes
//! 16-bit RGB with `Software` and `Creation Time` text chunks. The
//! buffer layout matches PNG's big-endian sample order, so 16-bit RGB
//! rows pass through untouched.

use crate::{IoError, IoResult};
use ::png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};
use testcard_core::Image;

/// Read a PNG image into a 16-bit RGB buffer.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image<u16>> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;

    let line_size = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut out = Vec::with_capacity(width as usize * height as usize * Image::<u16>::STRIDE);
    for row in data.chunks_exact(line_size) {
        match (color_type, bit_depth) {
            (ColorType::Rgb, BitDepth::Sixteen) => {
                out.extend_from_slice(row);
            }
            (ColorType::Rgb, BitDepth::Eight) => {
                // v * 257 replicates the byte into both halves
                for &sample in row {
                    out.push(sample);
                    out.push(sample);
                }
            }
            (ColorType::Rgba, BitDepth::Sixteen) => {
                for px in row.chunks_exact(8) {
                    out.extend_from_slice(&px[..6]);
                }
            }
            (ColorType::Rgba, BitDepth::Eight) => {
                for px in row.chunks_exact(4) {
                    for &sample in &px[..3] {
                        out.push(sample);
                        out.push(sample);
                    }
                }
            }
            (ColorType::Grayscale, BitDepth::Sixteen) => {
                for px in row.chunks_exact(2) {
                    for _ in 0..3 {
                        out.extend_from_slice(px);
                    }
                }
            }
            (ColorType::Grayscale, BitDepth::Eight) => {
                for &sample in row {
                    for _ in 0..3 {
                        out.push(sample);
                        out.push(sample);
                    }
                }
            }
            (ColorType::GrayscaleAlpha, BitDepth::Sixteen) => {
                for px in row.chunks_exact(4) {
                    for _ in 0..3 {
                        out.extend_from_slice(&px[..2]);
                    }
                }
            }
            (ColorType::GrayscaleAlpha, BitDepth::Eight) => {
                for px in row.chunks_exact(2) {
                    for _ in 0..3 {
                        out.push(px[0]);
                        out.push(px[0]);
                    }
                }
            }
            _ => {
                return Err(IoError::UnsupportedFormat(format!(
                    "unsupported PNG layout: {color_type:?} {bit_depth:?}"
                )));
            }
        }
    }

    Image::from_raw(width, height, out).map_err(IoError::Core)
}

/// Write an image as 16-bit RGB PNG with creation-time metadata.
pub fn write_png<W: Write>(image: &Image<u16>, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Sixteen);
    encoder
        .add_text_chunk("Software".to_string(), "testcard".to_string())
        .map_err(|e| IoError::EncodeError(format!("PNG text chunk error: {e}")))?;
    encoder
        .add_text_chunk(
            "Creation Time".to_string(),
            crate::metadata::creation_time_rfc1123(),
        )
        .map_err(|e| IoError::EncodeError(format!("PNG text chunk error: {e}")))?;

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;
    writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use testcard_core::Pixel;

    #[test]
    fn test_png_roundtrip_rgb16() {
        let mut image: Image<u16> = Image::new(7, 5).unwrap();
        for y in 0..5 {
            for x in 0..7 {
                image.put_pixel(x, y, Pixel::rgb((x * 1000) as u16, (y * 2000) as u16, 0xabcd));
            }
        }

        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();
        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_png_read_widens_8bit() {
        // Encode an 8-bit RGB image directly with the png crate
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[0xff, 0x80, 0x00, 0x12, 0x34, 0x56])
                .unwrap();
        }

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.pixel(0, 0), Pixel::rgb(0xffff, 0x8080, 0x0000));
        assert_eq!(decoded.pixel(1, 0), Pixel::rgb(0x1212, 0x3434, 0x5656));
    }

    #[test]
    fn test_png_read_grayscale16() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 1, 2);
            encoder.set_color(ColorType::Grayscale);
            encoder.set_depth(BitDepth::Sixteen);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0x12, 0x34, 0xfe, 0xdc]).unwrap();
        }

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.pixel(0, 0), Pixel::rgb(0x1234, 0x1234, 0x1234));
        assert_eq!(decoded.pixel(0, 1), Pixel::rgb(0xfedc, 0xfedc, 0xfedc));
    }

    #[test]
    fn test_png_software_chunk_is_written() {
        let image: Image<u16> = Image::new(1, 1).unwrap();
        let mut buffer = Vec::new();
        write_png(&image, &mut buffer).unwrap();

        let decoder = Decoder::new(Cursor::new(buffer));
        let reader = decoder.read_info().unwrap();
        let texts = &reader.info().uncompressed_latin1_text;
        assert!(texts.iter().any(|t| t.keyword == "Software" && t.text == "testcard"));
        assert!(texts.iter().any(|t| t.keyword == "Creation Time"));
    }
}
