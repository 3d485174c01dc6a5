//! Regression tests for file-level image I/O

use std::path::PathBuf;
use testcard_core::{Image, Pixel};
use testcard_io::{read_image, write_image, IoError, ImageFormat};
use testcard_paint::Gradator;

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("testcard-{}-{name}", std::process::id()));
    path
}

fn ramp_image() -> Image<u16> {
    let mut ramp = Gradator::new(Pixel::<u16>::rgb(0x0101, 0x0203, 0x0305));
    Image::generate(32, 8, &mut ramp).unwrap()
}

#[test]
fn png_file_roundtrip() {
    let path = temp_path("roundtrip.png");
    let image = ramp_image();
    write_image(&path, &image, None).unwrap();
    let decoded = read_image(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(decoded, image);
}

#[test]
fn tiff_file_roundtrip_via_explicit_format() {
    // Extension says nothing; the explicit format decides on write and
    // the magic number decides on read
    let path = temp_path("roundtrip.raw");
    let image = ramp_image();
    write_image(&path, &image, Some(ImageFormat::Tiff)).unwrap();
    let decoded = read_image(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(decoded, image);
}

#[test]
fn tiff_extension_inference() {
    let path = temp_path("inferred.tiff");
    let image = ramp_image();
    write_image(&path, &image, None).unwrap();
    let decoded = read_image(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(decoded, image);
}

#[test]
fn unknown_extension_without_format_fails() {
    let image = ramp_image();
    let result = write_image(temp_path("image.xyz"), &image, None);
    assert!(matches!(result, Err(IoError::UnknownExtension(_))));
}

#[test]
fn unrecognized_signature_fails() {
    let path = temp_path("garbage.png");
    std::fs::write(&path, b"not an image at all").unwrap();
    let result = read_image(&path);
    std::fs::remove_file(&path).ok();
    assert!(matches!(result, Err(IoError::UnsupportedFormat(_))));
}

#[test]
fn missing_file_surfaces_io_error() {
    let result = read_image(temp_path("does-not-exist.png"));
    assert!(matches!(result, Err(IoError::Io(_))));
}
