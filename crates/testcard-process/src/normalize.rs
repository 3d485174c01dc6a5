//! Area-restricted contrast normalization

use crate::Area;
use testcard_core::{Channel, Image, ImageProcess, Pixel, Result};

/// Linear contrast stretch over an area.
///
/// Finds the single minimum and maximum observed across all three
/// channels within the area and rescales so the minimum maps to 0 and
/// the maximum to the channel limit. Using one global pair instead of
/// per-channel pairs preserves hue while maximizing contrast. A flat
/// area (minimum equals maximum) is left unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalize {
    area: Area,
}

impl Normalize {
    /// Normalize the whole image.
    pub fn new() -> Self {
        Self::with_area(Area::whole())
    }

    /// Normalize only the given area.
    pub fn with_area(area: Area) -> Self {
        Normalize { area }
    }
}

impl<T: Channel> ImageProcess<T> for Normalize {
    fn process(&self, mut image: Image<T>) -> Result<Image<T>> {
        let area = self.area.resolve(&image)?;

        let mut min = T::MAX;
        let mut max = T::ZERO;
        for y in area.offset_y..area.offset_y + area.height {
            let row = image.row(y);
            for x in area.offset_x..area.offset_x + area.width {
                let px = row.pixel(x);
                for c in [px.r(), px.g(), px.b()] {
                    min = min.min(c);
                    max = max.max(c);
                }
            }
        }
        if min >= max {
            return Ok(image);
        }

        let lo = min.to_f64();
        let scale = T::MAX.to_f64() / (max.to_f64() - lo);
        let stretch = |c: T| T::from_f64((c.to_f64() - lo) * scale);
        for y in area.offset_y..area.offset_y + area.height {
            let mut row = image.row_mut(y);
            for x in area.offset_x..area.offset_x + area.width {
                let px = row.pixel(x);
                row.put(x, Pixel::rgb(stretch(px.r()), stretch(px.g()), stretch(px.b())));
            }
        }
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_stretches_to_full_range() {
        let mut image: Image<u16> = Image::new(2, 1).unwrap();
        image.put_pixel(0, 0, Pixel::rgb(0x4000, 0x4000, 0x4000));
        image.put_pixel(1, 0, Pixel::rgb(0x8000, 0x8000, 0x8000));

        let normalized = image.apply(&Normalize::new()).unwrap();
        assert_eq!(normalized.pixel(0, 0), Pixel::BLACK);
        assert_eq!(normalized.pixel(1, 0), Pixel::WHITE);
    }

    #[test]
    fn test_normalize_single_minmax_preserves_channel_order() {
        // Global min 0x1000 (blue), global max 0x5000 (red); green maps
        // against the same pair rather than its own
        let mut image: Image<u16> = Image::new(1, 1).unwrap();
        image.put_pixel(0, 0, Pixel::rgb(0x5000, 0x3000, 0x1000));

        let normalized = image.apply(&Normalize::new()).unwrap();
        assert_eq!(normalized.pixel(0, 0).r(), 0xffff);
        assert_eq!(normalized.pixel(0, 0).b(), 0x0000);
        // (0x3000 - 0x1000) * 0xffff / 0x4000 = 0x7fff (rounded)
        assert_eq!(normalized.pixel(0, 0).g(), 0x8000);
    }

    #[test]
    fn test_normalize_flat_area_unchanged() {
        let mut image: Image<u16> = Image::new(3, 3).unwrap();
        image.fill(Pixel::rgb(0x7000, 0x7000, 0x7000));
        let normalized = image.clone().apply(&Normalize::new()).unwrap();
        assert_eq!(normalized, image);
    }

    #[test]
    fn test_normalize_scoped_to_area() {
        let mut image: Image<u16> = Image::new(4, 1).unwrap();
        image.put_pixel(0, 0, Pixel::rgb(0x2000, 0x2000, 0x2000));
        image.put_pixel(1, 0, Pixel::rgb(0x4000, 0x4000, 0x4000));
        image.put_pixel(2, 0, Pixel::rgb(0x6000, 0x6000, 0x6000));
        image.put_pixel(3, 0, Pixel::rgb(0x8000, 0x8000, 0x8000));

        let normalized = image
            .apply(&Normalize::with_area(Area::new(2, 1, 1, 0)))
            .unwrap();
        assert_eq!(normalized.pixel(0, 0), Pixel::rgb(0x2000, 0x2000, 0x2000));
        assert_eq!(normalized.pixel(1, 0), Pixel::BLACK);
        assert_eq!(normalized.pixel(2, 0), Pixel::WHITE);
        assert_eq!(normalized.pixel(3, 0), Pixel::rgb(0x8000, 0x8000, 0x8000));
    }

    #[test]
    fn test_normalize_rejects_oversized_area() {
        let image: Image<u16> = Image::new(4, 4).unwrap();
        let result = image.apply(&Normalize::with_area(Area::new(5, 4, 0, 0)));
        assert!(result.is_err());
    }
}
