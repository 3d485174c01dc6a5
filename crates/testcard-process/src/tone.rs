//! Area-restricted tone mapping

use crate::Area;
use testcard_core::{Channel, Image, ImageProcess, PixelConverter, Result};

/// Applies a [`PixelConverter`] to every pixel inside an area, leaving
/// pixels outside untouched.
pub struct Tone<'a, T: Channel = u16> {
    converter: &'a dyn PixelConverter<T>,
    area: Area,
}

impl<'a, T: Channel> Tone<'a, T> {
    /// Tone-map the whole image.
    pub fn new(converter: &'a dyn PixelConverter<T>) -> Self {
        Self::with_area(converter, Area::whole())
    }

    /// Tone-map only the given area.
    pub fn with_area(converter: &'a dyn PixelConverter<T>, area: Area) -> Self {
        Tone { converter, area }
    }
}

impl<T: Channel> ImageProcess<T> for Tone<'_, T> {
    fn process(&self, mut image: Image<T>) -> Result<Image<T>> {
        let area = self.area.resolve(&image)?;
        for y in area.offset_y..area.offset_y + area.height {
            let mut row = image.row_mut(y);
            for x in area.offset_x..area.offset_x + area.width {
                row.put(x, self.converter.convert(row.pixel(x)));
            }
        }
        Ok(image)
    }
}
