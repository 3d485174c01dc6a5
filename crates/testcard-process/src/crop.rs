//! Area extraction

use crate::Area;
use testcard_core::{Channel, Image, ImageProcess, Result};

/// Extracts the pixels inside an area into a new, smaller image.
///
/// The rest of the source buffer is discarded. Unlike tone mapping and
/// normalization, crop has no whole-image default: a degenerate
/// (zero-dimension) area is an error, not an empty or full image.
#[derive(Debug, Clone, Copy)]
pub struct Crop {
    area: Area,
}

impl Crop {
    /// Crop to `area`.
    pub fn new(area: Area) -> Self {
        Crop { area }
    }
}

impl<T: Channel> ImageProcess<T> for Crop {
    fn process(&self, image: Image<T>) -> Result<Image<T>> {
        if self.area.is_empty() || !self.area.fits_within(image.width(), image.height()) {
            return Err(self.area.out_of_bounds(&image));
        }

        let stride = Image::<T>::STRIDE;
        let x0 = self.area.offset_x as usize * stride;
        let x1 = (self.area.offset_x + self.area.width) as usize * stride;
        let mut data = Vec::with_capacity(self.area.height as usize * (x1 - x0));
        for y in self.area.offset_y..self.area.offset_y + self.area.height {
            data.extend_from_slice(&image.row(y).bytes()[x0..x1]);
        }
        Image::from_raw(self.area.width, self.area.height, data)
    }
}
