//! 2D convolution filter

use crate::Kernel;
use testcard_core::{Channel, Image, ImageProcess, Pixel, Result};

/// Convolves the whole buffer with a [`Kernel`].
///
/// Border handling replicates the nearest edge pixel: samples whose
/// kernel window would read outside the buffer are clamped to the edge,
/// so every output pixel is a full weighted sum. Per-channel results are
/// rounded to nearest and clamped to the channel range; the kernel is
/// applied exactly as given, with no normalization.
#[derive(Debug, Clone)]
pub struct Filter {
    kernel: Kernel,
}

impl Filter {
    /// Filter with the given kernel.
    pub fn new(kernel: Kernel) -> Self {
        Filter { kernel }
    }
}

impl<T: Channel> ImageProcess<T> for Filter {
    fn process(&self, image: Image<T>) -> Result<Image<T>> {
        let w = image.width();
        let h = image.height();
        let kw = self.kernel.width();
        let kh = self.kernel.height();
        let cx = self.kernel.center_x() as i64;
        let cy = self.kernel.center_y() as i64;

        let mut out = Image::new(w, h)?;
        for y in 0..h {
            for x in 0..w {
                let mut sum_r = 0.0f64;
                let mut sum_g = 0.0f64;
                let mut sum_b = 0.0f64;
                for ky in 0..kh {
                    let sy = (y as i64 + ky as i64 - cy).clamp(0, h as i64 - 1) as u32;
                    for kx in 0..kw {
                        let sx = (x as i64 + kx as i64 - cx).clamp(0, w as i64 - 1) as u32;
                        let px = image.pixel(sx, sy);
                        let weight = self.kernel.get(kx, ky);
                        sum_r += px.r().to_f64() * weight;
                        sum_g += px.g().to_f64() * weight;
                        sum_b += px.b().to_f64() * weight;
                    }
                }
                out.put_pixel(
                    x,
                    y,
                    Pixel::rgb(T::from_f64(sum_r), T::from_f64(sum_g), T::from_f64(sum_b)),
                );
            }
        }
        Ok(out)
    }
}
