//! Convolution kernels
//!
//! A rectangular weight matrix for [`Filter`](crate::Filter). Kernels are
//! not normalized automatically; the stock constructors that represent
//! averaging filters pre-normalize their own weights, but a hand-built
//! kernel keeps whatever gain its weights sum to.

use testcard_core::{Error, Result};

/// A 2D convolution kernel.
///
/// Weights are stored row-major. The center sits at
/// `((width - 1) / 2, (height - 1) / 2)`, which for even dimensions is
/// the upper-left of the two middle candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKernel`] for zero dimensions or a weight
    /// count that does not match `width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidKernel(format!(
                "kernel has zero dimension: {width}x{height}"
            )));
        }
        if data.len() != (width * height) as usize {
            return Err(Error::InvalidKernel(format!(
                "{} weights do not fill a {width}x{height} kernel",
                data.len()
            )));
        }
        Ok(Kernel {
            width,
            height,
            data: data.to_vec(),
        })
    }

    /// Create a kernel from nested weight rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKernel`] if the matrix is empty or ragged.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        if width == 0 || height == 0 {
            return Err(Error::InvalidKernel("empty kernel matrix".into()));
        }
        if rows.iter().any(|r| r.len() as u32 != width) {
            return Err(Error::InvalidKernel("ragged kernel matrix".into()));
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Ok(Kernel {
            width,
            height,
            data,
        })
    }

    /// The 1x1 identity kernel.
    pub fn identity() -> Self {
        Kernel {
            width: 1,
            height: 1,
            data: vec![1.0],
        }
    }

    /// Box (averaging) kernel; all weights `1 / (size * size)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKernel`] for a zero size.
    pub fn box_kernel(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidKernel("box kernel size must be > 0".into()));
        }
        let weight = 1.0 / (size as f64 * size as f64);
        Ok(Kernel {
            width: size,
            height: size,
            data: vec![weight; (size * size) as usize],
        })
    }

    /// Gaussian kernel of the given size and standard deviation,
    /// normalized to a weight sum of 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKernel`] for a zero size or non-positive
    /// sigma.
    pub fn gaussian(size: u32, sigma: f64) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidKernel("gaussian size must be > 0".into()));
        }
        if sigma <= 0.0 {
            return Err(Error::InvalidKernel(format!(
                "gaussian sigma must be > 0, got {sigma}"
            )));
        }
        let center = ((size - 1) / 2) as f64;
        let mut data = Vec::with_capacity((size * size) as usize);
        for y in 0..size {
            for x in 0..size {
                let dx = x as f64 - center;
                let dy = y as f64 - center;
                data.push((-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp());
            }
        }
        let sum: f64 = data.iter().sum();
        for w in &mut data {
            *w /= sum;
        }
        Ok(Kernel {
            width: size,
            height: size,
            data,
        })
    }

    /// 3x3 sharpening kernel (weight sum 1).
    pub fn sharpen() -> Self {
        Kernel {
            width: 3,
            height: 3,
            data: vec![0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0],
        }
    }

    /// Kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Center column.
    #[inline]
    pub fn center_x(&self) -> u32 {
        (self.width - 1) / 2
    }

    /// Center row.
    #[inline]
    pub fn center_y(&self) -> u32 {
        (self.height - 1) / 2
    }

    /// Weight at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the kernel.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        assert!(x < self.width, "kernel column {x} outside width {}", self.width);
        self.data[(y * self.width + x) as usize]
    }

    /// Row-major weights.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}
