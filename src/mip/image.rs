use std::sync::Arc;

use crate::foundation::core::{BYTES_PER_PIXEL, Extent};
use crate::foundation::error::{MipError, MipResult};

/// Straight-alpha RGBA8 pixel grid, row-major, top row first.
///
/// Pixels are shared through an `Arc`; cloning an `Image` never copies them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    /// Texels per row.
    pub width: u32,
    /// Rows.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Arc<Vec<u8>>,
}

impl Image {
    /// Wrap a pixel buffer, validating its extent and length.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> MipResult<Self> {
        let img = Self {
            width,
            height,
            data: Arc::new(data),
        };
        img.validate()?;
        Ok(img)
    }

    /// An image where every texel is `rgba`.
    pub fn solid(extent: Extent, rgba: [u8; 4]) -> MipResult<Self> {
        let len = extent.byte_len()?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..extent.pixel_count() {
            data.extend_from_slice(&rgba);
        }
        Self::new(extent.width, extent.height, data)
    }

    /// Build an image by evaluating `f(x, y)` for every texel.
    pub fn from_fn(extent: Extent, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> MipResult<Self> {
        let mut data = Vec::with_capacity(extent.byte_len()?);
        for y in 0..extent.height {
            for x in 0..extent.width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::new(extent.width, extent.height, data)
    }

    /// Fails with [`MipError::InvalidDimensions`] on a zero axis or a length mismatch.
    pub fn validate(&self) -> MipResult<()> {
        let extent = Extent::new(self.width, self.height)?;
        let expected = extent.byte_len()?;
        if self.data.len() != expected {
            return Err(MipError::invalid_dimensions(format!(
                "{}x{} RGBA8 image needs {expected} bytes, got {}",
                self.width,
                self.height,
                self.data.len()
            )));
        }
        Ok(())
    }

    /// Extent without re-validating.
    pub fn extent(&self) -> Extent {
        Extent {
            width: self.width,
            height: self.height,
        }
    }

    /// Bytes in one row.
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Texel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = self.data.get(idx..idx + BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// `true` when both images point at the same pixel allocation.
    pub fn shares_data_with(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Copy with rows in reverse order.
    pub fn flip_y(&self) -> Image {
        let row = self.row_bytes();
        let mut out = Vec::with_capacity(self.data.len());
        if row > 0 {
            for src_row in self.data.chunks_exact(row).rev() {
                out.extend_from_slice(src_row);
            }
        }
        Image {
            width: self.width,
            height: self.height,
            data: Arc::new(out),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mip/image.rs"]
mod tests;
