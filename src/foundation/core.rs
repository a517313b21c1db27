use crate::foundation::error::{MipError, MipResult};

/// Bytes per RGBA8 texel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Width and height of one mip level, in texels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Extent {
    /// Texels per row.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

impl Extent {
    /// Build an extent; both axes must be >= 1.
    pub fn new(width: u32, height: u32) -> MipResult<Self> {
        if width == 0 || height == 0 {
            return Err(MipError::invalid_dimensions(format!(
                "extent must be at least 1x1, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Extent of the next smaller mip level: `max(1, floor(n / 2))` per axis.
    pub fn next_level(self) -> Self {
        Self {
            width: (self.width / 2).max(1),
            height: (self.height / 2).max(1),
        }
    }

    /// `true` for the terminal 1x1 level.
    pub fn is_unit(self) -> bool {
        self.width == 1 && self.height == 1
    }

    /// `width * height`, saturating.
    pub fn pixel_count(self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    /// Byte length of a tightly packed RGBA8 buffer of this extent.
    pub fn byte_len(self) -> MipResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(BYTES_PER_PIXEL))
            .ok_or_else(|| {
                MipError::invalid_dimensions(format!(
                    "{}x{} RGBA8 buffer size overflows usize",
                    self.width, self.height
                ))
            })
    }

    /// Number of levels in a full chain starting at this extent, 1x1 included.
    pub fn level_count(self) -> u32 {
        mip_level_count(self.width, self.height)
    }

    /// Every extent of the chain, level 0 first and 1x1 last.
    pub fn chain_extents(self) -> Vec<Extent> {
        let mut out = Vec::with_capacity(self.level_count() as usize);
        let mut cur = self;
        out.push(cur);
        while !cur.is_unit() {
            cur = cur.next_level();
            out.push(cur);
        }
        out
    }
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// `1 + floor(log2(max(width, height)))`, the length of a full mip chain.
///
/// Zero-sized inputs are treated as 1.
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    let max = width.max(height).max(1);
    1 + max.ilog2()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
