use crate::foundation::core::BYTES_PER_PIXEL;
use crate::mip::chain::MipChain;

/// Where one mip level sits in a packed upload buffer.
///
/// Level `i` of a chain is meant for mip slot `i` of the destination texture; rows are tightly
/// packed (`bytes_per_row = width * 4`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LevelLayout {
    /// Mip slot.
    pub level: u32,
    /// Texels per row.
    pub width: u32,
    /// Rows.
    pub height: u32,
    /// Bytes between the starts of consecutive rows.
    pub bytes_per_row: u32,
    /// Byte offset of the level inside [`MipChain::pack`]'s buffer.
    pub offset: u64,
    /// Bytes occupied by the level.
    pub byte_len: u64,
}

impl MipChain {
    /// Per-level layout of [`MipChain::pack`], level 0 first.
    pub fn upload_layout(&self) -> Vec<LevelLayout> {
        let mut offset = 0u64;
        self.iter()
            .enumerate()
            .map(|(i, level)| {
                let byte_len = level.data.len() as u64;
                let out = LevelLayout {
                    level: i as u32,
                    width: level.width,
                    height: level.height,
                    bytes_per_row: level.width * BYTES_PER_PIXEL as u32,
                    offset,
                    byte_len,
                };
                offset += byte_len;
                out
            })
            .collect()
    }

    /// Total bytes across all levels.
    pub fn packed_len(&self) -> usize {
        self.iter().map(|level| level.data.len()).sum()
    }

    /// All levels concatenated, level 0 first.
    pub fn pack(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.packed_len());
        for level in self {
            out.extend_from_slice(&level.data);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/upload/layout.rs"]
mod tests;
