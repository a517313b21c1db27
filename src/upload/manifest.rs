use xxhash_rust::xxh3::Xxh3;

use crate::foundation::error::{MipError, MipResult};
use crate::mip::chain::MipChain;
use crate::mip::image::Image;
use crate::upload::layout::LevelLayout;

const XXH3_SEED: u64 = 0x6d69_7063_6861_696e;

/// Stable content digest of one level: extent plus pixel bytes.
pub fn level_digest(image: &Image) -> u64 {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    h.update(&image.width.to_le_bytes());
    h.update(&image.height.to_le_bytes());
    h.update(&image.data);
    h.digest()
}

/// One manifest row: layout plus content digest.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LevelManifest {
    /// Placement in the packed upload buffer.
    #[serde(flatten)]
    pub layout: LevelLayout,
    /// [`level_digest`] as 16 lowercase hex digits.
    pub xxh3: String,
}

/// JSON-serializable description of a generated chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChainManifest {
    /// Levels, level 0 first.
    pub levels: Vec<LevelManifest>,
    /// Bytes across all levels.
    pub packed_len: u64,
}

impl ChainManifest {
    /// Describe `chain`.
    pub fn from_chain(chain: &MipChain) -> Self {
        let levels = chain
            .upload_layout()
            .into_iter()
            .zip(chain.levels())
            .map(|(layout, level)| LevelManifest {
                layout,
                xxh3: format!("{:016x}", level_digest(level)),
            })
            .collect();
        Self {
            levels,
            packed_len: chain.packed_len() as u64,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> MipResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MipError::serde(format!("serialize chain manifest: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/upload/manifest.rs"]
mod tests;
