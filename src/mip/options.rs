use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{MipError, MipResult};

/// How bilinear taps that fall outside the source level are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Clamp tap coordinates to the nearest edge texel.
    #[default]
    Clamp,
    /// Report any out-of-range tap as [`MipError::OutOfBoundsSample`].
    Strict,
}

/// Knobs for [`MipChainGenerator`](crate::MipChainGenerator).
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MipOptions {
    /// Edge handling for bilinear taps.
    pub edge: EdgePolicy,
    /// Fill the rows of each level on a rayon pool.
    pub parallel: bool,
    /// Optional explicit worker thread count for parallel mode.
    pub threads: Option<usize>,
}

impl MipOptions {
    /// Reject option combinations that can never run.
    pub fn validate(&self) -> MipResult<()> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(MipError::validation("'threads' must be >= 1 when set"));
        }
        Ok(())
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(json: &str) -> MipResult<Self> {
        let opts: Self = serde_json::from_str(json)
            .map_err(|e| MipError::serde(format!("parse mip options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Read and parse a JSON options file.
    pub fn from_json_path(path: &Path) -> MipResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read mip options '{}'", path.display()))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mip/options.rs"]
mod tests;
