use crate::foundation::core::Extent;
use crate::foundation::error::{MipError, MipResult};
use crate::mip::downsample::downsample_level;
use crate::mip::image::Image;
use crate::mip::options::MipOptions;

/// Full mip chain: level 0 is the source, every later level halves, the last is 1x1.
///
/// Immutable once built; regenerate from a new source to change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MipChain {
    levels: Vec<Image>,
}

impl MipChain {
    /// Adopt hand-authored levels after checking every chain invariant.
    pub fn from_levels(levels: Vec<Image>) -> MipResult<Self> {
        let Some(first) = levels.first() else {
            return Err(MipError::validation("mip chain needs at least one level"));
        };
        first.validate()?;

        for (i, pair) in levels.windows(2).enumerate() {
            pair[1].validate()?;
            let expected = pair[0].extent().next_level();
            if pair[1].extent() != expected {
                return Err(MipError::validation(format!(
                    "mip level {} is {}, expected {expected}",
                    i + 1,
                    pair[1].extent()
                )));
            }
        }

        let last = levels[levels.len() - 1].extent();
        if !last.is_unit() {
            return Err(MipError::validation(format!(
                "mip chain must end at 1x1, last level is {last}"
            )));
        }
        Ok(Self { levels })
    }

    /// All levels, level 0 first.
    pub fn levels(&self) -> &[Image] {
        &self.levels
    }

    /// Level `i`, or `None` past the end.
    pub fn level(&self, i: usize) -> Option<&Image> {
        self.levels.get(i)
    }

    /// Level 0.
    pub fn base(&self) -> &Image {
        &self.levels[0]
    }

    /// The terminal 1x1 level.
    pub fn last(&self) -> &Image {
        &self.levels[self.levels.len() - 1]
    }

    /// Number of levels; never zero.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Never `true` for a constructed chain.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate levels, level 0 first.
    pub fn iter(&self) -> std::slice::Iter<'_, Image> {
        self.levels.iter()
    }

    /// Extent of every level.
    pub fn extents(&self) -> Vec<Extent> {
        self.levels.iter().map(Image::extent).collect()
    }

    /// Give up ownership of the levels.
    pub fn into_levels(self) -> Vec<Image> {
        self.levels
    }
}

impl<'a> IntoIterator for &'a MipChain {
    type Item = &'a Image;
    type IntoIter = std::slice::Iter<'a, Image>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

/// Builds [`MipChain`]s from source images.
///
/// Holds only options; no state survives between calls.
#[derive(Clone, Debug, Default)]
pub struct MipChainGenerator {
    opts: MipOptions,
}

impl MipChainGenerator {
    /// Create a generator after validating `opts`.
    pub fn new(opts: MipOptions) -> MipResult<Self> {
        opts.validate()?;
        Ok(Self { opts })
    }

    /// Options this generator runs with.
    pub fn options(&self) -> &MipOptions {
        &self.opts
    }

    /// Generate the full chain for `source`.
    ///
    /// Level 0 shares `source`'s pixel buffer. Levels are produced strictly in order; within a
    /// level, rows are filled on a rayon pool when [`MipOptions::parallel`] is set. Any error is
    /// raised before a chain is returned.
    #[tracing::instrument(skip(self, source), fields(width = source.width, height = source.height))]
    pub fn generate(&self, source: &Image) -> MipResult<MipChain> {
        source.validate()?;
        let pool = self.build_pool()?;
        generate_with_pool(source, &self.opts, pool.as_ref())
    }

    pub(crate) fn build_pool(&self) -> MipResult<Option<rayon::ThreadPool>> {
        if !self.opts.parallel {
            return Ok(None);
        }
        build_thread_pool(self.opts.threads).map(Some)
    }
}

/// Generate a chain with default options (edge clamping, single-threaded).
pub fn generate_mips(source: &Image) -> MipResult<MipChain> {
    MipChainGenerator::default().generate(source)
}

pub(crate) fn generate_with_pool(
    source: &Image,
    opts: &MipOptions,
    pool: Option<&rayon::ThreadPool>,
) -> MipResult<MipChain> {
    let mut levels = Vec::with_capacity(source.extent().level_count() as usize);
    levels.push(source.clone());

    while !levels[levels.len() - 1].extent().is_unit() {
        let next = downsample_level(&levels[levels.len() - 1], opts.edge, pool)?;
        tracing::debug!(level = levels.len(), extent = %next.extent(), "mip level generated");
        levels.push(next);
    }
    Ok(MipChain { levels })
}

fn build_thread_pool(threads: Option<usize>) -> MipResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MipError::validation("'threads' must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    tracing::debug!(?threads, "building mip thread pool");
    builder
        .build()
        .map_err(|e| MipError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/mip/chain.rs"]
mod tests;
