use crate::foundation::core::Extent;
use crate::foundation::error::{MipError, MipResult};
use crate::mip::chain::{MipChain, MipChainGenerator, generate_with_pool};
use crate::mip::image::Image;

/// Faces in a cube map, in +X, -X, +Y, -Y, +Z, -Z order.
pub const CUBE_FACE_COUNT: usize = 6;

/// One mip chain per array layer, all layers sharing an extent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayeredMipChain {
    layers: Vec<MipChain>,
}

impl LayeredMipChain {
    /// Chains in layer order.
    pub fn layers(&self) -> &[MipChain] {
        &self.layers
    }

    /// Chain for `layer`.
    pub fn layer(&self, layer: usize) -> Option<&MipChain> {
        self.layers.get(layer)
    }

    /// Level `level` of layer `layer`.
    pub fn level(&self, layer: usize, level: usize) -> Option<&Image> {
        self.layers.get(layer)?.level(level)
    }

    /// Number of array layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Levels per layer; identical across layers.
    pub fn level_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Extent of level 0 in every layer.
    pub fn extent(&self) -> Extent {
        self.layers[0].base().extent()
    }
}

impl MipChainGenerator {
    /// Generate a chain per layer of a texture array.
    ///
    /// Every layer must be valid and share the first layer's extent. A thread pool, when
    /// configured, is built once and reused for all layers.
    #[tracing::instrument(skip(self, layers), fields(layer_count = layers.len()))]
    pub fn generate_layers(&self, layers: &[Image]) -> MipResult<LayeredMipChain> {
        let Some(first) = layers.first() else {
            return Err(MipError::validation("layered mip chain needs at least one layer"));
        };
        let extent = first.extent();
        for (i, layer) in layers.iter().enumerate() {
            layer.validate()?;
            if layer.extent() != extent {
                return Err(MipError::validation(format!(
                    "layer {i} is {}, expected {extent} like layer 0",
                    layer.extent()
                )));
            }
        }

        let pool = self.build_pool()?;
        let mut chains = Vec::with_capacity(layers.len());
        for (i, layer) in layers.iter().enumerate() {
            tracing::debug!(layer = i, "generating layer mips");
            chains.push(generate_with_pool(layer, self.options(), pool.as_ref())?);
        }
        Ok(LayeredMipChain { layers: chains })
    }

    /// Generate chains for the six faces of a cube map.
    pub fn generate_cube(&self, faces: &[Image]) -> MipResult<LayeredMipChain> {
        if faces.len() != CUBE_FACE_COUNT {
            return Err(MipError::validation(format!(
                "cube map needs {CUBE_FACE_COUNT} faces, got {}",
                faces.len()
            )));
        }
        self.generate_layers(faces)
    }
}

/// [`MipChainGenerator::generate_layers`] with default options.
pub fn generate_layers(layers: &[Image]) -> MipResult<LayeredMipChain> {
    MipChainGenerator::default().generate_layers(layers)
}

#[cfg(test)]
#[path = "../../tests/unit/mip/layers.rs"]
mod tests;
