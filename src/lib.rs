//! mipchain generates full mip chains for RGBA8 images on the CPU.
//!
//! A chain starts at the source image (level 0) and halves each axis, floored and never below
//! one texel, until it reaches 1x1. Every destination texel is a bilinear blend of the four
//! source texels around its center, computed per channel on raw 0..=255 values.
//!
//! # Pipeline overview
//!
//! 1. **Load**: decode a file with [`load_image`], or build an [`Image`] directly.
//! 2. **Generate**: [`generate_mips`] / [`MipChainGenerator::generate`] produce a [`MipChain`];
//!    [`MipChainGenerator::generate_layers`] does the same per layer of a texture array.
//! 3. **Upload**: [`MipChain::upload_layout`] and [`MipChain::pack`] describe level `i` for mip
//!    slot `i` of a texture; [`ChainManifest`] records the layout with content digests.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: output is a pure function of the input pixels and options, including
//!   in parallel mode.
//! - **All or nothing**: invalid input fails before any level is produced; no partial chains.
//! - **Straight alpha**: channels are filtered independently, without premultiplication or
//!   gamma handling.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assets;
mod foundation;
mod mip;
mod upload;

pub use assets::decode::{decode_image, encode_png, load_image, save_png};
pub use assets::patterns::{blended_pattern, checker_mips, checkerboard};
pub use foundation::core::{BYTES_PER_PIXEL, Extent, mip_level_count};
pub use foundation::error::{MipError, MipResult, SampleAxis};
pub use mip::chain::{MipChain, MipChainGenerator, generate_mips};
pub use mip::downsample::downsample;
pub use mip::image::Image;
pub use mip::layers::{CUBE_FACE_COUNT, LayeredMipChain, generate_layers};
pub use mip::options::{EdgePolicy, MipOptions};
pub use upload::layout::LevelLayout;
pub use upload::manifest::{ChainManifest, LevelManifest, level_digest};
