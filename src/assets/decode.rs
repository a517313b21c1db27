use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::MipResult;
use crate::mip::image::Image;

/// Decode encoded image bytes to straight-alpha RGBA8.
///
/// Channel values are taken as stored: no premultiplication, no colour-space conversion.
pub fn decode_image(bytes: &[u8]) -> MipResult<Image> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Image::new(width, height, rgba.into_raw())
}

/// Read and decode an image file, optionally mirroring it vertically.
pub fn load_image(path: &Path, flip_y: bool) -> MipResult<Image> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let img = decode_image(&bytes)?;
    Ok(if flip_y { img.flip_y() } else { img })
}

/// Encode an image as PNG.
pub fn encode_png(img: &Image) -> MipResult<Vec<u8>> {
    img.validate()?;
    let mut buf = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut buf),
        &img.data,
        img.width,
        img.height,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    Ok(buf)
}

/// Write an image to `path` as PNG, creating parent directories.
pub fn save_png(img: &Image, path: &Path) -> MipResult<()> {
    let bytes = encode_png(img)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
