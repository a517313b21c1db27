use std::io::Cursor;

use crate::foundation::core::Extent;
use crate::foundation::error::MipError;

use super::*;

#[test]
fn decode_png_keeps_straight_alpha() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8];
    let img = image::RgbaImage::from_raw(1, 1, src_rgba.clone()).unwrap();

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_image(&buf).unwrap();
    assert_eq!(decoded.extent(), Extent::new(1, 1).unwrap());
    assert_eq!(decoded.data.as_slice(), src_rgba.as_slice());
}

#[test]
fn png_encode_decode_preserves_pixels() {
    let img = Image::from_fn(Extent::new(3, 2).unwrap(), |x, y| {
        [x as u8 * 60, y as u8 * 90, 17, 200]
    })
    .unwrap();
    let decoded = decode_image(&encode_png(&img).unwrap()).unwrap();
    assert_eq!(decoded, img);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(matches!(
        decode_image(b"not an image"),
        Err(MipError::Other(_))
    ));
}

#[test]
fn save_then_load_with_flip() {
    let dir = std::path::PathBuf::from("target").join("unit_decode");
    let path = dir.join("flip.png");
    let img = Image::from_fn(Extent::new(1, 3).unwrap(), |_, y| [y as u8, 0, 0, 255]).unwrap();

    save_png(&img, &path).unwrap();
    assert_eq!(load_image(&path, false).unwrap(), img);
    assert_eq!(load_image(&path, true).unwrap(), img.flip_y());
}
