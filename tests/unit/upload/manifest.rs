use crate::foundation::core::Extent;
use crate::mip::chain::generate_mips;

use super::*;

#[test]
fn digest_depends_on_extent_and_pixels() {
    let a = Image::solid(Extent::new(2, 2).unwrap(), [1, 2, 3, 4]).unwrap();
    let b = Image::solid(Extent::new(4, 1).unwrap(), [1, 2, 3, 4]).unwrap();
    let c = Image::solid(Extent::new(2, 2).unwrap(), [1, 2, 3, 5]).unwrap();

    assert_eq!(level_digest(&a), level_digest(&a.clone()));
    assert_ne!(level_digest(&a), level_digest(&b));
    assert_ne!(level_digest(&a), level_digest(&c));
}

#[test]
fn manifest_json_is_flat_per_level() {
    let src = Image::solid(Extent::new(2, 2).unwrap(), [9, 9, 9, 255]).unwrap();
    let chain = generate_mips(&src).unwrap();
    let manifest = ChainManifest::from_chain(&chain);
    assert_eq!(manifest.levels.len(), 2);
    assert_eq!(manifest.packed_len, 20);

    let json: serde_json::Value =
        serde_json::from_str(&manifest.to_json_pretty().unwrap()).unwrap();
    let level1 = &json["levels"][1];
    assert_eq!(level1["level"], 1);
    assert_eq!(level1["width"], 1);
    assert_eq!(level1["bytes_per_row"], 4);
    assert_eq!(level1["offset"], 16);
    assert_eq!(level1["xxh3"].as_str().unwrap().len(), 16);
}
