use crate::foundation::core::Extent;
use crate::mip::chain::generate_mips;
use crate::mip::image::Image;

use super::*;

#[test]
fn layout_packs_levels_back_to_back() {
    let src = Image::solid(Extent::new(4, 2).unwrap(), [1, 2, 3, 4]).unwrap();
    let chain = generate_mips(&src).unwrap();
    let layout = chain.upload_layout();

    assert_eq!(
        layout,
        vec![
            LevelLayout {
                level: 0,
                width: 4,
                height: 2,
                bytes_per_row: 16,
                offset: 0,
                byte_len: 32,
            },
            LevelLayout {
                level: 1,
                width: 2,
                height: 1,
                bytes_per_row: 8,
                offset: 32,
                byte_len: 8,
            },
            LevelLayout {
                level: 2,
                width: 1,
                height: 1,
                bytes_per_row: 4,
                offset: 40,
                byte_len: 4,
            },
        ]
    );
    assert_eq!(chain.packed_len(), 44);
}

#[test]
fn pack_matches_layout_slices() {
    let src = Image::from_fn(Extent::new(5, 3).unwrap(), |x, y| {
        [x as u8 * 50, y as u8 * 80, 0, 255]
    })
    .unwrap();
    let chain = generate_mips(&src).unwrap();
    let packed = chain.pack();
    assert_eq!(packed.len(), chain.packed_len());

    for (entry, level) in chain.upload_layout().iter().zip(chain.levels()) {
        let start = entry.offset as usize;
        let end = start + entry.byte_len as usize;
        assert_eq!(&packed[start..end], level.data.as_slice());
    }
}
