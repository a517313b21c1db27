use super::*;
use crate::mip::options::MipOptions;

fn face(rgba: [u8; 4]) -> Image {
    Image::solid(Extent::new(8, 4).unwrap(), rgba).unwrap()
}

#[test]
fn each_layer_gets_its_own_chain() {
    let chain = generate_layers(&[face([255, 0, 0, 255]), face([0, 0, 255, 255])]).unwrap();
    assert_eq!(chain.layer_count(), 2);
    assert_eq!(chain.level_count(), 4);
    assert_eq!(chain.extent(), Extent::new(8, 4).unwrap());
    assert_eq!(chain.level(0, 3).unwrap().pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(chain.level(1, 3).unwrap().pixel(0, 0), Some([0, 0, 255, 255]));
    assert!(chain.level(2, 0).is_none());
    assert!(chain.level(0, 4).is_none());
}

#[test]
fn mismatched_layer_extents_are_rejected() {
    let odd = Image::solid(Extent::new(4, 4).unwrap(), [0; 4]).unwrap();
    let err = generate_layers(&[face([0; 4]), odd]).unwrap_err();
    assert!(matches!(err, MipError::Validation(_)));
    assert!(err.to_string().contains("layer 1"));
}

#[test]
fn empty_layer_set_is_rejected() {
    assert!(matches!(
        generate_layers(&[]),
        Err(MipError::Validation(_))
    ));
}

#[test]
fn cube_requires_six_faces() {
    let generator = MipChainGenerator::new(MipOptions {
        parallel: true,
        threads: Some(2),
        ..MipOptions::default()
    })
    .unwrap();

    let faces: Vec<Image> = (0..CUBE_FACE_COUNT as u8)
        .map(|i| face([i * 40, 0, 0, 255]))
        .collect();
    let cube = generator.generate_cube(&faces).unwrap();
    assert_eq!(cube.layer_count(), CUBE_FACE_COUNT);
    assert_eq!(cube.level(5, 3).unwrap().pixel(0, 0), Some([200, 0, 0, 255]));

    assert!(generator.generate_cube(&faces[..5]).is_err());
}
