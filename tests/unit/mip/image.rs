use super::*;

#[test]
fn new_rejects_length_mismatch() {
    let err = Image::new(2, 2, vec![0u8; 15]).unwrap_err();
    assert!(matches!(err, MipError::InvalidDimensions(_)));
    assert!(err.to_string().contains("needs 16 bytes, got 15"));
}

#[test]
fn new_rejects_zero_axis() {
    assert!(matches!(
        Image::new(0, 3, Vec::new()),
        Err(MipError::InvalidDimensions(_))
    ));
}

#[test]
fn validate_catches_tampered_fields() {
    let mut img = Image::solid(Extent::new(2, 2).unwrap(), [1, 2, 3, 4]).unwrap();
    img.width = 3;
    assert!(img.validate().is_err());
}

#[test]
fn pixel_reads_row_major() {
    let img = Image::from_fn(Extent::new(3, 2).unwrap(), |x, y| {
        [x as u8, y as u8, 7, 255]
    })
    .unwrap();
    assert_eq!(img.pixel(2, 1), Some([2, 1, 7, 255]));
    assert_eq!(img.pixel(0, 0), Some([0, 0, 7, 255]));
    assert_eq!(img.pixel(3, 0), None);
    assert_eq!(img.pixel(0, 2), None);
}

#[test]
fn flip_y_reverses_rows_only() {
    let img = Image::from_fn(Extent::new(2, 3).unwrap(), |x, y| {
        [x as u8, y as u8, 0, 255]
    })
    .unwrap();
    let flipped = img.flip_y();
    assert_eq!(flipped.extent(), img.extent());
    assert_eq!(flipped.pixel(1, 0), Some([1, 2, 0, 255]));
    assert_eq!(flipped.pixel(0, 2), Some([0, 0, 0, 255]));
    assert_eq!(flipped.flip_y(), img);
}

#[test]
fn clones_share_pixels() {
    let img = Image::solid(Extent::new(4, 4).unwrap(), [9, 9, 9, 9]).unwrap();
    let other = img.clone();
    assert!(img.shares_data_with(&other));
    assert!(!img.shares_data_with(&img.flip_y()));
}
