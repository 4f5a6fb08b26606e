use image::{Rgba, RgbaImage};
use sheet_packer_core::prelude::*;
use std::io::Cursor;
use std::path::Path;

#[test]
fn format_follows_the_file_extension() {
    let cases = [
        ("sheet.png", OutputFormat::Png),
        ("sheet.PNG", OutputFormat::Png),
        ("sheet.jpg", OutputFormat::Jpeg),
        ("sheet.jpeg", OutputFormat::Jpeg),
        ("sheet.bmp", OutputFormat::Bmp),
    ];
    for (name, expected) in cases {
        let got = OutputFormat::from_path(Path::new(name)).expect("supported");
        assert_eq!(got, expected, "{name}");
    }
    assert!(matches!(
        OutputFormat::from_path(Path::new("sheet.tiff")),
        Err(SheetPackerError::UnsupportedFormat(_))
    ));
    assert!(OutputFormat::from_path(Path::new("sheet")).is_err());
}

#[test]
fn encoded_streams_start_with_the_right_magic() {
    let canvas = RgbaImage::from_pixel(8, 4, Rgba([1, 2, 3, 255]));

    let mut png = Cursor::new(Vec::new());
    encode_canvas(&mut png, &canvas, OutputFormat::Png, true, None).expect("png");
    assert_eq!(
        &png.get_ref()[..8],
        &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']
    );

    let mut jpeg = Cursor::new(Vec::new());
    encode_canvas(&mut jpeg, &canvas, OutputFormat::Jpeg, true, Some(80)).expect("jpeg");
    assert_eq!(&jpeg.get_ref()[..2], &[0xFF, 0xD8]);

    let mut bmp = Cursor::new(Vec::new());
    encode_canvas(&mut bmp, &canvas, OutputFormat::Bmp, false, None).expect("bmp");
    assert_eq!(&bmp.get_ref()[..2], b"BM");
}

#[test]
fn out_of_range_params_are_rejected() {
    let canvas = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    let mut buf = Cursor::new(Vec::new());

    let err = encode_canvas(&mut buf, &canvas, OutputFormat::Jpeg, false, Some(101)).unwrap_err();
    assert!(matches!(err, SheetPackerError::InvalidParam(_)));

    let err = encode_canvas(&mut buf, &canvas, OutputFormat::Png, false, Some(10)).unwrap_err();
    assert!(matches!(err, SheetPackerError::InvalidParam(_)));

    let err = encode_canvas(&mut buf, &canvas, OutputFormat::Png, false, Some(-1)).unwrap_err();
    assert!(matches!(err, SheetPackerError::InvalidParam(_)));
}

#[test]
fn only_png_can_keep_alpha() {
    assert!(OutputFormat::Png.keeps_alpha(true));
    assert!(!OutputFormat::Png.keeps_alpha(false));
    assert!(!OutputFormat::Jpeg.keeps_alpha(true));
    assert!(!OutputFormat::Bmp.keeps_alpha(true));
}
