use image::{DynamicImage, RgbaImage};
use sheet_packer_core::prelude::*;

#[test]
fn four_equal_squares_fill_the_canvas() {
    let cfg = PackerConfig::default();
    let inputs: Vec<InputImage> = (0..4)
        .map(|i| InputImage {
            key: format!("tex_{i}"),
            image: DynamicImage::ImageRgba8(RgbaImage::new(64, 64)),
        })
        .collect();
    let out = sheet_packer_core::pack_images(inputs, &cfg);
    assert_eq!((out.sheet.width, out.sheet.height), (128, 128));

    let stats = out.stats();
    assert_eq!(stats.num_placed, 4);
    assert_eq!(stats.num_unfit, 0);
    assert_eq!(stats.used_area, 4 * 64 * 64);
    assert_eq!(stats.canvas_area, 128 * 128);
    assert!((stats.occupancy - 1.0).abs() < 1e-9);
    assert_eq!(stats.wasted_area(), 0);
    assert_eq!(stats.waste_percentage(), 0.0);
}

#[test]
fn occupancy_counts_content_not_padding() {
    let cfg = PackerConfig::builder().padding(2).build();
    let sheet = sheet_packer_core::pack_layout(vec![("a", 4, 4)], &cfg);
    let stats = sheet.stats();
    assert_eq!(stats.used_area, 16);
    assert_eq!(stats.canvas_area, 64); // 8x8 slot
    assert!(stats.occupancy < 1.0);
    assert!(stats.wasted_area() > 0);
}

#[test]
fn stats_summary_mentions_counts() {
    let cfg = PackerConfig::default();
    let sheet = sheet_packer_core::pack_layout(vec![("a", 2, 2), ("b", 2, 2)], &cfg);
    let summary = sheet.stats().summary();
    assert!(summary.contains("Placed: 2"), "{summary}");
    assert!(summary.contains("Unfit: 0"), "{summary}");
}

#[test]
fn unfit_keys_are_counted() {
    let sheet = Sheet {
        width: 4,
        height: 4,
        placements: vec![],
        unfit: vec!["big".to_string()],
        padding: 0,
        aligned: false,
    };
    assert_eq!(sheet.stats().num_unfit, 1);
    assert_eq!(sheet.stats().num_placed, 0);
}
