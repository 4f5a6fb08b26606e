use sheet_packer_core::prelude::*;

fn frame_of(sheet: &Sheet, key: &str) -> Rect {
    sheet
        .placements
        .iter()
        .find(|p| p.key == key)
        .map(|p| p.frame)
        .expect("key placed")
}

#[test]
fn growth_keeps_canvas_near_square() {
    // Wide canvas grows downward, tall canvas grows to the right.
    let cfg = PackerConfig::default();

    let wide = sheet_packer_core::pack_layout(vec![("wide", 4, 1), ("row", 3, 1)], &cfg);
    assert_eq!((wide.width, wide.height), (4, 2));
    assert_eq!(frame_of(&wide, "row"), Rect::new(0, 1, 3, 1));

    let tall = sheet_packer_core::pack_layout(vec![("tall", 1, 4), ("col", 1, 3)], &cfg);
    assert_eq!((tall.width, tall.height), (2, 4));
    assert_eq!(frame_of(&tall, "col"), Rect::new(1, 0, 1, 3));
}

#[test]
fn growth_direction_is_limited_by_strip_shape() {
    // An item taller than the canvas cannot go right (the strip would not be
    // rectangular), so it must go below, and vice versa.
    let cfg = PackerConfig::default();

    let sheet = sheet_packer_core::pack_layout(vec![("tall", 1, 4), ("wide", 4, 1)], &cfg);
    assert_eq!((sheet.width, sheet.height), (5, 4));
    assert_eq!(frame_of(&sheet, "wide"), Rect::new(1, 0, 4, 1));

    let sheet = sheet_packer_core::pack_layout(vec![("wide", 6, 2), ("tall", 2, 3)], &cfg);
    // tall (h=3) exceeds the canvas height (2), so only downward growth works
    assert_eq!((sheet.width, sheet.height), (6, 5));
    assert_eq!(frame_of(&sheet, "tall"), Rect::new(0, 2, 2, 3));
}

#[test]
fn aligned_growth_prefers_smaller_rounded_canvas() {
    // Unaligned, squareness sends the second item below (6x4 canvas). With
    // alignment on, growing right keeps the rounded canvas at 8x2 = 16 px^2
    // instead of 8x4 = 32 px^2, so the packer grows right instead.
    let plain = PackerConfig::default();
    let sheet = sheet_packer_core::pack_layout(vec![("wide", 6, 2), ("sq", 2, 2)], &plain);
    assert_eq!((sheet.width, sheet.height), (6, 4));
    assert_eq!(frame_of(&sheet, "sq"), Rect::new(0, 2, 2, 2));

    let aligned = PackerConfig::builder().aligned(true).build();
    let sheet = sheet_packer_core::pack_layout(vec![("wide", 6, 2), ("sq", 2, 2)], &aligned);
    assert_eq!((sheet.width, sheet.height), (8, 2));
    assert_eq!(frame_of(&sheet, "sq"), Rect::new(6, 0, 2, 2));
}
