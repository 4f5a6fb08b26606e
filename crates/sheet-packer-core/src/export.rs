use crate::model::Sheet;
use serde_json::{json, Value};

/// Serialize a `Sheet` as a JSON manifest keyed by item name.
/// Shape: `{ frames: { name: { x, y, w, h } }, unfit: [name], meta: { width, height, padding, aligned } }`.
/// Frames carry content rectangles; padding sits outside them.
pub fn to_json<K: ToString>(sheet: &Sheet<K>) -> Value {
    let mut frames = serde_json::Map::new();
    for placement in &sheet.placements {
        let key = placement.key.to_string();
        frames.insert(
            key,
            json!({
                "x": placement.frame.x,
                "y": placement.frame.y,
                "w": placement.frame.w,
                "h": placement.frame.h,
            }),
        );
    }
    let unfit: Vec<String> = sheet.unfit.iter().map(|k| k.to_string()).collect();
    json!({
        "frames": frames,
        "unfit": unfit,
        "meta": {
            "width": sheet.width,
            "height": sheet.height,
            "padding": sheet.padding,
            "aligned": sheet.aligned,
        },
    })
}
