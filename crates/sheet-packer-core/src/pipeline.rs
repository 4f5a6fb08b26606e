use std::collections::HashMap;

use image::{DynamicImage, RgbaImage};
use tracing::{debug, instrument, warn};

use crate::compositing;
use crate::config::PackerConfig;
use crate::model::{Placement, Rect, Sheet, SheetStats};
use crate::packer::{BspPacker, Item};

/// In-memory image to pack (key + decoded image).
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a packing run: the sheet record and the composited RGBA canvas.
pub struct PackOutput {
    pub sheet: Sheet,
    pub rgba: RgbaImage,
}

impl PackOutput {
    /// Computes packing statistics for this output.
    /// This is a convenience method that delegates to `sheet.stats()`.
    pub fn stats(&self) -> SheetStats {
        self.sheet.stats()
    }
}

/// Packs `inputs` onto one auto-growing sheet and composites them onto an
/// RGBA canvas filled with `cfg.background_color`.
///
/// Keys are expected to be unique; with duplicates, all placements of that
/// key receive the pixels of the last input carrying it. Items that cannot
/// be placed are reported in `sheet.unfit` and logged as warnings.
#[instrument(skip_all)]
pub fn pack_images(inputs: Vec<InputImage>, cfg: &PackerConfig) -> PackOutput {
    let converted: Vec<(String, RgbaImage)> = inputs
        .into_iter()
        .map(|input| (input.key, input.image.to_rgba8()))
        .collect();

    let mut items: Vec<Item<String>> = converted
        .iter()
        .map(|(key, rgba)| {
            let (w, h) = rgba.dimensions();
            Item::new(key.clone(), w, h)
        })
        .collect();

    let mut packer = BspPacker::new(cfg);
    packer.pack(&mut items);
    let sheet = assemble(&packer, items, cfg);

    let pixels: HashMap<&str, &RgbaImage> = converted
        .iter()
        .map(|(key, rgba)| (key.as_str(), rgba))
        .collect();

    let mut canvas = compositing::new_canvas(sheet.width, sheet.height, cfg.background_color);
    for placement in &sheet.placements {
        if let Some(src) = pixels.get(placement.key.as_str()) {
            compositing::blit_rgba(src, &mut canvas, placement.frame.x, placement.frame.y);
        }
        if cfg.outlines {
            // outline the whole slot, padding included
            let frame = &placement.frame;
            let slot = Rect::new(
                frame.x - cfg.padding,
                frame.y - cfg.padding,
                frame.w + cfg.padding * 2,
                frame.h + cfg.padding * 2,
            );
            compositing::draw_outline(&mut canvas, &slot);
        }
    }
    debug!(
        width = sheet.width,
        height = sheet.height,
        placed = sheet.placements.len(),
        "composited sheet"
    );

    PackOutput { sheet, rgba: canvas }
}

/// Packs bare sizes into a sheet without touching pixel data.
/// Placements are identical to [`pack_images`] for the same keys and sizes.
#[instrument(skip_all)]
pub fn pack_layout<K: Into<String>>(inputs: Vec<(K, u32, u32)>, cfg: &PackerConfig) -> Sheet {
    let mut items: Vec<Item<String>> = inputs
        .into_iter()
        .map(|(key, w, h)| Item::new(key.into(), w, h))
        .collect();
    let mut packer = BspPacker::new(cfg);
    packer.pack(&mut items);
    assemble(&packer, items, cfg)
}

/// Resolves packed items into a `Sheet`, splitting placed from unfit.
fn assemble(packer: &BspPacker, items: Vec<Item<String>>, cfg: &PackerConfig) -> Sheet {
    let mut placements = Vec::with_capacity(items.len());
    let mut unfit = Vec::new();
    for item in items {
        match packer.placement(&item) {
            Some(frame) => placements.push(Placement {
                key: item.key,
                frame,
            }),
            None => {
                warn!(key = %item.key, w = item.w, h = item.h, "item does not fit on the sheet");
                unfit.push(item.key);
            }
        }
    }
    Sheet {
        width: packer.width(),
        height: packer.height(),
        placements,
        unfit,
        padding: cfg.padding,
        aligned: cfg.aligned,
    }
}
