//! Core library for packing images into a single auto-growing sprite sheet.
//!
//! - Algorithm: grow-to-fit binary tree packing. The canvas is seeded from the
//!   largest item, free regions split on placement, and the canvas grows right
//!   or down when an item does not fit.
//! - Pipeline: `pack_images` takes in-memory images and returns the sheet
//!   record plus one composited RGBA canvas; `pack_layout` computes
//!   placements only.
//! - Data model is serde-serializable; a JSON manifest exporter and
//!   PNG/JPEG/BMP canvas encoding are provided.
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use sheet_packer_core::{pack_images, InputImage, PackerConfig};
//! # fn main() -> anyhow::Result<()> {
//! let img1 = ImageReader::open("a.png")?.decode()?;
//! let img2 = ImageReader::open("b.png")?.decode()?;
//! let inputs = vec![
//!   InputImage { key: "a".into(), image: img1 },
//!   InputImage { key: "b".into(), image: img2 },
//! ];
//! let cfg = PackerConfig { padding: 1, ..Default::default() };
//! let out = pack_images(inputs, &cfg);
//! println!("sheet: {}x{}", out.sheet.width, out.sheet.height);
//! # Ok(()) }
//! ```

pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod output;
pub mod packer;
pub mod pipeline;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use output::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `sheet_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{PackerConfig, PackerConfigBuilder};
    pub use crate::error::{Result, SheetPackerError};
    pub use crate::export::to_json;
    pub use crate::model::{Placement, Rect, Sheet, SheetStats};
    pub use crate::output::{encode_canvas, save_canvas, OutputFormat};
    pub use crate::packer::{BspPacker, Item, NodeId};
    pub use crate::{pack_images, pack_layout, InputImage, PackOutput};
}
