use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, RgbaImage};

use crate::error::{Result, SheetPackerError};

/// Output image container, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Bmp,
}

impl OutputFormat {
    /// Picks the format from the path's extension (case-insensitive):
    /// `.png`, `.jpg`/`.jpeg`, `.bmp`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("jpg") | Some("jpeg") => Ok(Self::Jpeg),
            Some("bmp") => Ok(Self::Bmp),
            _ => Err(SheetPackerError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    /// Whether the encoded file keeps an alpha channel. Only PNG can, and
    /// only when the sources had one; JPEG and BMP always flatten to RGB.
    pub fn keeps_alpha(self, with_alpha: bool) -> bool {
        matches!(self, Self::Png) && with_alpha
    }
}

/// Encode `canvas` to `writer` as `format`.
///
/// `with_alpha` requests RGBA output where the format supports it (see
/// [`OutputFormat::keeps_alpha`]). `param` tunes the encoder: JPEG quality
/// 0..=100 (default 95), PNG compression level 0..=9 (default 3), ignored
/// for BMP.
pub fn encode_canvas<W: Write + Seek>(
    writer: &mut W,
    canvas: &RgbaImage,
    format: OutputFormat,
    with_alpha: bool,
    param: Option<i32>,
) -> Result<()> {
    let (w, h) = canvas.dimensions();
    match format {
        OutputFormat::Png => {
            let compression = png_compression(param)?;
            let enc = PngEncoder::new_with_quality(&mut *writer, compression, FilterType::Adaptive);
            if with_alpha {
                enc.write_image(canvas.as_raw(), w, h, ExtendedColorType::Rgba8)?;
            } else {
                let rgb = flatten_rgb(canvas);
                enc.write_image(rgb.as_raw(), w, h, ExtendedColorType::Rgb8)?;
            }
        }
        OutputFormat::Jpeg => {
            let quality = jpeg_quality(param)?;
            let rgb = flatten_rgb(canvas);
            let enc = JpegEncoder::new_with_quality(&mut *writer, quality);
            enc.write_image(rgb.as_raw(), w, h, ExtendedColorType::Rgb8)?;
        }
        OutputFormat::Bmp => {
            let rgb = flatten_rgb(canvas);
            let enc = BmpEncoder::new(writer);
            enc.write_image(rgb.as_raw(), w, h, ExtendedColorType::Rgb8)?;
        }
    }
    Ok(())
}

/// Encode `canvas` and write it to `path`, choosing the container from the
/// file extension. See [`encode_canvas`] for `with_alpha` and `param`.
pub fn save_canvas(
    path: &Path,
    canvas: &RgbaImage,
    with_alpha: bool,
    param: Option<i32>,
) -> Result<()> {
    let format = OutputFormat::from_path(path)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    encode_canvas(&mut writer, canvas, format, with_alpha, param)
}

/// Drops the alpha channel without blending; the canvas background is
/// opaque, and blits overwrite it.
fn flatten_rgb(canvas: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let px = canvas.get_pixel(x, y);
        Rgb([px[0], px[1], px[2]])
    })
}

fn jpeg_quality(param: Option<i32>) -> Result<u8> {
    match param {
        None => Ok(95),
        Some(q) if (0..=100).contains(&q) => Ok(q as u8),
        Some(q) => Err(SheetPackerError::InvalidParam(format!(
            "jpeg quality {q} out of range 0..=100"
        ))),
    }
}

/// Maps the conventional 0..=9 compression scale onto the encoder's presets.
fn png_compression(param: Option<i32>) -> Result<CompressionType> {
    match param {
        None => Ok(CompressionType::Default),
        Some(p) if (0..=2).contains(&p) => Ok(CompressionType::Fast),
        Some(p) if (3..=6).contains(&p) => Ok(CompressionType::Default),
        Some(p) if (7..=9).contains(&p) => Ok(CompressionType::Best),
        Some(p) => Err(SheetPackerError::InvalidParam(format!(
            "png compression {p} out of range 0..=9"
        ))),
    }
}
