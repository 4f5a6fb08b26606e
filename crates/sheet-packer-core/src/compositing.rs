use image::{Rgba, RgbaImage};

use crate::model::Rect;

/// Allocate a `w` x `h` canvas filled with `background` (RGBA).
pub fn new_canvas(w: u32, h: u32, background: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(background))
}

/// Blit the whole of `src` into `canvas` with its top-left at (dx, dy).
/// Pixels that would land outside the canvas are dropped.
pub fn blit_rgba(src: &RgbaImage, canvas: &mut RgbaImage, dx: u32, dy: u32) {
    let (cw, ch) = canvas.dimensions();
    let (sw, sh) = src.dimensions();
    for yy in 0..sh {
        for xx in 0..sw {
            if dx + xx < cw && dy + yy < ch {
                let px = *src.get_pixel(xx, yy);
                canvas.put_pixel(dx + xx, dy + yy, px);
            }
        }
    }
}

/// Draw a red 1px outline on the border of `rect` (debug aid).
pub fn draw_outline(canvas: &mut RgbaImage, rect: &Rect) {
    let (cw, ch) = canvas.dimensions();
    let red = Rgba([255, 0, 0, 255]);
    for xx in 0..rect.w {
        if rect.x + xx < cw && rect.y < ch {
            canvas.put_pixel(rect.x + xx, rect.y, red);
        }
        let by = rect.y + rect.h.saturating_sub(1);
        if rect.x + xx < cw && by < ch {
            canvas.put_pixel(rect.x + xx, by, red);
        }
    }
    for yy in 0..rect.h {
        if rect.x < cw && rect.y + yy < ch {
            canvas.put_pixel(rect.x, rect.y + yy, red);
        }
        let rx = rect.x + rect.w.saturating_sub(1);
        if rx < cw && rect.y + yy < ch {
            canvas.put_pixel(rx, rect.y + yy, red);
        }
    }
}
