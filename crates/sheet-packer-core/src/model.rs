use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Returns true if a `w` x `h` box fits inside this region, position aside.
    pub fn fits(&self, w: u32, h: u32) -> bool {
        w <= self.w && h <= self.h
    }
    /// Exclusive right edge coordinate (`x + w`).
    pub fn right(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge coordinate (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
    /// Returns true if the two rectangles share at least one pixel.
    /// Zero-sized rectangles intersect nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.area() > 0
            && other.area() > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A placed item within the sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement<K = String> {
    /// User-specified key (e.g., filename or asset path).
    pub key: K,
    /// Content rectangle within the sheet, at the requested size.
    /// Padding sits around this rectangle and is not part of it.
    pub frame: Rect,
}

/// Result of one packing run: final sheet dimensions plus per-item placements.
///
/// `width`/`height` are the reported canvas size. With `aligned` they are
/// rounded up to powers of two; placements are never moved by the rounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet<K = String> {
    pub width: u32,
    pub height: u32,
    pub placements: Vec<Placement<K>>,
    /// Keys of items that could not be placed, in pack order.
    pub unfit: Vec<K>,
    /// Padding (pixels) applied on every side of every item.
    pub padding: u32,
    /// Whether the reported dimensions were rounded up to powers of two.
    pub aligned: bool,
}

/// Statistics about sheet packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SheetStats {
    /// Number of items placed on the sheet.
    pub num_placed: usize,
    /// Number of items that did not fit.
    pub num_unfit: usize,
    /// Canvas area (width * height).
    pub canvas_area: u64,
    /// Total area covered by placed content rectangles.
    pub used_area: u64,
    /// Occupancy ratio: used_area / canvas_area (0.0 to 1.0).
    /// Higher is better (less wasted space).
    pub occupancy: f64,
}

impl<K> Sheet<K> {
    /// Computes packing statistics for this sheet.
    pub fn stats(&self) -> SheetStats {
        let canvas_area = (self.width as u64) * (self.height as u64);
        let used_area = self.placements.iter().map(|p| p.frame.area()).sum();
        let occupancy = if canvas_area > 0 {
            used_area as f64 / canvas_area as f64
        } else {
            0.0
        };
        SheetStats {
            num_placed: self.placements.len(),
            num_unfit: self.unfit.len(),
            canvas_area,
            used_area,
            occupancy,
        }
    }
}

impl SheetStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Placed: {}, Unfit: {}, Occupancy: {:.2}%, Canvas Area: {} px², Used Area: {} px²",
            self.num_placed,
            self.num_unfit,
            self.occupancy * 100.0,
            self.canvas_area,
            self.used_area,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.canvas_area.saturating_sub(self.used_area)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.canvas_area > 0 {
            (self.wasted_area() as f64 / self.canvas_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
