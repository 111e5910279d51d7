use serde::{Deserialize, Serialize};

use crate::config::PackOptions;

/// Axis-aligned rectangle. `x,y` is top-left; `w,h` are sizes.
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
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }
    /// Returns true if a `w x h` box fits inside `self` when anchored at its origin.
    pub fn fits(&self, w: u32, h: u32) -> bool {
        w <= self.w && h <= self.h
    }
    /// Exclusive right edge (`x + w`).
    pub fn x2(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge (`y + h`).
    pub fn y2(&self) -> u32 {
        self.y + self.h
    }
    /// Returns true if `r` is fully inside `self`.
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.x2() <= self.x2() && r.y2() <= self.y2()
    }
    /// Returns true if the half-open extents of `self` and `r` share any area.
    pub fn overlaps(&self, r: &Rect) -> bool {
        !(self.x >= r.x2() || r.x >= self.x2() || self.y >= r.y2() || r.y >= self.y2())
    }
}

/// Width/height view of a packable item.
///
/// The packer only ever looks at this view; everything else on the item is
/// carried through to the output untouched.
pub trait Rectangle {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

impl Rectangle for (u32, u32) {
    fn width(&self) -> u32 {
        self.0
    }
    fn height(&self) -> u32 {
        self.1
    }
}

impl Rectangle for Rect {
    fn width(&self) -> u32 {
        self.w
    }
    fn height(&self) -> u32 {
        self.h
    }
}

impl<R: Rectangle + ?Sized> Rectangle for &R {
    fn width(&self) -> u32 {
        (**self).width()
    }
    fn height(&self) -> u32 {
        (**self).height()
    }
}

/// Convenience input: a size plus an arbitrary payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item<P = ()> {
    pub width: u32,
    pub height: u32,
    pub payload: P,
}

impl Item<()> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            payload: (),
        }
    }
}

impl<P> Item<P> {
    pub fn with_payload(width: u32, height: u32, payload: P) -> Self {
        Self {
            width,
            height,
            payload,
        }
    }
}

impl<P> Rectangle for Item<P> {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
}

/// A rectangle placed within a bin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placed<T> {
    /// The caller's input, unchanged.
    pub item: T,
    pub x: u32,
    pub y: u32,
    /// Placed width (post-rotation).
    pub width: u32,
    /// Placed height (post-rotation).
    pub height: u32,
    /// True if the rectangle was rotated 90° when placed.
    pub rotated: bool,
}

impl<T> Placed<T> {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// One bin of a finished layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinLayout<T> {
    /// Creation order of the bin (0-based); this is the page index for sinks.
    pub id: usize,
    pub width: u32,
    pub height: u32,
    /// Placements in placement order.
    pub placements: Vec<Placed<T>>,
}

/// Bins produced by a packing run plus the parameters that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout<T> {
    pub bin_width: u32,
    pub bin_height: u32,
    pub options: PackOptions,
    pub bins: Vec<BinLayout<T>>,
}

impl<T> Layout<T> {
    /// Drops bin metadata, keeping placements grouped per bin in creation order.
    pub fn into_bins(self) -> Vec<Vec<Placed<T>>> {
        self.bins.into_iter().map(|b| b.placements).collect()
    }

    /// Flat `(bin index, placement)` view, in bin then placement order.
    pub fn records(&self) -> impl Iterator<Item = (usize, &Placed<T>)> + '_ {
        self.bins
            .iter()
            .flat_map(|b| b.placements.iter().map(move |p| (b.id, p)))
    }

    pub fn len(&self) -> usize {
        self.bins.iter().map(|b| b.placements.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(|b| b.placements.is_empty())
    }

    /// Computes packing statistics for this layout.
    pub fn stats(&self) -> PackStats {
        let num_bins = self.bins.len();
        let bin_area = u64::from(self.bin_width) * u64::from(self.bin_height);
        let total_bin_area = bin_area * num_bins as u64;
        let mut num_placed = 0;
        let mut used_area = 0u64;
        let mut num_rotated = 0;

        for bin in &self.bins {
            for p in &bin.placements {
                num_placed += 1;
                used_area += p.rect().area();
                if p.rotated {
                    num_rotated += 1;
                }
            }
        }

        let occupancy = if total_bin_area > 0 {
            used_area as f64 / total_bin_area as f64
        } else {
            0.0
        };

        PackStats {
            num_bins,
            num_placed,
            total_bin_area,
            used_area,
            occupancy,
            num_rotated,
        }
    }
}

/// Statistics about packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    /// Number of bins opened.
    pub num_bins: usize,
    /// Number of rectangles placed.
    pub num_placed: usize,
    /// Nominal area of all bins.
    pub total_bin_area: u64,
    /// Area covered by placed rectangles (padding excluded).
    pub used_area: u64,
    /// Occupancy ratio: used_area / total_bin_area (0.0 to 1.0).
    pub occupancy: f64,
    /// Number of rotated placements.
    pub num_rotated: usize,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Bins: {}, Placed: {}, Occupancy: {:.2}%, Total Area: {}, Used Area: {}, Rotated: {}",
            self.num_bins,
            self.num_placed,
            self.occupancy * 100.0,
            self.total_bin_area,
            self.used_area,
            self.num_rotated,
        )
    }

    pub fn wasted_area(&self) -> u64 {
        self.total_bin_area.saturating_sub(self.used_area)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.total_bin_area > 0 {
            (self.wasted_area() as f64 / self.total_bin_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
