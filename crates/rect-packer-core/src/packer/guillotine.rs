use super::Bin;
use crate::model::{Placed, Rect};

/// Guillotine bin with best-area-fit slot choice and a max-leftover split.
///
/// The free list is kept flat and is never pruned or merged: after a few
/// splits it may hold entries that overlap or cover already-stale space.
/// Every slot handed out is still a genuine free region, so placements never
/// overlap; the list is just not a minimal partition.
pub struct GuillotineBin<T> {
    width: u32,
    height: u32,
    free: Vec<Rect>,
    used: Vec<Placed<T>>,
}

impl<T> GuillotineBin<T> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            free: vec![Rect::new(0, 0, width, height)],
            used: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current free list, in insertion order.
    pub fn free_rects(&self) -> &[Rect] {
        &self.free
    }

    /// Index and leftover area of the tightest free rect holding `w x h`.
    /// Earlier entries win ties.
    fn choose(&self, w: u32, h: u32) -> Option<(usize, u64)> {
        let area = u64::from(w) * u64::from(h);
        let mut best: Option<(usize, u64)> = None;
        for (i, fr) in self.free.iter().enumerate() {
            if !fr.fits(w, h) {
                continue;
            }
            let area_fit = fr.area() - area;
            if best.is_none_or(|(_, s)| area_fit < s) {
                best = Some((i, area_fit));
            }
        }
        best
    }

    /// Splits `fr` around `placed` (which sits at `fr`'s origin) with a single cut.
    ///
    /// Both cuts are computed; the one whose larger piece is bigger wins, with
    /// ties going to the vertical cut. Zero-area pieces are dropped.
    fn split(fr: &Rect, placed: &Rect) -> [Rect; 2] {
        let w_right = fr.w - placed.w;
        let h_bottom = fr.h - placed.h;

        // horizontal cut: right piece as tall as the placement, bottom spans the full width
        let h_right = Rect::new(fr.x + placed.w, fr.y, w_right, placed.h);
        let h_bottom_r = Rect::new(fr.x, fr.y + placed.h, fr.w, h_bottom);
        // vertical cut: bottom piece as wide as the placement, right spans the full height
        let v_bottom = Rect::new(fr.x, fr.y + placed.h, placed.w, h_bottom);
        let v_right = Rect::new(fr.x + placed.w, fr.y, w_right, fr.h);

        let h_largest = h_right.area().max(h_bottom_r.area());
        let v_largest = v_bottom.area().max(v_right.area());

        if h_largest > v_largest {
            [h_right, h_bottom_r]
        } else {
            [v_bottom, v_right]
        }
    }

    fn place(&mut self, idx: usize, w: u32, h: u32) -> Rect {
        let fr = self.free.remove(idx);
        let placed = Rect::new(fr.x, fr.y, w, h);
        for r in Self::split(&fr, &placed) {
            if r.w > 0 && r.h > 0 {
                self.free.push(r);
            }
        }
        placed
    }
}

impl<T> Bin<T> for GuillotineBin<T> {
    fn score(&self, w: u32, h: u32) -> Option<u64> {
        self.choose(w, h).map(|(_, s)| s)
    }

    fn add(&mut self, item: T, w: u32, h: u32, rotated: bool) -> Result<Rect, T> {
        let Some((idx, _)) = self.choose(w, h) else {
            return Err(item);
        };
        let placed = self.place(idx, w, h);
        self.used.push(Placed {
            item,
            x: placed.x,
            y: placed.y,
            width: placed.w,
            height: placed.h,
            rotated,
        });
        Ok(placed)
    }

    fn rectangles(&self) -> &[Placed<T>] {
        &self.used
    }

    fn into_rectangles(self) -> Vec<Placed<T>> {
        self.used
    }
}
