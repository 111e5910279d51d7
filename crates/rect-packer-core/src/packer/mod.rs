use tracing::{debug, trace};

use crate::model::{Placed, Rect, Rectangle};

pub mod guillotine;

/// A bin owns the free-space bookkeeping of one fixed-size container.
///
/// `score` and `add` must agree: `add` is only called right after `score`
/// returned `Some` for the same geometry, and must then succeed.
pub trait Bin<T> {
    /// Leftover area of the best slot for a `w x h` rectangle, or `None` if it does not fit.
    fn score(&self, w: u32, h: u32) -> Option<u64>;
    /// Places `item` with footprint `w x h`. Hands the item back if no slot fits.
    fn add(&mut self, item: T, w: u32, h: u32, rotated: bool) -> Result<Rect, T>;
    /// Placements in placement order.
    fn rectangles(&self) -> &[Placed<T>];
    fn into_rectangles(self) -> Vec<Placed<T>>;
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    score: u64,
    rect_index: usize,
    bin_index: usize,
    rotated: bool,
}

/// Global best-fit placement loop.
///
/// Every step scores each (remaining rectangle, orientation, open bin) triple and
/// places the lowest-scoring one; ties keep the earliest triple in
/// rectangle, then orientation (normal first), then bin order. When nothing fits
/// any open bin, a new bin is opened from `new_bin` and the first remaining
/// rectangle goes into it.
///
/// # Panics
///
/// If a rectangle fits an empty bin in neither orientation. Callers validate first.
pub fn bin_pack<T, B, F>(rectangles: Vec<T>, mut new_bin: F) -> Vec<B>
where
    T: Rectangle,
    B: Bin<T>,
    F: FnMut() -> B,
{
    let mut remaining = rectangles;
    let mut bins: Vec<B> = Vec::new();

    while !remaining.is_empty() {
        let mut best: Option<Candidate> = None;
        for (rect_index, rect) in remaining.iter().enumerate() {
            let (w, h) = (rect.width(), rect.height());
            for rotated in [false, true] {
                let (cw, ch) = if rotated { (h, w) } else { (w, h) };
                for (bin_index, bin) in bins.iter().enumerate() {
                    let Some(score) = bin.score(cw, ch) else {
                        continue;
                    };
                    if best.is_none_or(|b| score < b.score) {
                        best = Some(Candidate {
                            score,
                            rect_index,
                            bin_index,
                            rotated,
                        });
                    }
                }
            }
        }

        if let Some(c) = best {
            let rect = remaining.remove(c.rect_index);
            let (w, h) = oriented(&rect, c.rotated);
            trace!(
                bin = c.bin_index,
                w,
                h,
                rotated = c.rotated,
                score = c.score,
                "placing"
            );
            if bins[c.bin_index].add(rect, w, h, c.rotated).is_err() {
                unreachable!("bin rejected a rectangle it scored as fitting");
            }
        } else {
            let mut bin = new_bin();
            let rect = remaining.remove(0);
            let rotated = bin.score(rect.width(), rect.height()).is_none()
                && bin.score(rect.height(), rect.width()).is_some();
            let (w, h) = oriented(&rect, rotated);
            debug!(bin = bins.len(), w, h, rotated, "opening new bin");
            if bin.add(rect, w, h, rotated).is_err() {
                unreachable!("rectangle does not fit an empty bin");
            }
            bins.push(bin);
        }
    }

    bins
}

fn oriented<T: Rectangle>(rect: &T, rotated: bool) -> (u32, u32) {
    if rotated {
        (rect.height(), rect.width())
    } else {
        (rect.width(), rect.height())
    }
}
