use tracing::instrument;

use crate::config::PackOptions;
use crate::error::Result;
use crate::model::{BinLayout, Layout, Placed, Rectangle};
use crate::packer::{Bin, bin_pack, guillotine::GuillotineBin};
use crate::padding::Padding;
use crate::validate::validate;

/// Packs `rectangles` into as few `bin_width x bin_height` bins as the heuristic finds.
///
/// Returns one inner `Vec` per bin in creation order, each holding that bin's
/// placements in placement order. Every input comes back exactly once inside
/// its `Placed` record; `x`, `y`, `width`, `height` and `rotated` describe
/// where it went.
///
/// Notes:
/// - All validation happens before placement; on error nothing is returned.
/// - Output is deterministic for a given input order and options.
pub fn pack<T: Rectangle>(
    rectangles: Vec<T>,
    bin_width: u32,
    bin_height: u32,
    options: &PackOptions,
) -> Result<Vec<Vec<Placed<T>>>> {
    pack_layout(rectangles, bin_width, bin_height, options).map(Layout::into_bins)
}

#[instrument(skip_all, fields(count = rectangles.len(), bin_width = bin_width, bin_height = bin_height))]
/// Like [`pack`], but keeps bin ids, bin size and options alongside the placements.
pub fn pack_layout<T: Rectangle>(
    rectangles: Vec<T>,
    bin_width: u32,
    bin_height: u32,
    options: &PackOptions,
) -> Result<Layout<T>> {
    let padding = Padding::new(options, bin_width, bin_height)?;
    validate(&rectangles, bin_width, bin_height)?;
    let padded = padding.inflate(rectangles)?;

    let (usable_w, usable_h) = padding.usable_size();
    let bins = bin_pack(padded, || GuillotineBin::new(usable_w, usable_h));

    let bins = bins
        .into_iter()
        .enumerate()
        .map(|(id, bin)| BinLayout {
            id,
            width: bin_width,
            height: bin_height,
            placements: bin
                .into_rectangles()
                .into_iter()
                .map(|p| padding.deflate(p))
                .collect(),
        })
        .collect();

    Ok(Layout {
        bin_width,
        bin_height,
        options: *options,
        bins,
    })
}
