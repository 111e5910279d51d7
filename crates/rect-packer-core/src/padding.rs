use crate::config::PackOptions;
use crate::error::{PackError, Result};
use crate::model::{Placed, Rect, Rectangle};

/// Folds padding into rectangle footprints and the usable bin size.
///
/// Every rectangle grows by `rectangle_padding` on both axes, and the bin
/// shrinks by `2 * border_padding` but gains `rectangle_padding` back since the
/// last rectangle along an edge needs no trailing gap. Placements are shifted
/// by `border_padding` and shrunk back on the way out.
#[derive(Debug, Clone, Copy)]
pub struct Padding {
    border: u32,
    gap: u32,
    usable_width: u32,
    usable_height: u32,
}

/// A rectangle seen through its padded footprint.
#[derive(Debug, Clone)]
pub struct Padded<T> {
    pub item: T,
    w: u32,
    h: u32,
}

impl<T> Rectangle for Padded<T> {
    fn width(&self) -> u32 {
        self.w
    }
    fn height(&self) -> u32 {
        self.h
    }
}

impl Padding {
    /// Validates `opts` against the nominal bin and derives the usable size.
    pub fn new(opts: &PackOptions, bin_width: u32, bin_height: u32) -> Result<Self> {
        opts.validate(bin_width, bin_height)?;
        let (usable_width, usable_height) = opts
            .usable_size(bin_width, bin_height)
            .ok_or_else(|| PackError::InvalidConfig("no usable bin area".into()))?;
        Ok(Self {
            border: opts.border_padding,
            gap: opts.rectangle_padding,
            usable_width,
            usable_height,
        })
    }

    pub fn usable_size(&self) -> (u32, u32) {
        (self.usable_width, self.usable_height)
    }

    /// Wraps every rectangle in its padded footprint.
    ///
    /// Fails with `PaddedDoesNotFit` if a padded footprint overflows `u32` or fits
    /// the usable bin in neither orientation, so the packer never sees an
    /// unplaceable rectangle.
    pub fn inflate<T: Rectangle>(&self, rectangles: Vec<T>) -> Result<Vec<Padded<T>>> {
        let usable = Rect::new(0, 0, self.usable_width, self.usable_height);
        rectangles
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let (width, height) = (item.width(), item.height());
                let padded = width.checked_add(self.gap).zip(height.checked_add(self.gap));
                match padded {
                    Some((w, h)) if usable.fits(w, h) || usable.fits(h, w) => {
                        Ok(Padded { item, w, h })
                    }
                    _ => Err(PackError::PaddedDoesNotFit {
                        index,
                        width,
                        height,
                        usable_width: self.usable_width,
                        usable_height: self.usable_height,
                    }),
                }
            })
            .collect()
    }

    /// Maps a placement in usable-bin space back to the nominal bin.
    pub fn deflate<T>(&self, p: Placed<Padded<T>>) -> Placed<T> {
        Placed {
            item: p.item.item,
            x: p.x + self.border,
            y: p.y + self.border,
            width: p.width - self.gap,
            height: p.height - self.gap,
            rotated: p.rotated,
        }
    }
}
