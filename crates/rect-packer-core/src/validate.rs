use crate::error::{PackError, Result};
use crate::model::{Rect, Rectangle};

/// Checks every rectangle against the nominal bin before anything is placed.
///
/// Each rectangle needs a non-zero width and height and must fit the bin
/// either as given or rotated 90°. The first offending rectangle (in input
/// order) is reported.
pub fn validate<T: Rectangle>(rectangles: &[T], bin_width: u32, bin_height: u32) -> Result<()> {
    let bin = Rect::new(0, 0, bin_width, bin_height);
    for (index, r) in rectangles.iter().enumerate() {
        let (width, height) = (r.width(), r.height());
        if width == 0 || height == 0 {
            return Err(PackError::InvalidDimension {
                index,
                width,
                height,
            });
        }
        if !(bin.fits(width, height) || bin.fits(height, width)) {
            return Err(PackError::DoesNotFit {
                index,
                width,
                height,
                bin_width,
                bin_height,
            });
        }
    }
    Ok(())
}
