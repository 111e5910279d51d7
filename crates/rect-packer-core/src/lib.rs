//! Multi-bin rectangle packing.
//!
//! - Algorithm: global best-area-fit over every (rectangle, orientation, bin) triple,
//!   on top of per-bin guillotine free lists
//! - Optional 90° rotation and uniform border / inter-rectangle padding
//! - Inputs are any type implementing [`Rectangle`]; they come back untouched inside [`Placed`]
//!
//! Quick example:
//! ```
//! use rect_packer_core::{pack, Item, PackOptions};
//! # fn main() -> rect_packer_core::Result<()> {
//! let items = vec![Item::new(5, 10), Item::new(5, 10), Item::new(5, 10)];
//! let bins = pack(items, 10, 10, &PackOptions::default())?;
//! assert_eq!(bins.len(), 2);
//! assert_eq!((bins[0][1].x, bins[0][1].y), (5, 0));
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod packer;
pub mod padding;
pub mod pipeline;
pub mod validate;

pub use config::*;
pub use error::*;
pub use model::*;
pub use pipeline::*;
pub use validate::validate;

/// Convenience prelude for common types and functions.
/// Importing `rect_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{PackOptions, PackOptionsBuilder};
    pub use crate::error::{PackError, Result};
    pub use crate::model::{BinLayout, Item, Layout, PackStats, Placed, Rect, Rectangle};
    pub use crate::packer::{Bin, bin_pack, guillotine::GuillotineBin};
    pub use crate::validate::validate;
    pub use crate::{pack, pack_layout};
}
