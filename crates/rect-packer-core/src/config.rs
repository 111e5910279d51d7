use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// Spacing options applied around and between packed rectangles.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackOptions {
    /// Units kept free along every bin edge.
    pub border_padding: u32,
    /// Units kept free between neighbouring rectangles.
    pub rectangle_padding: u32,
}

impl PackOptions {
    /// Create a fluent builder for `PackOptions`.
    pub fn builder() -> PackOptionsBuilder {
        PackOptionsBuilder::new()
    }

    /// Effective bin dimensions handed to the packer:
    /// `bin - 2 * border_padding + rectangle_padding` on each axis.
    ///
    /// Returns `None` when either axis would leave no usable space. Axes wider
    /// than `u32::MAX` are clamped to it.
    pub fn usable_size(&self, bin_width: u32, bin_height: u32) -> Option<(u32, u32)> {
        let border = u64::from(self.border_padding) * 2;
        let pad = u64::from(self.rectangle_padding);
        let axis = |len: u32| -> Option<u32> {
            let v = (u64::from(len) + pad).checked_sub(border)?;
            if v == 0 {
                None
            } else {
                Some(u32::try_from(v).unwrap_or(u32::MAX))
            }
        };
        Some((axis(bin_width)?, axis(bin_height)?))
    }

    /// Validates the options against a nominal bin size.
    ///
    /// Returns an error if:
    /// - Either bin dimension is zero
    /// - Border padding leaves no usable space on an axis
    pub fn validate(&self, bin_width: u32, bin_height: u32) -> Result<()> {
        if bin_width == 0 || bin_height == 0 {
            return Err(PackError::InvalidBinSize {
                width: bin_width,
                height: bin_height,
            });
        }

        if self.usable_size(bin_width, bin_height).is_none() {
            return Err(PackError::InvalidConfig(format!(
                "border_padding ({}) * 2 leaves no usable space in a {}x{} bin (rectangle_padding {})",
                self.border_padding, bin_width, bin_height, self.rectangle_padding
            )));
        }

        Ok(())
    }
}

/// Builder for `PackOptions` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackOptionsBuilder {
    opts: PackOptions,
}

impl PackOptionsBuilder {
    pub fn new() -> Self {
        Self {
            opts: PackOptions::default(),
        }
    }
    pub fn border_padding(mut self, v: u32) -> Self {
        self.opts.border_padding = v;
        self
    }
    pub fn rectangle_padding(mut self, v: u32) -> Self {
        self.opts.rectangle_padding = v;
        self
    }
    pub fn build(self) -> PackOptions {
        self.opts
    }
}
