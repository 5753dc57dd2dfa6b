//! Row geometry: bytes per row and stride validation.
//!
//! Every format pads a row up to its pixel alignment and then counts bytes
//! per packing block:
//!
//! ```text
//! row_bytes = ceil(width / align) * align / block_pixels * block_bytes
//! ```
//!
//! | Format | Row bytes |
//! |--------|-----------|
//! | `BGRA`, `ARGB`, `v210` | `width * 4` |
//! | `r210`, `R10b`, `R10l` | `ceil(width / 64) * 256` |
//! | `R12B`, `R12L` | `ceil(width / 8) * 36` |
//! | `2vuy` | `ceil(width / 2) * 4` |
//!
//! The result is the unpadded floor. Output hardware may ask for a larger
//! stride; [`validate_stride`] accepts any stride at or above the floor that
//! keeps the format's alignment.
//!
//! ```rust
//! use deckpack_core::{row_bytes, WireFormat};
//!
//! assert_eq!(row_bytes(WireFormat::Rgb10, 64)?, 256);
//! assert_eq!(row_bytes(WireFormat::Rgb10, 65)?, 512);
//! assert_eq!(row_bytes(WireFormat::Rgb12Le, 9)?, 72);
//! # Ok::<(), deckpack_core::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::format::WireFormat;

/// Minimum bytes per row for `width` pixels.
///
/// Zero width and `usize` overflow are errors.
pub fn row_bytes(format: WireFormat, width: u32) -> Result<usize> {
    RowGeometry::new(format, width).map(|g| g.row_bytes)
}

/// Bytes for a whole frame at the minimum stride.
pub fn frame_bytes(format: WireFormat, width: u32, height: u32) -> Result<usize> {
    RowGeometry::new(format, width)?.frame_bytes(height)
}

/// Checks a caller or hardware provided stride against the format.
pub fn validate_stride(format: WireFormat, width: u32, stride: usize) -> Result<()> {
    RowGeometry::with_stride(format, width, stride).map(|_| ())
}

/// Resolved layout of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowGeometry {
    /// Target format.
    pub format: WireFormat,
    /// Pixels carrying data.
    pub width: u32,
    /// Pixel slots after rounding up to the row alignment.
    pub padded_width: u32,
    /// Minimum bytes per row.
    pub row_bytes: usize,
    /// Actual bytes per row, `>= row_bytes`.
    pub stride: usize,
}

impl RowGeometry {
    /// Computes the geometry with `stride == row_bytes`.
    pub fn new(format: WireFormat, width: u32) -> Result<Self> {
        if width == 0 {
            return Err(Error::invalid_dimensions(width, 1, "width must be > 0"));
        }
        let desc = format.descriptor();
        let align = desc.row_pixel_alignment;

        let padded_width = width
            .div_ceil(align)
            .checked_mul(align)
            .ok_or_else(|| Error::invalid_dimensions(width, 1, "row width overflows"))?;
        let blocks = (padded_width / desc.packing.pixels()) as usize;
        let row_bytes = blocks
            .checked_mul(desc.packing.bytes() as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, 1, "row size overflows"))?;

        Ok(Self {
            format,
            width,
            padded_width,
            row_bytes,
            stride: row_bytes,
        })
    }

    /// Computes the geometry and adopts `stride` if it is valid.
    pub fn with_stride(format: WireFormat, width: u32, stride: usize) -> Result<Self> {
        let geometry = Self::new(format, width)?;
        let alignment = format.descriptor().stride_alignment;
        if stride < geometry.row_bytes || stride % alignment != 0 {
            return Err(Error::InvalidStride {
                stride,
                min_stride: geometry.row_bytes,
                alignment,
                width,
            });
        }
        Ok(Self { stride, ..geometry })
    }

    /// Total bytes for `height` rows at this stride.
    pub fn frame_bytes(&self, height: u32) -> Result<usize> {
        if height == 0 {
            return Err(Error::invalid_dimensions(self.width, height, "height must be > 0"));
        }
        self.stride
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(self.width, height, "frame size overflows"))
    }

    /// Bytes of a row that hold packed pixels, including the zero-filled
    /// slots of the final block but not the alignment padding.
    pub fn data_bytes(&self) -> usize {
        let packing = self.format.descriptor().packing;
        self.width.div_ceil(packing.pixels()) as usize * packing.bytes() as usize
    }
}
