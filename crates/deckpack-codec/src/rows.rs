//! Row driver: runs a row packer over every row of a frame.
//!
//! Rows are independent, so with the `parallel` feature the destination is
//! split into `stride`-sized chunks and packed on the rayon pool. The bytes
//! produced are identical to the serial path.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use deckpack_core::{ClampedPlane, Pixel, RowGeometry};

/// Packs one row of pixels into exactly the packed bytes for that row.
pub type RowPacker = fn(&[Pixel], &mut [u8]);

/// Unpacks the packed bytes of one row back into pixels.
pub type RowUnpacker = fn(&[u8], &mut [Pixel]);

/// Options for packing a frame.
///
/// # Example
///
/// ```rust
/// use deckpack_codec::PackOptions;
///
/// let options = PackOptions {
///     parallel: false,
///     ..Default::default()
/// };
/// assert!(!options.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOptions {
    /// Pack rows on the rayon pool. Default: on when the `parallel`
    /// feature is enabled.
    pub parallel: bool,
    /// Frames with fewer rows are packed serially. Default: 64.
    pub min_parallel_rows: u32,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            min_parallel_rows: 64,
        }
    }
}

impl PackOptions {
    /// Options that never spawn work on other threads.
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }
}

/// Packs `plane` into `frame`, which must be exactly `height * stride` bytes.
///
/// Bytes between the packed data and the end of each row are zeroed.
pub(crate) fn pack_rows(
    plane: &ClampedPlane,
    geometry: &RowGeometry,
    frame: &mut [u8],
    pack_row: RowPacker,
    #[cfg_attr(not(feature = "parallel"), allow(unused_variables))] options: &PackOptions,
) {
    let stride = geometry.stride;
    let data_bytes = geometry.data_bytes();
    let width = plane.width() as usize;
    debug_assert_eq!(frame.len(), stride * plane.height() as usize);

    let job = |(out, row): (&mut [u8], &[Pixel])| {
        let (data, padding) = out.split_at_mut(data_bytes);
        pack_row(row, data);
        padding.fill(0);
    };

    #[cfg(feature = "parallel")]
    {
        if options.parallel && plane.height() >= options.min_parallel_rows {
            frame
                .par_chunks_mut(stride)
                .zip(plane.pixels().par_chunks(width))
                .for_each(job);
            return;
        }
    }

    frame
        .chunks_mut(stride)
        .zip(plane.pixels().chunks(width))
        .for_each(job);
}

/// Unpacks `height` rows of `frame` into row-major pixels.
pub(crate) fn unpack_rows(
    frame: &[u8],
    geometry: &RowGeometry,
    height: u32,
    unpack_row: RowUnpacker,
) -> Vec<Pixel> {
    let width = geometry.width as usize;
    let data_bytes = geometry.data_bytes();
    let mut pixels = vec![[0u16; 3]; width * height as usize];

    for (row, out) in frame
        .chunks(geometry.stride)
        .zip(pixels.chunks_mut(width))
    {
        unpack_row(&row[..data_bytes], out);
    }
    pixels
}
