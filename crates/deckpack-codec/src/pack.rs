//! Frame dispatcher: validate, clamp, look up the packer, run the rows.
//!
//! Every entry point validates the destination once and then packs through
//! the same row driver. Validation happens before any byte of `dst` is
//! written, so a failed call leaves the destination untouched.
//!
//! | Function | Format from | Destination |
//! |----------|-------------|-------------|
//! | [`pack`] | [`WireFormat`] | caller buffer, default options |
//! | [`pack_with`] | [`WireFormat`] | caller buffer, explicit [`PackOptions`] |
//! | [`pack_identifier`] | FourCC, name or numeric string | caller buffer |
//! | [`pack_to_vec`] | [`WireFormat`] | new `Vec` at the minimum stride |

use std::borrow::Cow;

use deckpack_core::{
    clamp_plane, ClampedPlane, Error, Result, RowGeometry, SamplePlane, WireFormat,
};
use tracing::trace;

use crate::registry::PackerRegistry;
use crate::rows::{pack_rows, PackOptions};

/// Packs a frame of interleaved samples into `dst` with default options.
///
/// `samples` holds `width * height * 3` values in the channel order of the
/// format (R,G,B or Y,U,V). `dst` must hold at least `height * stride`
/// bytes; only that prefix is written.
///
/// # Example
///
/// ```rust
/// use deckpack_codec::pack;
/// use deckpack_core::WireFormat;
///
/// let samples = [0u16, 0, 0];
/// let mut dst = [0u8; 4];
/// pack(WireFormat::Bgra8, &samples, 1, 1, &mut dst, 4)?;
/// assert_eq!(dst, [0x00, 0x00, 0x00, 0xFF]);
/// # Ok::<(), deckpack_core::Error>(())
/// ```
pub fn pack(
    format: WireFormat,
    samples: &[u16],
    width: u32,
    height: u32,
    dst: &mut [u8],
    stride: usize,
) -> Result<()> {
    pack_with(format, samples, width, height, dst, stride, &PackOptions::default())
}

/// Like [`pack`] with explicit options.
pub fn pack_with(
    format: WireFormat,
    samples: &[u16],
    width: u32,
    height: u32,
    dst: &mut [u8],
    stride: usize,
    options: &PackOptions,
) -> Result<()> {
    let plane = SamplePlane::new(samples, width, height)?;
    // Check geometry before paying for the clamp.
    let (geometry, frame_len) = check_destination(format, width, height, dst.len(), stride)?;
    let clamped = clamp_plane(&plane, format.depth());
    pack_checked(format, &clamped, &geometry, &mut dst[..frame_len], options)
}

/// Packs an already clamped plane.
///
/// A plane clamped to a wider depth than the format's is clamped again;
/// one at the format's depth or narrower is packed as is.
pub fn pack_clamped(
    format: WireFormat,
    plane: &ClampedPlane,
    dst: &mut [u8],
    stride: usize,
    options: &PackOptions,
) -> Result<()> {
    let (width, height) = (plane.width(), plane.height());
    let (geometry, frame_len) = check_destination(format, width, height, dst.len(), stride)?;
    pack_checked(format, plane, &geometry, &mut dst[..frame_len], options)
}

/// Packs into a `frame` already sized to `geometry` and the plane height.
fn pack_checked(
    format: WireFormat,
    plane: &ClampedPlane,
    geometry: &RowGeometry,
    frame: &mut [u8],
    options: &PackOptions,
) -> Result<()> {
    let depth = format.depth();
    let plane = if plane.depth().bits() > depth.bits() {
        Cow::Owned(ClampedPlane::from_pixels(
            plane.pixels().to_vec(),
            plane.width(),
            plane.height(),
            depth,
        )?)
    } else {
        Cow::Borrowed(plane)
    };

    let info = PackerRegistry::global().get(format);
    trace!(
        format = %format,
        width = plane.width(),
        height = plane.height(),
        stride = geometry.stride,
        "pack"
    );
    pack_rows(&plane, geometry, frame, info.pack_row, options);
    Ok(())
}

/// Packs with the format named by `identifier`.
///
/// Accepts a FourCC (`"R12L"`), a symbolic name (`"12BIT_RGBLE"`,
/// case-insensitive) or a decimal SDK code (`"32"`). Unknown identifiers
/// fail with [`Error::UnsupportedFormat`] before `dst` is touched.
pub fn pack_identifier(
    identifier: &str,
    samples: &[u16],
    width: u32,
    height: u32,
    dst: &mut [u8],
    stride: usize,
) -> Result<()> {
    let info = PackerRegistry::global().resolve(identifier)?;
    pack(info.descriptor.format, samples, width, height, dst, stride)
}

/// Packs into a new buffer of exactly `frame_bytes(format, width, height)`.
pub fn pack_to_vec(
    format: WireFormat,
    samples: &[u16],
    width: u32,
    height: u32,
) -> Result<Vec<u8>> {
    let geometry = RowGeometry::new(format, width)?;
    let mut dst = vec![0u8; geometry.frame_bytes(height)?];
    pack(format, samples, width, height, &mut dst, geometry.stride)?;
    Ok(dst)
}

fn check_destination(
    format: WireFormat,
    width: u32,
    height: u32,
    dst_len: usize,
    stride: usize,
) -> Result<(RowGeometry, usize)> {
    let geometry = RowGeometry::with_stride(format, width, stride)?;
    let required = geometry.frame_bytes(height)?;
    if dst_len < required {
        return Err(Error::buffer_too_small(required, dst_len));
    }
    Ok((geometry, required))
}
