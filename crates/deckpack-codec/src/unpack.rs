//! Reference unpackers: wire bytes back to pixels.
//!
//! The reverse of every packer, used to check frames read back from a
//! loopback input and by the round-trip tests. Samples come back at the
//! format's depth; for `2vuy` both pixels of a pair carry the even pixel's
//! chroma.

use deckpack_core::{Error, Pixel, Result, RowGeometry, WireFormat};
use tracing::trace;

use crate::registry::PackerRegistry;
use crate::rows::unpack_rows;

/// Unpacks `height` rows of `bytes` laid out at `stride`.
///
/// # Example
///
/// ```rust
/// use deckpack_codec::{pack_to_vec, unpack};
/// use deckpack_core::WireFormat;
///
/// let samples = [100u16, 200, 300, 4095, 0, 7];
/// let bytes = pack_to_vec(WireFormat::Rgb12Be, &samples, 2, 1)?;
/// let pixels = unpack(WireFormat::Rgb12Be, &bytes, 2, 1, 36)?;
/// assert_eq!(pixels, vec![[100, 200, 300], [4095, 0, 7]]);
/// # Ok::<(), deckpack_core::Error>(())
/// ```
pub fn unpack(
    format: WireFormat,
    bytes: &[u8],
    width: u32,
    height: u32,
    stride: usize,
) -> Result<Vec<Pixel>> {
    let geometry = RowGeometry::with_stride(format, width, stride)?;
    let required = geometry.frame_bytes(height)?;
    if bytes.len() < required {
        return Err(Error::buffer_too_small(required, bytes.len()));
    }

    let info = PackerRegistry::global().get(format);
    trace!(format = %format, width, height, stride, "unpack");
    Ok(unpack_rows(&bytes[..required], &geometry, height, info.unpack_row))
}

/// Flattens pixels into interleaved samples.
pub fn to_samples(pixels: &[Pixel]) -> Vec<u16> {
    pixels.iter().flatten().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_rejected() {
        let err = unpack(WireFormat::Rgb10, &[0u8; 255], 1, 1, 256).unwrap_err();
        assert_eq!(err, Error::buffer_too_small(256, 255));
    }

    #[test]
    fn test_padded_stride_ignored() {
        let mut bytes = vec![0xEEu8; 2 * 16];
        bytes[..4].copy_from_slice(&[3, 2, 1, 0xFF]);
        bytes[16..20].copy_from_slice(&[6, 5, 4, 0xFF]);
        let pixels = unpack(WireFormat::Bgra8, &bytes, 1, 2, 16).unwrap();
        assert_eq!(pixels, vec![[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn test_to_samples() {
        assert_eq!(to_samples(&[[1, 2, 3], [4, 5, 6]]), vec![1, 2, 3, 4, 5, 6]);
    }
}
