//! 8-bit RGB word packing (`BGRA`, `ARGB`).
//!
//! Each pixel becomes one little-endian 32-bit word whose top byte is the
//! opaque fourth lane `0xFF`:
//!
//! | Order | Word | Bytes |
//! |-------|------|-------|
//! | [`Rgb8Order::Bgra`] | `FF RR GG BB` | `[B, G, R, 0xFF]` |
//! | [`Rgb8Order::Argb`] | `FF BB GG RR` | `[R, G, B, 0xFF]` |

use byteorder::{ByteOrder, LittleEndian};
use deckpack_core::Pixel;

const OPAQUE: u32 = 0xFF << 24;

/// Which channel lands in the low byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rgb8Order {
    /// Blue in the low byte, red in bits 16-23.
    Bgra,
    /// Red in the low byte, blue in bits 16-23.
    Argb,
}

/// Assembles the word for one pixel.
#[inline]
pub fn word(px: Pixel, order: Rgb8Order) -> u32 {
    let [r, g, b] = px.map(|s| u32::from(s & 0xFF));
    match order {
        Rgb8Order::Bgra => OPAQUE | (r << 16) | (g << 8) | b,
        Rgb8Order::Argb => OPAQUE | (b << 16) | (g << 8) | r,
    }
}

/// Packs one row. `out` holds exactly `row.len() * 4` bytes.
pub fn pack_row(row: &[Pixel], out: &mut [u8], order: Rgb8Order) {
    for (px, dst) in row.iter().zip(out.chunks_exact_mut(4)) {
        LittleEndian::write_u32(dst, word(*px, order));
    }
}

/// Reverses [`pack_row`].
pub fn unpack_row(data: &[u8], out: &mut [Pixel], order: Rgb8Order) {
    for (src, px) in data.chunks_exact(4).zip(out.iter_mut()) {
        let w = LittleEndian::read_u32(src);
        let hi = ((w >> 16) & 0xFF) as u16;
        let mid = ((w >> 8) & 0xFF) as u16;
        let lo = (w & 0xFF) as u16;
        *px = match order {
            Rgb8Order::Bgra => [hi, mid, lo],
            Rgb8Order::Argb => [lo, mid, hi],
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack_one(px: Pixel, order: Rgb8Order) -> [u8; 4] {
        let mut out = [0u8; 4];
        pack_row(&[px], &mut out, order);
        out
    }

    #[test]
    fn test_black_bgra() {
        assert_eq!(pack_one([0, 0, 0], Rgb8Order::Bgra), [0x00, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn test_channel_positions() {
        let px = [0x11, 0x22, 0x33];
        assert_eq!(pack_one(px, Rgb8Order::Bgra), [0x33, 0x22, 0x11, 0xFF]);
        assert_eq!(pack_one(px, Rgb8Order::Argb), [0x11, 0x22, 0x33, 0xFF]);
    }

    #[test]
    fn test_white() {
        for order in [Rgb8Order::Bgra, Rgb8Order::Argb] {
            assert_eq!(pack_one([255, 255, 255], order), [0xFF; 4]);
        }
    }

    #[test]
    fn test_roundtrip_all_values() {
        for order in [Rgb8Order::Bgra, Rgb8Order::Argb] {
            let row: Vec<Pixel> = (0..256u16).map(|v| [v, 255 - v, v / 2]).collect();
            let mut bytes = vec![0u8; row.len() * 4];
            pack_row(&row, &mut bytes, order);
            let mut back = vec![[0u16; 3]; row.len()];
            unpack_row(&bytes, &mut back, order);
            assert_eq!(back, row);
        }
    }
}
