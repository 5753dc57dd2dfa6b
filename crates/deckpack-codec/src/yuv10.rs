//! 10-bit YUV single-word packing (`v210` as addressed by the device layer).
//!
//! One pixel per little-endian 32-bit word:
//!
//! ```text
//! 31-30 pad | 29-20 V | 19-10 Y | 9-0 U
//! ```
//!
//! No color conversion happens here: samples arrive as (Y, U, V).

use byteorder::ByteOrder;
use deckpack_core::Pixel;

/// Assembles the word for one pixel.
#[inline]
pub fn word(px: Pixel) -> u32 {
    let [y, u, v] = px.map(|s| u32::from(s & 0x3FF));
    (v << 20) | (y << 10) | u
}

/// Packs one row. `out` holds exactly `row.len() * 4` bytes.
pub fn pack_row<B: ByteOrder>(row: &[Pixel], out: &mut [u8]) {
    for (px, dst) in row.iter().zip(out.chunks_exact_mut(4)) {
        B::write_u32(dst, word(*px));
    }
}

/// Reverses [`pack_row`].
pub fn unpack_row<B: ByteOrder>(data: &[u8], out: &mut [Pixel]) {
    for (src, px) in data.chunks_exact(4).zip(out.iter_mut()) {
        let w = B::read_u32(src);
        *px = [(w >> 10) & 0x3FF, w & 0x3FF, (w >> 20) & 0x3FF].map(|v| v as u16);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::LittleEndian;

    #[test]
    fn test_reference_bytes() {
        let mut out = [0u8; 4];
        pack_row::<LittleEndian>(&[[0x3AC, 0x200, 0x040]], &mut out);
        assert_eq!(out, [0x00, 0xB2, 0x0E, 0x04]);
    }

    #[test]
    fn test_field_positions() {
        assert_eq!(word([0, 1023, 0]), 0x0000_03FF);
        assert_eq!(word([1023, 0, 0]), 0x000F_FC00);
        assert_eq!(word([0, 0, 1023]), 0x3FF0_0000);
    }

    #[test]
    fn test_roundtrip() {
        let row: Vec<Pixel> = (0..1024u16).map(|v| [v, (v + 512) & 0x3FF, 1023 - v]).collect();
        let mut bytes = vec![0u8; row.len() * 4];
        pack_row::<LittleEndian>(&row, &mut bytes);
        let mut back = vec![[0u16; 3]; row.len()];
        unpack_row::<LittleEndian>(&bytes, &mut back);
        assert_eq!(back, row);
    }
}
