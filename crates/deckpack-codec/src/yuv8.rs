//! 8-bit YUV 4:2:2 packing (`2vuy`).
//!
//! Two horizontally adjacent pixels share one 4-byte group:
//!
//! ```text
//! byte:   0        1        2        3
//!         U(even)  Y(even)  V(even)  Y(odd)
//! ```
//!
//! Chroma comes from the even pixel only; the odd pixel's U and V are
//! dropped. With an odd width the final group's second luma byte is zero.

use byteorder::{BigEndian, ByteOrder};
use deckpack_core::Pixel;

/// Assembles the group word for a pixel pair.
#[inline]
pub fn word(even: Pixel, odd: Option<Pixel>) -> u32 {
    let [y0, u, v] = even.map(|s| u32::from(s & 0xFF));
    let y1 = odd.map_or(0, |p| u32::from(p[0] & 0xFF));
    (u << 24) | (y0 << 16) | (v << 8) | y1
}

/// Packs one row. `out` holds exactly `ceil(row.len() / 2) * 4` bytes.
pub fn pack_row(row: &[Pixel], out: &mut [u8]) {
    for (pair, dst) in row.chunks(2).zip(out.chunks_exact_mut(4)) {
        BigEndian::write_u32(dst, word(pair[0], pair.get(1).copied()));
    }
}

/// Reverses [`pack_row`]; both pixels of a pair receive the even chroma.
pub fn unpack_row(data: &[u8], out: &mut [Pixel]) {
    for (src, pair) in data.chunks_exact(4).zip(out.chunks_mut(2)) {
        let [u, y0, v, y1] = [src[0], src[1], src[2], src[3]].map(u16::from);
        pair[0] = [y0, u, v];
        if let Some(odd) = pair.get_mut(1) {
            *odd = [y1, u, v];
        }
    }
}
