//! 10-bit RGB single-word packing (`r210`, `R10b`, `R10l`).
//!
//! Three 10-bit components share one 32-bit word. The two layouts differ in
//! where the two unused bits sit:
//!
//! ```text
//! r210:       31-30 pad | 29-20 R | 19-10 G |  9-0 B
//! R10b/R10l:  31-22 R   | 21-12 G | 11-2 B  |  1-0 pad
//! ```
//!
//! `r210` and `R10b` store the word big-endian, `R10l` little-endian. The
//! byte order is a type parameter, never a query of the host, so both
//! orders produce the same bytes on every machine.
//!
//! Rows are aligned to 64 pixels (256 bytes); the row driver zero-fills the
//! slots past the last pixel.

use byteorder::ByteOrder;
use deckpack_core::Pixel;

/// Placement of the three 10-bit fields in the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rgb10Layout {
    /// `r210`: padding in the two most significant bits.
    R210,
    /// `R10b`/`R10l`: padding in the two least significant bits.
    Rgbx,
}

impl Rgb10Layout {
    #[inline]
    const fn shift(self) -> u32 {
        match self {
            Self::R210 => 0,
            Self::Rgbx => 2,
        }
    }
}

/// Assembles the word for one pixel.
#[inline]
pub fn word(px: Pixel, layout: Rgb10Layout) -> u32 {
    let [r, g, b] = px.map(|s| u32::from(s & 0x3FF));
    ((r << 20) | (g << 10) | b) << layout.shift()
}

/// Packs one row. `out` holds exactly `row.len() * 4` bytes.
pub fn pack_row<B: ByteOrder>(row: &[Pixel], out: &mut [u8], layout: Rgb10Layout) {
    for (px, dst) in row.iter().zip(out.chunks_exact_mut(4)) {
        B::write_u32(dst, word(*px, layout));
    }
}

/// Reverses [`pack_row`].
pub fn unpack_row<B: ByteOrder>(data: &[u8], out: &mut [Pixel], layout: Rgb10Layout) {
    for (src, px) in data.chunks_exact(4).zip(out.iter_mut()) {
        let w = B::read_u32(src) >> layout.shift();
        *px = [(w >> 20) & 0x3FF, (w >> 10) & 0x3FF, w & 0x3FF].map(|v| v as u16);
    }
}
