//! 12-bit RGB interleaved packing (`R12B`, `R12L`).
//!
//! Eight pixels (24 samples, 288 bits) form one indivisible 36-byte group
//! built from nine 32-bit words. The layout is SMPTE 268M Annex C method C4
//! compatible: samples are laid down B-G-R within each word from the most
//! significant end, and a sample that does not fit is split, its low bits
//! finishing one word and its high bits opening the next.
//!
//! ```text
//! w0 = B0[7:0]<<24 | G0<<12 | R0
//! w1 = B1[3:0]<<28 | G1<<16 | R1<<4  | B0[11:8]
//! w2 = G2<<20      | R2<<8  | B1[11:4]
//! w3 = G3[7:0]<<24 | R3<<12 | B2
//! w4 = G4[3:0]<<28 | R4<<16 | B3<<4  | G3[11:8]
//! w5 = R5<<20      | B4<<8  | G4[11:4]
//! w6 = R6[7:0]<<24 | B5<<12 | G5
//! w7 = R7[3:0]<<28 | B6<<16 | G6<<4  | R6[11:8]
//! w8 = B7<<20      | G7<<8  | R7[11:4]
//! ```
//!
//! `R12L` writes the words little-endian, `R12B` big-endian. The bit
//! assignment is identical. Pixel slots past the end of a row are zero.

use byteorder::ByteOrder;
use deckpack_core::Pixel;

/// Pixels per group.
pub const GROUP_PIXELS: usize = 8;
/// Bytes per group.
pub const GROUP_BYTES: usize = 36;

const WORDS: usize = GROUP_BYTES / 4;

/// Packs eight pixels into nine words.
pub fn pack_group(px: &[Pixel; GROUP_PIXELS]) -> [u32; WORDS] {
    let r = px.map(|p| u32::from(p[0] & 0xFFF));
    let g = px.map(|p| u32::from(p[1] & 0xFFF));
    let b = px.map(|p| u32::from(p[2] & 0xFFF));

    [
        ((b[0] & 0x0FF) << 24) | (g[0] << 12) | r[0],
        ((b[1] & 0x00F) << 28) | (g[1] << 16) | (r[1] << 4) | (b[0] >> 8),
        (g[2] << 20) | (r[2] << 8) | (b[1] >> 4),
        ((g[3] & 0x0FF) << 24) | (r[3] << 12) | b[2],
        ((g[4] & 0x00F) << 28) | (r[4] << 16) | (b[3] << 4) | (g[3] >> 8),
        (r[5] << 20) | (b[4] << 8) | (g[4] >> 4),
        ((r[6] & 0x0FF) << 24) | (b[5] << 12) | g[5],
        ((r[7] & 0x00F) << 28) | (b[6] << 16) | (g[6] << 4) | (r[6] >> 8),
        (b[7] << 20) | (g[7] << 8) | (r[7] >> 4),
    ]
}

/// Recovers eight pixels from nine words.
pub fn unpack_group(w: &[u32; WORDS]) -> [Pixel; GROUP_PIXELS] {
    let f = |word: u32, shift: u32, bits: u32| (word >> shift) & ((1 << bits) - 1);

    let r = [
        f(w[0], 0, 12),
        f(w[1], 4, 12),
        f(w[2], 8, 12),
        f(w[3], 12, 12),
        f(w[4], 16, 12),
        f(w[5], 20, 12),
        f(w[6], 24, 8) | (f(w[7], 0, 4) << 8),
        f(w[7], 28, 4) | (f(w[8], 0, 8) << 4),
    ];
    let g = [
        f(w[0], 12, 12),
        f(w[1], 16, 12),
        f(w[2], 20, 12),
        f(w[3], 24, 8) | (f(w[4], 0, 4) << 8),
        f(w[4], 28, 4) | (f(w[5], 0, 8) << 4),
        f(w[6], 0, 12),
        f(w[7], 4, 12),
        f(w[8], 8, 12),
    ];
    let b = [
        f(w[0], 24, 8) | (f(w[1], 0, 4) << 8),
        f(w[1], 28, 4) | (f(w[2], 0, 8) << 4),
        f(w[3], 0, 12),
        f(w[4], 4, 12),
        f(w[5], 8, 12),
        f(w[6], 12, 12),
        f(w[7], 16, 12),
        f(w[8], 20, 12),
    ];

    std::array::from_fn(|i| [r[i] as u16, g[i] as u16, b[i] as u16])
}

/// Packs one row. `out` holds exactly `ceil(row.len() / 8) * 36` bytes.
pub fn pack_row<B: ByteOrder>(row: &[Pixel], out: &mut [u8]) {
    for (chunk, dst) in row.chunks(GROUP_PIXELS).zip(out.chunks_exact_mut(GROUP_BYTES)) {
        let mut group = [[0u16; 3]; GROUP_PIXELS];
        group[..chunk.len()].copy_from_slice(chunk);
        let words = pack_group(&group);
        B::write_u32_into(&words, dst);
    }
}

/// Reverses [`pack_row`], dropping the padding slots of the last group.
pub fn unpack_row<B: ByteOrder>(data: &[u8], out: &mut [Pixel]) {
    for (src, chunk) in data.chunks_exact(GROUP_BYTES).zip(out.chunks_mut(GROUP_PIXELS)) {
        let mut words = [0u32; WORDS];
        B::read_u32_into(src, &mut words);
        let group = unpack_group(&words);
        chunk.copy_from_slice(&group[..chunk.len()]);
    }
}
