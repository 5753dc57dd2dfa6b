//! Wire pixel formats and their static descriptors.
//!
//! A wire format is the exact byte layout a video output interface expects.
//! The set is closed: every format the packers understand is a variant of
//! [`WireFormat`], and each variant maps to exactly one compiled-in
//! [`FormatDescriptor`].
//!
//! # Formats
//!
//! | FourCC | Depth | Channels | Word order | Packing | Row alignment |
//! |--------|-------|----------|------------|---------|---------------|
//! | `R12B` | 12 | RGB | big | 8 px in 36 bytes | 8 px |
//! | `R12L` | 12 | RGB | little | 8 px in 36 bytes | 8 px |
//! | `r210` | 10 | RGB | big | 1 px per word | 64 px (256 bytes) |
//! | `v210` | 10 | YUV | little | 1 px per word | 1 px |
//! | `R10b` | 10 | RGB | big | 1 px per word | 64 px (256 bytes) |
//! | `R10l` | 10 | RGB | little | 1 px per word | 64 px (256 bytes) |
//! | `BGRA` | 8 | RGB | little | 1 px per word | 1 px |
//! | `ARGB` | 8 | RGB | little | 1 px per word | 1 px |
//! | `2vuy` | 8 | YUV | big | 2 px per word | 2 px |
//!
//! `v210` here names the device's 10-bit YUV mode as the signal generator
//! addresses it; the layout is one pixel per 32-bit word.
//!
//! # Identifiers
//!
//! Formats parse from their FourCC (`"R12L"`), the symbolic names used by
//! the device layer (`"12BIT_RGBLE"`, optionally prefixed with `FORMAT_`)
//! and the numeric SDK value via [`WireFormat::from_code`].
//!
//! ```rust
//! use deckpack_core::WireFormat;
//!
//! assert_eq!("r210".parse::<WireFormat>()?, WireFormat::Rgb10);
//! assert_eq!("8bit_bgra".parse::<WireFormat>()?, WireFormat::Bgra8);
//! assert_eq!(WireFormat::from_code(32)?, WireFormat::Argb8);
//! # Ok::<(), deckpack_core::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::depth::BitDepth;
use crate::error::{Error, Result};

/// Closed set of supported wire formats.
///
/// Variants are declared in device preference order: highest fidelity first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WireFormat {
    /// `R12B`: 12-bit RGB, 8 pixels in nine big-endian words.
    Rgb12Be,
    /// `R12L`: 12-bit RGB, 8 pixels in nine little-endian words.
    Rgb12Le,
    /// `r210`: 10-bit RGB, one big-endian word per pixel, 2 high bits unused.
    Rgb10,
    /// `v210`: 10-bit YUV, one little-endian word per pixel.
    Yuv10,
    /// `R10b`: 10-bit RGB, one big-endian word per pixel, 2 low bits unused.
    Rgbx10Be,
    /// `R10l`: 10-bit RGB, one little-endian word per pixel, 2 low bits unused.
    Rgbx10Le,
    /// `BGRA`: 8-bit RGB with blue in the low byte.
    Bgra8,
    /// `ARGB`: 8-bit RGB with red in the low byte.
    Argb8,
    /// `2vuy`: 8-bit YUV 4:2:2, two pixels per word.
    Yuv8,
}

/// Meaning of the three samples of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelSemantics {
    /// Samples are (R, G, B).
    Rgb,
    /// Samples are (Y, U, V), U being the low chroma (Cb) and V the high (Cr).
    Yuv,
}

impl ChannelSemantics {
    /// Channel names in sample order.
    pub const fn names(&self) -> [&'static str; 3] {
        match self {
            Self::Rgb => ["R", "G", "B"],
            Self::Yuv => ["Y", "U", "V"],
        }
    }
}

/// Byte order of the 32-bit words a format is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endianness {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// Packing granularity: how many pixels share one indivisible byte block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Packing {
    /// One pixel per 32-bit word.
    Word,
    /// Two horizontally adjacent pixels per 32-bit word.
    Pair,
    /// `pixels` pixels interleaved across `bytes` bytes.
    Group {
        /// Pixels per group
        pixels: u32,
        /// Bytes per group
        bytes: u32,
    },
}

impl Packing {
    /// Pixels per indivisible block.
    #[inline]
    pub const fn pixels(&self) -> u32 {
        match self {
            Self::Word => 1,
            Self::Pair => 2,
            Self::Group { pixels, .. } => *pixels,
        }
    }

    /// Bytes per indivisible block.
    #[inline]
    pub const fn bytes(&self) -> u32 {
        match self {
            Self::Word | Self::Pair => 4,
            Self::Group { bytes, .. } => *bytes,
        }
    }
}

/// Static metadata describing one wire format.
///
/// This is the single source of truth consulted for clamping depth, row
/// geometry and packer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormatDescriptor {
    /// The format this entry describes.
    pub format: WireFormat,
    /// Four-character code, e.g. `"R12L"`.
    pub fourcc: &'static str,
    /// Numeric SDK identifier.
    pub code: u32,
    /// Symbolic name used by the device layer, e.g. `"12BIT_RGBLE"`.
    pub symbol: &'static str,
    /// Human-readable name, e.g. `"12-bit RGB LE"`.
    pub name: &'static str,
    /// Sample depth the packer expects.
    pub depth: BitDepth,
    /// Meaning of the three input samples.
    pub channels: ChannelSemantics,
    /// Byte order of the packed 32-bit words.
    pub endianness: Endianness,
    /// Packing granularity.
    pub packing: Packing,
    /// Rows are padded to a multiple of this many pixels.
    pub row_pixel_alignment: u32,
    /// Strides must be a multiple of this many bytes.
    pub stride_alignment: usize,
}

/// Packs a FourCC into the SDK's numeric representation.
const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

const WORD: Packing = Packing::Word;
const GROUP_12: Packing = Packing::Group { pixels: 8, bytes: 36 };

static DESCRIPTORS: [FormatDescriptor; 9] = [
    FormatDescriptor {
        format: WireFormat::Rgb12Be,
        fourcc: "R12B",
        code: fourcc(b"R12B"),
        symbol: "12BIT_RGB",
        name: "12-bit RGB",
        depth: BitDepth::U12,
        channels: ChannelSemantics::Rgb,
        endianness: Endianness::Big,
        packing: GROUP_12,
        row_pixel_alignment: 8,
        stride_alignment: 36,
    },
    FormatDescriptor {
        format: WireFormat::Rgb12Le,
        fourcc: "R12L",
        code: fourcc(b"R12L"),
        symbol: "12BIT_RGBLE",
        name: "12-bit RGB LE",
        depth: BitDepth::U12,
        channels: ChannelSemantics::Rgb,
        endianness: Endianness::Little,
        packing: GROUP_12,
        row_pixel_alignment: 8,
        stride_alignment: 36,
    },
    FormatDescriptor {
        format: WireFormat::Rgb10,
        fourcc: "r210",
        code: fourcc(b"r210"),
        symbol: "10BIT_RGB",
        name: "10-bit RGB",
        depth: BitDepth::U10,
        channels: ChannelSemantics::Rgb,
        endianness: Endianness::Big,
        packing: WORD,
        row_pixel_alignment: 64,
        stride_alignment: 256,
    },
    FormatDescriptor {
        format: WireFormat::Yuv10,
        fourcc: "v210",
        code: fourcc(b"v210"),
        symbol: "10BIT_YUV",
        name: "10-bit YUV",
        depth: BitDepth::U10,
        channels: ChannelSemantics::Yuv,
        endianness: Endianness::Little,
        packing: WORD,
        row_pixel_alignment: 1,
        stride_alignment: 4,
    },
    FormatDescriptor {
        format: WireFormat::Rgbx10Be,
        fourcc: "R10b",
        code: fourcc(b"R10b"),
        symbol: "10BIT_RGBX",
        name: "10-bit RGBX",
        depth: BitDepth::U10,
        channels: ChannelSemantics::Rgb,
        endianness: Endianness::Big,
        packing: WORD,
        row_pixel_alignment: 64,
        stride_alignment: 256,
    },
    FormatDescriptor {
        format: WireFormat::Rgbx10Le,
        fourcc: "R10l",
        code: fourcc(b"R10l"),
        symbol: "10BIT_RGBXLE",
        name: "10-bit RGBX LE",
        depth: BitDepth::U10,
        channels: ChannelSemantics::Rgb,
        endianness: Endianness::Little,
        packing: WORD,
        row_pixel_alignment: 64,
        stride_alignment: 256,
    },
    FormatDescriptor {
        format: WireFormat::Bgra8,
        fourcc: "BGRA",
        code: fourcc(b"BGRA"),
        symbol: "8BIT_BGRA",
        name: "8-bit BGRA",
        depth: BitDepth::U8,
        channels: ChannelSemantics::Rgb,
        endianness: Endianness::Little,
        packing: WORD,
        row_pixel_alignment: 1,
        stride_alignment: 4,
    },
    FormatDescriptor {
        format: WireFormat::Argb8,
        fourcc: "ARGB",
        code: 32,
        symbol: "8BIT_ARGB",
        name: "8-bit ARGB",
        depth: BitDepth::U8,
        channels: ChannelSemantics::Rgb,
        endianness: Endianness::Little,
        packing: WORD,
        row_pixel_alignment: 1,
        stride_alignment: 4,
    },
    FormatDescriptor {
        format: WireFormat::Yuv8,
        fourcc: "2vuy",
        code: fourcc(b"2vuy"),
        symbol: "8BIT_YUV",
        name: "8-bit YUV",
        depth: BitDepth::U8,
        channels: ChannelSemantics::Yuv,
        endianness: Endianness::Big,
        packing: Packing::Pair,
        row_pixel_alignment: 2,
        stride_alignment: 4,
    },
];

impl WireFormat {
    /// Every supported format, highest fidelity first.
    pub const ALL: [WireFormat; 9] = [
        Self::Rgb12Be,
        Self::Rgb12Le,
        Self::Rgb10,
        Self::Yuv10,
        Self::Rgbx10Be,
        Self::Rgbx10Le,
        Self::Bgra8,
        Self::Argb8,
        Self::Yuv8,
    ];

    /// Static descriptor of this format.
    #[inline]
    pub fn descriptor(self) -> &'static FormatDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Four-character code.
    #[inline]
    pub fn fourcc(self) -> &'static str {
        self.descriptor().fourcc
    }

    /// Sample depth of this format.
    #[inline]
    pub fn depth(self) -> BitDepth {
        self.descriptor().depth
    }

    /// Resolves the numeric SDK identifier.
    ///
    /// Unknown values fail with [`Error::UnsupportedFormat`] carrying the
    /// value in hex; there is no default.
    pub fn from_code(code: u32) -> Result<Self> {
        DESCRIPTORS
            .iter()
            .find(|d| d.code == code)
            .map(|d| d.format)
            .ok_or_else(|| Error::unsupported_format(format!("{code:#010x}")))
    }

    /// Picks the highest fidelity format out of the ones a device offers.
    ///
    /// Returns `None` if none of `available` is supported here.
    pub fn select_preferred(available: &[WireFormat]) -> Option<WireFormat> {
        Self::ALL.into_iter().find(|f| available.contains(f))
    }
}

impl FromStr for WireFormat {
    type Err = Error;

    /// Parses a FourCC (case-sensitive, `R10b` and `R10l` differ only in
    /// case) or a symbolic name (case-insensitive, optional `FORMAT_` prefix).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(desc) = DESCRIPTORS.iter().find(|d| d.fourcc == trimmed) {
            return Ok(desc.format);
        }

        let upper = trimmed.to_ascii_uppercase();
        let symbol = upper.strip_prefix("FORMAT_").unwrap_or(&upper);
        DESCRIPTORS
            .iter()
            .find(|d| d.symbol == symbol)
            .map(|d| d.format)
            .ok_or_else(|| Error::unsupported_format(s))
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fourcc())
    }
}
