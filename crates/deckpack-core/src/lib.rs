//! # deckpack-core
//!
//! Core types for packing color samples into video wire pixel formats.
//!
//! This crate provides the foundational types used by the packers in
//! `deckpack-codec`:
//!
//! - [`BitDepth`] - Declared sample depth and the range clamper
//! - [`WireFormat`], [`FormatDescriptor`] - The closed set of wire formats and their
//!   static metadata
//! - [`row_bytes`], [`frame_bytes`], [`RowGeometry`] - Row stride calculation and validation
//! - [`SamplePlane`], [`ClampedPlane`] - Borrowed input samples and clamped pixel planes
//! - [`Error`] - Unified error type
//!
//! ## Design Philosophy
//!
//! Every format-specific fact (bit depth, channel order, word byte order,
//! packing granularity, row alignment) lives in exactly one place: the
//! descriptor table in [`format`]. Clamping, stride math and packer dispatch
//! all read from it instead of re-deriving format behavior:
//!
//! ```
//! use deckpack_core::{row_bytes, WireFormat};
//!
//! let format: WireFormat = "R12L".parse()?;
//! let desc = format.descriptor();
//! assert_eq!(desc.depth.max_value(), 4095);
//! assert_eq!(row_bytes(format, 1920)?, 8640);
//! # Ok::<(), deckpack_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! deckpack-core (this crate)
//!    ^
//!    |
//!    +-- deckpack-codec (packers, dispatcher, unpackers)
//!    +-- deckpack-tests (reference vectors)
//!    +-- deckpack-bench (throughput)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for format metadata types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod depth;
pub mod error;
pub mod format;
pub mod plane;
pub mod stride;

// Re-exports for convenience
pub use depth::BitDepth;
pub use error::{Error, Result};
pub use format::{ChannelSemantics, Endianness, FormatDescriptor, Packing, WireFormat};
pub use plane::{clamp_plane, ClampedPlane, Pixel, SamplePlane, CHANNELS};
pub use stride::{frame_bytes, row_bytes, validate_stride, RowGeometry};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use deckpack_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::depth::BitDepth;
    pub use crate::error::{Error, Result};
    pub use crate::format::{ChannelSemantics, Endianness, FormatDescriptor, Packing, WireFormat};
    pub use crate::plane::{clamp_plane, ClampedPlane, Pixel, SamplePlane};
    pub use crate::stride::{frame_bytes, row_bytes, validate_stride, RowGeometry};
}
