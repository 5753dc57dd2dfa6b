//! # deckpack-codec
//!
//! Bit-exact packers that turn clamped color samples into the byte layouts
//! video output hardware consumes.
//!
//! # Modules
//!
//! - [`rgb8`] - `BGRA` and `ARGB`, one little-endian word per pixel
//! - [`yuv8`] - `2vuy`, two pixels per big-endian word
//! - [`rgb10`] - `r210`, `R10b` and `R10l`
//! - [`yuv10`] - `v210` as a single 10-bit YUV word per pixel
//! - [`rgb12`] - `R12B` and `R12L`, eight pixels per 36-byte group
//! - [`registry`] - Format to packer table
//! - [`pack`](mod@pack) - Frame dispatcher
//! - [`unpack`](mod@unpack) - Reference unpackers
//!
//! # Example
//!
//! ```rust
//! use deckpack_codec::pack;
//! use deckpack_core::{row_bytes, WireFormat};
//!
//! let (width, height) = (8, 1);
//! let mut samples = vec![0u16; width as usize * 3];
//! samples[0] = 4095; // pixel 0 red
//!
//! let stride = row_bytes(WireFormat::Rgb12Le, width)?;
//! let mut frame = vec![0u8; stride * height as usize];
//! pack(WireFormat::Rgb12Le, &samples, width, height, &mut frame, stride)?;
//! assert_eq!(&frame[..4], &[0xFF, 0x0F, 0x00, 0x00]);
//! # Ok::<(), deckpack_core::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Pack rows on the rayon thread pool
//! - `serde` - Serialization of format metadata

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod pack;
pub mod registry;
pub mod rgb10;
pub mod rgb12;
pub mod rgb8;
mod rows;
pub mod unpack;
pub mod yuv10;
pub mod yuv8;

pub use pack::{pack, pack_clamped, pack_identifier, pack_to_vec, pack_with};
pub use registry::{PackerInfo, PackerRegistry};
pub use rows::{PackOptions, RowPacker, RowUnpacker};
pub use unpack::{to_samples, unpack};
