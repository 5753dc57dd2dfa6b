//! Packer registry: one entry per wire format.
//!
//! The registry pairs each static [`FormatDescriptor`] with the row packer
//! and unpacker that implement it. It is the only place that maps a format
//! to code; the dispatcher consults it once per frame.
//!
//! # Example
//!
//! ```rust
//! use deckpack_codec::registry::PackerRegistry;
//!
//! let registry = PackerRegistry::global();
//! let info = registry.resolve("R12L")?;
//! assert_eq!(info.descriptor.fourcc, "R12L");
//! assert!(registry.resolve("yuv9").is_err());
//! # Ok::<(), deckpack_core::Error>(())
//! ```

use std::sync::OnceLock;

use byteorder::{BigEndian, LittleEndian};
use deckpack_core::{FormatDescriptor, Result, WireFormat};
use tracing::debug;

use crate::rgb10::{self, Rgb10Layout};
use crate::rgb8::{self, Rgb8Order};
use crate::rows::{RowPacker, RowUnpacker};
use crate::{rgb12, yuv10, yuv8};

/// Registry entry for one format.
#[derive(Debug, Clone, Copy)]
pub struct PackerInfo {
    /// Static metadata of the format.
    pub descriptor: &'static FormatDescriptor,
    /// Packs one row.
    pub pack_row: RowPacker,
    /// Unpacks one row.
    pub unpack_row: RowUnpacker,
}

/// Table of packers for every [`WireFormat`].
#[derive(Debug)]
pub struct PackerRegistry {
    entries: Vec<PackerInfo>,
}

impl PackerRegistry {
    /// Builds the table for all formats.
    fn new() -> Self {
        let entries = WireFormat::ALL
            .iter()
            .map(|&format| PackerInfo {
                descriptor: format.descriptor(),
                pack_row: row_packer(format),
                unpack_row: row_unpacker(format),
            })
            .collect();
        Self { entries }
    }

    /// Returns the shared registry instance.
    pub fn global() -> &'static PackerRegistry {
        static INSTANCE: OnceLock<PackerRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let registry = PackerRegistry::new();
            debug!(formats = registry.entries.len(), "Packer registry initialized");
            registry
        })
    }

    /// Entry for a format.
    #[inline]
    pub fn get(&self, format: WireFormat) -> &PackerInfo {
        &self.entries[format as usize]
    }

    /// Resolves a FourCC, a symbolic name or a decimal SDK code.
    ///
    /// Unknown identifiers fail with `UnsupportedFormat` naming the
    /// identifier as given; there is no default format.
    pub fn resolve(&self, identifier: &str) -> Result<&PackerInfo> {
        match identifier.parse::<WireFormat>() {
            Ok(format) => Ok(self.get(format)),
            Err(err) => identifier
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(|code| WireFormat::from_code(code).ok())
                .map(|format| self.get(format))
                .ok_or(err),
        }
    }

    /// Resolves a numeric SDK identifier.
    pub fn resolve_code(&self, code: u32) -> Result<&PackerInfo> {
        WireFormat::from_code(code).map(|f| self.get(f))
    }

    /// Iterates over all entries, highest fidelity first.
    pub fn iter(&self) -> impl Iterator<Item = &PackerInfo> {
        self.entries.iter()
    }
}

fn row_packer(format: WireFormat) -> RowPacker {
    match format {
        WireFormat::Rgb12Be => rgb12::pack_row::<BigEndian>,
        WireFormat::Rgb12Le => rgb12::pack_row::<LittleEndian>,
        WireFormat::Rgb10 => |row, out| rgb10::pack_row::<BigEndian>(row, out, Rgb10Layout::R210),
        WireFormat::Yuv10 => yuv10::pack_row::<LittleEndian>,
        WireFormat::Rgbx10Be => {
            |row, out| rgb10::pack_row::<BigEndian>(row, out, Rgb10Layout::Rgbx)
        }
        WireFormat::Rgbx10Le => {
            |row, out| rgb10::pack_row::<LittleEndian>(row, out, Rgb10Layout::Rgbx)
        }
        WireFormat::Bgra8 => |row, out| rgb8::pack_row(row, out, Rgb8Order::Bgra),
        WireFormat::Argb8 => |row, out| rgb8::pack_row(row, out, Rgb8Order::Argb),
        WireFormat::Yuv8 => yuv8::pack_row,
    }
}

fn row_unpacker(format: WireFormat) -> RowUnpacker {
    match format {
        WireFormat::Rgb12Be => rgb12::unpack_row::<BigEndian>,
        WireFormat::Rgb12Le => rgb12::unpack_row::<LittleEndian>,
        WireFormat::Rgb10 => {
            |data, out| rgb10::unpack_row::<BigEndian>(data, out, Rgb10Layout::R210)
        }
        WireFormat::Yuv10 => yuv10::unpack_row::<LittleEndian>,
        WireFormat::Rgbx10Be => {
            |data, out| rgb10::unpack_row::<BigEndian>(data, out, Rgb10Layout::Rgbx)
        }
        WireFormat::Rgbx10Le => {
            |data, out| rgb10::unpack_row::<LittleEndian>(data, out, Rgb10Layout::Rgbx)
        }
        WireFormat::Bgra8 => |data, out| rgb8::unpack_row(data, out, Rgb8Order::Bgra),
        WireFormat::Argb8 => |data, out| rgb8::unpack_row(data, out, Rgb8Order::Argb),
        WireFormat::Yuv8 => yuv8::unpack_row,
    }
}
