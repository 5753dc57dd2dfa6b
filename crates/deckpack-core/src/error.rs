//! Error types for deckpack operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers every failure a packing call can report:
//! - Unknown wire format identifiers
//! - Malformed geometry (zero or overflowing dimensions, bad strides)
//! - Buffers whose length disagrees with the declared geometry
//!
//! Out-of-range samples are deliberately absent: they are clamped, not
//! reported.
//!
//! # Usage
//!
//! ```rust
//! use deckpack_core::{Error, Result};
//!
//! fn check_width(width: u32) -> Result<()> {
//!     if width == 0 {
//!         return Err(Error::invalid_dimensions(width, 1, "width must be > 0"));
//!     }
//!     Ok(())
//! }
//! assert!(check_width(0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving formats or packing frames.
///
/// # Categories
///
/// - **Format errors**: [`UnsupportedFormat`](Error::UnsupportedFormat)
/// - **Geometry errors**: [`InvalidDimensions`](Error::InvalidDimensions),
///   [`InvalidStride`](Error::InvalidStride)
/// - **Buffer errors**: [`SampleCountMismatch`](Error::SampleCountMismatch),
///   [`BufferTooSmall`](Error::BufferTooSmall)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The format identifier is not one of the known wire formats.
    ///
    /// There is no fallback format: a frame packed in the wrong layout
    /// shows plausible but wrong colors with no other diagnostic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deckpack_core::WireFormat;
    ///
    /// let err = "Ay10".parse::<WireFormat>().unwrap_err();
    /// assert!(err.to_string().contains("Ay10"));
    /// assert!(err.to_string().contains("R12L"));
    /// ```
    #[error("unsupported pixel format '{identifier}' (supported: {})", supported.join(", "))]
    UnsupportedFormat {
        /// The identifier as given by the caller
        identifier: String,
        /// FourCC codes of the formats that are supported
        supported: Vec<&'static str>,
    },

    /// Width or height is zero, or the frame size overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Row stride is shorter than one packed row, or breaks the format's
    /// alignment.
    #[error(
        "stride {stride} invalid for width {width}: \
         need at least {min_stride} bytes in multiples of {alignment}"
    )]
    InvalidStride {
        /// Provided stride
        stride: usize,
        /// Minimum stride for the width
        min_stride: usize,
        /// Required stride multiple
        alignment: usize,
        /// Frame width in pixels
        width: u32,
    },

    /// The source buffer doesn't hold exactly `width * height * 3` samples.
    #[error("sample count mismatch: expected {expected}, got {got}")]
    SampleCountMismatch {
        /// Expected number of samples
        expected: usize,
        /// Actual number of samples
        got: usize,
    },

    /// The destination buffer is shorter than `height * stride`.
    #[error("destination buffer too small: need {required} bytes, got {got}")]
    BufferTooSmall {
        /// Bytes required
        required: usize,
        /// Bytes available
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::UnsupportedFormat`] error listing every known format.
    pub fn unsupported_format(identifier: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            identifier: identifier.into(),
            supported: crate::format::WireFormat::ALL
                .iter()
                .map(|f| f.fourcc())
                .collect(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::SampleCountMismatch`] error.
    #[inline]
    pub fn sample_count_mismatch(expected: usize, got: usize) -> Self {
        Self::SampleCountMismatch { expected, got }
    }

    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(required: usize, got: usize) -> Self {
        Self::BufferTooSmall { required, got }
    }

    /// Returns `true` if this is an unknown-format error.
    #[inline]
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Returns `true` if this is a geometry error (dimensions or stride).
    #[inline]
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Self::InvalidDimensions { .. } | Self::InvalidStride { .. })
    }

    /// Returns `true` if a buffer length disagrees with the geometry.
    #[inline]
    pub fn is_buffer_error(&self) -> bool {
        matches!(
            self,
            Self::SampleCountMismatch { .. } | Self::BufferTooSmall { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_lists_known_formats() {
        let err = Error::unsupported_format("yuv9");
        let msg = err.to_string();
        assert!(msg.contains("'yuv9'"));
        for code in ["R12B", "R12L", "r210", "v210", "R10b", "R10l", "BGRA", "ARGB", "2vuy"] {
            assert!(msg.contains(code), "missing {code} in {msg}");
        }
        assert!(err.is_unsupported_format());
    }

    #[test]
    fn test_invalid_stride_message() {
        let err = Error::InvalidStride {
            stride: 100,
            min_stride: 256,
            alignment: 256,
            width: 64,
        };
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("256"));
        assert!(err.is_geometry_error());
    }

    #[test]
    fn test_buffer_errors() {
        assert!(Error::buffer_too_small(36, 35).is_buffer_error());
        assert!(Error::sample_count_mismatch(24, 23).is_buffer_error());
        assert!(!Error::invalid_dimensions(0, 1, "zero").is_buffer_error());
    }
}
