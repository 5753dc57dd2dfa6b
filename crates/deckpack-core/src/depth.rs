//! Sample bit depths and the range clamper.
//!
//! Samples always travel in a `u16` container. The [`BitDepth`] of the target
//! wire format decides how many of those bits are legal; anything above the
//! ceiling is saturated, never wrapped and never reported.
//!
//! | Depth | Max Value | Formats |
//! |-------|-----------|---------|
//! | 8-bit | 255 | `BGRA`, `ARGB`, `2vuy` |
//! | 10-bit | 1023 | `r210`, `R10b`, `R10l`, `v210` |
//! | 12-bit | 4095 | `R12B`, `R12L` |
//!
//! ```rust
//! use deckpack_core::BitDepth;
//!
//! assert_eq!(BitDepth::U10.clamp(1100), 1023);
//! assert_eq!(BitDepth::U10.clamp(512), 512);
//! ```

/// Declared precision of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitDepth {
    /// 8 bits per channel (0-255).
    U8,
    /// 10 bits per channel (0-1023).
    U10,
    /// 12 bits per channel (0-4095).
    U12,
}

impl BitDepth {
    /// Number of bits per channel.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U10 => 10,
            Self::U12 => 12,
        }
    }

    /// Largest legal sample value, `2^bits - 1`.
    #[inline]
    pub const fn max_value(self) -> u16 {
        match self {
            Self::U8 => 0x00FF,
            Self::U10 => 0x03FF,
            Self::U12 => 0x0FFF,
        }
    }

    /// Saturates `sample` to this depth.
    ///
    /// The container is unsigned, so only the upper bound needs handling.
    #[inline]
    pub const fn clamp(self, sample: u16) -> u16 {
        let max = self.max_value();
        if sample > max { max } else { sample }
    }

    /// Returns `true` if `sample` already fits without clamping.
    #[inline]
    pub const fn contains(self, sample: u16) -> bool {
        sample <= self.max_value()
    }

    /// Creates a depth from a bit count.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::U8),
            10 => Some(Self::U10),
            12 => Some(Self::U12),
            _ => None,
        }
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEPTHS: [BitDepth; 3] = [BitDepth::U8, BitDepth::U10, BitDepth::U12];

    #[test]
    fn test_max_value_matches_bits() {
        for depth in DEPTHS {
            assert_eq!(u32::from(depth.max_value()), (1u32 << depth.bits()) - 1);
        }
    }

    #[test]
    fn test_clamp_ceiling_exhaustive() {
        for depth in DEPTHS {
            let max = depth.max_value();
            for s in 0..=u16::MAX {
                let c = depth.clamp(s);
                if s > max {
                    assert_eq!(c, max, "{depth} sample {s}");
                } else {
                    assert_eq!(c, s, "{depth} sample {s}");
                }
            }
        }
    }

    #[test]
    fn test_clamp_idempotent_exhaustive() {
        for depth in DEPTHS {
            for s in 0..=u16::MAX {
                let once = depth.clamp(s);
                assert_eq!(depth.clamp(once), once);
                assert!(depth.contains(once));
            }
        }
    }

    #[test]
    fn test_clamp_on_owned_depth() {
        // Inherent by-value methods, not `Ord::clamp`.
        let depth = BitDepth::U10;
        assert_eq!(depth.clamp(5000), 1023);
        assert!(depth.contains(1023));
        assert!(BitDepth::U8 < BitDepth::U12);
        let depths: Vec<u16> = DEPTHS.into_iter().map(|d| d.clamp(u16::MAX)).collect();
        assert_eq!(depths, [255, 1023, 4095]);
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(BitDepth::from_bits(10), Some(BitDepth::U10));
        assert_eq!(BitDepth::from_bits(16), None);
        assert_eq!(BitDepth::U12.to_string(), "12-bit");
    }
}
