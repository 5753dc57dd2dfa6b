//! Pixel planes: borrowed input samples and clamped pixel data.
//!
//! Input arrives as a flat, row-major run of `u16` samples, three per pixel.
//! [`SamplePlane`] borrows it after checking the length against the
//! dimensions; [`clamp_plane`] turns it into a [`ClampedPlane`], the only
//! form the frame packers accept.

use tracing::debug;

use crate::depth::BitDepth;
use crate::error::{Error, Result};

/// Samples per pixel.
pub const CHANNELS: usize = 3;

/// One pixel: three samples in the order the target format declares.
pub type Pixel = [u16; CHANNELS];

/// Borrowed, interleaved input samples with their dimensions.
#[derive(Debug, Clone, Copy)]
pub struct SamplePlane<'a> {
    samples: &'a [u16],
    width: u32,
    height: u32,
}

impl<'a> SamplePlane<'a> {
    /// Wraps `samples`, which must hold exactly `width * height * 3` values.
    pub fn new(samples: &'a [u16], width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be > 0",
            ));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| Error::invalid_dimensions(width, height, "sample count overflows"))?;
        if samples.len() != expected {
            return Err(Error::sample_count_mismatch(expected, samples.len()));
        }
        Ok(Self {
            samples,
            width,
            height,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw interleaved samples.
    #[inline]
    pub fn samples(&self) -> &'a [u16] {
        self.samples
    }
}

/// Row-major pixels whose samples all fit the declared depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClampedPlane {
    pixels: Vec<Pixel>,
    width: u32,
    height: u32,
    depth: BitDepth,
}

impl ClampedPlane {
    /// Clamps an owned pixel vector. `pixels.len()` must be `width * height`.
    pub fn from_pixels(
        mut pixels: Vec<Pixel>,
        width: u32,
        height: u32,
        depth: BitDepth,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be > 0",
            ));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))?;
        if pixels.len() != expected {
            return Err(Error::sample_count_mismatch(
                expected * CHANNELS,
                pixels.len() * CHANNELS,
            ));
        }
        for pixel in &mut pixels {
            for sample in pixel.iter_mut() {
                *sample = depth.clamp(*sample);
            }
        }
        Ok(Self {
            pixels,
            width,
            height,
            depth,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Depth every sample was clamped to.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.width as usize)
    }
}

/// Clamps every sample of `plane` to `depth`.
///
/// Out-of-range samples are saturated silently; the number of samples that
/// were changed is logged at debug level.
pub fn clamp_plane(plane: &SamplePlane<'_>, depth: BitDepth) -> ClampedPlane {
    let mut clamped = 0usize;
    let pixels: Vec<Pixel> = plane
        .samples
        .chunks_exact(CHANNELS)
        .map(|s| {
            let mut px = [s[0], s[1], s[2]];
            for v in &mut px {
                if !depth.contains(*v) {
                    clamped += 1;
                    *v = depth.max_value();
                }
            }
            px
        })
        .collect();

    if clamped > 0 {
        debug!(clamped, %depth, "Clamped out-of-range samples");
    }

    ClampedPlane {
        pixels,
        width: plane.width,
        height: plane.height,
        depth,
    }
}
