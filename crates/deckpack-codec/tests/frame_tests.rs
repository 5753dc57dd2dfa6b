//! Integration tests for whole-frame packing.

use deckpack_codec::{pack, pack_identifier, pack_to_vec, pack_with, unpack, PackOptions};
use deckpack_core::{row_bytes, ChannelSemantics, Error, Pixel, WireFormat};

/// Deterministic samples spread over the whole `u16` range.
fn noise_samples(width: u32, height: u32, seed: u32) -> Vec<u16> {
    let mut state = seed.wrapping_mul(0x9E37_79B9) | 1;
    (0..width * height * 3)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 16) as u16
        })
        .collect()
}

/// Pixels as a packer should leave them after clamping and, for 2vuy,
/// chroma sharing.
fn expected_pixels(format: WireFormat, samples: &[u16], width: u32) -> Vec<Pixel> {
    let depth = format.depth();
    let mut pixels: Vec<Pixel> = samples
        .chunks_exact(3)
        .map(|s| [depth.clamp(s[0]), depth.clamp(s[1]), depth.clamp(s[2])])
        .collect();
    if format == WireFormat::Yuv8 {
        for row in pixels.chunks_mut(width as usize) {
            for pair in row.chunks_mut(2) {
                if let [even, odd] = pair {
                    odd[1] = even[1];
                    odd[2] = even[2];
                }
            }
        }
    }
    pixels
}

fn reference_group() -> Vec<u16> {
    (0..8u16)
        .flat_map(|i| [0xA01 | (i << 4), 0xB02 | (i << 4), 0xC03 | (i << 4)])
        .collect()
}

#[test]
fn r12l_reference_group() {
    let bytes = pack_to_vec(WireFormat::Rgb12Le, &reference_group(), 8, 1).unwrap();
    assert_eq!(
        bytes,
        [
            0x01, 0x2A, 0xB0, 0x03, 0x1C, 0xA1, 0x12, 0x3B, 0xC1, 0x21, 0x2A, 0xB2, 0x23, 0x1C,
            0xA3, 0x32, 0x3B, 0xC3, 0x41, 0x2A, 0xB4, 0x43, 0x1C, 0xA5, 0x52, 0x3B, 0xC5, 0x61,
            0x2A, 0xB6, 0x63, 0x1C, 0xA7, 0x72, 0x3B, 0xC7,
        ]
    );
}

#[test]
fn r12b_reference_group() {
    let bytes = pack_to_vec(WireFormat::Rgb12Be, &reference_group(), 8, 1).unwrap();
    assert_eq!(
        bytes,
        [
            0x03, 0xB0, 0x2A, 0x01, 0x3B, 0x12, 0xA1, 0x1C, 0xB2, 0x2A, 0x21, 0xC1, 0x32, 0xA3,
            0x1C, 0x23, 0x2A, 0x41, 0xC3, 0x3B, 0xA5, 0x1C, 0x43, 0xB4, 0x61, 0xC5, 0x3B, 0x52,
            0x1C, 0x63, 0xB6, 0x2A, 0xC7, 0x3B, 0x72, 0xA7,
        ]
    );
}

#[test]
fn r12_red_pixel_zero() {
    let mut samples = vec![0u16; 8 * 3];
    samples[0] = 4095;

    let le = pack_to_vec(WireFormat::Rgb12Le, &samples, 8, 1).unwrap();
    let mut expected = [0u8; 36];
    expected[..2].copy_from_slice(&[0xFF, 0x0F]);
    assert_eq!(le, expected);

    let be = pack_to_vec(WireFormat::Rgb12Be, &samples, 8, 1).unwrap();
    let mut expected = [0u8; 36];
    expected[2..4].copy_from_slice(&[0x0F, 0xFF]);
    assert_eq!(be, expected);
}

#[test]
fn r12_white_group_all_ones() {
    let samples = vec![u16::MAX; 8 * 3];
    for format in [WireFormat::Rgb12Le, WireFormat::Rgb12Be] {
        assert_eq!(pack_to_vec(format, &samples, 8, 1).unwrap(), vec![0xFF; 36]);
    }
}

#[test]
fn r210_row_sizes() {
    assert_eq!(row_bytes(WireFormat::Rgb10, 64).unwrap(), 256);
    assert_eq!(row_bytes(WireFormat::Rgb10, 65).unwrap(), 512);

    let samples = vec![1023u16; 65 * 3];
    let bytes = pack_to_vec(WireFormat::Rgb10, &samples, 65, 1).unwrap();
    assert_eq!(bytes.len(), 512);
    assert!(bytes[..260].chunks(4).all(|w| w == [0x3F, 0xFF, 0xFF, 0xFF]));
    assert!(bytes[260..].iter().all(|&b| b == 0));
}

#[test]
fn row_padding_zero_filled() {
    // Every byte past the packed pixels must be zero, even over a dirty
    // destination and a stride wider than the minimum.
    for format in WireFormat::ALL {
        let width = 13;
        let height = 3;
        let min = row_bytes(format, width).unwrap();
        let alignment = format.descriptor().stride_alignment;
        let stride = min + alignment * 4;
        let samples = vec![u16::MAX; (width * height * 3) as usize];
        let mut dst = vec![0xAAu8; stride * height as usize];

        pack(format, &samples, width, height, &mut dst, stride).unwrap();

        let pixels = format.descriptor().packing.pixels();
        let data = width.div_ceil(pixels) as usize * format.descriptor().packing.bytes() as usize;
        for row in dst.chunks(stride) {
            assert!(row[..data].iter().any(|&b| b != 0), "{format} row empty");
            assert!(row[data..].iter().all(|&b| b == 0), "{format} padding dirty");
        }
    }
}

#[test]
fn roundtrip_all_formats() {
    for format in WireFormat::ALL {
        for (width, height) in [(1, 1), (7, 2), (8, 1), (9, 3), (64, 2), (65, 1), (130, 4)] {
            let samples = noise_samples(width, height, width * 31 + height);
            let stride = row_bytes(format, width).unwrap();
            let bytes = pack_to_vec(format, &samples, width, height).unwrap();
            let back = unpack(format, &bytes, width, height, stride).unwrap();
            assert_eq!(
                back,
                expected_pixels(format, &samples, width),
                "{format} {width}x{height}"
            );
        }
    }
}

#[test]
fn yuv_formats_take_luma_first() {
    for format in [WireFormat::Yuv8, WireFormat::Yuv10] {
        assert_eq!(format.descriptor().channels, ChannelSemantics::Yuv);
    }
    let bytes = pack_to_vec(WireFormat::Yuv8, &[0xEB, 0x80, 0x80, 0x10, 0x00, 0x00], 2, 1).unwrap();
    assert_eq!(bytes, [0x80, 0xEB, 0x80, 0x10]);
}

#[test]
fn parallel_matches_serial() {
    let (width, height) = (200, 150);
    for format in WireFormat::ALL {
        let samples = noise_samples(width, height, 7);
        let stride = row_bytes(format, width).unwrap();
        let mut serial = vec![0u8; stride * height as usize];
        let mut parallel = vec![0xFFu8; stride * height as usize];

        pack_with(format, &samples, width, height, &mut serial, stride, &PackOptions::serial())
            .unwrap();
        let options = PackOptions {
            parallel: true,
            min_parallel_rows: 1,
        };
        pack_with(format, &samples, width, height, &mut parallel, stride, &options).unwrap();
        assert_eq!(serial, parallel, "{format}");
    }
}

#[test]
fn unsupported_identifier_names_it() {
    let samples = [0u16; 3];
    let mut dst = [0u8; 4];
    let err = pack_identifier("Ay10", &samples, 1, 1, &mut dst, 4).unwrap_err();
    match &err {
        Error::UnsupportedFormat { identifier, supported } => {
            assert_eq!(identifier, "Ay10");
            assert!(supported.contains(&"R12B"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("Ay10"));
    assert_eq!(dst, [0; 4]);
}

#[test]
fn zero_dimensions_rejected() {
    let mut dst = [0u8; 64];
    for format in WireFormat::ALL {
        let err = pack(format, &[], 0, 1, &mut dst, 64).unwrap_err();
        assert!(err.is_geometry_error(), "{format}");
        let err = pack(format, &[], 1, 0, &mut dst, 64).unwrap_err();
        assert!(err.is_geometry_error(), "{format}");
    }
}
