//! Golden byte vectors for every wire format.
//!
//! Each case in `golden/pack_vectors.json` names a format identifier, the
//! input samples and the bytes the frame must start with. Every byte of the
//! frame after that prefix must be zero: row padding, partial groups and
//! the unused tail of each row.
//!
//! The vectors were derived independently from the bit layouts, not from
//! this crate's output.
//!
//! ```bash
//! cargo test --package deckpack-tests golden
//! ```

use deckpack_codec::{pack_identifier, PackerRegistry};
use deckpack_core::RowGeometry;
use serde::Deserialize;

const VECTORS: &str = include_str!("../golden/pack_vectors.json");

#[derive(Debug, Deserialize)]
struct GoldenCase {
    name: String,
    format: String,
    width: u32,
    height: u32,
    samples: Vec<u16>,
    expected: String,
}

fn load_cases() -> Vec<GoldenCase> {
    serde_json::from_str(VECTORS).expect("golden vectors must parse")
}

fn decode_hex(s: &str) -> Vec<u8> {
    assert_eq!(s.len() % 2, 0, "odd hex length");
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("bad hex"))
        .collect()
}

#[test]
fn golden_vectors_match() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    for case in &cases {
        let info = PackerRegistry::global()
            .resolve(&case.format)
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));
        let geometry = RowGeometry::new(info.descriptor.format, case.width).unwrap();
        let frame_len = geometry.frame_bytes(case.height).unwrap();

        let mut frame = vec![0x5Au8; frame_len];
        pack_identifier(
            &case.format,
            &case.samples,
            case.width,
            case.height,
            &mut frame,
            geometry.stride,
        )
        .unwrap_or_else(|e| panic!("{}: {e}", case.name));

        let expected = decode_hex(&case.expected);
        assert_eq!(&frame[..expected.len()], expected.as_slice(), "{}", case.name);
        assert!(
            frame[expected.len()..].iter().all(|&b| b == 0),
            "{}: trailing bytes not zero",
            case.name
        );
    }
}

#[test]
fn golden_cases_cover_every_format() {
    let cases = load_cases();
    for info in PackerRegistry::global().iter() {
        let covered = cases.iter().any(|case| {
            PackerRegistry::global()
                .resolve(&case.format)
                .is_ok_and(|i| i.descriptor.format == info.descriptor.format)
        });
        assert!(covered, "no golden vector for {}", info.descriptor.fourcc);
    }
}
