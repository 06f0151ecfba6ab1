use bmpveil::bitmap::{parse_headers, row_padding};
use bmpveil::bits::{from_bits, to_bits};
use bmpveil::constants::HEADER_SIZE;
use bmpveil::error::BmpError;
use bmpveil::steganography::{embed, embed_capacity, extract, extract_capacity};
use bmpveil::walker::{ByteKind, PixelWalker};
use rand::RngCore;

/// A helper that assembles a minimal uncompressed 24-bit BMP in memory,
/// with random pixel data and a 0xEE sentinel in every padding byte so
/// padding pass-through is easy to verify.
fn make_bmp(width: i32, height: i32) -> Vec<u8> {
    let padding = row_padding(width);
    let row = width as usize * 3;
    let data_size = (row + padding) * height as usize;
    let file_size = (HEADER_SIZE + data_size) as u32;

    let mut bmp = Vec::with_capacity(file_size as usize);
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&file_size.to_le_bytes());
    bmp.extend_from_slice(&[0u8; 4]); // two reserved words
    bmp.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // pixel-data offset
    bmp.extend_from_slice(&40u32.to_le_bytes()); // info-header size
    bmp.extend_from_slice(&width.to_le_bytes());
    bmp.extend_from_slice(&height.to_le_bytes());
    bmp.extend_from_slice(&1u16.to_le_bytes()); // planes
    bmp.extend_from_slice(&24u16.to_le_bytes()); // bit depth
    bmp.extend_from_slice(&0u32.to_le_bytes()); // compression
    bmp.extend_from_slice(&(data_size as u32).to_le_bytes()); // image size
    bmp.extend_from_slice(&[0u8; 16]); // resolution and color-table fields

    let mut pixels = vec![0u8; row];
    for _ in 0..height {
        rand::rng().fill_bytes(&mut pixels);
        bmp.extend_from_slice(&pixels);
        bmp.extend_from_slice(&vec![0xEE; padding]);
    }

    assert_eq!(bmp.len(), file_size as usize);
    bmp
}

/// A random payload survives a full embed-then-extract round trip.
#[test]
fn test_round_trip_random_payload() {
    let bmp = make_bmp(64, 8);

    let mut payload = vec![0u8; 256];
    rand::rng().fill_bytes(&mut payload);

    let doctored = embed(&bmp, &payload).expect("embedding should succeed");
    let recovered = extract(&doctored, payload.len()).expect("extraction should succeed");

    assert_eq!(recovered, payload, "Recovered payload must match the original.");
}

/// Round trip across a carrier whose rows hold 6 color bytes, so every
/// other payload byte straddles a padded row boundary.
#[test]
fn test_round_trip_straddles_row_boundaries() {
    let bmp = make_bmp(2, 40);
    assert_eq!(row_padding(2), 2);

    let mut payload = vec![0u8; 30];
    rand::rng().fill_bytes(&mut payload);

    let doctored = embed(&bmp, &payload).expect("embedding should succeed");
    let recovered = extract(&doctored, payload.len()).expect("extraction should succeed");

    assert_eq!(recovered, payload);
}

/// The concrete minimal scenario: a 2x1 carrier (2 padding bytes per row)
/// takes a single 0xA5 payload byte. 0xA5 is 10100101, so the four
/// consumed color bytes end up with low bits 10, 10, 01, 01.
#[test]
fn test_minimal_carrier_scenario() {
    let bmp = make_bmp(2, 1);
    assert_eq!(bmp.len(), 62);

    let doctored = embed(&bmp, &[0xA5]).expect("a 1-byte payload should fit");

    assert_eq!(doctored[54] & 0x03, 0b10);
    assert_eq!(doctored[55] & 0x03, 0b10);
    assert_eq!(doctored[56] & 0x03, 0b01);
    assert_eq!(doctored[57] & 0x03, 0b01);

    let recovered = extract(&doctored, 1).expect("extraction should succeed");
    assert_eq!(recovered, vec![0xA5]);
}

/// Embedding never touches header bytes, padding bytes, or the high 6
/// bits of any color byte.
#[test]
fn test_embedding_touches_only_low_bits() {
    let bmp = make_bmp(5, 4);
    let payload = [0xFF, 0x00, 0x5A, 0xC3, 0x01, 0x80, 0x37];

    let doctored = embed(&bmp, &payload).expect("embedding should succeed");

    assert_eq!(doctored.len(), bmp.len());
    assert_eq!(&doctored[..54], &bmp[..54], "Headers must be untouched.");

    for i in 54..bmp.len() {
        assert_eq!(
            doctored[i] & 0xFC,
            bmp[i] & 0xFC,
            "High 6 bits changed at offset {i}."
        );
    }

    // Width 5 gives 15 color bytes per row followed by 1 padding byte.
    assert_eq!(row_padding(5), 1);
    for r in 0..4 {
        let pad_at = 54 + r * 16 + 15;
        assert_eq!(
            doctored[pad_at], bmp[pad_at],
            "Padding byte changed at offset {pad_at}."
        );
    }
}

/// A payload of exactly the formula capacity fits; one byte more is
/// rejected with CapacityExceeded.
#[test]
fn test_embed_capacity_boundary() {
    let bmp = make_bmp(10, 10);
    let headers = parse_headers(&bmp).unwrap();

    let capacity = embed_capacity(headers.file_size) as usize;
    assert_eq!(capacity, 71);

    assert!(embed(&bmp, &vec![0xAA; capacity]).is_ok());

    let err = embed(&bmp, &vec![0xAA; capacity + 1]).unwrap_err();
    assert_eq!(
        err,
        BmpError::CapacityExceeded {
            requested: capacity as u64 + 1,
            capacity: capacity as u64,
        }
    );
}

/// The extraction bound is structurally different from the embed bound
/// and is enforced as-is.
#[test]
fn test_extract_capacity_boundary() {
    let bmp = make_bmp(10, 10);
    let headers = parse_headers(&bmp).unwrap();

    let capacity = extract_capacity(headers.file_size) as usize;
    assert_eq!(capacity, 39);

    assert!(extract(&bmp, capacity).is_ok());

    let err = extract(&bmp, capacity + 1).unwrap_err();
    assert!(matches!(err, BmpError::CapacityExceeded { .. }));
}

/// On padding-heavy carriers the embed formula counts padding as usable
/// space, so the color byte stream can run out first. That still fails
/// with CapacityExceeded rather than producing a broken carrier.
#[test]
fn test_embed_fails_when_color_bytes_run_out() {
    // Width 1: each row is 3 color bytes plus 1 padding byte. 100 rows
    // give 300 color bytes (75 payload bytes), but the formula allows 91.
    let bmp = make_bmp(1, 100);
    let headers = parse_headers(&bmp).unwrap();
    assert_eq!(embed_capacity(headers.file_size), 91);

    assert!(embed(&bmp, &vec![0x55; 75]).is_ok());

    let err = embed(&bmp, &vec![0x55; 80]).unwrap_err();
    assert!(matches!(err, BmpError::CapacityExceeded { .. }));
}

/// Validation runs in a fixed order: a bad signature wins even when the
/// bit depth and compression fields are also invalid.
#[test]
fn test_validation_order_and_error_kinds() {
    let good = make_bmp(4, 4);

    let mut everything_wrong = good.clone();
    everything_wrong[0..2].copy_from_slice(b"PX");
    everything_wrong[28..30].copy_from_slice(&32u16.to_le_bytes());
    everything_wrong[30..34].copy_from_slice(&1u32.to_le_bytes());
    assert_eq!(
        parse_headers(&everything_wrong).unwrap_err(),
        BmpError::NotABitmap { signature: *b"PX" }
    );

    let mut bad_depth = good.clone();
    bad_depth[28..30].copy_from_slice(&32u16.to_le_bytes());
    assert_eq!(
        parse_headers(&bad_depth).unwrap_err(),
        BmpError::UnsupportedBitDepth { depth: 32 }
    );

    let mut compressed = good.clone();
    compressed[30..34].copy_from_slice(&1u32.to_le_bytes());
    assert_eq!(
        parse_headers(&compressed).unwrap_err(),
        BmpError::CompressedNotSupported { method: 1 }
    );

    assert_eq!(
        parse_headers(&good[..20]).unwrap_err(),
        BmpError::HeaderTruncated { len: 20 }
    );
}

/// The parsed header fields match what the helper wrote.
#[test]
fn test_parse_headers_fields() {
    let bmp = make_bmp(10, 10);
    let headers = parse_headers(&bmp).unwrap();

    assert_eq!(headers.file_size, bmp.len() as u32);
    assert_eq!(headers.pixel_offset, 54);
    assert_eq!(headers.width, 10);
    assert_eq!(headers.height, 10);
    assert_eq!(headers.bit_depth, 24);
    assert_eq!(headers.compression, 0);
}

/// The scanline padding formula over the four residues.
#[test]
fn test_row_padding_values() {
    assert_eq!(row_padding(1), 1);
    assert_eq!(row_padding(2), 2);
    assert_eq!(row_padding(3), 3);
    assert_eq!(row_padding(4), 0);
    assert_eq!(row_padding(5), 1);
    assert_eq!(row_padding(640), 0);
}

/// The walker classifies every byte of a known geometry correctly and in
/// on-disk order.
#[test]
fn test_walker_classification() {
    let bmp = make_bmp(2, 2);
    let headers = parse_headers(&bmp).unwrap();

    let walked: Vec<(usize, ByteKind)> = PixelWalker::new(&headers, bmp.len())
        .map(|byte| (byte.offset, byte.kind))
        .collect();

    // Two rows of 6 color bytes each, followed by 2 padding bytes.
    let expected: Vec<(usize, ByteKind)> = (54..60)
        .map(|o| (o, ByteKind::Color))
        .chain((60..62).map(|o| (o, ByteKind::Padding)))
        .chain((62..68).map(|o| (o, ByteKind::Color)))
        .chain((68..70).map(|o| (o, ByteKind::Padding)))
        .collect();

    assert_eq!(walked, expected);
}

/// The bit-group codec is MSB-first in both directions and rejects
/// slices that are not exactly 8 bits.
#[test]
fn test_bit_group_codec() {
    assert_eq!(to_bits(0xA5), [1, 0, 1, 0, 0, 1, 0, 1]);
    assert_eq!(to_bits(0x00), [0; 8]);
    assert_eq!(to_bits(0xFF), [1; 8]);

    for byte in [0x00, 0x01, 0x7F, 0x80, 0xA5, 0xFF] {
        assert_eq!(from_bits(&to_bits(byte)).unwrap(), byte);
    }

    assert_eq!(
        from_bits(&[1; 7]).unwrap_err(),
        BmpError::InvalidBitCount { len: 7 }
    );
    assert_eq!(
        from_bits(&[0; 9]).unwrap_err(),
        BmpError::InvalidBitCount { len: 9 }
    );
}

/// Embedding works on a copy; the input buffer is never mutated and bytes
/// past the embedded region are carried through unchanged.
#[test]
fn test_trailing_bytes_copied_through() {
    let bmp = make_bmp(8, 8);
    let original = bmp.clone();

    let doctored = embed(&bmp, &[0x12, 0x34]).expect("embedding should succeed");

    assert_eq!(bmp, original, "Input carrier must not be mutated.");

    // Two payload bytes consume exactly 8 color bytes.
    assert_eq!(&doctored[62..], &bmp[62..]);
}
