use kisimg::{DecodeRequest, EncodeRequest, Framing, KisError, Limits};

/// Deterministic test pattern with distinct per-pixel values, so any mixup
/// in the column-major/raster remap shows up as a pixel mismatch.
fn test_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 3;
            pixels[off] = x as u8;
            pixels[off + 1] = y as u8;
            pixels[off + 2] = (x * 31 + y * 17) as u8;
        }
    }
    pixels
}

#[test]
fn kis_roundtrip_various_sizes() {
    for (w, h) in [(1, 1), (2, 2), (3, 2), (2, 3), (7, 5), (1, 9), (9, 1), (16, 16)] {
        let pixels = test_pattern(w, h);
        let encoded = EncodeRequest::kis()
            .encode(&pixels, w as u32, h as u32)
            .unwrap();

        let decoded = DecodeRequest::new(&encoded).decode().unwrap();
        assert_eq!(decoded.width, w as u32);
        assert_eq!(decoded.height, h as u32);
        assert_eq!(decoded.framing, Framing::Kis);
        assert_eq!(decoded.pixels(), &pixels[..], "pixel mismatch at {w}x{h}");
    }
}

#[test]
fn bitmap_roundtrip_various_sizes() {
    for (w, h) in [(1, 1), (2, 2), (3, 2), (5, 7), (16, 16)] {
        let pixels = test_pattern(w, h);
        let encoded = EncodeRequest::bitmap()
            .encode(&pixels, w as u32, h as u32)
            .unwrap();

        assert_eq!(&encoded[0..2], b"BM");

        let decoded = DecodeRequest::new(&encoded).decode().unwrap();
        assert_eq!(decoded.width, w as u32);
        assert_eq!(decoded.height, h as u32);
        assert_eq!(decoded.framing, Framing::Bitmap);
        assert_eq!(decoded.pixels(), &pixels[..], "pixel mismatch at {w}x{h}");
    }
}

#[test]
fn golden_2x2_black() {
    // 2x2 all-black encodes to exactly the 7-byte CKT header plus 12 zero
    // payload bytes.
    let pixels = [0u8; 12];
    let encoded = EncodeRequest::kis().encode(&pixels, 2, 2).unwrap();

    let mut expected = vec![0x43, 0x4B, 0x54, 0x02, 0x00, 0x02, 0x00];
    expected.extend_from_slice(&[0u8; 12]);
    assert_eq!(encoded, expected);

    let decoded = DecodeRequest::new(&encoded).decode().unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn golden_1x1_single_pixel() {
    // A single pixel's plane stream is its 24-bit index MSB-first, so the
    // little-endian payload is the index's bytes reversed.
    let pixels = [0x12u8, 0x34, 0x56];
    let encoded = EncodeRequest::kis().encode(&pixels, 1, 1).unwrap();
    assert_eq!(
        encoded,
        vec![0x43, 0x4B, 0x54, 0x01, 0x00, 0x01, 0x00, 0x56, 0x34, 0x12]
    );

    let decoded = DecodeRequest::new(&encoded).decode().unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn golden_2x1_white_black() {
    // White then black: every plane reads "10", so all 6 payload bytes are
    // 0b10101010 regardless of byte order.
    let pixels = [255u8, 255, 255, 0, 0, 0];
    let encoded = EncodeRequest::kis().encode(&pixels, 2, 1).unwrap();
    assert_eq!(&encoded[0..7], &[0x43, 0x4B, 0x54, 0x02, 0x00, 0x01, 0x00]);
    assert_eq!(&encoded[7..], &[0xAA; 6]);
}

#[test]
fn payload_size_invariant() {
    for (w, h) in [(1usize, 1usize), (3, 5), (10, 1), (1, 10), (12, 7)] {
        let encoded = EncodeRequest::kis()
            .encode(&test_pattern(w, h), w as u32, h as u32)
            .unwrap();
        assert_eq!(encoded.len(), 7 + w * h * 3);
    }
}

#[test]
fn reversed_payload_roundtrip() {
    // Reversing the payload bytes by hand and decoding with the reversed
    // flag must reproduce the same image.
    let pixels = test_pattern(5, 3);
    let mut encoded = EncodeRequest::kis().encode(&pixels, 5, 3).unwrap();
    encoded[7..].reverse();

    let decoded = DecodeRequest::new(&encoded)
        .payload_reversed(true)
        .decode()
        .unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn encode_rejects_zero_dimension() {
    let result = EncodeRequest::kis().encode(&[], 0, 4);
    assert!(matches!(result, Err(KisError::InvalidHeader(_))));
}

#[test]
fn encode_rejects_oversized_dimension() {
    let result = EncodeRequest::kis().encode(&[], 70_000, 1);
    assert!(matches!(
        result,
        Err(KisError::DimensionsTooLarge { width: 70_000, .. })
    ));
}

#[test]
fn encode_rejects_short_buffer() {
    let result = EncodeRequest::kis().encode(&[0u8; 11], 2, 2);
    match result {
        Err(KisError::BufferTooSmall { needed, actual }) => {
            assert_eq!(needed, 12);
            assert_eq!(actual, 11);
        }
        other => panic!("expected BufferTooSmall, got {other:?}"),
    }
}

#[test]
fn limits_reject_large() {
    let encoded = EncodeRequest::kis().encode(&test_pattern(2, 2), 2, 2).unwrap();

    let limits = Limits {
        max_pixels: Some(1),
        ..Default::default()
    };
    let result = DecodeRequest::new(&encoded).with_limits(&limits).decode();
    match result {
        Err(KisError::LimitExceeded(_)) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn limits_reject_allocation() {
    let encoded = EncodeRequest::kis().encode(&test_pattern(4, 4), 4, 4).unwrap();

    let limits = Limits {
        max_memory_bytes: Some(10),
        ..Default::default()
    };
    let result = DecodeRequest::new(&encoded).with_limits(&limits).decode();
    assert!(matches!(result, Err(KisError::LimitExceeded(_))));
}

#[cfg(feature = "rgb")]
#[test]
fn typed_pixel_roundtrip() {
    let pixels = vec![
        rgb::RGB8 { r: 10, g: 20, b: 30 },
        rgb::RGB8 { r: 40, g: 50, b: 60 },
    ];
    let encoded = EncodeRequest::kis().encode_rgb(&pixels, 2, 1).unwrap();
    let decoded = DecodeRequest::new(&encoded).decode().unwrap();
    assert_eq!(decoded.as_rgb(), &pixels[..]);
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view() {
    let pixels = test_pattern(3, 2);
    let encoded = EncodeRequest::kis().encode(&pixels, 3, 2).unwrap();
    let decoded = DecodeRequest::new(&encoded).decode().unwrap();

    let img = decoded.as_imgref();
    assert_eq!(img.width(), 3);
    assert_eq!(img.height(), 2);
    let row1: Vec<_> = img.rows().nth(1).unwrap().to_vec();
    assert_eq!(row1[1], rgb::RGB8 { r: 1, g: 1, b: 48 });
}
