use kisimg::{ContainerInfo, DecodeRequest, EncodeRequest, Framing, KisError};

#[test]
fn kis_header_layout() {
    let encoded = EncodeRequest::kis().encode(&[0u8; 3 * 300 * 2], 300, 2).unwrap();
    assert_eq!(&encoded[0..3], b"CKT");
    assert_eq!(u16::from_le_bytes([encoded[3], encoded[4]]), 300);
    assert_eq!(u16::from_le_bytes([encoded[5], encoded[6]]), 2);
    assert_eq!(encoded.len(), 7 + 3 * 300 * 2);
}

#[test]
fn bitmap_header_layout() {
    let (w, h) = (5u16, 3u16);
    let payload_len = 5 * 3 * 3;
    let encoded = EncodeRequest::bitmap()
        .encode(&vec![0u8; payload_len], w.into(), h.into())
        .unwrap();

    assert_eq!(&encoded[0..2], b"BM");
    // Fixed template fields: data offset, BITMAPV4HEADER size, planes, bpp
    assert_eq!(u32::from_le_bytes(encoded[10..14].try_into().unwrap()), 122);
    assert_eq!(u32::from_le_bytes(encoded[14..18].try_into().unwrap()), 108);
    assert_eq!(u16::from_le_bytes([encoded[26], encoded[27]]), 1);
    assert_eq!(u16::from_le_bytes([encoded[28], encoded[29]]), 24);
    // Patched fields
    assert_eq!(u16::from_le_bytes([encoded[18], encoded[19]]), w);
    assert_eq!(u16::from_le_bytes([encoded[22], encoded[23]]), h);
    assert_eq!(
        u32::from_le_bytes(encoded[34..38].try_into().unwrap()),
        (122 + payload_len) as u32
    );
    // Payload then a zero trailer of `height` bytes
    assert_eq!(encoded.len(), 122 + payload_len + h as usize);
    assert!(encoded[encoded.len() - h as usize..].iter().all(|&b| b == 0));
}

#[test]
fn framing_unpack_recovers_fields() {
    // The payload round-trips through both framings byte-for-byte, which is
    // visible as identical decoded pixels and header dimensions.
    let pixels: Vec<u8> = (0..3 * 4 * 3).map(|i| (i * 7) as u8).collect();
    for request in [EncodeRequest::kis(), EncodeRequest::bitmap()] {
        let encoded = request.encode(&pixels, 4, 3).unwrap();
        let info = ContainerInfo::from_bytes(&encoded).unwrap();
        assert_eq!(info.width, 4);
        assert_eq!(info.height, 3);
        assert_eq!(info.payload_len, pixels.len());

        let decoded = DecodeRequest::new(&encoded).decode().unwrap();
        assert_eq!(decoded.pixels(), &pixels[..]);
    }
}

#[test]
fn both_framings_carry_identical_payload() {
    let pixels: Vec<u8> = (0..3 * 2 * 2).map(|i| (255 - i) as u8).collect();
    let kis = EncodeRequest::kis().encode(&pixels, 2, 2).unwrap();
    let bitmap = EncodeRequest::bitmap().encode(&pixels, 2, 2).unwrap();

    let payload_len = 2 * 2 * 3;
    assert_eq!(&kis[7..], &bitmap[122..122 + payload_len]);
}

#[test]
fn probe_detects_framing() {
    let kis = EncodeRequest::kis().encode(&[0u8; 3], 1, 1).unwrap();
    assert_eq!(ContainerInfo::from_bytes(&kis).unwrap().framing, Framing::Kis);

    let bitmap = EncodeRequest::bitmap().encode(&[0u8; 3], 1, 1).unwrap();
    assert_eq!(
        ContainerInfo::from_bytes(&bitmap).unwrap().framing,
        Framing::Bitmap
    );
}

#[test]
fn unknown_magic_rejected() {
    let result = DecodeRequest::new(b"PNG\x00\x01\x02\x03").decode();
    assert!(matches!(result, Err(KisError::UnknownContainer)));

    let result = ContainerInfo::from_bytes(&[]);
    assert!(matches!(result, Err(KisError::UnknownContainer)));
}

#[test]
fn zero_dimension_header_rejected() {
    // CKT header claiming 0x4 pixels
    let data = [0x43, 0x4B, 0x54, 0x00, 0x00, 0x04, 0x00];
    let result = DecodeRequest::new(&data).decode();
    assert!(matches!(result, Err(KisError::MalformedPayload(_))));
}

#[test]
fn truncated_bitmap_container_rejected() {
    let encoded = EncodeRequest::bitmap().encode(&[0u8; 12], 2, 2).unwrap();
    // Cut into the header itself
    let result = DecodeRequest::new(&encoded[..60]).decode();
    assert!(matches!(result, Err(KisError::UnexpectedEof)));
}

#[test]
fn trailer_is_discarded_not_validated() {
    // Raster tools may rewrite the trailer; its contents must not matter.
    let pixels: Vec<u8> = (0..3 * 2 * 3).map(|i| i as u8).collect();
    let mut encoded = EncodeRequest::bitmap().encode(&pixels, 3, 2).unwrap();
    let len = encoded.len();
    for byte in &mut encoded[len - 2..] {
        *byte = 0xEE;
    }

    let decoded = DecodeRequest::new(&encoded).decode().unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}
