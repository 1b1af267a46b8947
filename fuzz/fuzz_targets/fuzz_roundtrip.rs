#![no_main]
use libfuzzer_sys::fuzz_target;

use kisimg::{DecodeRequest, EncodeRequest, Framing, Limits, SizeRecovery};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 16),
        ..Default::default()
    };

    // If the input decodes (recovering any size mismatch), re-encoding with
    // the same framing and decoding again must produce identical pixels.
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .with_recovery(SizeRecovery::PadOrTruncate)
        .decode()
    else {
        return;
    };

    let request = match decoded.framing {
        Framing::Bitmap => EncodeRequest::bitmap(),
        _ => EncodeRequest::kis(),
    };
    let reencoded = request
        .encode(decoded.pixels(), decoded.width, decoded.height)
        .expect("decoded image failed to re-encode");

    let decoded2 = DecodeRequest::new(&reencoded)
        .decode()
        .expect("re-encoded data failed to decode");

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width, decoded2.width);
    assert_eq!(decoded.height, decoded2.height);
});
