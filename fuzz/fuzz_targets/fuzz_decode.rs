#![no_main]
use libfuzzer_sys::fuzz_target;

use kisimg::{DecodeRequest, Limits, SizeRecovery};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 16),
        ..Default::default()
    };

    // Container decode with and without recovery — must never panic
    let _ = DecodeRequest::new(data).with_limits(&limits).decode();
    let _ = DecodeRequest::new(data)
        .with_limits(&limits)
        .with_recovery(SizeRecovery::PadOrTruncate)
        .payload_reversed(true)
        .decode();

    // BMP pixel-grid loader — must never panic
    let _ = kisimg::bmp::decode(data, Some(&limits));
});
