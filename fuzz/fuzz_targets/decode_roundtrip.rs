#![no_main]

use libfuzzer_sys::fuzz_target;

use hexpack::{decode_with_limits, encode, from_slice, Cursor, DecodeLimits};

fuzz_target!(|data: &[u8]| {
    let limits = DecodeLimits::for_bytes(data.len()).with_max_depth(64);
    let mut cursor = Cursor::new(data);
    if let Ok(v) = decode_with_limits(&mut cursor, limits) {
        // Anything that decodes must re-encode, and the re-encoding must be a fixed point.
        // Bytes are compared rather than values so NaN payloads are checked too.
        let out = encode(&v).expect("re-encode");
        let again = from_slice(&out).expect("decode re-encoded bytes");
        assert_eq!(encode(&again).expect("re-encode twice"), out);
    }
});
