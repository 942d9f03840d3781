#![no_main]

use libfuzzer_sys::fuzz_target;

use hexpack::{decode_with_limits, Cursor, DecodeLimits};

fuzz_target!(|data: &[u8]| {
    let limits = DecodeLimits::for_bytes(data.len()).with_max_depth(64);
    let mut cursor = Cursor::new(data);
    while !cursor.is_empty() {
        if decode_with_limits(&mut cursor, limits).is_err() {
            break;
        }
    }
});
