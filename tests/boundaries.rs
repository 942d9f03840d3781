// Size-ladder switch points. Lengths of 2^32 and above are covered by the header-selection unit
// tests in the encoder, since building such values here would need gigabytes of memory.

use hexpack::{encode, from_slice, Map, Value};

fn header_of(v: &Value, header_len: usize) -> (Vec<u8>, Value) {
    let bytes = encode(v).unwrap();
    let decoded = from_slice(&bytes).unwrap();
    (bytes[..header_len].to_vec(), decoded)
}

#[test]
fn text_switches_form_at_16_32_256_65536() {
    let cases: &[(usize, &[u8])] = &[
        (15, b"af"),
        (16, b"b0"),
        (31, b"bf"),
        (32, b"d920"),
        (255, b"d9ff"),
        (256, b"da0100"),
        (65_535, b"daffff"),
        (65_536, b"db00010000"),
    ];
    for &(len, header) in cases {
        let v = Value::Text("t".repeat(len));
        let (got, decoded) = header_of(&v, header.len());
        assert_eq!(got, header, "text len {len}");
        assert_eq!(decoded, v);
    }
}

#[test]
fn bytes_switch_form_at_256_65536() {
    let cases: &[(usize, &[u8])] = &[
        (0, b"c400"),
        (16, b"c410"),
        (255, b"c4ff"),
        (256, b"c50100"),
        (65_535, b"c5ffff"),
        (65_536, b"c600010000"),
    ];
    for &(len, header) in cases {
        let v = Value::Bytes(vec![0xab; len]);
        let (got, decoded) = header_of(&v, header.len());
        assert_eq!(got, header, "bytes len {len}");
        assert_eq!(decoded, v);
    }
}

#[test]
fn array_switches_form_at_16_65536() {
    let cases: &[(usize, &[u8])] = &[
        (15, b"9f"),
        (16, b"dc0010"),
        (255, b"dc00ff"),
        (256, b"dc0100"),
        (65_535, b"dcffff"),
        (65_536, b"dd00010000"),
    ];
    for &(len, header) in cases {
        let v = Value::Array(vec![Value::Nil; len]);
        let (got, decoded) = header_of(&v, header.len());
        assert_eq!(got, header, "array len {len}");
        assert_eq!(decoded, v);
    }
}

#[test]
fn map_switches_form_at_16_65536() {
    let cases: &[(usize, &[u8])] = &[
        (15, b"8f"),
        (16, b"de0010"),
        (65_535, b"deffff"),
        (65_536, b"df00010000"),
    ];
    for &(len, header) in cases {
        let m: Map = (0..len).map(|i| (format!("{i:05}"), Value::Bool(true))).collect();
        let v = Value::Map(m);
        let (got, decoded) = header_of(&v, header.len());
        assert_eq!(got, header, "map len {len}");
        assert_eq!(decoded, v);
    }
}
