use hexpack::{
    decode, encode, from_slice, Cursor, Decoder, Error, ErrorCode, Map, Value,
};

fn dec(bytes: &[u8]) -> Value {
    from_slice(bytes).unwrap()
}

fn dec_err(bytes: &[u8]) -> Error {
    from_slice(bytes).unwrap_err()
}

#[test]
fn decode_fixed_width_integers_keep_width() {
    assert_eq!(dec(b"d07f"), Value::Int8(127));
    assert_eq!(dec(b"d10400"), Value::Int16(1024));
    assert_eq!(dec(b"d200010000"), Value::Int32(65_536));
    assert_eq!(dec(b"d300000000499602d2"), Value::Int64(1_234_567_890));
    assert_eq!(dec(b"ccc8"), Value::UInt8(200));
    assert_eq!(dec(b"cd0400"), Value::UInt16(1024));
    assert_eq!(dec(b"ce00010000"), Value::UInt32(65_536));
    assert_eq!(dec(b"cf00000000499602d2"), Value::UInt64(1_234_567_890));
}

#[test]
fn decode_signed_narrows_twos_complement() {
    assert_eq!(dec(b"d0ff"), Value::Int8(-1));
    assert_eq!(dec(b"d1fc00"), Value::Int16(-1024));
    assert_eq!(dec(b"d38000000000000000"), Value::Int64(i64::MIN));
}

#[test]
fn decode_scalars() {
    assert_eq!(dec(b"c0"), Value::Nil);
    assert_eq!(dec(b"c3"), Value::Bool(true));
    assert_eq!(dec(b"c2"), Value::Bool(false));
    assert_eq!(dec(b"ca4048f5c3"), Value::Float32(3.14));
    assert_eq!(dec(b"cb40091eb851eb851f"), Value::Float64(3.14));
}

#[test]
fn decode_float32_widens_exactly() {
    let v = dec(b"ca4048f5c3");
    assert_eq!(v.as_f64(), Some(f64::from(3.14f32)));
}

#[test]
fn decode_text_forms() {
    assert_eq!(dec(b"a5hello"), Value::from("hello"));
    assert_eq!(
        dec(b"b7this is a longer string"),
        Value::from("this is a longer string")
    );
    assert_eq!(
        dec(b"d927this string has more than 31 characters"),
        Value::from("this string has more than 31 characters")
    );

    let long = "a".repeat((1 << 16) - 1);
    let mut input = b"daffff".to_vec();
    input.extend_from_slice(long.as_bytes());
    assert_eq!(dec(&input), Value::Text(long));
}

#[test]
fn decode_accepts_upper_case_headers() {
    assert_eq!(dec(b"CD0400"), Value::UInt16(1024));
    assert_eq!(dec(b"A2hi"), Value::from("hi"));
}

#[test]
fn decode_bytes_and_containers() {
    assert_eq!(dec(b"c403\x00\xff\x0a"), Value::Bytes(vec![0, 0xff, 0x0a]));
    assert_eq!(
        dec(b"93d001ccffa4test"),
        Value::Array(vec![Value::Int8(1), Value::UInt8(255), Value::from("test")])
    );
    assert_eq!(dec(b"dc0000"), Value::Array(Vec::new()));
    assert_eq!(dec(b"df00000000"), Value::Map(Map::new()));

    let mut m = Map::new();
    m.insert("k".into(), Value::UInt16(2));
    m.insert("z".into(), Value::Array(vec![Value::Nil]));
    assert_eq!(dec(b"82a1kcd0002a1z91c0"), Value::Map(m));
}

#[test]
fn duplicate_map_keys_keep_last() {
    let v = dec(b"82a1k01a1k02");
    assert_eq!(v.as_map().unwrap()["k"], Value::UInt8(2));
    assert_eq!(v.as_map().unwrap().len(), 1);
}

#[test]
fn cursor_decodes_back_to_back_values() {
    let mut input = encode(&Value::from("first")).unwrap();
    input.extend_from_slice(b"c3");
    input.extend(encode(&Value::Int32(-7)).unwrap());

    let mut cursor = Cursor::new(&input);
    assert_eq!(decode(&mut cursor).unwrap(), Value::from("first"));
    assert_eq!(cursor.position(), 7);
    assert_eq!(decode(&mut cursor).unwrap(), Value::Bool(true));
    assert_eq!(decode(&mut cursor).unwrap(), Value::Int32(-7));
    assert!(cursor.is_empty());

    let err = decode(&mut cursor).unwrap_err();
    assert_eq!(err.code, ErrorCode::Truncated);
}

#[test]
fn decoder_iterates_until_exhausted() {
    let values: Result<Vec<_>, _> = Decoder::new(b"c0c201a1x").collect();
    assert_eq!(
        values.unwrap(),
        vec![Value::Nil, Value::Bool(false), Value::UInt8(1), Value::from("x")]
    );

    let mut it = Decoder::new(b"c0c1c0");
    assert_eq!(it.next(), Some(Ok(Value::Nil)));
    assert_eq!(it.next(), Some(Err(Error::new(ErrorCode::UnsupportedType, 2))));
    assert_eq!(it.next(), None);
}

#[test]
fn trailing_bytes_are_rejected_by_from_slice() {
    assert_eq!(dec_err(b"c0c0"), Error::new(ErrorCode::TrailingBytes, 2));
}

#[test]
fn invalid_tag_text_is_rejected() {
    assert_eq!(dec_err(b"ww"), Error::new(ErrorCode::Truncated, 0));
    assert_eq!(dec_err(b"c"), Error::new(ErrorCode::Truncated, 0));
    assert_eq!(dec_err(b""), Error::new(ErrorCode::Truncated, 0));
}

#[test]
fn malformed_numbers_report_position() {
    assert_eq!(dec_err(b"cd04x0"), Error::new(ErrorCode::MalformedNumber, 4));
    assert_eq!(dec_err(b"d0-1"), Error::new(ErrorCode::MalformedNumber, 2));
    assert_eq!(dec_err(b"d9zzabc"), Error::new(ErrorCode::MalformedNumber, 2));
}

#[test]
fn non_string_map_key_is_rejected() {
    assert_eq!(dec_err(b"8101c0"), Error::new(ErrorCode::NonStringKey, 2));
    assert_eq!(
        dec_err(b"82a1a01cd0001c0"),
        Error::new(ErrorCode::NonStringKey, 7)
    );
    assert_eq!(
        dec_err(b"de0001c400c0"),
        Error::new(ErrorCode::NonStringKey, 6)
    );
}

#[test]
fn invalid_utf8_text_is_rejected() {
    assert_eq!(dec_err(b"a2\xff\xfe"), Error::new(ErrorCode::InvalidUtf8, 2));
}

#[test]
fn container_header_with_nothing_after_is_truncated() {
    assert_eq!(dec_err(b"92"), Error::new(ErrorCode::Truncated, 2));
    assert_eq!(dec_err(b"dc0001"), Error::new(ErrorCode::Truncated, 6));
    assert_eq!(dec_err(b"de0001"), Error::new(ErrorCode::Truncated, 6));
    assert_eq!(dec_err(b"8ca1a"), Error::new(ErrorCode::Truncated, 5));
}

#[test]
fn every_strict_prefix_is_truncated() {
    let mut m = Map::new();
    m.insert("key".into(), Value::Float64(-2.5));
    m.insert("list".into(), Value::Array(vec![Value::Int64(-9), Value::Bytes(vec![1, 2, 3])]));
    let samples = [
        Value::Int8(127),
        Value::UInt64(u64::MAX),
        Value::Float32(1.0),
        Value::from("hello"),
        Value::from("x".repeat(40)),
        Value::Bytes(vec![7; 300]),
        Value::Array((0..20u8).map(Value::UInt8).collect()),
        Value::Map(m),
    ];

    for v in &samples {
        let bytes = encode(v).unwrap();
        assert_eq!(from_slice(&bytes).unwrap(), *v);
        for cut in 0..bytes.len() {
            let err = from_slice(&bytes[..cut]).unwrap_err();
            assert_eq!(err.code, ErrorCode::Truncated, "prefix {cut} of {v:?}");
        }
    }
}
