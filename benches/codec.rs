#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use hexpack::{encode, from_slice, Map, Value};

fn sample_small() -> Vec<u8> {
    b"81a1a01".to_vec() // {"a": 1}
}

fn sample_medium() -> Value {
    let mut m = Map::new();
    for i in 0..64_i64 {
        let entry = Value::Array(vec![
            Value::Int64(i - 32),
            Value::Float64(f64::from(u32::try_from(i).unwrap()) * 0.5),
            Value::Text(format!("item-{i:03}")),
            Value::Bytes(vec![0x5a; 40]),
        ]);
        m.insert(format!("k{i:03}"), entry);
    }
    Value::Map(m)
}

fn bench_codec(c: &mut Criterion) {
    let small = sample_small();
    c.bench_function("decode_small", |b| {
        b.iter(|| {
            black_box(from_slice(black_box(&small)).unwrap());
        })
    });

    let medium = sample_medium();
    c.bench_function("encode_medium", |b| {
        b.iter(|| {
            black_box(encode(black_box(&medium)).unwrap());
        })
    });

    let medium_bytes = encode(&medium).unwrap();
    c.bench_function("decode_medium", |b| {
        b.iter(|| {
            black_box(from_slice(black_box(&medium_bytes)).unwrap());
        })
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
