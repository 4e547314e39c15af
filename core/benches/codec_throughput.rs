use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};

use lz4_value_codec::prelude::*;

#[inline]
fn xorshift64(mut x: u64) -> u64 {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    x
}

#[inline]
fn incompressible_ascii(len: usize, seed: u64) -> String {
    const ALPH: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut s = String::with_capacity(len);
    let mut x = seed;
    for _ in 0..len {
        x = xorshift64(x);
        s.push(ALPH[(x as usize) & 63] as char);
    }
    s
}

/// Cache-shaped JSON document: repeated keys, some random text.
fn document(items: usize) -> Value {
    let rows: Vec<Value> = (0..items)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("item {i}"),
                "category": "books",
                "token": incompressible_ascii(24, 0x9E37_79B9_7F4A_7C15 ^ i as u64),
            })
        })
        .collect();
    json!({ "rows": rows })
}

fn cases() -> [(&'static str, CodecConfig); 3] {
    [
        ("passthrough", CodecConfig::new(CompressionMode::Fast, usize::MAX)),
        ("lz4-fast", CodecConfig::new(CompressionMode::Fast, 1024)),
        ("lz4-hc", CodecConfig::new(CompressionMode::HighRatio, 1024)),
    ]
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_json_doc");
    let doc = document(200);

    for (label, cfg) in cases() {
        let codec = Lz4Codec::new(JsonSerializer::<Value>::new(), cfg);
        let raw_len = serde_json::to_vec(&doc).map(|v| v.len()).unwrap_or(0);
        group.throughput(Throughput::Bytes(raw_len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), &doc, |b, doc| {
            b.iter(|| codec.encode(black_box(doc)).unwrap())
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_json_doc");
    let doc = document(200);

    for (label, cfg) in cases() {
        let codec = Lz4Codec::new(JsonSerializer::<Value>::new(), cfg);
        let frame = codec.encode(&doc).unwrap();
        group.throughput(Throughput::Bytes(frame.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(label), &frame, |b, frame| {
            b.iter(|| codec.decode(Some(black_box(frame.as_slice()))).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
