//! Criterion micro-benchmarks for compact reference encode and decode.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use gcref32_bench::{encoded_refs, mixed_addresses, representable_addresses};
use gcref32_core::wire::{read_addresses, write_addresses};
use gcref32_core::{decode, encode_checked, ByteOrder, Codec, CodecConfig};

const N: usize = 4096;

/// Benchmark: checked encode over 4K valid addresses.
fn bench_encode_checked(c: &mut Criterion) {
    let addrs = representable_addresses(N);

    c.bench_function("encode_checked_4k", |b| {
        b.iter(|| {
            for &a in &addrs {
                black_box(encode_checked(black_box(a)).ok());
            }
        });
    });
}

/// Benchmark: unchecked encode with validation off.
fn bench_encode_unchecked(c: &mut Criterion) {
    let addrs = representable_addresses(N);
    let codec = Codec::new(CodecConfig::new().with_validate_unchecked(false));

    c.bench_function("encode_unchecked_4k", |b| {
        b.iter(|| {
            for &a in &addrs {
                black_box(codec.encode_unchecked(black_box(a)));
            }
        });
    });
}

/// Benchmark: checked encode where 1 in 16 addresses is rejected.
fn bench_encode_mixed(c: &mut Criterion) {
    let addrs = mixed_addresses(N, 16);

    c.bench_function("encode_checked_mixed_4k", |b| {
        b.iter(|| {
            let mut rejected = 0usize;
            for &a in &addrs {
                if encode_checked(black_box(a)).is_err() {
                    rejected += 1;
                }
            }
            black_box(rejected);
        });
    });
}

/// Benchmark: decode 4K refs.
fn bench_decode(c: &mut Criterion) {
    let refs = encoded_refs(N);

    c.bench_function("decode_4k", |b| {
        b.iter(|| {
            for &r in &refs {
                black_box(decode(black_box(r)));
            }
        });
    });
}

/// Benchmark: write and read back a 4K-entry reference table.
fn bench_wire_round_trip(c: &mut Criterion) {
    let addrs = representable_addresses(N);

    c.bench_function("wire_round_trip_4k", |b| {
        b.iter(|| {
            let mut buf: Vec<u8> = Vec::with_capacity(N * 4);
            write_addresses(&mut buf, &addrs, ByteOrder::Little).unwrap();
            let back = read_addresses(&mut buf.as_slice(), N, ByteOrder::Little).unwrap();
            black_box(back);
        });
    });
}

criterion_group!(
    benches,
    bench_encode_checked,
    bench_encode_unchecked,
    bench_encode_mixed,
    bench_decode,
    bench_wire_round_trip
);
criterion_main!(benches);
