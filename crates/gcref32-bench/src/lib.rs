//! Shared workloads for gcref32 benchmarks.
//!
//! Workloads are seeded so every run encodes the same addresses.

#![forbid(unsafe_code)]

use gcref32_core::{encode_checked, Address, CompactRef};
use gcref32_test_utils::fixtures::AddressStream;

/// Seed used by every benchmark workload.
pub const BENCH_SEED: u64 = 0xC0FF_EE32;

/// `n` representable addresses from the benchmark seed.
pub fn representable_addresses(n: usize) -> Vec<Address> {
    AddressStream::new(BENCH_SEED).take_representable(n)
}

/// `n` addresses where every `bad_every`-th one is unrepresentable.
pub fn mixed_addresses(n: usize, bad_every: usize) -> Vec<Address> {
    let mut stream = AddressStream::new(BENCH_SEED);
    (0..n)
        .map(|i| {
            if bad_every != 0 && i % bad_every == bad_every - 1 {
                stream.unrepresentable()
            } else {
                stream.representable()
            }
        })
        .collect()
}

/// Pre-encoded refs for decode benchmarks.
pub fn encoded_refs(n: usize) -> Vec<CompactRef> {
    representable_addresses(n)
        .into_iter()
        .filter_map(|a| encode_checked(a).ok())
        .collect()
}
