//! Reusable address fixtures.
//!
//! - [`REPRESENTABLE_BOUNDARIES`]: addresses that must round-trip.
//! - [`UNREPRESENTABLE_BOUNDARIES`]: addresses that must be rejected.
//! - [`AddressStream`]: seeded random addresses, in or out of the window.

use gcref32_core::{Address, ADDRESS_LIMIT, ALIGNMENT, ALIGN_SHIFT, MAX_ADDRESS};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Edge addresses that encode and decode back to themselves.
pub const REPRESENTABLE_BOUNDARIES: [Address; 5] = [
    Address(0),
    Address(ALIGNMENT),
    Address(1 << 32),
    Address(MAX_ADDRESS - ALIGNMENT),
    Address(MAX_ADDRESS),
];

/// Edge addresses that a checked encode must reject.
pub const UNREPRESENTABLE_BOUNDARIES: [Address; 6] = [
    Address(1),
    Address(5),
    Address(7),
    Address(ADDRESS_LIMIT),
    Address(ADDRESS_LIMIT + ALIGNMENT),
    Address(u64::MAX),
];

/// Deterministic stream of random addresses.
pub struct AddressStream {
    rng: ChaCha8Rng,
}

impl AddressStream {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// An aligned address inside the 32 GiB window.
    pub fn representable(&mut self) -> Address {
        Address((self.rng.next_u32() as u64) << ALIGN_SHIFT)
    }

    /// An address that is misaligned, beyond the window, or both.
    pub fn unrepresentable(&mut self) -> Address {
        let raw = self.rng.next_u64();
        if raw % 2 == 0 {
            // Misaligned, any magnitude.
            Address(raw | 1)
        } else {
            // Aligned, beyond the window.
            Address((raw | ADDRESS_LIMIT) & !(ALIGNMENT - 1))
        }
    }

    /// `n` representable addresses.
    pub fn take_representable(&mut self, n: usize) -> Vec<Address> {
        (0..n).map(|_| self.representable()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_is_deterministic() {
        let a = AddressStream::new(42).take_representable(16);
        let b = AddressStream::new(42).take_representable(16);
        assert_eq!(a, b);
    }

    #[test]
    fn stream_classes_hold() {
        let mut s = AddressStream::new(7);
        for _ in 0..256 {
            let good = s.representable();
            assert!(good.0 % ALIGNMENT == 0 && good.0 < ADDRESS_LIMIT);
            let bad = s.unrepresentable();
            assert!(bad.0 % ALIGNMENT != 0 || bad.0 >= ADDRESS_LIMIT);
        }
    }
}
