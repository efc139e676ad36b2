//! Test utilities and mock heaps for gcref32 development.
//!
//! Provides a [`MockHeap`] bump allocator that hands out numeric addresses
//! from a simulated region, plus boundary fixtures and deterministic
//! address streams in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gcref32_core::{Address, ALIGNMENT};

/// Bump allocator over a simulated address range.
///
/// Never touches real memory. Every returned address is aligned to
/// [`ALIGNMENT`], so whether it is representable depends only on where the
/// heap was placed. Place it near the top of the 32 GiB window to exercise
/// the boundary.
pub struct MockHeap {
    base: u64,
    cursor: u64,
    end: u64,
}

impl MockHeap {
    /// Create a heap spanning `[base, base + capacity)`.
    ///
    /// `base` is rounded up to the next multiple of 8. A base too close to
    /// `u64::MAX` to round up gives an empty heap.
    pub fn new(base: Address, capacity: u64) -> Self {
        let Some(base) = align_up(base.0) else {
            return Self {
                base: base.0,
                cursor: base.0,
                end: base.0,
            };
        };
        Self {
            base,
            cursor: base,
            end: base.saturating_add(capacity),
        }
    }

    /// Allocate `size` bytes, returning the object's address.
    ///
    /// Returns `None` once the heap is exhausted.
    pub fn alloc(&mut self, size: u64) -> Option<Address> {
        let addr = self.cursor;
        let next = addr.checked_add(align_up(size.max(1))?)?;
        if next > self.end {
            return None;
        }
        self.cursor = next;
        Some(Address(addr))
    }

    /// Bytes handed out so far.
    pub fn used(&self) -> u64 {
        self.cursor - self.base
    }

    /// Start of the heap.
    pub fn base(&self) -> Address {
        Address(self.base)
    }

    /// Forget every allocation.
    pub fn reset(&mut self) {
        self.cursor = self.base;
    }
}

/// Round `n` up to a multiple of [`ALIGNMENT`], or `None` past `u64::MAX`.
fn align_up(n: u64) -> Option<u64> {
    Some(n.checked_add(ALIGNMENT - 1)? & !(ALIGNMENT - 1))
}
