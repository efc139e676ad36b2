//! Strongly-typed address and compact reference values.

use std::fmt;

/// A native memory address on a 64-bit target.
///
/// Produced by an allocator or collector outside this crate. The codec
/// only cares about its numeric properties: alignment and magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address(pub u64);

impl Address {
    /// The null address.
    pub const NULL: Address = Address(0);

    /// Take the numeric address of a raw pointer.
    ///
    /// Only the address is kept; the pointer is never dereferenced.
    pub fn from_ptr<T>(ptr: *const T) -> Self {
        Self(ptr as usize as u64)
    }

    /// Rebuild a raw pointer with this numeric address.
    ///
    /// Dereferencing the result is only meaningful if the address came from
    /// a live allocation in this process.
    pub fn as_mut_ptr<T>(self) -> *mut T {
        self.0 as usize as *mut T
    }

    /// Whether the address is a multiple of `align` (a power of two).
    pub fn is_aligned_to(self, align: u64) -> bool {
        debug_assert!(align.is_power_of_two());
        self.0 & (align - 1) == 0
    }

    /// The raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl From<u64> for Address {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl From<Address> for u64 {
    fn from(a: Address) -> Self {
        a.0
    }
}

/// A 32-bit compressed reference: an address divided by 8.
///
/// Every `u32` is a valid `CompactRef`; decoding never fails. Whether the
/// decoded address is the one originally encoded depends on the encode
/// path that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CompactRef(pub u32);

impl CompactRef {
    /// The compact form of the null address.
    pub const NULL: CompactRef = CompactRef(0);

    /// The raw integer value.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether this is the compact form of the null address.
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for CompactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ref32:{:#010x}", self.0)
    }
}

impl From<u32> for CompactRef {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<CompactRef> for u32 {
    fn from(r: CompactRef) -> Self {
        r.0
    }
}
