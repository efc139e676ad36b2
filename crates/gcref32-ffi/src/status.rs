//! C-compatible status codes.
//!
//! [`Gcref32Status`] is a `repr(i32)` enum. `Ok` is zero, every error is
//! negative, and values are ABI-stable.

use gcref32_core::PointerOutOfRange;

/// Status code returned by status-reporting FFI functions.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gcref32Status {
    /// Success.
    Ok = 0,
    /// The address is misaligned or beyond the 32 GiB window.
    PointerOutOfRange = -1,
    /// An argument is null or otherwise invalid.
    InvalidArgument = -2,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&PointerOutOfRange> for Gcref32Status {
    fn from(_e: &PointerOutOfRange) -> Self {
        Gcref32Status::PointerOutOfRange
    }
}
