//! C ABI for the gcref32 compressed reference codec.
//!
//! Mirrors the three classic operations (show, hide, hide-with-check) and
//! the fatal handler, plus a status-returning checked encode for callers
//! that want to recover. Every entry point catches panics at the boundary.
//! This is the only crate in the workspace that may contain `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run `$body`, mapping a caught panic to `Gcref32Status::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::Gcref32Status::Panicked as i32, $body)
    };
}

/// Run `$body`, returning `$default` if it panics.
macro_rules! ffi_guard_or {
    ($default:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(v) => v,
            Err(_) => $default,
        }
    };
}

pub mod codec;
pub mod config;
pub mod status;

pub use status::Gcref32Status;
