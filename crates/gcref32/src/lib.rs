//! gcref32: 32-bit compressed GC references for 64-bit targets.
//!
//! This is the top-level facade crate that re-exports the public API of
//! `gcref32-core`. C callers link `gcref32-ffi` instead.
//!
//! # Quick start
//!
//! ```rust
//! use gcref32::prelude::*;
//!
//! // Aligned and below 32 GiB: encodes and decodes back exactly.
//! let a = Address(0x7_FFFF_FFF8);
//! let r = encode_checked(a).unwrap();
//! assert_eq!(r, CompactRef(u32::MAX));
//! assert_eq!(decode(r), a);
//!
//! // Misaligned or beyond the window: a recoverable error.
//! let err = encode_checked(Address(0x8_0000_0000)).unwrap_err();
//! assert!(err.exceeds_window());
//! assert!(encode_checked(Address(5)).unwrap_err().is_misaligned());
//!
//! // Opt into logging the diagnostic before the error is returned.
//! let codec = Codec::new(CodecConfig::new().with_failure_policy(FailurePolicy::Report));
//! assert!(codec.encode(Address(5)).is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`codec`] | Encode/decode functions, [`codec::Codec`], window constants |
//! | [`config`] | [`config::CodecConfig`] and [`config::FailurePolicy`] |
//! | [`error`] | [`error::PointerOutOfRange`] and [`error::WireError`] |
//! | [`fatal`] | Diagnostic text and the abort path |
//! | [`wire`] | Byte-order helpers for storing refs in buffers |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use gcref32_core::{codec, config, error, fatal, id, wire};

/// Common imports for typical gcref32 usage.
///
/// ```rust
/// use gcref32::prelude::*;
/// ```
pub mod prelude {
    pub use gcref32_core::{
        decode, encode_checked, encode_unchecked, is_representable, Address, ByteOrder, Codec,
        CodecConfig, CompactRef, FailurePolicy, PointerOutOfRange, ADDRESS_LIMIT, ALIGNMENT,
        MAX_ADDRESS,
    };
}
