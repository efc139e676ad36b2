//! Core types and codec for 32-bit compressed GC references.
//!
//! A 64-bit address that is 8-byte aligned and below 32 GiB fits in 32
//! bits after dropping its three always-zero low bits. This crate defines
//! that encoding and the checks that guard it.
//!
//! # Architecture
//!
//! ```text
//! Address (u64) ──encode_checked──▶ CompactRef (u32)
//!       ▲                                │
//!       └──────────────decode────────────┘
//!
//! Codec = CodecConfig (validate_unchecked, on_failure) + the free functions
//! fatal  = diagnostic text + abort, applied only under FailurePolicy::Abort
//! wire   = byte-order helpers for embedding refs in caller buffers
//! ```
//!
//! # Failure handling
//!
//! [`encode_checked`] returns [`PointerOutOfRange`] and never terminates the
//! process. Callers that want the hard-stop behaviour opt in with
//! [`FailurePolicy::Abort`] or call [`fatal::pointer_too_big`] directly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod error;
pub mod fatal;
pub mod id;
pub mod wire;

pub use codec::{
    decode, encode_checked, encode_unchecked, is_representable, Codec, ADDRESS_LIMIT, ALIGNMENT,
    ALIGN_SHIFT, MAX_ADDRESS,
};
pub use config::{CodecConfig, FailurePolicy};
pub use error::{PointerOutOfRange, WireError};
pub use id::{Address, CompactRef};
pub use wire::ByteOrder;
