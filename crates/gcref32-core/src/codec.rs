//! Shift-compression of 8-byte-aligned addresses into 32 bits.
//!
//! An address `a` survives the round trip `decode(encode(a)) == a` exactly
//! when `a % 8 == 0` and `a < 2^35`. [`encode_checked`] verifies this by
//! re-expanding its own result; [`encode_unchecked`] trusts the caller.

use crate::config::{CodecConfig, FailurePolicy};
use crate::error::PointerOutOfRange;
use crate::fatal;
use crate::id::{Address, CompactRef};

/// Number of low bits dropped by the encoding.
pub const ALIGN_SHIFT: u32 = 3;

/// Required address alignment in bytes.
pub const ALIGNMENT: u64 = 1 << ALIGN_SHIFT;

/// First address outside the representable window (2^35, i.e. 32 GiB).
pub const ADDRESS_LIMIT: u64 = 1 << (32 + ALIGN_SHIFT);

/// Largest representable address (2^35 - 8).
pub const MAX_ADDRESS: u64 = ADDRESS_LIMIT - ALIGNMENT;

#[inline(always)]
fn shift(a: Address) -> CompactRef {
    CompactRef((a.0 >> ALIGN_SHIFT) as u32)
}

/// Whether `a` survives an encode/decode round trip.
#[inline]
pub fn is_representable(a: Address) -> bool {
    decode(shift(a)) == a
}

/// Encode without validation in release builds.
///
/// Debug builds, and builds with the `strict` feature, panic on an
/// unrepresentable address. Otherwise a misaligned or out-of-window address
/// silently aliases a different one.
#[inline]
pub fn encode_unchecked(a: Address) -> CompactRef {
    #[cfg(any(debug_assertions, feature = "strict"))]
    assert!(is_representable(a), "pointer {a} too big or misaligned");
    shift(a)
}

/// Encode, rejecting addresses that would not decode back to themselves.
///
/// # Errors
///
/// [`PointerOutOfRange`] if `a` is not 8-byte aligned or is `>= 2^35`.
#[inline]
pub fn encode_checked(a: Address) -> Result<CompactRef, PointerOutOfRange> {
    let r = shift(a);
    if decode(r) != a {
        return Err(PointerOutOfRange { address: a });
    }
    Ok(r)
}

/// Expand a compact reference back to an address. Total; never validates.
#[inline]
pub fn decode(r: CompactRef) -> Address {
    Address((r.0 as u64) << ALIGN_SHIFT)
}

/// A codec bound to a [`CodecConfig`].
///
/// Stateless apart from its configuration, so one value can be shared
/// across threads or copied into each caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    /// Create a codec with the given configuration.
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The configuration this codec was built with.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Checked encode, applying the configured [`FailurePolicy`].
    ///
    /// Under [`FailurePolicy::Abort`] a failure never returns.
    pub fn encode(&self, a: Address) -> Result<CompactRef, PointerOutOfRange> {
        encode_checked(a).inspect_err(|e| match self.config.on_failure {
            FailurePolicy::Propagate => {}
            FailurePolicy::Report => fatal::report(e.address),
            FailurePolicy::Abort => fatal::pointer_too_big(e.address),
        })
    }

    /// Unchecked encode, asserting representability only when
    /// [`CodecConfig::validate_unchecked`] is set.
    ///
    /// # Panics
    ///
    /// If validation is enabled and `a` is not representable.
    pub fn encode_unchecked(&self, a: Address) -> CompactRef {
        if self.config.validate_unchecked {
            assert!(is_representable(a), "pointer {a} too big or misaligned");
        }
        shift(a)
    }

    /// Decode a compact reference.
    pub fn decode(&self, r: CompactRef) -> Address {
        decode(r)
    }
}
