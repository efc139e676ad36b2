//! Process-wide codec settings for C callers.
//!
//! C code has no `CodecConfig` value to carry around, so the one setting
//! that affects the C entry points lives in an atomic flag.

use std::sync::atomic::{AtomicBool, Ordering};

use gcref32_core::{Codec, CodecConfig};

static VALIDATE_UNCHECKED: AtomicBool = AtomicBool::new(CodecConfig::DEFAULT_VALIDATE_UNCHECKED);

/// Serializes tests that flip the process-wide toggle.
#[cfg(test)]
pub(crate) static TOGGLE_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// The codec the C entry points use, built from the current settings.
pub(crate) fn codec() -> Codec {
    Codec::new(
        CodecConfig::new().with_validate_unchecked(VALIDATE_UNCHECKED.load(Ordering::Relaxed)),
    )
}

/// Enable (non-zero) or disable (zero) validation in
/// `gcref32_hide_into_adr32`.
///
/// When enabled, an unrepresentable pointer passed to the unchecked encode
/// yields 0 instead of an aliased reference.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gcref32_set_validate_unchecked(enabled: u8) {
    VALIDATE_UNCHECKED.store(enabled != 0, Ordering::Relaxed);
}

/// Returns 1 if `gcref32_hide_into_adr32` validates its input, else 0.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gcref32_validate_unchecked() -> u8 {
    VALIDATE_UNCHECKED.load(Ordering::Relaxed) as u8
}
