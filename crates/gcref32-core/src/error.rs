//! Error types for the compressed reference codec.

use std::error::Error;
use std::fmt;
use std::io;

use crate::codec::{ADDRESS_LIMIT, ALIGNMENT};
use crate::id::Address;

/// An address cannot be represented as a [`CompactRef`](crate::CompactRef).
///
/// Raised when the address is not 8-byte aligned or lies at or beyond the
/// 32 GiB window. The message does not distinguish the two causes; use
/// [`is_misaligned`](Self::is_misaligned) and
/// [`exceeds_window`](Self::exceeds_window) to tell them apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerOutOfRange {
    /// The address that failed the check.
    pub address: Address,
}

impl PointerOutOfRange {
    /// Whether the address is not a multiple of 8.
    pub fn is_misaligned(&self) -> bool {
        !self.address.is_aligned_to(ALIGNMENT)
    }

    /// Whether the address is at or above 2^35.
    pub fn exceeds_window(&self) -> bool {
        self.address.0 >= ADDRESS_LIMIT
    }
}

impl fmt::Display for PointerOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pointer {} too big or misaligned", self.address)
    }
}

impl Error for PointerOutOfRange {}

/// Errors from reading or writing compact references to byte streams.
#[derive(Debug)]
pub enum WireError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// An address in a batch could not be encoded.
    PointerOutOfRange {
        /// Position of the offending address in the input slice.
        index: usize,
        /// The underlying codec error.
        source: PointerOutOfRange,
    },
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::PointerOutOfRange { index, source } => {
                write!(f, "address at index {index}: {source}")
            }
        }
    }
}

impl Error for WireError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::PointerOutOfRange { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for WireError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
