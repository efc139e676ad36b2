//! Byte-order helpers for embedding compact references in buffers.
//!
//! The codec defines only the `u32` value. Whoever stores it (an object
//! header, a side table, a snapshot file) picks the byte order; these
//! helpers take it as an explicit [`ByteOrder`]. No length prefix, no
//! padding.

use std::io::{Read, Write};

use crate::codec::{decode, encode_checked};
use crate::error::WireError;
use crate::id::{Address, CompactRef};

/// Byte order used to serialize a [`CompactRef`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// The byte order of the current target.
    pub const NATIVE: ByteOrder = if cfg!(target_endian = "big") {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };

    /// Serialize a compact reference to 4 bytes.
    pub fn serialize(self, r: CompactRef) -> [u8; 4] {
        match self {
            Self::Little => r.0.to_le_bytes(),
            Self::Big => r.0.to_be_bytes(),
        }
    }

    /// Deserialize a compact reference from 4 bytes.
    pub fn deserialize(self, bytes: [u8; 4]) -> CompactRef {
        match self {
            Self::Little => CompactRef(u32::from_le_bytes(bytes)),
            Self::Big => CompactRef(u32::from_be_bytes(bytes)),
        }
    }
}

/// Write a single compact reference.
pub fn write_ref(w: &mut dyn Write, r: CompactRef, order: ByteOrder) -> Result<(), WireError> {
    w.write_all(&order.serialize(r))?;
    Ok(())
}

/// Read a single compact reference.
pub fn read_ref(r: &mut dyn Read, order: ByteOrder) -> Result<CompactRef, WireError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(order.deserialize(buf))
}

/// Checked-encode each address and write it.
///
/// Stops at the first unrepresentable address. Everything before it has
/// already been written to `w`.
pub fn write_addresses(
    w: &mut dyn Write,
    addresses: &[Address],
    order: ByteOrder,
) -> Result<(), WireError> {
    for (index, &a) in addresses.iter().enumerate() {
        let r = encode_checked(a).map_err(|source| WireError::PointerOutOfRange { index, source })?;
        write_ref(w, r, order)?;
    }
    Ok(())
}

/// Upper bound on up-front allocation in [`read_addresses`]; `count` may come
/// from untrusted input.
const MAX_PREALLOC: usize = 4096;

/// Read `count` compact references and decode them.
///
/// Input shorter than `count` references is an I/O error, whatever `count`
/// claims.
pub fn read_addresses(
    r: &mut dyn Read,
    count: usize,
    order: ByteOrder,
) -> Result<Vec<Address>, WireError> {
    let mut out = Vec::with_capacity(count.min(MAX_PREALLOC));
    for _ in 0..count {
        out.push(decode(read_ref(r, order)?));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn byte_orders_differ() {
        let r = CompactRef(0x0102_0304);
        assert_eq!(ByteOrder::Little.serialize(r), [4, 3, 2, 1]);
        assert_eq!(ByteOrder::Big.serialize(r), [1, 2, 3, 4]);
        assert_eq!(ByteOrder::Big.deserialize([1, 2, 3, 4]), r);
    }

    #[test]
    fn native_matches_target() {
        let r = CompactRef(0xDEAD_BEEF);
        assert_eq!(ByteOrder::NATIVE.serialize(r), r.0.to_ne_bytes());
    }

    #[test]
    fn addresses_through_buffer() {
        let addrs = [Address(0), Address(8), Address(0x7_FFFF_FFF8)];
        let mut buf: Vec<u8> = Vec::new();
        write_addresses(&mut buf, &addrs, ByteOrder::Big).unwrap();
        assert_eq!(buf.len(), 12);
        assert_eq!(&buf[8..], &[0xFF, 0xFF, 0xFF, 0xFF]);

        let back = read_addresses(&mut Cursor::new(buf), 3, ByteOrder::Big).unwrap();
        assert_eq!(back, addrs);
    }

    #[test]
    fn bad_address_reports_index() {
        let addrs = [Address(16), Address(24), Address(5)];
        let mut buf: Vec<u8> = Vec::new();
        let err = write_addresses(&mut buf, &addrs, ByteOrder::Little).unwrap_err();
        match err {
            WireError::PointerOutOfRange { index, source } => {
                assert_eq!(index, 2);
                assert_eq!(source.address, Address(5));
            }
            other => panic!("expected PointerOutOfRange, got {other:?}"),
        }
        // The two valid refs were written before the failure.
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn truncated_input_is_io_error() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3]);
        let err = read_ref(&mut cursor, ByteOrder::Little).unwrap_err();
        assert!(matches!(err, WireError::Io(_)));
    }

    #[test]
    fn huge_count_over_short_input_is_eof() {
        let mut cursor = Cursor::new(vec![8u8, 0, 0, 0]);
        let err = read_addresses(&mut cursor, usize::MAX / 4, ByteOrder::Little).unwrap_err();
        match err {
            WireError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
