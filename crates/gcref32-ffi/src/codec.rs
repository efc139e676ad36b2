//! Encode/decode entry points.
//!
//! Pointers cross the boundary as `void*` and compact references as
//! `uint32_t`. Only the numeric address of a pointer is used; nothing is
//! dereferenced except caller-provided output slots.

use std::os::raw::c_void;

use gcref32_core::{decode, encode_checked, fatal, is_representable, Address, CompactRef};

use crate::config::codec;
use crate::status::Gcref32Status;

/// Expand a compact reference to a pointer. Never fails.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gcref32_show_from_adr32(r: u32) -> *mut c_void {
    decode(CompactRef(r)).as_mut_ptr()
}

/// Compress a pointer without a range check.
///
/// The caller guarantees `p` is 8-byte aligned and below 32 GiB. With
/// validation enabled (see `gcref32_set_validate_unchecked`) a violation
/// returns 0, which callers cannot tell apart from the encoding of a real
/// NULL; use `gcref32_hide_into_adr32_check` to detect it. With validation
/// disabled the result silently aliases another address.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gcref32_hide_into_adr32(p: *const c_void) -> u32 {
    ffi_guard_or!(0, {
        let codec = codec();
        let a = Address::from_ptr(p);
        if codec.config().validate_unchecked && !is_representable(a) {
            return 0;
        }
        codec.encode_unchecked(a).0
    })
}

/// Compress a pointer, writing the result to `out`.
///
/// Returns `GCREF32_STATUS_OK`, `GCREF32_STATUS_POINTER_OUT_OF_RANGE` if
/// `p` is misaligned or beyond 32 GiB (`out` untouched), or
/// `GCREF32_STATUS_INVALID_ARGUMENT` if `out` is null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gcref32_hide_into_adr32_check(p: *const c_void, out: *mut u32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return Gcref32Status::InvalidArgument as i32;
        }
        match encode_checked(Address::from_ptr(p)) {
            Ok(r) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = r.0 };
                Gcref32Status::Ok as i32
            }
            Err(e) => Gcref32Status::from(&e) as i32,
        }
    })
}

/// Compress a pointer, aborting the process if it cannot be represented.
///
/// On failure prints the "pointer too big or misaligned" diagnostic to
/// stderr and aborts. Never returns an invalid reference.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gcref32_hide_into_adr32_check_or_abort(p: *const c_void) -> u32 {
    let a = Address::from_ptr(p);
    match encode_checked(a) {
        Ok(r) => r.0,
        Err(e) => fatal::pointer_too_big(e.address),
    }
}

/// Print the "pointer too big or misaligned" diagnostic for `p` and abort.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gcref32_pointer_too_big(p: *const c_void) -> ! {
    fatal::pointer_too_big(Address::from_ptr(p))
}

/// Compress `len` pointers from `ptrs` into `out`.
///
/// Stops at the first unrepresentable pointer, stores its position in
/// `failed_index` (if non-null), and returns
/// `GCREF32_STATUS_POINTER_OUT_OF_RANGE`. Entries before it are written.
/// Null `ptrs` or `out` with non-zero `len` is `GCREF32_STATUS_INVALID_ARGUMENT`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn gcref32_hide_array_check(
    ptrs: *const *const c_void,
    len: usize,
    out: *mut u32,
    failed_index: *mut usize,
) -> i32 {
    ffi_guard!({
        if len == 0 {
            return Gcref32Status::Ok as i32;
        }
        if ptrs.is_null() || out.is_null() {
            return Gcref32Status::InvalidArgument as i32;
        }
        // SAFETY: ptrs and out are non-null and point to len elements per
        // caller contract. The two arrays do not overlap (different types).
        let (ptrs, out) = unsafe {
            (
                std::slice::from_raw_parts(ptrs, len),
                std::slice::from_raw_parts_mut(out, len),
            )
        };
        for (i, (&p, slot)) in ptrs.iter().zip(out.iter_mut()).enumerate() {
            match encode_checked(Address::from_ptr(p)) {
                Ok(r) => *slot = r.0,
                Err(e) => {
                    if !failed_index.is_null() {
                        // SAFETY: failed_index is non-null and valid per caller contract.
                        unsafe { *failed_index = i };
                    }
                    return Gcref32Status::from(&e) as i32;
                }
            }
        }
        Gcref32Status::Ok as i32
    })
}
