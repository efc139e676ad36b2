//! Diagnostic output for unrepresentable pointers.
//!
//! The checked encode never calls into this module on its own. It is used
//! by [`FailurePolicy::Report`](crate::FailurePolicy::Report),
//! [`FailurePolicy::Abort`](crate::FailurePolicy::Abort), and the C ABI.

use std::io::{self, Write};

use crate::id::Address;

/// Write the two-line "pointer too big or misaligned" diagnostic.
pub fn write_diagnostic(w: &mut dyn Write, address: Address) -> io::Result<()> {
    writeln!(w, "fatal error: pointer {address} too big or misaligned.")?;
    writeln!(
        w,
        "This can occur if static data is placed after the first 32GB of virtual address space."
    )?;
    w.flush()
}

/// Write the diagnostic to stderr and continue.
///
/// Write failures are ignored: there is nowhere left to report them.
pub fn report(address: Address) {
    let _ = write_diagnostic(&mut io::stderr().lock(), address);
}

/// Write the diagnostic to stderr and abort the process.
///
/// Does not unwind and runs no destructors or exit handlers.
pub fn pointer_too_big(address: Address) -> ! {
    report(address);
    std::process::abort()
}
