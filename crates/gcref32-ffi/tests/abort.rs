//! The C abort entry points terminate the process; each case re-runs this
//! test binary as a child and checks how it died.

use std::env;
use std::os::raw::c_void;
use std::process::{Command, Output};

use gcref32_core::{Address, ADDRESS_LIMIT};
use gcref32_ffi::codec::{gcref32_hide_into_adr32_check_or_abort, gcref32_pointer_too_big};

const CHILD_ENV: &str = "GCREF32_FFI_ABORT_CHILD";

fn run_child(test_name: &str) -> Output {
    let exe = env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("spawn child test process")
}

fn in_child() -> bool {
    env::var_os(CHILD_ENV).is_some()
}

fn ptr(a: u64) -> *const c_void {
    Address(a).as_mut_ptr::<c_void>() as *const c_void
}

fn assert_aborted(out: &Output) {
    assert!(!out.status.success(), "child exited cleanly: {:?}", out.status);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("too big or misaligned"),
        "stderr was: {stderr}"
    );
}

#[test]
fn check_or_abort_terminates_beyond_window() {
    if in_child() {
        gcref32_hide_into_adr32_check_or_abort(ptr(ADDRESS_LIMIT));
        unreachable!("check_or_abort returned for an out-of-window pointer");
    }
    assert_aborted(&run_child("check_or_abort_terminates_beyond_window"));
}

#[test]
fn pointer_too_big_terminates() {
    if in_child() {
        gcref32_pointer_too_big(ptr(3));
    }
    let out = run_child("pointer_too_big_terminates");
    assert_aborted(&out);
    assert!(String::from_utf8_lossy(&out.stderr).contains("pointer 0x3 "));
}
