//! C ABI entry points.
//!
//! Fallible calls return 0 on success and a negative [`RuntimeErrorCode`] on failure, with the
//! result written through an output parameter. The failure itself is kept per thread and read
//! back with [`rt_last_error`]. Every string handed to C must be released with
//! [`rt_free_string`].

use crate::{
    fatal_error, length, parse_integer, report_error, stringify, stringify_code_point,
    RuntimeError, RuntimeErrorCode,
};
use safer_ffi::{ffi_export, prelude::Out, string::str_ref};
use std::{cell::RefCell, ffi::c_int};

thread_local! {
    static LAST_ERROR: RefCell<Option<RuntimeError>> = RefCell::new(None);
}

/// Remembers `error` as this thread's last error and returns its code.
fn fail(error: RuntimeError) -> c_int {
    let code = RuntimeErrorCode::from(&error) as c_int;
    LAST_ERROR.with(|last| *last.borrow_mut() = Some(error));
    code
}

fn write_or_fail<T>(result: Result<T, RuntimeError>, out: Out<'_, T>) -> c_int {
    match result {
        Ok(value) => {
            out.write(value);
            0
        }
        Err(e) => fail(e),
    }
}

#[ffi_export]
pub fn rt_parse_integer(text: str_ref<'_>, out: Out<'_, i32>) -> c_int {
    write_or_fail(parse_integer(text.as_str()), out)
}

#[ffi_export]
pub fn rt_length(text: str_ref<'_>) -> usize {
    length(text.as_str())
}

#[ffi_export]
pub fn rt_stringify_bool(value: bool) -> safer_ffi::String {
    stringify(value).into()
}

#[ffi_export]
pub fn rt_stringify_char(code_point: u32, out: Out<'_, safer_ffi::String>) -> c_int {
    write_or_fail(stringify_code_point(code_point).map(Into::into), out)
}

#[ffi_export]
pub fn rt_stringify_int(value: i64) -> safer_ffi::String {
    stringify(value).into()
}

#[ffi_export]
pub fn rt_stringify_float(value: f64) -> safer_ffi::String {
    stringify(value).into()
}

/// Records `message` as the last error and returns the `Reported` code.
#[ffi_export]
pub fn rt_report_error(message: str_ref<'_>) -> c_int {
    report_error::<(), _>(message.as_str()).map_or_else(fail, |()| 0)
}

#[ffi_export]
pub fn rt_fatal_error(message: str_ref<'_>) {
    fatal_error(message.as_str())
}

/// Message of this thread's last failed call, empty if no call failed yet.
#[ffi_export]
pub fn rt_last_error() -> safer_ffi::String {
    LAST_ERROR
        .with(|last| last.borrow().as_ref().map(ToString::to_string))
        .unwrap_or_default()
        .into()
}

#[ffi_export]
pub fn rt_free_string(s: safer_ffi::String) {
    drop(s);
}
