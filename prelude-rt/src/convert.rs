use crate::RuntimeError;
use std::ffi::CString;

/// Parses a decimal integer with an optional sign.
///
/// Whitespace, trailing characters and values outside the `i32` range are rejected.
pub fn parse_integer(text: &str) -> Result<i32, RuntimeError> {
    text.parse::<i32>().map_err(|source| RuntimeError::InvalidInteger {
        text: text.to_owned(),
        source,
    })
}

/// Copies `text` into a nul-terminated C string.
///
/// Pointers obtained from the result with `as_ptr` borrow it and cannot outlive it.
pub fn to_c_string(text: &str) -> Result<CString, RuntimeError> {
    CString::new(text).map_err(|e| RuntimeError::InteriorNul {
        position: e.nul_position(),
    })
}

/// Length of `text` in bytes
pub fn length(text: &str) -> usize {
    text.len()
}
