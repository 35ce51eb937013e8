//! Runtime prelude linked into compiled programs.
//!
//! The helpers are plain Rust functions returning [`RuntimeError`] on failure. Each one is also
//! exported over the C ABI (`rt_*` symbols) so generated C and C++ code can call it; failures
//! there are reported through an error code and [`ffi::rt_last_error`].

extern crate self as prelude_rt;

pub use prelude_rt_macro::ErrorCode;
pub use safer_ffi;

mod convert;
mod error;
mod fatal;
pub mod ffi;
mod stringify;

pub use convert::{length, parse_integer, to_c_string};
pub use error::{report_error, RuntimeError, RuntimeErrorCode};
pub use fatal::{fatal_error, write_fatal_message};
pub use stringify::{stringify, stringify_code_point, Stringify};

/// Writes a C header declaring every exported function to `path`.
#[cfg(feature = "headers")]
pub fn generate_headers<P>(path: P) -> std::io::Result<()>
where
    P: AsRef<std::path::Path>,
{
    safer_ffi::headers::builder().to_file(path)?.generate()
}
